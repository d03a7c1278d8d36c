use lockstep::pair::{pairs, zip};

fn main() {
    let mut failures: Vec<(usize, usize)> = Vec::new();

    // Sweep all small length combinations: pairing must produce
    // exactly min(n, m) pairs, element-for-element.
    for n in 0..=5 {
        for m in 0..=5 {
            let xs: Vec<usize> = (0..n).collect();
            let ys: Vec<usize> = (10..10 + m).collect();
            let z = zip(xs.clone(), ys.clone());
            let got: Vec<_> = z.pairs().map(|(x, y)| (*x, *y)).collect();
            let ok = got.len() == n.min(m)
                && got.iter().enumerate().all(|(i, (x, y))| *x == xs[i] && *y == ys[i]);
            if !ok {
                println!("Error! While pairing lengths ({n}, {m}), got {got:?}.");
                failures.push((n, m));
            } else {
                println!("Success on ({n}, {m})");
            }
        }
    }

    // Once ended, stays ended.
    let mut it = pairs([1, 2, 3].into_iter(), ["a"].into_iter());
    while it.next().is_some() {}
    assert!(it.next().is_none());
    assert!(it.next().is_none());

    if !failures.is_empty() {
        println!("FAILURES: {failures:?}");
        panic!("test case(s) failed");
    }
}
