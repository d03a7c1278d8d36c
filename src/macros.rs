pub use lockstep_macros::*;

// N-ary pairing as a declarative macro. Helper macros are uglified
// with __ prefixes because #[macro_export] dumps them at the root.

// zip_all!(xs, ys, zs) walks all sources in lockstep, yielding flat
// tuples (x, y, z), stopping at the shortest source. One source
// degenerates to plain into_iter().
#[macro_export]
macro_rules! zip_all {
    ($first:expr $(,)?) => {
        ::core::iter::IntoIterator::into_iter($first)
    };

    ($first:expr, $second:expr $(,)?) => {
        $crate::pair::pairs(
            ::core::iter::IntoIterator::into_iter($first),
            ::core::iter::IntoIterator::into_iter($second),
        )
    };

    ($first:expr, $second:expr $(, $rest:expr)+ $(,)?) => {{
        let it = $crate::zip_all!($first, $second);
        $(let it = $crate::pair::pairs(
            it,
            ::core::iter::IntoIterator::into_iter($rest),
        );)+
        ::core::iter::Iterator::map(
            it,
            $crate::__zip_all_closure!((a, b) => (a, b) $(, $rest)+),
        )
    }};
}

// Builds the flattening closure: one level of pattern nesting per
// trailing source. The repeated `x` bindings stay distinct because
// each recursion step is its own expansion.
#[macro_export]
macro_rules! __zip_all_closure {
    ($p:pat => $tup:expr) => { |$p| $tup };

    ($p:pat => ($($tup:tt)*), $_skip:expr $(, $rest:expr)*) => {
        $crate::__zip_all_closure!(($p, x) => ($($tup)*, x) $(, $rest)*)
    };
}
