extern crate proc_macro;
use derive_syn_parse::Parse;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{punctuated::Punctuated, parse_macro_input, Expr, Ident, Token};

// zip_with!(f, xs, ys, zs) pairs the sources in lockstep and maps f
// over the flattened elements. The expansion names the runtime crate
// by absolute path, so it resolves wherever `lockstep` is an extern
// crate (downstream code and integration tests).

#[derive(Parse)]
struct ZipWith {
    func: Expr,
    _comma: Token![,],
    #[call(Punctuated::parse_separated_nonempty)]
    sources: Punctuated<Expr, Token![,]>,
}

// Right-nested pairing: zip_with!(f, a, b, c) iterates over
// pairs(a, pairs(b, c)) with items shaped (x0, (x1, x2)).
fn nested_pairs(sources: &[&Expr]) -> TokenStream {
    match sources {
        [] => unreachable!(),
        [last] => quote! { ::core::iter::IntoIterator::into_iter(#last) },
        [first, rest @ ..] => {
            let rest = nested_pairs(rest);
            quote! {
                ::lockstep::pair::pairs(
                    ::core::iter::IntoIterator::into_iter(#first),
                    #rest,
                )
            }
        }
    }
}

impl ZipWith {
    fn expand(&self) -> TokenStream {
        let sources: Vec<&Expr> = self.sources.iter().collect();
        let iter = nested_pairs(&sources);

        let vars: Vec<Ident> = (0..sources.len())
            .map(|i| Ident::new(&format!("x{i}"), Span::call_site()))
            .collect();

        // Pattern mirroring the right-nested item shape.
        let mut pat = {
            let last = &vars[vars.len() - 1];
            quote! { #last }
        };
        for var in vars.iter().rev().skip(1) {
            pat = quote! { (#var, #pat) };
        }

        let func = &self.func;
        quote! {
            ::core::iter::Iterator::map(#iter, |#pat| (#func)(#(#vars),*))
        }
    }
}

#[proc_macro]
pub fn zip_with(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    parse_macro_input!(tokens as ZipWith).expand().into()
}
