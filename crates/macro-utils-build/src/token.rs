//! Token predicates and argument splitting.
//!
//! Arguments are separated by top-level commas only. Delimited groups are
//! atomic, so `(a, b)` is one argument.

use proc_macro2::{Spacing, TokenStream, TokenTree};

/// True iff the stream contains no tokens at all.
#[must_use]
pub fn is_empty(tokens: &TokenStream) -> bool {
    tokens.is_empty()
}

/// True iff the stream is exactly the integer literal `0`.
#[must_use]
pub fn is_zero(tokens: &TokenStream) -> bool {
    let mut iter = tokens.clone().into_iter();

    match (iter.next(), iter.next()) {
        (Some(TokenTree::Literal(lit)), None) => lit.to_string() == "0",
        _ => false,
    }
}

/// Select `then` unless `cond` is literally `0`.
///
/// An empty condition is not zero and selects `then`.
#[must_use]
pub fn token_if(cond: &TokenStream, then: TokenStream, otherwise: TokenStream) -> TokenStream {
    if is_zero(cond) { otherwise } else { then }
}

/// Split a comma-separated list into its arguments.
///
/// An empty stream is a single empty argument and a trailing comma yields a
/// trailing empty argument, so `a,` splits into `[a, <empty>]`.
#[must_use]
pub fn split_args(tokens: TokenStream) -> Vec<TokenStream> {
    split(tokens, Angles::Ignore)
}

/// Split a comma-separated list of types and identifiers.
///
/// Commas nested inside `<...>` do not separate arguments, so
/// `HashMap<K, V>, map` is two arguments.
#[must_use]
pub fn split_type_args(tokens: TokenStream) -> Vec<TokenStream> {
    split(tokens, Angles::Always)
}

/// Split a comma-separated list of `NAME [= expr]` items.
///
/// Only turbofish generics (`::<...>`) hold commas, so `A = T::<X, Y>::C`
/// is one argument while `B = C << 2` and `D = 1 < 2` stay plain operators.
#[must_use]
pub fn split_expr_args(tokens: TokenStream) -> Vec<TokenStream> {
    split(tokens, Angles::Turbofish)
}

// Which `<` open a generic argument list.
#[derive(Clone, Copy, Eq, PartialEq)]
enum Angles {
    Ignore,
    Always,
    Turbofish,
}

fn split(tokens: TokenStream, angles: Angles) -> Vec<TokenStream> {
    let mut args = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;
    let mut prev_arrow_head = false;
    let mut prev_joint_colon = false;
    let mut prev_path_sep = false;

    for tree in tokens {
        let mut arrow_head = false;
        let mut joint_colon = false;
        let mut path_sep = false;

        if let TokenTree::Punct(punct) = &tree {
            let opens = match angles {
                Angles::Ignore => false,
                Angles::Always => true,
                Angles::Turbofish => depth > 0 || prev_path_sep,
            };

            match punct.as_char() {
                ',' if depth == 0 => {
                    args.push(current.drain(..).collect());
                    prev_arrow_head = false;
                    prev_joint_colon = false;
                    prev_path_sep = false;
                    continue;
                }
                '<' if opens => depth += 1,
                '>' if angles != Angles::Ignore && depth > 0 && !prev_arrow_head => depth -= 1,
                '-' => arrow_head = punct.spacing() == Spacing::Joint,
                ':' => {
                    path_sep = prev_joint_colon;
                    joint_colon = !path_sep && punct.spacing() == Spacing::Joint;
                }
                _ => {}
            }
        }

        prev_arrow_head = arrow_head;
        prev_joint_colon = joint_colon;
        prev_path_sep = path_sep;
        current.push(tree);
    }

    args.push(current.into_iter().collect());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn rendered(args: &[TokenStream]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn zero_is_only_the_bare_digit() {
        assert!(is_zero(&quote!(0)));
        assert!(!is_zero(&quote!(1)));
        assert!(!is_zero(&quote!(0u8)));
        assert!(!is_zero(&quote!(0 + 0)));
        assert!(!is_zero(&quote!()));
    }

    #[test]
    fn empty_means_no_tokens() {
        assert!(is_empty(&quote!()));
        assert!(!is_empty(&quote!(x)));
    }

    #[test]
    fn token_if_selects_else_only_for_zero() {
        let pick = |cond: TokenStream| token_if(&cond, quote!(yes), quote!(no)).to_string();

        assert_eq!(pick(quote!(0)), "no");
        assert_eq!(pick(quote!(1)), "yes");
        assert_eq!(pick(quote!(X)), "yes");
        assert_eq!(pick(quote!()), "yes");
    }

    #[test]
    fn split_keeps_groups_atomic() {
        let args = split_args(quote!(a, (b, c), d = [1, 2]));

        assert_eq!(rendered(&args), ["a", "(b , c)", "d = [1 , 2]"]);
    }

    #[test]
    fn split_empty_stream_is_one_empty_argument() {
        let args = split_args(quote!());

        assert_eq!(args.len(), 1);
        assert!(args[0].is_empty());
    }

    #[test]
    fn split_preserves_elided_arguments() {
        let args = split_args(quote!(, , X,));

        assert_eq!(args.len(), 4);
        assert_eq!(rendered(&args), ["", "", "X", ""]);
    }

    #[test]
    fn split_type_args_ignores_generic_commas() {
        let args = split_type_args(quote!(HashMap<K, Vec<V>>, map, fn(u8) -> u8, f));

        assert_eq!(
            rendered(&args),
            ["HashMap < K , Vec < V >>", "map", "fn (u8) -> u8", "f"]
        );
    }

    #[test]
    fn split_expr_args_keeps_turbofish_generics_whole() {
        let args = split_expr_args(quote!(
            A = Table::<u8, Vec<i32>>::FIRST,
            B = A << 2,
            C = (1 < 2) as i32,
            D = A >> 1
        ));

        assert_eq!(
            rendered(&args),
            [
                "A = Table :: < u8 , Vec < i32 >> :: FIRST",
                "B = A << 2",
                "C = (1 < 2) as i32",
                "D = A >> 1",
            ]
        );
    }

    #[test]
    fn split_expr_args_treats_bare_comparisons_as_operators() {
        let args = split_expr_args(quote!(A = 1 < 2, B));

        assert_eq!(rendered(&args), ["A = 1 < 2", "B"]);
    }
}
