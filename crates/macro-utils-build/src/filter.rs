//! Removal of elided arguments.
//!
//! Upstream macros that forward optional arguments leave empty positions
//! behind (`, , X`). The filter drops them while keeping the relative order of
//! the remaining arguments.

use crate::{GenerateError, count::ensure_arity, iter::for_each_counted, token::is_empty};
use proc_macro2::{Span, TokenStream};
use quote::quote;

/// Re-emit the non-empty arguments separated by single commas.
///
/// No leading or trailing separator is produced, so `(, , X)` becomes `X`.
pub fn eat_empty_args(args: &[TokenStream], span: Span) -> Result<TokenStream, GenerateError> {
    ensure_arity(args.len(), span)?;

    let kept: Vec<&TokenStream> = args.iter().filter(|arg| !is_empty(arg)).collect();

    // every kept argument but the last (`remaining == 1`) carries a comma
    for_each_counted(&kept, span, |remaining, arg| {
        if remaining > 1 {
            quote!(#arg,)
        } else {
            quote!(#arg)
        }
    })
}

/// Keep the non-empty arguments, in order.
#[must_use]
pub fn retain_non_empty(args: Vec<TokenStream>) -> Vec<TokenStream> {
    args.into_iter().filter(|arg| !is_empty(arg)).collect()
}
