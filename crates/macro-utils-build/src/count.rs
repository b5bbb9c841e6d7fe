//! Bounded argument counting.

use crate::{GenerateError, MAX_ARITY, token::split_args};
use proc_macro2::{Span, TokenStream};
use syn::spanned::Spanned;

/// Count the comma-separated arguments of `tokens`.
///
/// The empty list counts as one argument, matching how an elided argument is
/// still a position. More than [`MAX_ARITY`] arguments is an error.
pub fn count_args(tokens: TokenStream) -> Result<usize, GenerateError> {
    let span = tokens.span();
    let count = split_args(tokens).len();
    ensure_arity(count, span)?;

    Ok(count)
}

/// Reject argument lists longer than [`MAX_ARITY`].
pub fn ensure_arity(count: usize, span: Span) -> Result<(), GenerateError> {
    if count > MAX_ARITY {
        return Err(GenerateError::capacity(count, span));
    }

    Ok(())
}
