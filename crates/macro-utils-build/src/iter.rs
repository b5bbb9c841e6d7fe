//! Iteration over measured argument lists.
//!
//! Each helper measures the list first and refuses anything longer than
//! `MAX_ARITY`, then applies the rule to every item (or pair) in order and
//! concatenates the results.

use crate::{GenerateError, count::ensure_arity};
use proc_macro2::{Span, TokenStream};

/// Apply `rule` to every item.
pub fn for_each<T, F>(items: &[T], span: Span, mut rule: F) -> Result<TokenStream, GenerateError>
where
    F: FnMut(&T) -> TokenStream,
{
    ensure_arity(items.len(), span)?;

    Ok(items.iter().map(&mut rule).collect())
}

/// Measure `items` and view them as adjacent pairs.
///
/// Odd-length lists are rejected rather than dropping the last item.
pub fn pairs<T>(
    items: &[T],
    span: Span,
) -> Result<impl Iterator<Item = (&T, &T)>, GenerateError> {
    ensure_arity(items.len(), span)?;

    if !items.len().is_multiple_of(2) {
        return Err(GenerateError::OddPairList {
            count: items.len(),
            span,
        });
    }

    Ok(items.chunks_exact(2).map(|pair| (&pair[0], &pair[1])))
}

/// Apply `rule` to every adjacent pair: `(items[0], items[1])`, `(items[2], items[3])`, ...
pub fn for_each_pair<T, F>(
    items: &[T],
    span: Span,
    mut rule: F,
) -> Result<TokenStream, GenerateError>
where
    F: FnMut(&T, &T) -> TokenStream,
{
    Ok(pairs(items, span)?.map(|(a, b)| rule(a, b)).collect())
}

/// Apply `rule` to every item, threading one constant `extra` argument through.
pub fn for_each_keep_1<E, T, F>(
    extra: &E,
    items: &[T],
    span: Span,
    mut rule: F,
) -> Result<TokenStream, GenerateError>
where
    E: ?Sized,
    F: FnMut(&E, &T) -> TokenStream,
{
    for_each(items, span, |item| rule(extra, item))
}

/// Apply `rule` to every item together with a down-counter.
///
/// The first item sees the list length and the last item sees `1`.
pub fn for_each_counted<T, F>(
    items: &[T],
    span: Span,
    mut rule: F,
) -> Result<TokenStream, GenerateError>
where
    F: FnMut(usize, &T) -> TokenStream,
{
    ensure_arity(items.len(), span)?;

    let len = items.len();

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| rule(len - index, item))
        .collect())
}
