use macro_utils_build::{
    GenerateError,
    codegen::{EnumMode, define_enum},
    count::ensure_arity,
    filter::retain_non_empty,
    node::{EnumSpec, Sentinel, lookup_fn_ident},
    token::split_expr_args,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Expr, Ident, Token,
    parse::{ParseStream, Parser},
    spanned::Spanned,
};

pub fn define(
    input: TokenStream,
    sentinel: Sentinel,
    mode: EnumMode,
) -> Result<TokenStream, GenerateError> {
    let spec = EnumSpec::parse(input, sentinel)?;

    Ok(define_enum(&spec, mode)?.tokens)
}

pub fn to_string(input: TokenStream) -> Result<TokenStream, syn::Error> {
    let parser = |input: ParseStream| -> syn::Result<(Ident, Expr)> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let value: Expr = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok((ident, value))
    };
    let (ident, value) = parser.parse2(input)?;
    let lookup_fn = lookup_fn_ident(&ident);

    Ok(quote!(#lookup_fn(#value)))
}

// Non-empty positions only, so the count agrees with `VALUE_COUNT`.
pub fn value_count(input: TokenStream, sentinel: Sentinel) -> Result<TokenStream, GenerateError> {
    let span = input.span();
    let listed = retain_non_empty(split_expr_args(input)).len();
    let count = match sentinel {
        Sentinel::With => listed + 1,
        Sentinel::Without => listed,
    };
    ensure_arity(count, span)?;

    Ok(quote!(#count))
}
