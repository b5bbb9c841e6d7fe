use macro_utils_build::{GenerateError, count::count_args, filter, token::split_args};
use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::quote;
use syn::{
    Path, Token,
    parse::{ParseStream, Parser},
    spanned::Spanned,
};

pub fn count_arg(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let count = count_args(input)?;

    Ok(quote!(#count))
}

pub fn token_if(input: TokenStream) -> Result<TokenStream, syn::Error> {
    let span = input.span();
    let args = split_args(input);

    let [cond, then, otherwise] = <[TokenStream; 3]>::try_from(args).map_err(|args| {
        syn::Error::new(
            span,
            format!(
                "token_if! expects `COND, THEN, ELSE`, found {} arguments",
                args.len()
            ),
        )
    })?;

    Ok(macro_utils_build::token::token_if(
        &cond,
        unbrace(then),
        unbrace(otherwise),
    ))
}

// `{ a, b }` carries a branch that itself contains commas.
fn unbrace(tokens: TokenStream) -> TokenStream {
    let mut iter = tokens.clone().into_iter();

    match (iter.next(), iter.next()) {
        (Some(TokenTree::Group(group)), None) if group.delimiter() == Delimiter::Brace => {
            group.stream()
        }
        _ => tokens,
    }
}

pub fn eat_empty_args(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let parser = |input: ParseStream| -> syn::Result<(Path, TokenStream)> {
        let target: Path = input.parse()?;
        input.parse::<Token![=>]>()?;
        let rest: TokenStream = input.parse()?;

        Ok((target, rest))
    };
    let (target, rest) = parser.parse2(input)?;
    let span = rest.span();
    let args = filter::eat_empty_args(&split_args(rest), span)?;

    Ok(quote!(#target!(#args)))
}
