use macro_utils_build::{
    GenerateError,
    filter::retain_non_empty,
    iter::{for_each, for_each_counted, for_each_keep_1, for_each_pair},
    token::split_args,
};
use proc_macro2::{Literal, Span, TokenStream, TokenTree};
use quote::quote;
use syn::{
    Path, Token,
    parse::{ParseStream, Parser},
    spanned::Spanned,
};

///
/// IterInput
/// `rule [, extra]; item, item, ...`
///

struct IterInput {
    rule: Path,
    extra: Option<TokenStream>,
    items: Vec<TokenStream>,
    span: Span,
}

impl IterInput {
    fn parse(input: TokenStream, with_extra: bool) -> syn::Result<Self> {
        let span = input.span();
        let parser = |input: ParseStream| -> syn::Result<(Path, Option<TokenStream>, TokenStream)> {
            let rule: Path = input.parse()?;

            let extra = if with_extra {
                input.parse::<Token![,]>()?;
                Some(parse_until_semi(input)?)
            } else {
                None
            };

            input.parse::<Token![;]>()?;
            let rest: TokenStream = input.parse()?;

            Ok((rule, extra, rest))
        };
        let (rule, extra, rest) = parser.parse2(input)?;

        Ok(Self {
            rule,
            extra,
            items: retain_non_empty(split_args(rest)),
            span,
        })
    }
}

fn parse_until_semi(input: ParseStream) -> syn::Result<TokenStream> {
    let mut tokens = TokenStream::new();

    while !input.is_empty() && !input.peek(Token![;]) {
        tokens.extend([input.parse::<TokenTree>()?]);
    }

    Ok(tokens)
}

pub fn for_each_1(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let IterInput {
        rule, items, span, ..
    } = IterInput::parse(input, false)?;

    for_each(&items, span, |item| quote!(#rule! { #item }))
}

pub fn for_each_2(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let IterInput {
        rule, items, span, ..
    } = IterInput::parse(input, false)?;

    for_each_pair(&items, span, |a, b| quote!(#rule! { #a, #b }))
}

pub fn for_each_1_keep_1(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let IterInput {
        rule,
        extra,
        items,
        span,
    } = IterInput::parse(input, true)?;
    let extra = extra.unwrap_or_default();

    for_each_keep_1(&extra, &items, span, |extra, item| {
        quote!(#rule! { #extra, #item })
    })
}

pub fn for_each_1_counted(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let IterInput {
        rule, items, span, ..
    } = IterInput::parse(input, false)?;

    for_each_counted(&items, span, |n, item| {
        let n = Literal::usize_unsuffixed(n);
        quote!(#rule! { #n, #item })
    })
}
