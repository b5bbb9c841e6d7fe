use crate::{
    GenerateError, SENTINEL_SUFFIX,
    count::ensure_arity,
    filter::retain_non_empty,
    node::Header,
    options::EnumOptions,
    token::split_expr_args,
};
use proc_macro2::{Span, TokenStream};
use quote::format_ident;
use syn::{
    Attribute, Expr, Ident, Token, Visibility,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

///
/// Sentinel
/// whether `<Name>_INVALID` is prepended to the enumerator list
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sentinel {
    With,
    Without,
}

///
/// EnumeratorSpec
///

#[derive(Clone, Debug)]
pub struct EnumeratorSpec {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,

    /// Constant expression replayed verbatim; never evaluated here.
    pub initializer: Option<Expr>,
}

impl EnumeratorSpec {
    #[must_use]
    pub const fn bare(ident: Ident) -> Self {
        Self {
            attrs: Vec::new(),
            ident,
            initializer: None,
        }
    }

    #[must_use]
    pub const fn is_bare(&self) -> bool {
        self.initializer.is_none()
    }

    /// Name as it appears in the lookup function's output, without any `r#`.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

impl Parse for EnumeratorSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident: Ident = input.parse()?;

        let initializer = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error("expected `,` or `= <constant expression>` after enumerator"));
        }

        Ok(Self {
            attrs,
            ident,
            initializer,
        })
    }
}

///
/// EnumSpec
///

#[derive(Clone, Debug)]
pub struct EnumSpec {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub enumerators: Vec<EnumeratorSpec>,
    pub sentinel: Sentinel,
    pub options: EnumOptions,
    pub span: Span,
}

impl EnumSpec {
    /// Parse `[#[attr]]* [vis] Name, ENUMERATOR [= expr], ...`.
    ///
    /// Empty positions in the enumerator list are dropped. With
    /// [`Sentinel::With`] a bare `<Name>_INVALID` enumerator is prepended and
    /// counts against `MAX_ARITY`.
    pub fn parse(tokens: TokenStream, sentinel: Sentinel) -> Result<Self, GenerateError> {
        let span = tokens.span();
        let Header {
            mut attrs,
            vis,
            ident,
            rest,
        } = Header::parse(tokens)?;
        let options = EnumOptions::extract(&mut attrs)?;

        let args = retain_non_empty(split_expr_args(rest));
        if args.is_empty() {
            return Err(GenerateError::EmptyList {
                what: "enumerator",
                span: ident.span(),
            });
        }

        let mut enumerators = Vec::with_capacity(args.len() + 1);
        if sentinel == Sentinel::With {
            enumerators.push(EnumeratorSpec::bare(sentinel_ident(&ident)));
        }
        for arg in args {
            enumerators.push(syn::parse2::<EnumeratorSpec>(arg)?);
        }
        ensure_arity(enumerators.len(), span)?;

        let spec = Self {
            attrs,
            vis,
            ident,
            enumerators,
            sentinel,
            options,
            span,
        };
        spec.check_unique_names()?;

        Ok(spec)
    }

    /// Number of enumerators the generated type declares, sentinel included.
    #[must_use]
    pub const fn value_count(&self) -> usize {
        self.enumerators.len()
    }

    /// Name of the generated lookup function.
    #[must_use]
    pub fn lookup_fn_ident(&self) -> Ident {
        match &self.options.lookup_fn_ident {
            Some(name) => {
                let mut name = name.clone();
                name.set_span(self.ident.span());
                name
            }
            None => lookup_fn_ident(&self.ident),
        }
    }

    // Two enumerators with the same name would be two consts with the same
    // name in one scope.
    fn check_unique_names(&self) -> Result<(), GenerateError> {
        for (index, enumerator) in self.enumerators.iter().enumerate() {
            let earlier = &self.enumerators[..index];
            if earlier.iter().any(|e| e.ident == enumerator.ident) {
                return Err(GenerateError::invalid_enumerator(
                    format!("'{}' is declared more than once", enumerator.ident),
                    enumerator.ident.span(),
                ));
            }
        }

        Ok(())
    }
}

/// `<Name>_INVALID`
#[must_use]
pub fn sentinel_ident(ident: &Ident) -> Ident {
    format_ident!("{}{}", ident, SENTINEL_SUFFIX, span = ident.span())
}

/// `<snake_name>_to_string`
#[must_use]
pub fn lookup_fn_ident(ident: &Ident) -> Ident {
    use convert_case::{Case, Casing};

    let snake = ident.unraw().to_string().to_case(Case::Snake);

    format_ident!("{}_to_string", snake, span = ident.span())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn names(spec: &EnumSpec) -> Vec<String> {
        spec.enumerators.iter().map(EnumeratorSpec::name).collect()
    }

    #[test]
    fn sentinel_is_prepended() {
        let spec = EnumSpec::parse(quote!(Color, RED, GREEN, BLUE), Sentinel::With).unwrap();

        assert_eq!(names(&spec), ["Color_INVALID", "RED", "GREEN", "BLUE"]);
        assert!(spec.enumerators[0].is_bare());
        assert_eq!(spec.value_count(), 4);
    }

    #[test]
    fn without_sentinel_keeps_the_list_as_is() {
        let spec = EnumSpec::parse(quote!(Color, RED, GREEN), Sentinel::Without).unwrap();

        assert_eq!(names(&spec), ["RED", "GREEN"]);
        assert_eq!(spec.value_count(), 2);
    }

    #[test]
    fn initializers_are_kept_verbatim() {
        let spec =
            EnumSpec::parse(quote!(Uber, a, b = 42, c = b * 2 + 1), Sentinel::Without).unwrap();
        let init = spec.enumerators[2].initializer.as_ref().unwrap();

        assert!(spec.enumerators[0].is_bare());
        assert_eq!(quote!(#init).to_string(), "b * 2 + 1");
    }

    #[test]
    fn attributes_and_visibility_are_captured() {
        let spec = EnumSpec::parse(
            quote!(#[derive(Default)] pub(crate) Level, #[doc = "lowest"] LOW, HIGH),
            Sentinel::Without,
        )
        .unwrap();

        assert_eq!(spec.attrs.len(), 1);
        assert!(matches!(spec.vis, Visibility::Restricted(_)));
        assert_eq!(spec.enumerators[0].attrs.len(), 1);
    }

    #[test]
    fn elided_enumerators_are_dropped() {
        let spec = EnumSpec::parse(quote!(E, , A, , B,), Sentinel::Without).unwrap();

        assert_eq!(names(&spec), ["A", "B"]);
    }

    #[test]
    fn empty_enumerator_list_is_rejected() {
        let err = EnumSpec::parse(quote!(E), Sentinel::With).unwrap_err();

        assert!(matches!(err, GenerateError::EmptyList { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = EnumSpec::parse(quote!(E, A, B, A = 3), Sentinel::Without).unwrap_err();

        assert!(matches!(err, GenerateError::InvalidEnumerator { .. }));
    }

    #[test]
    fn sentinel_counts_against_max_arity() {
        let list: Vec<_> = (0..crate::MAX_ARITY).map(|i| format_ident!("V{i}")).collect();

        assert!(EnumSpec::parse(quote!(E, #(#list),*), Sentinel::Without).is_ok());
        assert!(matches!(
            EnumSpec::parse(quote!(E, #(#list),*), Sentinel::With),
            Err(GenerateError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn trailing_tokens_after_enumerator_are_rejected() {
        assert!(EnumSpec::parse(quote!(E, A B), Sentinel::Without).is_err());
    }

    #[test]
    fn lookup_fn_is_snake_case_by_default() {
        let spec = EnumSpec::parse(quote!(TrafficLight, RED), Sentinel::Without).unwrap();
        assert_eq!(spec.lookup_fn_ident().to_string(), "traffic_light_to_string");

        let spec = EnumSpec::parse(quote!(TEST_UBER_ENUM, A), Sentinel::Without).unwrap();
        assert_eq!(spec.lookup_fn_ident().to_string(), "test_uber_enum_to_string");
    }

    #[test]
    fn lookup_fn_can_be_renamed() {
        let spec = EnumSpec::parse(
            quote!(#[macro_utils(to_string = "light_name")] TrafficLight, RED),
            Sentinel::Without,
        )
        .unwrap();

        assert_eq!(spec.lookup_fn_ident().to_string(), "light_name");
        assert!(spec.attrs.is_empty());
    }

    #[test]
    fn lookup_fn_can_be_renamed_to_a_raw_ident() {
        let spec = EnumSpec::parse(
            quote!(#[macro_utils(to_string = "r#match")] E, A),
            Sentinel::Without,
        )
        .unwrap();

        assert_eq!(spec.lookup_fn_ident().to_string(), "r#match");
    }

    #[test]
    fn raw_enumerators_are_named_without_the_prefix() {
        let spec = EnumSpec::parse(quote!(r#Kind, r#type, r#match = 4), Sentinel::With).unwrap();

        assert_eq!(names(&spec), ["Kind_INVALID", "type", "match"]);
        assert_eq!(spec.lookup_fn_ident().to_string(), "kind_to_string");
    }

    #[test]
    fn turbofish_commas_stay_inside_the_initializer() {
        let spec = EnumSpec::parse(
            quote!(E, A = Table::<u8, i32>::FIRST, B = A << 2, C),
            Sentinel::Without,
        )
        .unwrap();

        assert_eq!(names(&spec), ["A", "B", "C"]);
        let init = spec.enumerators[0].initializer.as_ref().unwrap();
        assert_eq!(quote!(#init).to_string(), "Table :: < u8 , i32 > :: FIRST");
    }
}
