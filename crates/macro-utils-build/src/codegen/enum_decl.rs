use crate::{
    GenerateError,
    node::{EnumSpec, EnumeratorSpec, lookup_fn_ident},
    obs::{self, GenerationEvent},
    resolve::LookupTable,
};
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::Ident;

/// Associated items every generated type declares next to its enumerators.
const RESERVED_NAMES: [&str; 2] = ["VALUE_COUNT", "__DISCRIMINANTS"];

///
/// EnumMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnumMode {
    /// Type plus a lookup function with the type's visibility.
    Declare,
    /// Type plus a private lookup function.
    Local,
    /// Lookup function only; the type is declared elsewhere.
    Strings,
}

impl EnumMode {
    const fn declares_type(self) -> bool {
        matches!(self, Self::Declare | Self::Local)
    }
}

///
/// EnumOutput
///

#[derive(Clone, Debug)]
pub struct EnumOutput {
    pub tokens: TokenStream,

    /// Expansion-time view of what the emitted lookup function returns.
    pub table: LookupTable,
}

impl ToTokens for EnumOutput {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tokens.to_tokens(tokens);
    }
}

/// Generate the declarations for `spec`.
///
/// Shadowed and opaque enumerators are reported to the generation sink; they
/// never change what is emitted.
pub fn define_enum(spec: &EnumSpec, mode: EnumMode) -> Result<EnumOutput, GenerateError> {
    if mode.declares_type() {
        check_reserved_names(spec)?;
    }

    let table = LookupTable::new(spec);
    report(spec, mode, &table);

    let generator = EnumGen { spec, mode };

    Ok(EnumOutput {
        tokens: generator.to_token_stream(),
        table,
    })
}

fn check_reserved_names(spec: &EnumSpec) -> Result<(), GenerateError> {
    for enumerator in &spec.enumerators {
        if RESERVED_NAMES.iter().any(|name| enumerator.ident == *name) {
            return Err(GenerateError::invalid_enumerator(
                format!(
                    "'{}' clashes with an item generated for '{}'",
                    enumerator.ident, spec.ident
                ),
                enumerator.ident.span(),
            ));
        }
    }

    Ok(())
}

fn report(spec: &EnumSpec, mode: EnumMode, table: &LookupTable) {
    let name = spec.ident.to_string();

    obs::record(GenerationEvent::EnumGenerated {
        name: &name,
        mode,
        enumerators: spec.value_count(),
    });

    for (value, winner, shadowed) in table.shadowed() {
        obs::record(GenerationEvent::DuplicateDiscriminant {
            name: &name,
            value,
            winner,
            shadowed,
        });
    }

    for enumerator in table.opaque() {
        obs::record(GenerationEvent::OpaqueInitializer {
            name: &name,
            enumerator,
        });
    }
}

///
/// EnumGen
///

struct EnumGen<'a> {
    spec: &'a EnumSpec,
    mode: EnumMode,
}

impl EnumGen<'_> {
    fn value_ident() -> Ident {
        Ident::new("__value", Span::mixed_site())
    }

    // Replays the enumerator list as local consts, one per enumerator, so
    // initializers can name earlier enumerators and rustc evaluates them.
    fn replay(&self) -> TokenStream {
        let repr = self.spec.options.repr;
        let mut prev: Option<&Ident> = None;
        let mut items = TokenStream::new();

        for EnumeratorSpec {
            ident, initializer, ..
        } in &self.spec.enumerators
        {
            let value = match (initializer, prev) {
                (Some(expr), _) => quote!(#expr),
                (None, Some(prev)) => quote!(#prev + 1),
                (None, None) => quote!(0),
            };
            items.extend(quote!(const #ident: #repr = #value;));
            prev = Some(ident);
        }

        items
    }

    fn type_decl(&self) -> TokenStream {
        let EnumSpec {
            attrs,
            vis,
            ident,
            enumerators,
            options,
            ..
        } = self.spec;
        let repr = options.repr;
        let count = enumerators.len();
        let replay = self.replay();
        let names = enumerators.iter().map(|e| &e.ident);

        let consts = enumerators.iter().enumerate().map(|(index, e)| {
            let (attrs, name) = (&e.attrs, &e.ident);
            quote! {
                #(#attrs)*
                pub const #name: Self = Self(Self::__DISCRIMINANTS[#index]);
            }
        });

        quote! {
            #(#attrs)*
            #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
            #[repr(transparent)]
            #vis struct #ident(pub #repr);

            #[allow(non_upper_case_globals)]
            impl #ident {
                #(#consts)*

                /// Number of enumerators, duplicates included.
                pub const VALUE_COUNT: usize = #count;

                #[doc(hidden)]
                const __DISCRIMINANTS: [#repr; #count] = {
                    #replay
                    [#(#names),*]
                };
            }

            impl ::core::convert::From<#ident> for #repr {
                fn from(value: #ident) -> Self {
                    value.0
                }
            }

            impl ::core::convert::From<#repr> for #ident {
                fn from(value: #repr) -> Self {
                    Self(value)
                }
            }
        }
    }

    fn display_impl(&self) -> TokenStream {
        let ident = &self.spec.ident;
        let lookup_fn = self.spec.lookup_fn_ident();

        quote! {
            impl ::core::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(#lookup_fn(*self))
                }
            }
        }
    }

    fn lookup_fn(&self) -> TokenStream {
        let EnumSpec {
            ident,
            enumerators,
            options,
            ..
        } = self.spec;
        let repr = options.repr;
        let lookup_fn = self.spec.lookup_fn_ident();
        let unknown = options.unknown_text();
        let value = Self::value_ident();
        let replay = self.replay();
        let vis = self.lookup_vis();

        let branches = enumerators.iter().map(|e| {
            let name = &e.ident;
            let text = e.name();
            quote! {
                if #value == #name {
                    return #text;
                }
            }
        });

        let doc = format!(
            "Name of the first `{ident}` enumerator equal to the value, or `\"{unknown}\"`."
        );

        quote! {
            #[doc = #doc]
            #[allow(non_upper_case_globals, clippy::all)]
            #vis fn #lookup_fn(#value: #ident) -> &'static str {
                let #value: #repr = ::core::convert::Into::<#repr>::into(#value);
                #replay
                #(#branches)*
                #unknown
            }
        }
    }

    // A renamed lookup stays reachable under `<snake_name>_to_string`, which
    // is the name `enum_to_string!` dispatches to.
    fn default_name_alias(&self) -> Option<TokenStream> {
        let EnumSpec { ident, .. } = self.spec;
        let lookup_fn = self.spec.lookup_fn_ident();
        let default = lookup_fn_ident(ident);
        if lookup_fn == default {
            return None;
        }

        let value = Self::value_ident();
        let vis = self.lookup_vis();

        Some(quote! {
            #[doc(hidden)]
            #[inline]
            #[allow(dead_code)]
            #vis fn #default(#value: #ident) -> &'static str {
                #lookup_fn(#value)
            }
        })
    }

    fn lookup_vis(&self) -> TokenStream {
        match self.mode {
            EnumMode::Local => quote!(),
            EnumMode::Declare | EnumMode::Strings => self.spec.vis.to_token_stream(),
        }
    }
}

impl ToTokens for EnumGen<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if self.mode.declares_type() {
            tokens.extend(self.type_decl());
            tokens.extend(self.display_impl());
        }
        tokens.extend(self.lookup_fn());
        tokens.extend(self.default_name_alias());
    }
}
