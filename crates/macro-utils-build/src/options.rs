//! Per-enum generation options.
//!
//! Options ride on an optional leading `#[macro_utils(...)]` attribute:
//!
//! ```text
//! define_enum!(#[macro_utils(repr = "u8", to_string = "level_name", unknown = "?")] Level, LOW, HIGH);
//! ```

use crate::{GenerateError, UNKNOWN_TEXT};
use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident};
use std::{fmt, str::FromStr};
use syn::{Attribute, Ident, spanned::Spanned};

/// Attribute path the options are read from.
pub const OPTIONS_ATTR: &str = "macro_utils";

///
/// Repr
/// integer carried by a generated enum newtype
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum Repr {
    I8,
    I16,
    #[default]
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl Repr {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
        }
    }

    /// Inclusive value range, clamped to what generation-time folding tracks.
    #[must_use]
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            Self::I8 => (i8::MIN as i64, i8::MAX as i64),
            Self::I16 => (i16::MIN as i64, i16::MAX as i64),
            Self::I32 => (i32::MIN as i64, i32::MAX as i64),
            Self::I64 | Self::I128 | Self::Isize => (i64::MIN, i64::MAX),
            Self::U8 => (0, u8::MAX as i64),
            Self::U16 => (0, u16::MAX as i64),
            Self::U32 => (0, u32::MAX as i64),
            Self::U64 | Self::U128 | Self::Usize => (0, i64::MAX),
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Repr {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let repr = match s {
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "i128" => Self::I128,
            "isize" => Self::Isize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "usize" => Self::Usize,
            _ => return Err(()),
        };

        Ok(repr)
    }
}

impl FromMeta for Repr {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|()| darling::Error::unknown_value(s))
    }
}

impl ToTokens for Repr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        format_ident!("{}", self.as_str()).to_tokens(tokens);
    }
}

///
/// EnumOptions
///

#[derive(Clone, Debug, Default, FromMeta)]
pub struct EnumOptions {
    #[darling(default)]
    pub repr: Repr,

    /// Overrides the `<snake_name>_to_string` lookup function name.
    #[darling(default, rename = "to_string")]
    pub lookup_fn: Option<String>,

    /// `lookup_fn` as parsed; raw identifiers such as `r#match` are kept raw.
    #[darling(skip)]
    pub lookup_fn_ident: Option<Ident>,

    /// Overrides the text returned for unmatched values.
    #[darling(default)]
    pub unknown: Option<String>,
}

impl EnumOptions {
    /// Remove any `#[macro_utils(...)]` attribute from `attrs` and parse it.
    ///
    /// Attributes with any other path are left in place for pass-through.
    pub fn extract(attrs: &mut Vec<Attribute>) -> Result<Self, GenerateError> {
        let mut found: Option<Attribute> = None;
        let mut kept = Vec::with_capacity(attrs.len());

        for attr in attrs.drain(..) {
            if !attr.path().is_ident(OPTIONS_ATTR) {
                kept.push(attr);
                continue;
            }
            if found.is_some() {
                return Err(syn::Error::new(
                    attr.span(),
                    format!("duplicate #[{OPTIONS_ATTR}(...)] attribute"),
                )
                .into());
            }
            found = Some(attr);
        }
        *attrs = kept;

        let Some(attr) = found else {
            return Ok(Self::default());
        };
        let span = attr.span();
        let mut options = Self::from_meta(&attr.meta)?;

        if let Some(name) = &options.lookup_fn {
            let ident = syn::parse_str::<Ident>(name).map_err(|_| GenerateError::InvalidOption {
                message: format!("to_string = \"{name}\" is not a valid function name"),
                span,
            })?;
            options.lookup_fn_ident = Some(ident);
        }

        Ok(options)
    }

    /// Text returned by the lookup function for unmatched values.
    #[must_use]
    pub fn unknown_text(&self) -> &str {
        self.unknown.as_deref().unwrap_or(UNKNOWN_TEXT)
    }
}
