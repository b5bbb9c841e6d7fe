//! Generation-time discriminant resolution.
//!
//! The emitted code always lets rustc evaluate the replayed initializers. This
//! module folds the same expressions at expansion time where it can, so the
//! generators can report duplicates and tests can check lookups without
//! compiling. An initializer the folder cannot evaluate exactly (external
//! constants, calls, overflow) is `Opaque`, and so is every bare enumerator
//! after it. Opaque values are never guessed.

use crate::{
    node::{EnumSpec, EnumeratorSpec},
    options::Repr,
};
use syn::{BinOp, Expr, Lit, Type, UnOp};

///
/// ResolvedValue
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedValue {
    Known(i64),
    Opaque,
}

impl ResolvedValue {
    #[must_use]
    pub const fn known(self) -> Option<i64> {
        match self {
            Self::Known(v) => Some(v),
            Self::Opaque => None,
        }
    }
}

/// Resolve every enumerator of `spec` in declaration order.
#[must_use]
pub fn resolve_discriminants(spec: &EnumSpec) -> Vec<ResolvedValue> {
    let mut acc = Accumulator::new(spec.options.repr);

    spec.enumerators.iter().map(|e| acc.advance(e)).collect()
}

///
/// Accumulator
/// running discriminant for one pass over an enumerator list
///

struct Accumulator<'a> {
    repr: Repr,
    running: ResolvedValue,
    seen: Vec<(&'a syn::Ident, ResolvedValue)>,
}

impl<'a> Accumulator<'a> {
    const fn new(repr: Repr) -> Self {
        Self {
            repr,
            running: ResolvedValue::Known(-1),
            seen: Vec::new(),
        }
    }

    fn advance(&mut self, enumerator: &'a EnumeratorSpec) -> ResolvedValue {
        let value = match &enumerator.initializer {
            None => self.bounded(self.running.known().and_then(|v| v.checked_add(1))),
            Some(expr) => self.bounded(self.fold(expr)),
        };

        self.running = value;
        self.seen.push((&enumerator.ident, value));

        value
    }

    fn bounded(&self, value: Option<i64>) -> ResolvedValue {
        let (min, max) = self.repr.bounds();

        match value {
            Some(v) if (min..=max).contains(&v) => ResolvedValue::Known(v),
            _ => ResolvedValue::Opaque,
        }
    }

    fn fold(&self, expr: &Expr) -> Option<i64> {
        let value = match expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Int(int) => int.base10_parse::<i64>().ok()?,
                _ => return None,
            },
            Expr::Paren(inner) => self.fold(&inner.expr)?,
            Expr::Group(inner) => self.fold(&inner.expr)?,
            Expr::Cast(cast) if self.is_repr_type(&cast.ty) => self.fold(&cast.expr)?,
            Expr::Path(path) if path.qself.is_none() => {
                let ident = path.path.get_ident()?;
                let (_, value) = self.seen.iter().find(|(seen, _)| *seen == ident)?;
                value.known()?
            }
            Expr::Unary(unary) => {
                let operand = self.fold(&unary.expr)?;
                match unary.op {
                    UnOp::Neg(_) => operand.checked_neg()?,
                    // `!` only agrees with i64 for signed reprs
                    UnOp::Not(_) if self.repr.bounds().0 < 0 => !operand,
                    _ => return None,
                }
            }
            Expr::Binary(binary) => {
                let lhs = self.fold(&binary.left)?;
                let rhs = self.fold(&binary.right)?;
                fold_binary(binary.op, lhs, rhs)?
            }
            _ => return None,
        };

        // every intermediate must also fit, or rustc would reject the const
        let (min, max) = self.repr.bounds();
        (min..=max).contains(&value).then_some(value)
    }

    fn is_repr_type(&self, ty: &Type) -> bool {
        match ty {
            Type::Path(path) => path
                .path
                .get_ident()
                .is_some_and(|ident| ident == self.repr.as_str()),
            _ => false,
        }
    }
}

fn fold_binary(op: BinOp, lhs: i64, rhs: i64) -> Option<i64> {
    match op {
        BinOp::Add(_) => lhs.checked_add(rhs),
        BinOp::Sub(_) => lhs.checked_sub(rhs),
        BinOp::Mul(_) => lhs.checked_mul(rhs),
        BinOp::Div(_) => lhs.checked_div(rhs),
        BinOp::Rem(_) => lhs.checked_rem(rhs),
        BinOp::BitAnd(_) => Some(lhs & rhs),
        BinOp::BitOr(_) => Some(lhs | rhs),
        BinOp::BitXor(_) => Some(lhs ^ rhs),
        BinOp::Shl(_) => lhs.checked_shl(u32::try_from(rhs).ok()?),
        BinOp::Shr(_) => lhs.checked_shr(u32::try_from(rhs).ok()?),
        _ => None,
    }
}

///
/// LookupTable
/// expansion-time mirror of a generated lookup function
///

#[derive(Clone, Debug)]
pub struct LookupTable {
    entries: Vec<(String, ResolvedValue)>,
    unknown: String,
}

impl LookupTable {
    #[must_use]
    pub fn new(spec: &EnumSpec) -> Self {
        let entries = spec
            .enumerators
            .iter()
            .map(EnumeratorSpec::name)
            .zip(resolve_discriminants(spec))
            .collect();

        Self {
            entries,
            unknown: spec.options.unknown_text().to_string(),
        }
    }

    /// Text the generated function returns for `value`.
    ///
    /// `None` when an opaque enumerator ahead of any match could also hold
    /// `value`, so only rustc can decide.
    #[must_use]
    pub fn lookup(&self, value: i64) -> Option<&str> {
        for (name, resolved) in &self.entries {
            match resolved {
                ResolvedValue::Known(v) if *v == value => return Some(name.as_str()),
                ResolvedValue::Known(_) => {}
                ResolvedValue::Opaque => return None,
            }
        }

        Some(self.unknown.as_str())
    }

    /// Resolved value of the named enumerator.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<ResolvedValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Names that can never be returned because an earlier enumerator holds
    /// the same value, as `(value, winner, shadowed)`.
    #[must_use]
    pub fn shadowed(&self) -> Vec<(i64, &str, &str)> {
        let mut out = Vec::new();

        for (index, (name, resolved)) in self.entries.iter().enumerate() {
            let ResolvedValue::Known(value) = *resolved else {
                continue;
            };
            let winner = self.entries[..index]
                .iter()
                .find(|(_, earlier)| *earlier == ResolvedValue::Known(value));
            if let Some((winner, _)) = winner {
                out.push((value, winner.as_str(), name.as_str()));
            }
        }

        out
    }

    /// Names whose value only rustc can determine.
    pub fn opaque(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, v)| *v == ResolvedValue::Opaque)
            .map(|(n, _)| n.as_str())
    }
}
