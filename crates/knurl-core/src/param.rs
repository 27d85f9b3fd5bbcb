//! The parameter kind union and its kind-dispatched conversion facade.
//!
//! [`Param`] is the type generic UI controls hold: a closed union over the
//! four parameter kinds, dispatched exhaustively. Because the union is
//! closed, an "unsupported kind" branch cannot exist — the compiler proves
//! every kind is handled.
//!
//! Callers that are generic over parameter kind pass raw values as [`Value`]
//! and get [`ParamError::TypeMismatch`] when they pair a value with the wrong
//! kind. Callers that know the kind statically can use the concrete types
//! ([`BoolParam`], [`EnumParam`], [`LinearRange`], [`LogRange`]) directly and
//! skip the tagging entirely.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::boolean::BoolParam;
use crate::enumerated::EnumParam;
use crate::error::{ParamError, ValueKind};
use crate::range::{LinearRange, LogRange, Range};

/// Decimal places used by [`Param::format`] when none are requested.
pub const DEFAULT_PRECISION: usize = 2;

/// A raw parameter value, tagged by type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw value of a boolean parameter.
    Bool(bool),
    /// Raw value of a continuous parameter.
    Float(f64),
    /// Variant name of an enumerated parameter.
    Text(String),
}

impl Value {
    /// The runtime type tag, for error reporting.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// An immutable parameter definition, tagged by kind.
///
/// Constructed once at UI-definition time and borrowed by widgets for the
/// lifetime of a control. No API mutates a `Param` after construction, so
/// sharing across threads needs no synchronization.
///
/// # Example
///
/// ```rust
/// use knurl_core::{Param, Value};
///
/// let gain = Param::linear(0.0, 100.0);
/// let n = gain.normalize(&Value::Float(50.0)).unwrap();
/// assert_eq!(n, 0.5);
/// assert_eq!(gain.denormalize_to_number(0.25), 25.0);
/// assert_eq!(gain.format(&Value::Float(25.0), None).unwrap(), "25.00");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Two-state toggle.
    Bool(BoolParam),
    /// Ordered named variants.
    Enum(EnumParam),
    /// Continuous value over a linear range.
    Linear(LinearRange),
    /// Continuous value over a logarithmic range.
    Logarithmic(LogRange),
}

impl Param {
    /// Boolean parameter.
    pub fn boolean() -> Self {
        Self::Bool(BoolParam::new())
    }

    /// Enumerated parameter. Panics if fewer than two variants are given.
    pub fn enumerated<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(EnumParam::new(variants))
    }

    /// Linear float parameter. Panics if `min == max`.
    pub fn linear(min: f64, max: f64) -> Self {
        Self::Linear(LinearRange::new(min, max))
    }

    /// Base-10 logarithmic float parameter. Panics if `min == max`.
    pub fn logarithmic(min: f64, max: f64) -> Self {
        Self::Logarithmic(LogRange::new(min, max))
    }

    /// Logarithmic float parameter with an explicit base. Panics if `min == max`.
    pub fn logarithmic_with_base(min: f64, max: f64, base: f64) -> Self {
        Self::Logarithmic(LogRange::with_base(min, max, base))
    }

    /// Value type this parameter kind expects.
    pub fn expected_kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Enum(_) => ValueKind::Text,
            Self::Linear(_) | Self::Logarithmic(_) => ValueKind::Float,
        }
    }

    /// Map a raw value to its normalized position.
    ///
    /// Boolean and continuous kinds cannot fail on a matching value type;
    /// enumerated parameters reject unknown variant names. A value of the
    /// wrong type fails with [`ParamError::TypeMismatch`]. Continuous kinds
    /// do not clamp: out-of-range raw values extrapolate past `[0, 1]`.
    pub fn normalize(&self, value: &Value) -> Result<f64, ParamError> {
        match (self, value) {
            (Self::Bool(p), Value::Bool(v)) => Ok(p.normalize(*v)),
            (Self::Enum(p), Value::Text(v)) => p.normalize(v),
            (Self::Linear(r), Value::Float(v)) => Ok(r.normalize(*v)),
            (Self::Logarithmic(r), Value::Float(v)) => Ok(r.normalize(*v)),
            _ => Err(self.type_mismatch(value)),
        }
    }

    /// Map a position back to a raw value, re-encoded as a number.
    ///
    /// Continuous kinds return the raw value. Booleans return 0.0 or 1.0.
    /// Enumerated parameters clamp, pick a variant, and return that
    /// variant's own normalized position `index / (N - 1)` — useful for
    /// chaining the result back into position-space APIs.
    pub fn denormalize_to_number(&self, position: f64) -> f64 {
        match self {
            Self::Bool(p) => {
                if p.denormalize(position) {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Enum(p) => p.quantize(position),
            Self::Linear(r) => r.denormalize(position),
            Self::Logarithmic(r) => r.denormalize(position),
        }
    }

    /// Map a position back to the parameter's natural external
    /// representation.
    ///
    /// Enumerated parameters return the variant name, booleans `"true"` or
    /// `"false"`, continuous kinds the raw value as decimal text.
    pub fn denormalize_to_string(&self, position: f64) -> String {
        match self {
            Self::Bool(p) => p.denormalize(position).to_string(),
            Self::Enum(p) => String::from(p.denormalize(position)),
            Self::Linear(r) => r.denormalize(position).to_string(),
            Self::Logarithmic(r) => r.denormalize(position).to_string(),
        }
    }

    /// Render a raw value as a human-readable string.
    ///
    /// Enumerated variants pass through unchanged, booleans render as
    /// `"true"`/`"false"`, floats as fixed-point with `precision` decimals
    /// ([`DEFAULT_PRECISION`] when `None`).
    pub fn format(&self, value: &Value, precision: Option<usize>) -> Result<String, ParamError> {
        match (self, value) {
            (Self::Bool(_), Value::Bool(v)) => Ok(v.to_string()),
            (Self::Enum(_), Value::Text(v)) => Ok(v.clone()),
            (Self::Linear(_) | Self::Logarithmic(_), Value::Float(v)) => {
                let precision = precision.unwrap_or(DEFAULT_PRECISION);
                Ok(format!("{v:.precision$}"))
            }
            _ => Err(self.type_mismatch(value)),
        }
    }

    /// Positions a dragging UI should lock to, in ascending order.
    ///
    /// Defined for boolean and enumerated kinds; continuous kinds have no
    /// natural snap points and return `None`.
    pub fn snap_points(&self) -> Option<Vec<f64>> {
        match self {
            Self::Bool(_) => Some(BoolParam::SNAP_POINTS.to_vec()),
            Self::Enum(p) => Some(p.snap_points()),
            Self::Linear(_) | Self::Logarithmic(_) => None,
        }
    }

    /// Distance within which a gesture rounds to a snap point.
    ///
    /// `None` for continuous kinds, like [`snap_points`](Self::snap_points).
    pub fn snap_threshold(&self) -> Option<f64> {
        match self {
            Self::Bool(_) => Some(BoolParam::SNAP_THRESHOLD),
            Self::Enum(p) => Some(p.snap_threshold()),
            Self::Linear(_) | Self::Logarithmic(_) => None,
        }
    }

    fn type_mismatch(&self, value: &Value) -> ParamError {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "param dispatch: expected {} value, got {}",
            self.expected_kind(),
            value.kind()
        );
        ParamError::TypeMismatch {
            expected: self.expected_kind(),
            actual: value.kind(),
        }
    }
}

impl From<Range> for Param {
    fn from(range: Range) -> Self {
        match range {
            Range::Linear(r) => Self::Linear(r),
            Range::Logarithmic(r) => Self::Logarithmic(r),
        }
    }
}
