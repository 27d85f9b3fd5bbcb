//! Error types for parameter conversions.

use alloc::string::String;
use core::fmt;
use thiserror::Error;

/// Runtime type of a [`Value`](crate::Value), used in mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A `bool`.
    Bool,
    /// An `f64`.
    Float,
    /// A string (enumerated variant name).
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Float => "float",
            ValueKind::Text => "string",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during parameter conversions.
///
/// All operations are pure computations; every error is synchronous and
/// final, with nothing to retry or roll back.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    /// A normalize call received a string absent from the declared variants.
    #[error("\"{value}\" is not a valid variant")]
    InvalidVariant {
        /// The rejected string.
        value: String,
    },

    /// A strict API received a normalized position outside `[0, 1]`.
    ///
    /// Only [`EnumParam::try_denormalize`](crate::EnumParam::try_denormalize)
    /// reports this; the lenient denormalize paths clamp instead.
    #[error("normalized position {position} is outside [0, 1]")]
    RangeViolation {
        /// The out-of-range position.
        position: f64,
    },

    /// A raw value's type does not match the parameter kind it was paired
    /// with in the dispatch facade.
    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        /// Type the parameter kind requires.
        expected: ValueKind,
        /// Type that was actually supplied.
        actual: ValueKind,
    },
}
