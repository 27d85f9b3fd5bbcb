//! Knurl Core - parameter normalization for generic UI controls
//!
//! Knobs, sliders, and toggles don't care what a parameter means. They render
//! a position, track a drag, and snap to discrete points — all in terms of a
//! single common currency: a normalized position in `[0.0, 1.0]`. This crate
//! is the engine that converts between that currency and real parameter
//! values.
//!
//! # Parameter Kinds
//!
//! [`Param`] is a closed union over four kinds:
//!
//! | Kind | Raw value | Mapping |
//! |------|-----------|---------|
//! | [`BoolParam`] | `bool` | 0.0 / 1.0, threshold 0.5 |
//! | [`EnumParam`] | variant name | `index / (N - 1)` |
//! | [`LinearRange`] | `f64` | affine `[min, max]` |
//! | [`LogRange`] | `f64` | sign-aware log, any base |
//!
//! Logarithmic ranges use the sign-aware transforms [`signed_log`] /
//! [`signed_exp`], so a log range may span zero (`-100..100`) — something an
//! ordinary logarithm cannot represent.
//!
//! # Example
//!
//! ```rust
//! use knurl_core::{Param, Value};
//!
//! let mode = Param::enumerated(["red", "green", "blue"]);
//!
//! // A widget renders the knob at the normalized position...
//! let position = mode.normalize(&Value::from("green")).unwrap();
//! assert_eq!(position, 0.5);
//!
//! // ...and a slightly overshooting drag still lands on a real variant.
//! assert_eq!(mode.denormalize_to_string(0.74), "green");
//!
//! // Discrete kinds expose snap points for gesture rounding.
//! assert_eq!(mode.snap_points().unwrap(), [0.0, 0.5, 1.0]);
//! ```
//!
//! # Design
//!
//! - **Pure and immutable**: every conversion is a pure function over an
//!   immutable parameter definition. `Param` values can be shared freely
//!   across threads; nothing mutates after construction.
//! - **Strict in, lenient out**: normalize rejects malformed program-supplied
//!   values (unknown enum variants, mismatched value types), while
//!   denormalize tolerates gesture-derived positions that drift outside
//!   `[0, 1]`.
//! - **No clamping on continuous kinds**: linear and logarithmic conversions
//!   extrapolate; saturation is the caller's call.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (with `alloc`) for embedded UI targets.
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! knurl-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod boolean;
pub mod enumerated;
pub mod error;
pub mod param;
pub mod range;
pub mod scale;

// Re-export main types at crate root
pub use boolean::BoolParam;
pub use enumerated::EnumParam;
pub use error::{ParamError, ValueKind};
pub use param::{DEFAULT_PRECISION, Param, Value};
pub use range::{DEFAULT_LOG_BASE, LinearRange, LogRange, Range};
pub use scale::{signed_exp, signed_log};
