//! Range descriptions for continuous parameters.
//!
//! A [`Range`] declares the raw domain of a continuous parameter and converts
//! between raw values and dimensionless positions. Two shapes exist:
//!
//! - [`LinearRange`] — plain affine `[min, max]` mapping
//! - [`LogRange`] — logarithmic mapping via the sign-aware transforms in
//!   [`scale`](crate::scale), so ranges may cross zero (`-100..100` is fine)
//!
//! Conversions never clamp: a raw value outside `[min, max]` produces a
//! position outside `[0, 1]` and vice versa. Callers that want saturation
//! apply it themselves. Descending ranges (`min > max`) are legal and simply
//! invert the mapping direction.

use crate::scale::{signed_exp, signed_log};

/// Log base used when none is specified.
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Linear `[min, max]` domain.
///
/// # Example
///
/// ```rust
/// use knurl_core::LinearRange;
///
/// let range = LinearRange::new(-50.0, 50.0);
/// assert_eq!(range.normalize(0.0), 0.5);
/// assert_eq!(range.denormalize(0.25), -25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRange {
    /// Raw value at position 0.0.
    pub min: f64,
    /// Raw value at position 1.0.
    pub max: f64,
}

impl LinearRange {
    /// Create a linear range.
    ///
    /// # Panics
    ///
    /// Panics if `min == max` (the mapping would divide by zero).
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min != max, "degenerate range: min == max == {min}");
        Self { min, max }
    }

    /// Map a raw value to a position (0.0 at `min`, 1.0 at `max`).
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Map a position back to a raw value. Exact inverse of
    /// [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, position: f64) -> f64 {
        position * (self.max - self.min) + self.min
    }
}

/// Logarithmic `[min, max]` domain with a configurable base.
///
/// The log-domain bounds are computed once at construction and the struct is
/// immutable afterwards, so every conversion is two multiplies and a
/// transcendental away from the cached values.
///
/// Because the mapping goes through [`signed_log`], the range may include or
/// cross zero — something a plain logarithm cannot express.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRange {
    min: f64,
    max: f64,
    base: f64,
    log_min: f64,
    log_max: f64,
}

impl LogRange {
    /// Create a log range with the default base 10.
    ///
    /// # Panics
    ///
    /// Panics if `min == max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self::with_base(min, max, DEFAULT_LOG_BASE)
    }

    /// Create a log range with an explicit base.
    ///
    /// # Panics
    ///
    /// Panics if `min == max`.
    pub fn with_base(min: f64, max: f64, base: f64) -> Self {
        assert!(min != max, "degenerate range: min == max == {min}");
        Self {
            min,
            max,
            base,
            log_min: signed_log(min, base),
            log_max: signed_log(max, base),
        }
    }

    /// Raw value at position 0.0.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Raw value at position 1.0.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Log base of the mapping.
    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Map a raw value to a position along the log curve.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (signed_log(value, self.base) - self.log_min) / (self.log_max - self.log_min)
    }

    /// Map a position back to a raw value. Inverse of
    /// [`normalize`](Self::normalize) within floating tolerance.
    #[inline]
    pub fn denormalize(&self, position: f64) -> f64 {
        signed_exp(
            position * (self.log_max - self.log_min) + self.log_min,
            self.base,
        )
    }
}

/// The domain of a continuous parameter: linear or logarithmic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range {
    /// Affine mapping with equal resolution across the range.
    Linear(LinearRange),
    /// Logarithmic mapping with more resolution near zero.
    Logarithmic(LogRange),
}

impl Range {
    /// Create a linear range. Panics if `min == max`.
    pub fn linear(min: f64, max: f64) -> Self {
        Self::Linear(LinearRange::new(min, max))
    }

    /// Create a base-10 logarithmic range. Panics if `min == max`.
    pub fn logarithmic(min: f64, max: f64) -> Self {
        Self::Logarithmic(LogRange::new(min, max))
    }

    /// Create a logarithmic range with an explicit base. Panics if `min == max`.
    pub fn logarithmic_with_base(min: f64, max: f64, base: f64) -> Self {
        Self::Logarithmic(LogRange::with_base(min, max, base))
    }

    /// Raw value at position 0.0.
    #[inline]
    pub fn min(&self) -> f64 {
        match self {
            Self::Linear(r) => r.min,
            Self::Logarithmic(r) => r.min(),
        }
    }

    /// Raw value at position 1.0.
    #[inline]
    pub fn max(&self) -> f64 {
        match self {
            Self::Linear(r) => r.max,
            Self::Logarithmic(r) => r.max(),
        }
    }

    /// Map a raw value to a position for either range shape.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        match self {
            Self::Linear(r) => r.normalize(value),
            Self::Logarithmic(r) => r.normalize(value),
        }
    }

    /// Map a position back to a raw value for either range shape.
    #[inline]
    pub fn denormalize(&self, position: f64) -> f64 {
        match self {
            Self::Linear(r) => r.denormalize(position),
            Self::Logarithmic(r) => r.denormalize(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints_and_midpoint() {
        let range = LinearRange::new(0.0, 100.0);
        assert_eq!(range.normalize(0.0), 0.0);
        assert_eq!(range.normalize(50.0), 0.5);
        assert_eq!(range.normalize(100.0), 1.0);
        assert_eq!(range.denormalize(0.5), 50.0);
    }

    #[test]
    fn linear_crossing_zero() {
        let range = LinearRange::new(-50.0, 50.0);
        assert_eq!(range.normalize(-50.0), 0.0);
        assert_eq!(range.normalize(0.0), 0.5);
        assert_eq!(range.normalize(50.0), 1.0);
        assert_eq!(range.denormalize(0.25), -25.0);
        assert_eq!(range.denormalize(0.75), 25.0);
    }

    #[test]
    fn linear_descending_inverts_direction() {
        let range = LinearRange::new(100.0, 0.0);
        assert_eq!(range.normalize(100.0), 0.0);
        assert_eq!(range.normalize(0.0), 1.0);
        assert_eq!(range.denormalize(0.25), 75.0);
    }

    #[test]
    fn linear_extrapolates_without_clamping() {
        let range = LinearRange::new(0.0, 10.0);
        assert_eq!(range.normalize(20.0), 2.0);
        assert_eq!(range.normalize(-10.0), -1.0);
        assert_eq!(range.denormalize(1.5), 15.0);
    }

    #[test]
    #[should_panic(expected = "degenerate range")]
    fn linear_rejects_equal_bounds() {
        let _ = LinearRange::new(3.0, 3.0);
    }

    #[test]
    fn log_endpoints() {
        let range = LogRange::new(1.0, 1000.0);
        assert_eq!(range.normalize(1.0), 0.0);
        assert_eq!(range.normalize(1000.0), 1.0);
        let rt = range.denormalize(range.normalize(30.0));
        assert!((rt - 30.0).abs() < 1e-9);
    }

    #[test]
    fn log_defaults_to_base_ten() {
        let range = LogRange::new(0.0, 100.0);
        assert_eq!(range.base(), 10.0);
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 100.0);
    }

    #[test]
    fn log_range_crossing_zero() {
        let range = LogRange::new(-100.0, 100.0);
        assert_eq!(range.normalize(-100.0), 0.0);
        assert_eq!(range.normalize(0.0), 0.5);
        assert_eq!(range.normalize(100.0), 1.0);
        for &v in &[-100.0, -7.5, 0.0, 0.1, 64.0, 100.0] {
            let rt = range.denormalize(range.normalize(v));
            assert!(
                (rt - v).abs() <= 1e-9 * v.abs().max(1.0),
                "round trip failed for {v}: got {rt}"
            );
        }
    }

    #[test]
    fn log_custom_base_round_trips() {
        let range = LogRange::with_base(1.0, 512.0, 2.0);
        for &v in &[1.0, 8.0, 100.0, 512.0] {
            let rt = range.denormalize(range.normalize(v));
            assert!((rt - v).abs() <= 1e-9 * v.abs());
        }
    }

    #[test]
    #[should_panic(expected = "degenerate range")]
    fn log_rejects_equal_bounds() {
        let _ = LogRange::new(5.0, 5.0);
    }

    #[test]
    fn range_enum_dispatches() {
        let lin = Range::linear(0.0, 10.0);
        let log = Range::logarithmic(0.0, 10.0);
        assert_eq!(lin.normalize(5.0), 0.5);
        assert_eq!(lin.min(), 0.0);
        assert_eq!(log.max(), 10.0);
        assert_eq!(log.normalize(0.0), 0.0);
        assert_eq!(log.normalize(10.0), 1.0);
    }
}
