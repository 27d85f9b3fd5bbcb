//! Boolean (toggle) parameter.

/// A two-state parameter: `false` at position 0.0, `true` at 1.0.
///
/// Carries no data; the type exists so toggles go through the same
/// normalize/denormalize surface as every other parameter kind.
///
/// # Example
///
/// ```rust
/// use knurl_core::BoolParam;
///
/// let param = BoolParam::new();
/// assert_eq!(param.normalize(true), 1.0);
/// assert!(!param.denormalize(0.5));
/// assert!(param.denormalize(0.51));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoolParam;

impl BoolParam {
    /// Positions a dragging UI should lock to.
    pub const SNAP_POINTS: [f64; 2] = [0.0, 1.0];

    /// Distance within which a gesture rounds to a snap point.
    pub const SNAP_THRESHOLD: f64 = 0.5;

    /// Create a boolean parameter.
    pub fn new() -> Self {
        Self
    }

    /// `true` maps to 1.0, `false` to 0.0.
    #[inline]
    pub fn normalize(&self, value: bool) -> f64 {
        if value { 1.0 } else { 0.0 }
    }

    /// Positions strictly above 0.5 map to `true`; 0.5 itself is `false`.
    #[inline]
    pub fn denormalize(&self, position: f64) -> bool {
        position > 0.5
    }
}
