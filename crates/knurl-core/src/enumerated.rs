//! Enumerated parameter over an ordered set of named variants.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ParamError;

/// A parameter whose value is one of `N` named variants.
///
/// Declaration order is meaningful: variant `i` sits at normalized position
/// `i / (N - 1)`, so the first variant is 0.0 and the last is 1.0.
///
/// The conversion contract is deliberately asymmetric. [`normalize`] is
/// strict — it rejects unknown strings, because those come from program
/// logic and should be well-formed. [`denormalize`] is lenient — it clamps
/// its input to `[0, 1]`, because positions come from pointer arithmetic
/// that routinely drifts a little past the ends of a drag.
///
/// [`normalize`]: Self::normalize
/// [`denormalize`]: Self::denormalize
///
/// # Example
///
/// ```rust
/// use knurl_core::EnumParam;
///
/// let param = EnumParam::new(["red", "green", "blue"]);
/// assert_eq!(param.normalize("green").unwrap(), 0.5);
/// assert_eq!(param.denormalize(0.74), "green");
/// assert_eq!(param.denormalize(1.5), "blue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumParam {
    variants: Vec<String>,
}

impl EnumParam {
    /// Create an enumerated parameter from an ordered list of variants.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two variants are given — a single variant has no
    /// usable `[0, 1]` mapping.
    pub fn new<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        assert!(
            variants.len() >= 2,
            "enumerated parameter needs at least 2 variants, got {}",
            variants.len()
        );
        Self { variants }
    }

    /// The declared variants, in order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Number of declared variants (always ≥ 2).
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Map a variant name to its normalized position `index / (N - 1)`.
    ///
    /// Strict: unknown strings return [`ParamError::InvalidVariant`].
    pub fn normalize(&self, value: &str) -> Result<f64, ParamError> {
        let index = self
            .variants
            .iter()
            .position(|v| v == value)
            .ok_or_else(|| ParamError::InvalidVariant {
                value: String::from(value),
            })?;
        Ok(index as f64 / (self.variants.len() - 1) as f64)
    }

    /// Map a position to a variant, clamping the position to `[0, 1]` first.
    ///
    /// Never fails: gesture-derived positions drift outside the interval and
    /// saturate to the first or last variant.
    pub fn denormalize(&self, position: f64) -> &str {
        &self.variants[self.denormalize_index(position)]
    }

    /// Like [`denormalize`](Self::denormalize), but strict about the input
    /// interval: positions outside `[0, 1]` return
    /// [`ParamError::RangeViolation`] instead of clamping.
    pub fn try_denormalize(&self, position: f64) -> Result<&str, ParamError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(ParamError::RangeViolation { position });
        }
        Ok(self.denormalize(position))
    }

    /// Index of the variant a position denormalizes to.
    ///
    /// The index clamp guards the top boundary: float error in
    /// `position * (N - 1)` must never produce index `N`.
    pub fn denormalize_index(&self, position: f64) -> usize {
        let steps = self.variants.len() - 1;
        let clamped = position.clamp(0.0, 1.0);
        let mut index = libm::floor(clamped * steps as f64) as usize;
        // The product can round just under an exact snap position (first hit:
        // 15/22 * 22 == 14.999…998), which would break the exact variant
        // round trip. Correct against the true rational bucket boundary.
        if index < steps && (index + 1) as f64 / steps as f64 <= clamped {
            index += 1;
        }
        index.min(steps)
    }

    /// Snap a position onto the exact normalized position of the variant it
    /// denormalizes to.
    pub fn quantize(&self, position: f64) -> f64 {
        let steps = self.variants.len() - 1;
        self.denormalize_index(position) as f64 / steps as f64
    }

    /// Normalized positions of every variant, in declaration order.
    pub fn snap_points(&self) -> Vec<f64> {
        let steps = (self.variants.len() - 1) as f64;
        (0..self.variants.len())
            .map(|i| i as f64 / steps)
            .collect()
    }

    /// Distance within which a gesture rounds to a snap point.
    pub fn snap_threshold(&self) -> f64 {
        1.0 / (self.variants.len() - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;

    fn rgb() -> EnumParam {
        EnumParam::new(["red", "green", "blue"])
    }

    #[test]
    fn normalizes_each_variant() {
        let param = rgb();
        assert_eq!(param.normalize("red").unwrap(), 0.0);
        assert_eq!(param.normalize("green").unwrap(), 0.5);
        assert_eq!(param.normalize("blue").unwrap(), 1.0);
    }

    #[test]
    fn rejects_unknown_variant() {
        let param = rgb();
        assert_eq!(
            param.normalize("yellow"),
            Err(ParamError::InvalidVariant {
                value: "yellow".to_string()
            })
        );
    }

    #[test]
    fn denormalizes_exact_positions() {
        let param = rgb();
        assert_eq!(param.denormalize(0.0), "red");
        assert_eq!(param.denormalize(0.5), "green");
        assert_eq!(param.denormalize(1.0), "blue");
    }

    #[test]
    fn denormalizes_near_boundaries() {
        let param = rgb();
        assert_eq!(param.denormalize(0.24), "red");
        assert_eq!(param.denormalize(0.74), "green");
    }

    #[test]
    fn denormalize_clamps_out_of_range_input() {
        let param = rgb();
        assert_eq!(param.denormalize(-0.5), "red");
        assert_eq!(param.denormalize(1.5), "blue");
    }

    #[test]
    fn try_denormalize_is_strict() {
        let param = rgb();
        assert_eq!(param.try_denormalize(0.5), Ok("green"));
        assert_eq!(
            param.try_denormalize(1.5),
            Err(ParamError::RangeViolation { position: 1.5 })
        );
        assert_eq!(
            param.try_denormalize(-0.1),
            Err(ParamError::RangeViolation { position: -0.1 })
        );
    }

    #[test]
    fn round_trips_every_variant() {
        let param = rgb();
        for variant in param.variants() {
            let position = param.normalize(variant).unwrap();
            assert_eq!(param.denormalize(position), variant);
        }
    }

    #[test]
    fn snap_points_and_threshold() {
        let param = rgb();
        assert_eq!(param.snap_points(), vec![0.0, 0.5, 1.0]);
        assert_eq!(param.snap_threshold(), 0.5);

        let pair = EnumParam::new(["off", "on"]);
        assert_eq!(pair.snap_points(), vec![0.0, 1.0]);
        assert_eq!(pair.snap_threshold(), 1.0);
    }

    #[test]
    fn quantize_snaps_to_variant_positions() {
        let param = rgb();
        assert_eq!(param.quantize(0.24), 0.0);
        assert_eq!(param.quantize(0.74), 0.5);
        assert_eq!(param.quantize(1.5), 1.0);
        assert_eq!(param.quantize(-0.2), 0.0);
    }

    #[test]
    fn round_trips_stay_exact_for_large_variant_counts() {
        // 23 variants (22 steps) is the first count where the uncorrected
        // floor lands one bucket low: 15/22 * 22 rounds to 14.999…998.
        let param = EnumParam::new((0..23).map(|i| format!("v{i}")));
        for (i, variant) in param.variants().iter().enumerate() {
            let position = param.normalize(variant).unwrap();
            assert_eq!(param.denormalize_index(position), i);
            assert_eq!(param.denormalize(position), variant);
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let param = EnumParam::new(["zeta", "alpha", "mid"]);
        assert_eq!(param.normalize("zeta").unwrap(), 0.0);
        assert_eq!(param.normalize("alpha").unwrap(), 0.5);
        assert_eq!(param.variants()[2], "mid");
    }

    #[test]
    #[should_panic(expected = "at least 2 variants")]
    fn rejects_single_variant() {
        let _ = EnumParam::new(["only"]);
    }
}
