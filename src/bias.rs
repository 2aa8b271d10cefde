//! Empirical bias model of the 64-bit estimator.
//!
//! The relationship between raw estimate and bias is not monotone enough for a plain
//! binary lookup, so the bias of a raw estimate is interpolated as the mean bias of its
//! `k` nearest raw estimate samples (`k = 6` by default).

use crate::bias_data::{BIAS_DATA, RAW_ESTIMATE_DATA, THRESHOLD};

/// Smallest precision covered by the bias tables
pub const MIN_PRECISION: u32 = 4;
/// Largest precision covered by the bias tables
pub const MAX_PRECISION: u32 = 18;
/// Default number of neighbors used for interpolation
pub const DEFAULT_NEIGHBORS: usize = 6;

/// Bias tables for one precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiasModel {
    raw_estimates: &'static [f64],
    biases: &'static [f64],
    threshold: f64,
}

impl BiasModel {
    /// Returns the model for `precision`, if it is in `[MIN_PRECISION, MAX_PRECISION]`.
    pub fn for_precision(precision: u32) -> Option<Self> {
        let idx = table_index(precision)?;
        Some(Self {
            raw_estimates: RAW_ESTIMATE_DATA[idx],
            biases: BIAS_DATA[idx],
            threshold: THRESHOLD[idx],
        })
    }

    /// Linear counting estimates up to this value are trusted as is
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Raw estimate samples
    pub fn raw_estimates(&self) -> &'static [f64] {
        self.raw_estimates
    }

    /// Bias samples, parallel to `raw_estimates`
    pub fn biases(&self) -> &'static [f64] {
        self.biases
    }

    /// Interpolate the bias of `raw` from its `k` nearest samples.
    ///
    /// Candidates are taken from a window of `4k` samples centered on the insertion
    /// point of `raw`. The window is clamped to the table bounds, so near the edges it
    /// is shifted inwards rather than wrapped. Distance ties are broken by sample index.
    pub fn estimate_bias(&self, raw: f64, k: usize) -> f64 {
        let len = self.raw_estimates.len();
        if len == 0 || k == 0 {
            return 0.0;
        }
        let insertion = self.raw_estimates.partition_point(|&x| x <= raw);
        let start = insertion.saturating_sub(2 * k);
        let end = (insertion + 2 * k).min(len);

        let mut candidates: Vec<(f64, usize)> = (start..end)
            .map(|i| ((raw - self.raw_estimates[i]).powi(2), i))
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let nearest = &candidates[..k.min(candidates.len())];
        let sum: f64 = nearest.iter().map(|&(_, i)| self.biases[i]).sum();
        sum / nearest.len() as f64
    }

    /// Raw estimate minus its interpolated bias
    #[inline]
    pub fn correct(&self, raw: f64, k: usize) -> f64 {
        raw - self.estimate_bias(raw, k)
    }
}

/// Linear counting threshold for `precision`, if bias tables exist for it
pub fn threshold(precision: u32) -> Option<f64> {
    table_index(precision).map(|idx| THRESHOLD[idx])
}

#[inline]
fn table_index(precision: u32) -> Option<usize> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Some((precision - MIN_PRECISION) as usize)
    } else {
        None
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3 => None; "below range")]
    #[test_case(4 => Some(10.0); "p4")]
    #[test_case(8 => Some(220.0); "p8")]
    #[test_case(12 => Some(3100.0); "p12")]
    #[test_case(17 => Some(120000.0); "p17")]
    #[test_case(18 => Some(350000.0); "p18")]
    #[test_case(19 => None; "above range")]
    fn test_threshold(precision: u32) -> Option<f64> {
        threshold(precision)
    }

    #[test]
    fn test_tables_are_parallel() {
        for precision in MIN_PRECISION..=MAX_PRECISION {
            let model = BiasModel::for_precision(precision).unwrap();
            assert_eq!(model.raw_estimates().len(), model.biases().len());
            assert!(model.raw_estimates().len() >= 4 * DEFAULT_NEIGHBORS);
            // samples cover cardinalities up to 5 * 2^p
            let m = (1u64 << precision) as f64;
            let last = *model.raw_estimates().last().unwrap();
            assert!(last > 4.5 * m && last < 5.5 * m, "p = {precision}: {last}");
        }
    }

    #[test]
    fn test_bias_is_mean_of_nearest_samples() {
        let model = BiasModel {
            raw_estimates: &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
            biases: &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
            threshold: 0.0,
        };
        // nearest two samples of 4.4 are 4 and 5
        assert_eq!(model.estimate_bias(4.4, 2), 45.0);
        // exact hit ties are broken towards lower index: 5, 4, 6
        assert_eq!(model.estimate_bias(5.0, 3), 50.0);
        assert_eq!(model.correct(5.0, 3), -45.0);
    }

    #[test]
    fn test_window_is_clamped_at_table_start() {
        // A wrapping window would reach the large tail samples.
        let model = BiasModel {
            raw_estimates: &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0, 100.0],
            biases: &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1000.0, 1000.0],
            threshold: 0.0,
        };
        assert_eq!(model.estimate_bias(0.5, 2), 1.0);
        assert_eq!(model.estimate_bias(1.5, 3), 1.0);
    }

    #[test]
    fn test_window_is_clamped_at_table_end() {
        let model = BiasModel {
            raw_estimates: &[1.0, 2.0, 3.0, 4.0],
            biases: &[4.0, 3.0, 2.0, 1.0],
            threshold: 0.0,
        };
        assert_eq!(model.estimate_bias(1000.0, 2), 1.5);
        // fewer samples than neighbors: average over what exists
        assert_eq!(model.estimate_bias(1000.0, 6), 2.5);
    }

    #[test]
    fn test_bias_uses_absolute_sample_index() {
        let model = BiasModel {
            raw_estimates: &[
                0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0,
            ],
            biases: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 7.0, 7.0],
            threshold: 0.0,
        };
        assert_eq!(model.estimate_bias(105.0, 2), 7.0);
    }

    #[test]
    fn test_real_tables_recover_sampled_cardinality() {
        // Samples were taken at evenly spaced cardinalities in [0, 5m].
        for precision in MIN_PRECISION..=MAX_PRECISION {
            let model = BiasModel::for_precision(precision).unwrap();
            let m = (1u64 << precision) as f64;
            let samples = model.raw_estimates();
            let step = 5.0 * m / (samples.len() - 1) as f64;
            for (j, &raw) in samples.iter().enumerate().skip(10).take(samples.len() - 20) {
                let corrected = model.correct(raw, DEFAULT_NEIGHBORS);
                let cardinality = j as f64 * step;
                assert!(
                    (corrected - cardinality).abs() < 0.025 * m,
                    "p = {precision}, j = {j}: {corrected} vs {cardinality}"
                );
            }
        }
    }
}
