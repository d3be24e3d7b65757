//! EEG frequency bands and spectral measures
//!
//! Defines the five canonical frequency bands and the two spectral measures
//! built on them: per-sample band power and ERD/ERS percent change between
//! the early and late halves of a recording.
//!
//! ERD (desynchronization, power drop) indicates cognitive engagement; ERS
//! (synchronization, power rise) indicates relaxation in alpha and alertness
//! in beta. Which reading applies is decided downstream in fusion, not here.

use serde::{Deserialize, Serialize};

use crate::types::SpectralSample;

/// A named frequency range in Hz; the upper bound is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    pub min_hz: f64,
    pub max_hz: f64,
}

impl FrequencyBand {
    pub fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= self.min_hz && freq_hz < self.max_hz
    }
}

pub const DELTA: FrequencyBand = FrequencyBand { min_hz: 0.5, max_hz: 4.0 };
pub const THETA: FrequencyBand = FrequencyBand { min_hz: 4.0, max_hz: 8.0 };
pub const ALPHA: FrequencyBand = FrequencyBand { min_hz: 8.0, max_hz: 13.0 };
pub const BETA: FrequencyBand = FrequencyBand { min_hz: 13.0, max_hz: 30.0 };
pub const GAMMA: FrequencyBand = FrequencyBand { min_hz: 30.0, max_hz: 100.0 };

/// The canonical bands, in ascending frequency order.
pub const CANONICAL_BANDS: [(&str, FrequencyBand); 5] = [
    ("delta", DELTA),
    ("theta", THETA),
    ("alpha", ALPHA),
    ("beta", BETA),
    ("gamma", GAMMA),
];

/// ERD/ERS percent changes for one band. At most one side is nonzero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ErdErs {
    /// Percent power drop, late half vs early half
    pub erd: f64,
    /// Percent power rise, late half vs early half
    pub ers: f64,
}

/// Per-sample mean power across the frequency bins inside `band`.
///
/// Bin labels that do not parse as numbers are excluded; a sample with no
/// bins in range contributes 0.
pub fn band_power(samples: &[SpectralSample], band: FrequencyBand) -> Vec<f64> {
    samples
        .iter()
        .map(|sample| {
            let mut total = 0.0;
            let mut count = 0u32;

            for (label, power) in &sample.frequencies {
                if let Ok(freq) = label.parse::<f64>() {
                    if band.contains(freq) {
                        total += power;
                        count += 1;
                    }
                }
            }

            if count > 0 {
                total / f64::from(count)
            } else {
                0.0
            }
        })
        .collect()
}

/// Event-related desynchronization/synchronization for one band.
///
/// The band-power series is split at its midpoint into an early (baseline)
/// and a late segment, and the percent change of the late mean against the
/// early mean is reported on exactly one side. Fewer than 4 samples, or a
/// zero baseline, yields {0, 0}.
pub fn erd_ers(samples: &[SpectralSample], band: FrequencyBand) -> ErdErs {
    if samples.len() < 4 {
        return ErdErs::default();
    }

    let powers = band_power(samples, band);
    let midpoint = powers.len() / 2;
    let early_mean = mean(&powers[..midpoint]);
    let late_mean = mean(&powers[midpoint..]);

    if early_mean == 0.0 {
        return ErdErs::default();
    }

    let change = (late_mean - early_mean) / early_mean * 100.0;

    if change < 0.0 {
        ErdErs { erd: change.abs(), ers: 0.0 }
    } else if change > 0.0 {
        ErdErs { erd: 0.0, ers: change }
    } else {
        ErdErs::default()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn sample(bins: &[(&str, f64)]) -> SpectralSample {
        let frequencies: HashMap<String, f64> = bins
            .iter()
            .map(|(label, power)| ((*label).to_string(), *power))
            .collect();
        SpectralSample {
            timestamp: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            frequencies,
        }
    }

    fn alpha_series(powers: &[f64]) -> Vec<SpectralSample> {
        powers
            .iter()
            .map(|p| sample(&[("10.0", *p)]))
            .collect()
    }

    #[test]
    fn test_band_bounds_half_open() {
        assert!(ALPHA.contains(8.0));
        assert!(ALPHA.contains(12.9));
        assert!(!ALPHA.contains(13.0));
        assert!(!BETA.contains(12.9));
        assert!(BETA.contains(13.0));
    }

    #[test]
    fn test_band_power_averages_in_range_bins() {
        let samples = vec![sample(&[("8.0", 4.0), ("10.0", 6.0), ("20.0", 100.0)])];
        let powers = band_power(&samples, ALPHA);
        assert_eq!(powers, vec![5.0]);
    }

    #[test]
    fn test_band_power_no_bins_in_range_is_zero() {
        let samples = vec![sample(&[("2.0", 9.0), ("40.0", 9.0)])];
        assert_eq!(band_power(&samples, ALPHA), vec![0.0]);
    }

    #[test]
    fn test_band_power_skips_unparseable_labels() {
        let samples = vec![sample(&[("alpha-peak", 50.0), ("9.0", 7.0)])];
        assert_eq!(band_power(&samples, ALPHA), vec![7.0]);
    }

    #[test]
    fn test_band_power_nonnegative_for_nonnegative_input() {
        let samples = vec![
            sample(&[("8.5", 0.0), ("9.5", 3.0)]),
            sample(&[("8.5", 1.0)]),
        ];
        assert!(band_power(&samples, ALPHA).iter().all(|p| *p >= 0.0));
    }

    #[test]
    fn test_erd_on_power_drop() {
        // Alpha power falls from 10 to 5: 50% desynchronization
        let samples = alpha_series(&[10.0, 10.0, 10.0, 5.0, 5.0, 5.0]);
        let result = erd_ers(&samples, ALPHA);
        assert_eq!(result.erd, 50.0);
        assert_eq!(result.ers, 0.0);
    }

    #[test]
    fn test_ers_on_power_rise() {
        let samples = alpha_series(&[4.0, 4.0, 6.0, 6.0]);
        let result = erd_ers(&samples, ALPHA);
        assert_eq!(result.erd, 0.0);
        assert_eq!(result.ers, 50.0);
    }

    #[test]
    fn test_flat_series_yields_zeroes() {
        let samples = alpha_series(&[3.0, 3.0, 3.0, 3.0]);
        assert_eq!(erd_ers(&samples, ALPHA), ErdErs::default());
    }

    #[test]
    fn test_fewer_than_four_samples_degenerate() {
        let samples = alpha_series(&[10.0, 1.0, 1.0]);
        assert_eq!(erd_ers(&samples, ALPHA), ErdErs::default());
    }

    #[test]
    fn test_zero_baseline_degenerate() {
        let samples = alpha_series(&[0.0, 0.0, 5.0, 5.0]);
        assert_eq!(erd_ers(&samples, ALPHA), ErdErs::default());
    }

    #[test]
    fn test_odd_length_splits_at_floor_midpoint() {
        // midpoint = 2: early [10, 10], late [10, 4, 4] -> mean 6, change -40%
        let samples = alpha_series(&[10.0, 10.0, 10.0, 4.0, 4.0]);
        let result = erd_ers(&samples, ALPHA);
        assert!((result.erd - 40.0).abs() < 1e-9);
        assert_eq!(result.ers, 0.0);
    }

    #[test]
    fn test_erd_ers_mutually_exclusive() {
        for powers in [
            vec![10.0, 10.0, 5.0, 5.0],
            vec![5.0, 5.0, 10.0, 10.0],
            vec![7.0, 7.0, 7.0, 7.0],
        ] {
            let result = erd_ers(&alpha_series(&powers), ALPHA);
            assert!(!(result.erd > 0.0 && result.ers > 0.0));
        }
    }
}
