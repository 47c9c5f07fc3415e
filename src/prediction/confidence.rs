//! Prediction confidence from proximity to optimal conditions.
//!
//! Only temperature, salinity, pH, and oxygen enter the score; depth,
//! turbidity, and nutrients are excluded. Unlike the abundance
//! factors these partial scores have no positive floor: a measurement far
//! from optimal contributes exactly zero. The oxygen term is a ratio that
//! can exceed 1, so the mean is capped at 1.0 before scaling to keep the
//! reported percentage inside 0..=100.

use super::abundance::{PH_OPTIMAL, SAL_OPTIMAL, TEMP_OPTIMAL};
use super::sample::EnvironmentalSample;

/// Confidence percentage in `0..=100`.
pub fn compute_confidence(sample: &EnvironmentalSample) -> u8 {
    let temperature_score = (1.0 - (sample.temperature - TEMP_OPTIMAL).abs() / 6.0).max(0.0);
    let salinity_score = (1.0 - (sample.salinity - SAL_OPTIMAL).abs() / 3.0).max(0.0);
    let ph_score = (1.0 - (sample.ph - PH_OPTIMAL).abs() / 0.4).max(0.0);
    let oxygen_score = (sample.oxygen / 7.0).max(0.0);

    let mean = (temperature_score + salinity_score + ph_score + oxygen_score) / 4.0;
    (mean.min(1.0) * 100.0).round() as u8
}
