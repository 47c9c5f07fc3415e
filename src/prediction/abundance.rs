//! Fish abundance prediction from environmental deviation factors.
//!
//! Each of the seven measurements contributes a multiplicative factor over
//! a peak-abundance baseline. Four dimensions (temperature, salinity, pH,
//! depth) use a symmetric deviation shape: 1.0 at the reference optimum,
//! decaying linearly with a per-dimension sensitivity and clamping at a
//! per-dimension floor. The other three (oxygen, turbidity, nutrients) are
//! monotonic ratios with no reference optimum at all: only the divisor
//! matters, and oxygen/nutrients are unbounded above 1.
//!
//! Invariant: every factor stays strictly positive, so one extreme reading
//! degrades the estimate without zeroing it.

use super::sample::EnvironmentalSample;

/// Peak abundance when every factor sits at 1.0.
pub const BASE_FISH_COUNT: f64 = 1600.0;

/// Reference optima for the symmetric dimensions.
pub const TEMP_OPTIMAL: f64 = 26.0;
pub const SAL_OPTIMAL: f64 = 34.5;
pub const PH_OPTIMAL: f64 = 8.1;
pub const DEPTH_OPTIMAL: f64 = 25.0;

/// Symmetric deviation factor: 1.0 at `optimal`, linear decay at `1/scale`
/// per unit, clamped at `floor`.
#[inline]
fn deviation_factor(value: f64, optimal: f64, scale: f64, floor: f64) -> f64 {
    (1.0 - (value - optimal).abs() / scale).max(floor)
}

#[inline]
pub fn temperature_factor(temperature: f64) -> f64 {
    deviation_factor(temperature, TEMP_OPTIMAL, 5.0, 0.1)
}

#[inline]
pub fn salinity_factor(salinity: f64) -> f64 {
    deviation_factor(salinity, SAL_OPTIMAL, 2.0, 0.2)
}

#[inline]
pub fn ph_factor(ph: f64) -> f64 {
    deviation_factor(ph, PH_OPTIMAL, 0.3, 0.3)
}

#[inline]
pub fn depth_factor(depth: f64) -> f64 {
    deviation_factor(depth, DEPTH_OPTIMAL, 20.0, 0.3)
}

/// More oxygen is better; saturates below at 0.2, no ceiling.
#[inline]
pub fn oxygen_factor(oxygen: f64) -> f64 {
    (oxygen / 7.0).max(0.2)
}

/// Less turbidity is better.
#[inline]
pub fn turbidity_factor(turbidity: f64) -> f64 {
    (1.0 - turbidity / 8.0).max(0.2)
}

/// More nutrients are better; no ceiling.
#[inline]
pub fn nutrient_factor(nutrient_level: f64) -> f64 {
    (nutrient_level / 50.0).max(0.1)
}

/// Predicted fish count for one sample. Sub-optimal dimensions compound
/// multiplicatively instead of averaging out.
pub fn predict_fish_count(sample: &EnvironmentalSample) -> u32 {
    let product = temperature_factor(sample.temperature)
        * salinity_factor(sample.salinity)
        * ph_factor(sample.ph)
        * oxygen_factor(sample.oxygen)
        * depth_factor(sample.depth)
        * turbidity_factor(sample.turbidity)
        * nutrient_factor(sample.nutrient_level);

    (BASE_FISH_COUNT * product).round() as u32
}
