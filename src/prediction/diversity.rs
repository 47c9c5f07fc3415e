//! Species diversity and biomass, derived from predicted abundance.
//!
//! Diversity tracks abundance linearly between a minimum-viable floor and
//! a maximum-observed cap, then shrinks under temperature or pH
//! instability: unstable water supports fewer niches even when raw
//! abundance is high. Biomass is purely derived from count × diversity.

use super::abundance::{PH_OPTIMAL, TEMP_OPTIMAL};

/// Minimum-viable species count.
pub const DIVERSITY_MIN: f64 = 3.0;

/// Maximum-observed species count.
pub const DIVERSITY_MAX: f64 = 15.0;

/// Average per-species biomass contribution (kg).
const BIOMASS_PER_SPECIES_UNIT: f64 = 1.2;

/// Round to one decimal place.
#[inline]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Abundance-scaled diversity before stability adjustment, in `[3, 15]`.
#[inline]
pub fn base_diversity(fish_count: u32) -> f64 {
    (f64::from(fish_count) / 120.0).clamp(DIVERSITY_MIN, DIVERSITY_MAX)
}

/// Stability-adjusted species diversity, rounded to one decimal.
pub fn predict_species_diversity(fish_count: u32, temperature: f64, ph: f64) -> f64 {
    let temp_stability = (1.0 - (temperature - TEMP_OPTIMAL).abs() / 8.0).max(0.5);
    let ph_stability = (1.0 - (ph - PH_OPTIMAL).abs() / 0.4).max(0.6);
    round1(base_diversity(fish_count) * temp_stability * ph_stability)
}

/// Standing biomass estimate (kg), rounded to a whole number.
pub fn predict_biomass(fish_count: u32, diversity: f64) -> u32 {
    (f64::from(fish_count) * diversity * BIOMASS_PER_SPECIES_UNIT).round() as u32
}
