//! Batch scenario prediction for trend analysis.
//!
//! Runs the abundance chain over an ordered scenario list and aggregates
//! a fish-count summary. The trend path reports abundance-derived
//! diversity only (no stability adjustment) and computes neither
//! confidence nor advice; those are single-scenario outputs.

use super::abundance::predict_fish_count;
use super::diversity::{base_diversity, predict_biomass, round1};
use super::sample::EnvironmentalSample;
use crate::error::PredictionError;

/// Prediction for one scenario within a batch. `scenario` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioPrediction {
    pub scenario: usize,
    pub input: EnvironmentalSample,
    pub fish_count: u32,
    pub species_diversity: f64,
    pub biomass: u32,
}

/// Fish-count statistics across the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendSummary {
    pub total_scenarios: usize,
    pub avg_fish_count: u32,
    pub max_fish_count: u32,
    pub min_fish_count: u32,
}

/// Full trend-analysis result: per-scenario predictions plus summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub trends: Vec<ScenarioPrediction>,
    pub summary: TrendSummary,
}

/// Predict every scenario and summarize.
///
/// Scenarios are independent; order is preserved. An empty list is
/// rejected up front so the summary statistics are always defined.
pub fn predict_trends(scenarios: &[EnvironmentalSample]) -> Result<TrendReport, PredictionError> {
    if scenarios.is_empty() {
        return Err(PredictionError::EmptyBatch);
    }

    let trends: Vec<ScenarioPrediction> = scenarios
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let fish_count = predict_fish_count(sample);
            let species_diversity = round1(base_diversity(fish_count));
            let biomass = predict_biomass(fish_count, species_diversity);
            ScenarioPrediction {
                scenario: index + 1,
                input: *sample,
                fish_count,
                species_diversity,
                biomass,
            }
        })
        .collect();

    let total: u64 = trends.iter().map(|t| u64::from(t.fish_count)).sum();
    let summary = TrendSummary {
        total_scenarios: trends.len(),
        avg_fish_count: (total as f64 / trends.len() as f64).round() as u32,
        max_fish_count: trends.iter().map(|t| t.fish_count).max().unwrap_or(0),
        min_fish_count: trends.iter().map(|t| t.fish_count).min().unwrap_or(0),
    };

    Ok(TrendReport { trends, summary })
}
