//! Qualitative impact findings and management recommendations.
//!
//! Threshold rules evaluated independently: a sample can trigger none,
//! one, or several. Messages are emitted in rule order and are part of
//! the API contract, so the wording is fixed.

use super::sample::EnvironmentalSample;
use super::Prediction;

/// Environmental stress findings for one sample.
pub fn environmental_impacts(sample: &EnvironmentalSample) -> Vec<String> {
    let mut impacts = Vec::new();

    if sample.temperature > 29.0 {
        impacts.push("High temperature may stress marine life".to_string());
    }
    if sample.temperature < 24.0 {
        impacts.push("Low temperature may reduce metabolic activity".to_string());
    }
    if sample.salinity > 36.0 {
        impacts.push("High salinity may limit species diversity".to_string());
    }
    if sample.ph < 7.8 {
        impacts.push(
            "Ocean acidification detected - critical for shell-forming species".to_string(),
        );
    }
    if sample.oxygen < 5.0 {
        impacts.push("Low oxygen levels may create hypoxic conditions".to_string());
    }
    if sample.turbidity > 5.0 {
        impacts.push("High turbidity may reduce photosynthesis and feeding".to_string());
    }

    impacts
}

/// Management recommendations driven by the prediction itself.
pub fn recommendations(prediction: &Prediction) -> Vec<String> {
    let mut recs = Vec::new();

    if prediction.fish_count < 800 {
        recs.push("Consider environmental restoration measures".to_string());
    }
    if prediction.species_diversity < 8.0 {
        recs.push("Implement biodiversity conservation programs".to_string());
    }
    if prediction.confidence < 70 {
        recs.push("Environmental conditions are suboptimal - monitor closely".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvironmentalSample {
        EnvironmentalSample {
            temperature: 26.0,
            salinity: 34.5,
            ph: 8.1,
            oxygen: 6.5,
            depth: 25.0,
            turbidity: 3.0,
            nutrient_level: 40.0,
        }
    }

    #[test]
    fn benign_sample_triggers_no_impacts() {
        assert!(environmental_impacts(&sample()).is_empty());
    }

    #[test]
    fn only_the_crossed_threshold_fires() {
        let warm = EnvironmentalSample {
            temperature: 30.0,
            salinity: 30.0,
            ph: 8.0,
            oxygen: 6.0,
            depth: 25.0,
            turbidity: 2.0,
            nutrient_level: 40.0,
        };
        assert_eq!(
            environmental_impacts(&warm),
            vec!["High temperature may stress marine life"]
        );
    }

    #[test]
    fn multiple_thresholds_stack_in_rule_order() {
        let mut degraded = sample();
        degraded.temperature = 22.0;
        degraded.ph = 7.5;
        degraded.oxygen = 3.0;
        degraded.turbidity = 6.0;
        let impacts = environmental_impacts(&degraded);
        assert_eq!(
            impacts,
            vec![
                "Low temperature may reduce metabolic activity",
                "Ocean acidification detected - critical for shell-forming species",
                "Low oxygen levels may create hypoxic conditions",
                "High turbidity may reduce photosynthesis and feeding",
            ]
        );
    }

    #[test]
    fn thresholds_are_exclusive_at_the_boundary() {
        let mut boundary = sample();
        boundary.temperature = 29.0;
        boundary.turbidity = 5.0;
        assert!(environmental_impacts(&boundary).is_empty());
    }

    #[test]
    fn healthy_prediction_needs_no_recommendations() {
        let prediction = Prediction {
            fish_count: 1000,
            species_diversity: 8.3,
            biomass: 9960,
            confidence: 100,
        };
        assert!(recommendations(&prediction).is_empty());
    }

    #[test]
    fn weak_prediction_collects_all_three_recommendations() {
        let prediction = Prediction {
            fish_count: 400,
            species_diversity: 4.0,
            biomass: 1920,
            confidence: 45,
        };
        assert_eq!(
            recommendations(&prediction),
            vec![
                "Consider environmental restoration measures",
                "Implement biodiversity conservation programs",
                "Environmental conditions are suboptimal - monitor closely",
            ]
        );
    }
}
