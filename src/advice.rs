//! Recommendation texts and urgency levels.
//!
//! Maps each assessed status onto the dashboard's three recommendation
//! tiers and produces the per-parameter advice lines and the overall
//! verdict banner shown under the charts.

use crate::eval::evaluate::{EvaluationResult, ParameterAssessment};
use crate::model::{Parameter, Status};

// ---------------------------------------------------------------------------
// Advice levels
// ---------------------------------------------------------------------------

/// Urgency tier of a recommendation, matching the dashboard's
/// success/warning/error presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceLevel {
    /// Parameter is fine; no action needed.
    Info,
    /// Slightly out of range; worth checking soon.
    Warning,
    /// Out of range far enough to endanger fish; act immediately.
    Critical,
}

/// The advice tier for a status.
///
/// `High` joins the critical tier: for these parameters an overshoot is as
/// dangerous as ammonia toxicity, while an undershoot or mildly elevated
/// ammonia only warrants a warning.
pub fn level_for(status: Status) -> AdviceLevel {
    match status {
        Status::Safe => AdviceLevel::Info,
        Status::Low | Status::Risky => AdviceLevel::Warning,
        Status::High | Status::Unsafe => AdviceLevel::Critical,
    }
}

// ---------------------------------------------------------------------------
// Per-parameter advice
// ---------------------------------------------------------------------------

/// One recommendation line for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub parameter: Parameter,
    pub value: f64,
    pub level: AdviceLevel,
    pub message: String,
}

/// Builds the recommendation line for a single assessment.
pub fn advise(assessment: &ParameterAssessment) -> Advice {
    let level = level_for(assessment.status);
    let text = match level {
        AdviceLevel::Info => "Within safe range.",
        AdviceLevel::Warning => "Slightly out of range. Check soon.",
        AdviceLevel::Critical => "Unsafe! Immediate action needed.",
    };
    Advice {
        parameter: assessment.parameter,
        value: assessment.value,
        level,
        message: format!("{} = {}: {}", assessment.parameter, assessment.value, text),
    }
}

/// Recommendation lines for every assessment, in assessment order.
pub fn advise_all(result: &EvaluationResult) -> Vec<Advice> {
    result.assessments.iter().map(advise).collect()
}

// ---------------------------------------------------------------------------
// Overall verdict banner
// ---------------------------------------------------------------------------

pub const HEALTHY_VERDICT: &str = "Excellent! Water is healthy for fish.";
pub const UNHEALTHY_VERDICT: &str =
    "Water is not suitable. Please follow the recommendations above.";

/// The verdict banner for a completed evaluation.
pub fn overall(result: &EvaluationResult) -> (AdviceLevel, &'static str) {
    if result.all_safe {
        (AdviceLevel::Info, HEALTHY_VERDICT)
    } else {
        (AdviceLevel::Critical, UNHEALTHY_VERDICT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate::evaluate;
    use crate::model::Reading;
    use crate::ranges::RangeTable;

    fn evaluated(reading: Reading) -> EvaluationResult {
        evaluate(&RangeTable::default_freshwater(), &reading).expect("should evaluate")
    }

    fn healthy_reading() -> Reading {
        Reading::new()
            .with(Parameter::Temperature, 27.0)
            .with(Parameter::DissolvedOxygen, 7.0)
            .with(Parameter::Ph, 7.2)
            .with(Parameter::Ammonia, 0.02)
    }

    #[test]
    fn test_level_mapping_covers_all_statuses() {
        assert_eq!(level_for(Status::Safe), AdviceLevel::Info);
        assert_eq!(level_for(Status::Low), AdviceLevel::Warning);
        assert_eq!(level_for(Status::Risky), AdviceLevel::Warning);
        assert_eq!(level_for(Status::High), AdviceLevel::Critical);
        assert_eq!(level_for(Status::Unsafe), AdviceLevel::Critical);
    }

    #[test]
    fn test_safe_assessment_gets_info_advice() {
        let result = evaluated(healthy_reading());
        let advice = advise_all(&result);
        assert_eq!(advice.len(), 4);
        for line in &advice {
            assert_eq!(line.level, AdviceLevel::Info);
            assert!(
                line.message.ends_with("Within safe range."),
                "unexpected message: '{}'",
                line.message
            );
        }
    }

    #[test]
    fn test_low_temperature_gets_warning_advice() {
        let result = evaluated(healthy_reading().with(Parameter::Temperature, 20.0));
        let advice = advise_all(&result);
        let temp = advice
            .iter()
            .find(|a| a.parameter == Parameter::Temperature)
            .expect("temperature advice present");
        assert_eq!(temp.level, AdviceLevel::Warning);
        assert_eq!(temp.message, "Temperature = 20: Slightly out of range. Check soon.");
    }

    #[test]
    fn test_ammonia_spike_gets_critical_advice() {
        let result = evaluated(healthy_reading().with(Parameter::Ammonia, 0.2));
        let ammonia = advise_all(&result)
            .into_iter()
            .find(|a| a.parameter == Parameter::Ammonia)
            .expect("ammonia advice present");
        assert_eq!(ammonia.level, AdviceLevel::Critical);
        assert!(ammonia.message.ends_with("Unsafe! Immediate action needed."));
    }

    #[test]
    fn test_overall_banner_follows_verdict() {
        let healthy = evaluated(healthy_reading());
        assert_eq!(overall(&healthy), (AdviceLevel::Info, HEALTHY_VERDICT));

        let unhealthy = evaluated(healthy_reading().with(Parameter::Ph, 9.0));
        assert_eq!(overall(&unhealthy), (AdviceLevel::Critical, UNHEALTHY_VERDICT));
    }
}
