//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::AssessmentOutcome;
use serde_json::json;

/// JSON reporter for programmatic integration
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        outcome: &AssessmentOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let envelope = json!({
            "tool": "skillscope",
            "version": config.metadata.tool_version,
            "generated_at": config.metadata.generated_at,
            "subject": outcome.dashboard.subject,
            "report": outcome,
        });

        serde_json::to_string_pretty(&envelope)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResponseSet;
    use crate::scoring::AssessmentScorer;

    #[test]
    fn envelope_carries_scores_and_dashboard() {
        let responses: ResponseSet = [(1, 1)].into_iter().collect();
        let outcome = AssessmentScorer::standard().outcome(&responses, "jane");
        let report = JsonReporter::new()
            .generate(&outcome, &ReportConfig::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["tool"], "skillscope");
        assert_eq!(value["subject"], "jane");
        assert!(value["report"]["scores"]["LD"].is_number());
        assert!(value["report"]["dashboard"]["overall_score"].is_number());
    }
}
