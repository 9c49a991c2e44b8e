//! EvaluateAssessmentHandler - Loads, ranks and renders one assessment.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{Defuzzification, DomainError, StrategyWeight};
use crate::domain::vikor::{EngineSettings, VikorEngine, VikorOutcome};
use crate::ports::{AssessmentSource, ReportSink};

/// Command to evaluate an assessment.
///
/// Values set here take precedence over the strategy weight stored in the
/// assessment, which in turn takes precedence over the handler defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateAssessmentCommand {
    pub strategy_weight: Option<StrategyWeight>,
    pub defuzzification: Option<Defuzzification>,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateAssessmentResult {
    pub assessment: Assessment,
    pub outcome: VikorOutcome,
    pub report: String,
}

/// Handler for evaluating assessments.
pub struct EvaluateAssessmentHandler {
    source: Arc<dyn AssessmentSource>,
    sink: Arc<dyn ReportSink>,
    defaults: EngineSettings,
}

impl EvaluateAssessmentHandler {
    pub fn new(
        source: Arc<dyn AssessmentSource>,
        sink: Arc<dyn ReportSink>,
        defaults: EngineSettings,
    ) -> Self {
        Self {
            source,
            sink,
            defaults,
        }
    }

    /// Engine settings for `assessment` under `cmd`.
    pub fn resolve_settings(
        &self,
        cmd: &EvaluateAssessmentCommand,
        assessment: &Assessment,
    ) -> EngineSettings {
        let strategy_weight = cmd
            .strategy_weight
            .or(assessment.strategy_weight())
            .unwrap_or(self.defaults.strategy_weight);
        let defuzzification = cmd
            .defuzzification
            .unwrap_or(self.defaults.defuzzification);

        EngineSettings::new(strategy_weight, defuzzification)
    }

    pub fn handle(
        &self,
        cmd: EvaluateAssessmentCommand,
    ) -> Result<EvaluateAssessmentResult, DomainError> {
        // 1. Load
        let assessment = self.source.load()?;
        info!(
            source = %self.source.describe(),
            alternatives = assessment.alternative_count(),
            criteria = assessment.criterion_count(),
            experts = assessment.expert_count(),
            "assessment loaded"
        );

        // 2. Validate dimensions
        assessment.validate()?;

        // 3. Compute
        let settings = self.resolve_settings(&cmd, &assessment);
        debug!(
            strategy_weight = settings.strategy_weight.value(),
            defuzzification = %settings.defuzzification,
            "engine settings resolved"
        );
        let outcome = VikorEngine::new(settings).compute(&assessment);
        info!(
            best = ?outcome.best_alternative().map(|a| a + 1),
            accepted = ?outcome.compromise.accepted_set(),
            "ranking computed"
        );

        // 4. Render
        let report = self.sink.render(&outcome)?;

        Ok(EvaluateAssessmentResult {
            assessment,
            outcome,
            report,
        })
    }
}
