mod locale;
mod rules;
mod signals;

pub use rules::{Rule, RuleText, ScorePenalty, SuggestionTemplate};
pub use signals::ProjectSignals;
pub(crate) use signals::{DEFAULT_FLOORS, DEFAULT_SEISMIC_ZONE};

use super::domain::{FindingCategory, ProjectData, ScoreCategory, Severity, WizardStep};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator that runs the advisory rule catalog against a project snapshot.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    rules: Vec<Rule>,
}

impl PredictionEngine {
    pub fn standard() -> Self {
        Self {
            rules: rules::standard_rules(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    pub fn evaluate(&self, data: &ProjectData) -> PredictionReport {
        let signals = ProjectSignals::from_project(data);
        self.evaluate_signals(&signals)
    }

    pub fn evaluate_signals(&self, signals: &ProjectSignals) -> PredictionReport {
        let mut predictions = Vec::new();
        let mut suggestions = Vec::new();
        let mut scores = CategoryScores::default();

        for rule in self.rules.iter().filter(|rule| (rule.applies)(signals)) {
            debug!(rule = rule.key, severity = rule.severity.label(), "advisory rule triggered");

            predictions.push(Prediction {
                severity: rule.severity,
                category: rule.category,
                title: rule.title.render(signals),
                detail: rule.detail.render(signals),
                step: rule.step,
            });
            suggestions.extend(rule.suggestions.iter().map(Suggestion::from));
            for penalty in &rule.penalties {
                scores.deduct(penalty.category, penalty.points);
            }
        }

        let scores = scores.clamped();
        debug!(
            predictions = predictions.len(),
            suggestions = suggestions.len(),
            energy = scores.energy,
            cost = scores.cost,
            structural = scores.structural,
            is_code = scores.is_code,
            "project evaluated"
        );

        PredictionReport {
            predictions,
            suggestions,
            scores,
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Runs the standard rule catalog once.
pub fn evaluate(data: &ProjectData) -> PredictionReport {
    PredictionEngine::standard().evaluate(data)
}

/// Risk finding raised by a triggered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "type")]
    pub severity: Severity,
    #[serde(rename = "cat")]
    pub category: FindingCategory,
    pub title: String,
    #[serde(rename = "desc")]
    pub detail: String,
    #[serde(rename = "page")]
    pub step: WizardStep,
}

/// Remediation action; not linked to the prediction that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub title: String,
    #[serde(rename = "desc")]
    pub detail: String,
}

impl From<&SuggestionTemplate> for Suggestion {
    fn from(template: &SuggestionTemplate) -> Self {
        Self {
            icon: template.icon.to_string(),
            title: template.title.to_string(),
            detail: template.detail.to_string(),
        }
    }
}

pub const MAX_SCORE: i32 = 100;

/// Category scores; every category starts at 100 and rules only deduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub energy: i32,
    pub cost: i32,
    pub structural: i32,
    pub is_code: i32,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self {
            energy: MAX_SCORE,
            cost: MAX_SCORE,
            structural: MAX_SCORE,
            is_code: MAX_SCORE,
        }
    }
}

impl CategoryScores {
    pub fn get(&self, category: ScoreCategory) -> i32 {
        match category {
            ScoreCategory::Energy => self.energy,
            ScoreCategory::Cost => self.cost,
            ScoreCategory::Structural => self.structural,
            ScoreCategory::IsCode => self.is_code,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, i32)> + '_ {
        ScoreCategory::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    fn slot(&mut self, category: ScoreCategory) -> &mut i32 {
        match category {
            ScoreCategory::Energy => &mut self.energy,
            ScoreCategory::Cost => &mut self.cost,
            ScoreCategory::Structural => &mut self.structural,
            ScoreCategory::IsCode => &mut self.is_code,
        }
    }

    fn deduct(&mut self, category: ScoreCategory, points: u8) {
        *self.slot(category) -= i32::from(points);
    }

    fn clamped(mut self) -> Self {
        for category in ScoreCategory::ordered() {
            let slot = self.slot(category);
            *slot = (*slot).clamp(0, MAX_SCORE);
        }
        self
    }
}

/// Evaluation output: findings in rule order, suggestions in rule order, clamped scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub predictions: Vec<Prediction>,
    pub suggestions: Vec<Suggestion>,
    pub scores: CategoryScores,
}

impl PredictionReport {
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.predictions
            .iter()
            .filter(|prediction| prediction.severity == severity)
            .count()
    }

    pub fn is_clear(&self) -> bool {
        self.predictions.is_empty()
    }
}
