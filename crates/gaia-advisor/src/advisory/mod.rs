//! Building design advisory: the prediction engine and the lookup tables that accompany it.
//!
//! The engine is a pure function of a [`ProjectData`] snapshot. Every rule reads fields with
//! their defaults already applied, so partial wizard input never produces an error; it only
//! produces fewer findings.

pub mod coerce;
pub mod domain;
pub mod evaluation;
pub mod input;
pub mod labels;
pub mod materials;
pub mod router;
pub mod site;
pub mod sizing;

#[cfg(test)]
mod tests;

pub use domain::{
    BuildingType, ClientData, Climate, CostData, DesignData, FieldValue, FindingCategory,
    MaterialsData, PlanShape, ProjectData, Rainfall, ScoreCategory, Severity, SiteData, SoilType,
    StructuralData, WizardStep,
};
pub use evaluation::{
    evaluate, CategoryScores, Prediction, PredictionEngine, PredictionReport, ProjectSignals,
    Rule, Suggestion,
};
pub use input::ProjectInputError;
pub use labels::resolve_label;
pub use materials::{material_suggestions, MaterialProfile, MaterialSuggestion};
pub use router::advisory_router;
pub use site::{derive_site_outputs, SiteConditions, SiteOutputs};
pub use sizing::{
    recommend_column, recommend_foundation, ColumnQuery, ColumnRecommendation, FoundationQuery,
    FoundationRecommendation,
};
