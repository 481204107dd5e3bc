use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{Climate, ProjectData, Rainfall};
use super::evaluation::{PredictionEngine, PredictionReport};
use super::labels::resolve_label;
use super::materials::{material_suggestions, MaterialSuggestion};
use super::site::{derive_site_outputs, SiteConditions, SiteOutputs};
use super::sizing::{ColumnQuery, ColumnRecommendation, FoundationQuery, FoundationRecommendation};

/// Router builder exposing the advisory engine and its lookup tables over HTTP.
pub fn advisory_router(engine: Arc<PredictionEngine>) -> Router {
    Router::new()
        .route("/api/v1/predictions", post(predictions_handler))
        .route("/api/v1/site-outputs", post(site_outputs_handler))
        .route("/api/v1/materials", get(materials_handler))
        .route(
            "/api/v1/recommendations/foundation",
            get(foundation_handler),
        )
        .route("/api/v1/recommendations/column", get(column_handler))
        .route("/api/v1/labels/:field/:value", get(label_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteOutputsRequest {
    pub climate: Option<String>,
    pub rainfall: Option<String>,
    pub soil_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MaterialsQuery {
    pub climate: Option<String>,
    pub rainfall: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelView {
    pub field: String,
    pub value: String,
    pub label: String,
}

pub(crate) async fn predictions_handler(
    State(engine): State<Arc<PredictionEngine>>,
    Json(project): Json<ProjectData>,
) -> Json<PredictionReport> {
    Json(engine.evaluate(&project))
}

pub(crate) async fn site_outputs_handler(
    Json(request): Json<SiteOutputsRequest>,
) -> Json<SiteOutputs> {
    let conditions = SiteConditions::parse(
        request.climate.as_deref(),
        request.rainfall.as_deref(),
        request.soil_type.as_deref(),
    );
    Json(derive_site_outputs(&conditions))
}

pub(crate) async fn materials_handler(
    Query(query): Query<MaterialsQuery>,
) -> Json<Vec<MaterialSuggestion>> {
    Json(material_suggestions(
        query.climate.as_deref().and_then(Climate::parse),
        query.rainfall.as_deref().and_then(Rainfall::parse),
    ))
}

pub(crate) async fn foundation_handler(
    Query(query): Query<FoundationQuery>,
) -> Json<FoundationRecommendation> {
    Json(query.recommend())
}

pub(crate) async fn column_handler(Query(query): Query<ColumnQuery>) -> Json<ColumnRecommendation> {
    Json(query.recommend())
}

pub(crate) async fn label_handler(Path((field, value)): Path<(String, String)>) -> Json<LabelView> {
    let label = resolve_label(&field, &value);
    Json(LabelView {
        field,
        value,
        label,
    })
}
