use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::advisory::domain::{
    ClientData, CostData, DesignData, FieldValue, MaterialsData, ProjectData, SiteData,
    StructuralData,
};
use crate::advisory::evaluation::PredictionEngine;
use crate::advisory::router::advisory_router;

pub(super) fn text(value: &str) -> Option<FieldValue> {
    Some(FieldValue::from(value))
}

pub(super) fn flag(value: bool) -> Option<FieldValue> {
    Some(FieldValue::Flag(value))
}

/// Fully populated project that triggers no rule.
pub(super) fn neutral_project() -> ProjectData {
    ProjectData {
        site: SiteData {
            climate: text("temperate"),
            west_windows: text("small"),
            rainfall: text("light"),
            drainage_slope: text("adequate"),
            wind_speed: text("normal"),
            cross_ventilation: flag(true),
        },
        client: ClientData {
            budget: text("1000000"),
            budget_range: text("medium"),
            rooms: text("3"),
            future_expansion: flag(false),
            building_type: text("house"),
        },
        materials: MaterialsData {
            wall_type: text("brick"),
            roof_insulation: text("yes"),
            roof_type: text("sloped"),
            steel_type: text("standard"),
        },
        structural: StructuralData {
            floors: text("2"),
            seismic_zone: text("2"),
            soil_type: text("rock"),
            plan_shape: text("rect"),
            open_ground_floor: flag(false),
            slab_type: text("beam-slab"),
            expansion_columns: flag(false),
            fire_egress: flag(true),
        },
        cost: CostData {
            estimated: text("800000"),
        },
        design: DesignData::default(),
    }
}

/// Project that trips every structural and code rule at once.
pub(super) fn worst_case_project() -> ProjectData {
    let mut project = neutral_project();
    project.site.climate = text("coastal");
    project.site.rainfall = text("heavy");
    project.site.drainage_slope = text("inadequate");
    project.site.wind_speed = text("high");
    project.site.cross_ventilation = flag(false);
    project.client.budget_range = text("low");
    project.client.rooms = text("7");
    project.client.future_expansion = text("yes");
    project.materials.roof_type = text("flat");
    project.structural.floors = text("8");
    project.structural.seismic_zone = text("5");
    project.structural.soil_type = text("filled");
    project.structural.plan_shape = text("U");
    project.structural.open_ground_floor = flag(true);
    project.structural.slab_type = text("flat");
    project.structural.fire_egress = flag(false);
    project.cost.estimated = text("1500000");
    project
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}

pub(super) fn engine() -> PredictionEngine {
    PredictionEngine::standard()
}

pub(super) fn router() -> Router {
    advisory_router(Arc::new(engine()))
}
