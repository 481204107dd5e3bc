use super::super::coerce::{parse_int_with_default, parse_with_default};
use super::super::domain::{
    field_flag, field_text, BuildingType, Climate, PlanShape, ProjectData, Rainfall, SoilType,
};

pub(crate) const DEFAULT_FLOORS: i64 = 1;
pub(crate) const DEFAULT_SEISMIC_ZONE: i64 = 2;
const OVERRUN_FACTOR: f64 = 1.04;
const TIGHT_MARGIN_FACTOR: f64 = 0.9;

/// Project data with every default applied, read once per evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSignals {
    pub climate: Option<Climate>,
    pub rainfall: Option<Rainfall>,
    pub west_windows_large: bool,
    pub drainage_adequate: bool,
    pub high_wind: bool,
    pub cross_ventilation: bool,
    pub budget: f64,
    pub budget_range_low: bool,
    pub rooms: i64,
    pub future_expansion: bool,
    pub building_type: Option<BuildingType>,
    pub wall_insulated: bool,
    pub roof_insulated: bool,
    pub roof_flat: bool,
    pub steel_corrosion_resistant: bool,
    pub floors: i64,
    pub seismic_zone: i64,
    pub soil_type: Option<SoilType>,
    pub plan_shape: Option<PlanShape>,
    pub open_ground_floor: bool,
    pub slab_flat: bool,
    pub expansion_columns: bool,
    pub fire_egress: bool,
    pub estimate: f64,
}

impl ProjectSignals {
    pub fn from_project(data: &ProjectData) -> Self {
        let ProjectData {
            site,
            client,
            materials,
            structural,
            cost,
            ..
        } = data;

        Self {
            climate: field_text(&site.climate).and_then(Climate::parse),
            rainfall: field_text(&site.rainfall).and_then(Rainfall::parse),
            west_windows_large: field_text(&site.west_windows) == Some("large"),
            drainage_adequate: field_text(&site.drainage_slope) == Some("adequate"),
            high_wind: field_text(&site.wind_speed) == Some("high"),
            cross_ventilation: field_flag(&site.cross_ventilation),
            budget: parse_with_default(client.budget.as_ref(), 0.0),
            budget_range_low: field_text(&client.budget_range) == Some("low"),
            rooms: parse_int_with_default(client.rooms.as_ref(), 0),
            future_expansion: field_flag(&client.future_expansion),
            building_type: field_text(&client.building_type).and_then(BuildingType::parse),
            wall_insulated: field_text(&materials.wall_type) == Some("insulated"),
            roof_insulated: field_text(&materials.roof_insulation) == Some("yes"),
            roof_flat: field_text(&materials.roof_type) == Some("flat"),
            steel_corrosion_resistant: field_text(&materials.steel_type)
                == Some("corrosion_resistant"),
            floors: parse_int_with_default(structural.floors.as_ref(), DEFAULT_FLOORS),
            seismic_zone: parse_int_with_default(
                structural.seismic_zone.as_ref(),
                DEFAULT_SEISMIC_ZONE,
            ),
            soil_type: field_text(&structural.soil_type).and_then(SoilType::parse),
            plan_shape: field_text(&structural.plan_shape).and_then(PlanShape::parse),
            open_ground_floor: field_flag(&structural.open_ground_floor),
            slab_flat: field_text(&structural.slab_type) == Some("flat"),
            expansion_columns: field_flag(&structural.expansion_columns),
            fire_egress: field_flag(&structural.fire_egress),
            estimate: parse_with_default(cost.estimated.as_ref(), 0.0),
        }
    }

    pub(crate) fn exceeds_budget(&self) -> bool {
        self.budget > 0.0 && self.estimate > self.budget * OVERRUN_FACTOR
    }

    pub(crate) fn within_tight_margin(&self) -> bool {
        self.budget > 0.0
            && self.estimate > self.budget * TIGHT_MARGIN_FACTOR
            && self.estimate <= self.budget * OVERRUN_FACTOR
    }
}
