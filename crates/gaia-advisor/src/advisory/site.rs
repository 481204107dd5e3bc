use serde::{Deserialize, Serialize};

use super::domain::{field_text, Climate, ProjectData, Rainfall, SoilType};

/// Inputs that drive the Site Analysis advisories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteConditions {
    pub climate: Option<Climate>,
    pub rainfall: Option<Rainfall>,
    pub soil_type: Option<SoilType>,
}

impl SiteConditions {
    pub fn parse(climate: Option<&str>, rainfall: Option<&str>, soil_type: Option<&str>) -> Self {
        Self {
            climate: climate.and_then(Climate::parse),
            rainfall: rainfall.and_then(Rainfall::parse),
            soil_type: soil_type.and_then(SoilType::parse),
        }
    }

    pub fn from_project(data: &ProjectData) -> Self {
        Self::parse(
            field_text(&data.site.climate),
            field_text(&data.site.rainfall),
            field_text(&data.structural.soil_type),
        )
    }
}

/// Quick site guidance shown beside the Site Analysis form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOutputs {
    pub orientation: String,
    pub windows: String,
    pub roof: String,
    pub foundation: String,
}

const DEFAULT_FOUNDATION: &str = "Verify SBC; design per IS 1904 / IS 6403";

pub fn derive_site_outputs(conditions: &SiteConditions) -> SiteOutputs {
    SiteOutputs {
        orientation: orientation_advice(conditions.climate).to_string(),
        windows: window_advice(conditions.climate).to_string(),
        roof: roof_advice(conditions.climate, conditions.rainfall).to_string(),
        foundation: conditions
            .soil_type
            .map(foundation_advice)
            .unwrap_or(DEFAULT_FOUNDATION)
            .to_string(),
    }
}

fn orientation_advice(climate: Option<Climate>) -> &'static str {
    match climate {
        Some(Climate::Hot) => "Elongate N–S axis; minimise E–W exposure",
        Some(Climate::Cold) => "Compact form; main facade facing South for passive solar gain",
        Some(Climate::Coastal) => "Open to prevailing sea breeze; sheltered from saline wind",
        _ => "Orient for best cross-ventilation and natural daylight",
    }
}

fn window_advice(climate: Option<Climate>) -> &'static str {
    match climate {
        Some(Climate::Hot) => "Large windows on North only; minimal West; South with shading",
        Some(Climate::Cold) => {
            "Max South-facing glazing for passive solar heat; small North openings"
        }
        Some(Climate::Coastal) => {
            "Screened openings toward sea breeze; storm shutters on windward side"
        }
        _ => "Balanced openings for cross-ventilation on wind-facing walls",
    }
}

fn roof_advice(climate: Option<Climate>, rainfall: Option<Rainfall>) -> &'static str {
    if rainfall == Some(Rainfall::Heavy) {
        return "Sloped roof (1:12+ pitch), metal/RCC, with gutters and downpipes";
    }
    match climate {
        Some(Climate::Hot) => "Flat RCC with cool-roof coating + 75 mm EPS insulation",
        Some(Climate::Cold) => {
            "Insulated pitched roof with sarking membrane and ventilated cavity"
        }
        _ => "RCC flat roof with proper waterproofing and drainage",
    }
}

fn foundation_advice(soil: SoilType) -> &'static str {
    match soil {
        SoilType::Rock => "Shallow strip/pad on rock; nominal blinding — IS 1904",
        SoilType::HardClay => "Isolated footings or strip foundation — IS 1904",
        SoilType::MediumClay => "Isolated footings with tie beams — IS 1904",
        SoilType::SoftClay => "Raft foundation recommended — IS 6403",
        SoilType::LooseSand => "Raft or bored pile foundation — IS 6403",
        SoilType::Filled => "Deep pile foundation essential — IS 6403",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_climate_with_rock() {
        let outputs = derive_site_outputs(&SiteConditions::parse(
            Some("hot"),
            Some("light"),
            Some("rock"),
        ));
        assert_eq!(outputs.orientation, "Elongate N–S axis; minimise E–W exposure");
        assert_eq!(
            outputs.windows,
            "Large windows on North only; minimal West; South with shading"
        );
        assert_eq!(
            outputs.roof,
            "Flat RCC with cool-roof coating + 75 mm EPS insulation"
        );
        assert_eq!(
            outputs.foundation,
            "Shallow strip/pad on rock; nominal blinding — IS 1904"
        );
    }

    #[test]
    fn heavy_rainfall_overrides_climate_for_roof() {
        let outputs =
            derive_site_outputs(&SiteConditions::parse(Some("cold"), Some("heavy"), None));
        assert_eq!(
            outputs.roof,
            "Sloped roof (1:12+ pitch), metal/RCC, with gutters and downpipes"
        );
        assert_eq!(
            outputs.orientation,
            "Compact form; main facade facing South for passive solar gain"
        );
    }

    #[test]
    fn unknown_inputs_fall_back_to_defaults() {
        let outputs = derive_site_outputs(&SiteConditions::parse(
            Some("tropical"),
            None,
            Some("laterite"),
        ));
        assert_eq!(
            outputs.orientation,
            "Orient for best cross-ventilation and natural daylight"
        );
        assert_eq!(
            outputs.windows,
            "Balanced openings for cross-ventilation on wind-facing walls"
        );
        assert_eq!(
            outputs.roof,
            "RCC flat roof with proper waterproofing and drainage"
        );
        assert_eq!(outputs.foundation, DEFAULT_FOUNDATION);
    }

    #[test]
    fn temperate_climate_uses_default_branches() {
        let outputs = derive_site_outputs(&SiteConditions::parse(
            Some("temperate"),
            Some("light"),
            Some("filled"),
        ));
        assert_eq!(
            outputs.orientation,
            "Orient for best cross-ventilation and natural daylight"
        );
        assert_eq!(outputs.foundation, "Deep pile foundation essential — IS 6403");
    }
}
