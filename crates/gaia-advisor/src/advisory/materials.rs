use serde::Serialize;

use super::domain::{Climate, Rainfall};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialSuggestion {
    #[serde(rename = "cat")]
    pub category: &'static str,
    pub item: &'static str,
    pub reason: &'static str,
}

/// Catalog a project falls into; climate wins over rainfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialProfile {
    Hot,
    Cold,
    Coastal,
    HeavyRain,
    General,
}

impl MaterialProfile {
    pub fn select(climate: Option<Climate>, rainfall: Option<Rainfall>) -> Self {
        match (climate, rainfall) {
            (Some(Climate::Hot), _) => Self::Hot,
            (Some(Climate::Cold), _) => Self::Cold,
            (Some(Climate::Coastal), _) => Self::Coastal,
            (_, Some(Rainfall::Heavy)) => Self::HeavyRain,
            _ => Self::General,
        }
    }

    pub fn catalog(self) -> &'static [MaterialSuggestion; 4] {
        match self {
            Self::Hot => &HOT,
            Self::Cold => &COLD,
            Self::Coastal => &COASTAL,
            Self::HeavyRain => &HEAVY_RAIN,
            Self::General => &GENERAL,
        }
    }
}

pub fn material_suggestions(
    climate: Option<Climate>,
    rainfall: Option<Rainfall>,
) -> Vec<MaterialSuggestion> {
    MaterialProfile::select(climate, rainfall).catalog().to_vec()
}

const fn entry(
    category: &'static str,
    item: &'static str,
    reason: &'static str,
) -> MaterialSuggestion {
    MaterialSuggestion {
        category,
        item,
        reason,
    }
}

static HOT: [MaterialSuggestion; 4] = [
    entry(
        "Wall",
        "AAC Blocks (600×200×200)",
        "Lightweight, insulating, low heat storage — IS 2185",
    ),
    entry(
        "Roof",
        "RCC flat roof + cool-roof paint",
        "Reflects 80% solar radiation, lowers indoor temp 4–6°C",
    ),
    entry(
        "Flooring",
        "Kota stone / vitrified tiles",
        "Low thermal mass, cool to touch",
    ),
    entry(
        "Paint",
        "Exterior weathershield paint",
        "UV-resistant, 10–15 yr durability",
    ),
];

static COLD: [MaterialSuggestion; 4] = [
    entry(
        "Wall",
        "Double brick with 50mm EPS insulation",
        "R-value ≥ 2.5, reduces heating load 40%",
    ),
    entry(
        "Roof",
        "Insulated pitched roof (Mangalore tiles)",
        "Ventilated cavity + insulation board",
    ),
    entry(
        "Flooring",
        "Wooden / bamboo flooring",
        "Natural insulator, warm feel",
    ),
    entry(
        "Glazing",
        "Double-glazed uPVC windows",
        "U-value ≤ 1.8 W/m²K reduces heat loss",
    ),
];

static COASTAL: [MaterialSuggestion; 4] = [
    entry(
        "Structure",
        "Corrosion-resistant TMT Fe 500",
        "5× longer life in salt air — IS 1786",
    ),
    entry(
        "Concrete",
        "M30 concrete + 400 kg/m³ cement",
        "Low permeability protects rebar from chlorides — IS 456",
    ),
    entry(
        "Roof",
        "Colour-coated GI roofing sheet",
        "Galvanised + painted; resists salt corrosion",
    ),
    entry(
        "Finish",
        "Epoxy paint on all RCC surfaces",
        "Forms moisture barrier against salt penetration",
    ),
];

static HEAVY_RAIN: [MaterialSuggestion; 4] = [
    entry(
        "Roof",
        "Sloped clay/clay-Mangalore tiles",
        "Gravity drainage; zero standing water",
    ),
    entry(
        "Wall",
        "Fly-ash brick (weatherproof)",
        "Less water absorption than conventional brick",
    ),
    entry(
        "Flooring",
        "Anti-skid ceramic tiles",
        "Safe in wet indoor/outdoor conditions",
    ),
    entry(
        "Waterproof",
        "2-coat cementitious waterproofing",
        "Applied to all wet areas, basement, plinth",
    ),
];

static GENERAL: [MaterialSuggestion; 4] = [
    entry(
        "Wall",
        "Clay brick (230 mm)",
        "Good thermal mass, widely available",
    ),
    entry("Roof", "RCC flat roof M25", "Standard construction per IS 456"),
    entry(
        "Flooring",
        "Vitrified tiles 600×600",
        "Durable, low maintenance",
    ),
    entry(
        "Paint",
        "Acrylic exterior paint",
        "Cost-effective, 5–7 yr protection",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_takes_precedence_over_rainfall() {
        assert_eq!(
            MaterialProfile::select(Some(Climate::Coastal), Some(Rainfall::Heavy)),
            MaterialProfile::Coastal
        );
        assert_eq!(
            MaterialProfile::select(Some(Climate::Temperate), Some(Rainfall::Heavy)),
            MaterialProfile::HeavyRain
        );
        assert_eq!(
            MaterialProfile::select(None, Some(Rainfall::Light)),
            MaterialProfile::General
        );
    }

    #[test]
    fn every_catalog_lists_four_entries() {
        let suggestions = material_suggestions(Some(Climate::Hot), None);
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0].item, "AAC Blocks (600×200×200)");

        let rainy = material_suggestions(None, Some(Rainfall::Heavy));
        let categories: Vec<&str> = rainy.iter().map(|entry| entry.category).collect();
        assert_eq!(categories, vec!["Roof", "Wall", "Flooring", "Waterproof"]);
    }

    #[test]
    fn serializes_category_as_cat() {
        let value = serde_json::to_value(material_suggestions(Some(Climate::Cold), None))
            .expect("serialize");
        assert_eq!(value[3]["cat"], "Glazing");
        assert_eq!(value[3]["item"], "Double-glazed uPVC windows");
    }
}
