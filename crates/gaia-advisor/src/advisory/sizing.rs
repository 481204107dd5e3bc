//! Preliminary foundation and column sizing tables (IS 1904 / IS 6403 / IS 2911 / IS 456).

use serde::{Deserialize, Serialize};

use super::coerce::{parse_int_with_default, parse_with_default};
use super::domain::{FieldValue, SoilType};
use super::evaluation::{DEFAULT_FLOORS, DEFAULT_SEISMIC_ZONE};

pub const DEFAULT_COLUMN_SPACING_M: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoundationRecommendation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "minDepth")]
    pub min_depth: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnRecommendation {
    pub size: &'static str,
    pub grade: &'static str,
    pub steel: &'static str,
    #[serde(rename = "minRatio")]
    pub min_ratio: &'static str,
}

const fn foundation(
    kind: &'static str,
    min_depth: &'static str,
    code: &'static str,
) -> FoundationRecommendation {
    FoundationRecommendation {
        kind,
        min_depth,
        code,
    }
}

const ISOLATED_FOOTINGS: FoundationRecommendation =
    foundation("Isolated Footings", "1.2 m", "IS 1904");

/// Foundation type for the soil, split on storey count where the soil allows shallow footings.
///
/// `seismic_zone` is accepted so callers can pass the full structural profile, but it does
/// not change the recommendation yet.
pub fn recommend_foundation(
    soil: Option<SoilType>,
    floors: i64,
    seismic_zone: i64,
) -> FoundationRecommendation {
    let _ = seismic_zone;

    match soil {
        Some(SoilType::Rock) => foundation("Shallow Strip / Pad", "0.6 m", "IS 1904"),
        Some(SoilType::HardClay) if floors <= 3 => {
            foundation("Isolated Footings + Tie Beams", "1.2 m", "IS 1904")
        }
        Some(SoilType::HardClay) => foundation("Raft Foundation", "1.5 m", "IS 6403"),
        Some(SoilType::MediumClay) if floors <= 2 => {
            foundation("Strip / Isolated Footings", "1.5 m", "IS 1904")
        }
        Some(SoilType::MediumClay) => foundation("Raft Foundation", "1.8 m", "IS 6403"),
        Some(SoilType::SoftClay) | Some(SoilType::LooseSand) => foundation(
            "Raft Foundation (preferred) / Bored Pile",
            "2.0 m",
            "IS 6403 / IS 2911",
        ),
        Some(SoilType::Filled) => {
            foundation("Bored Pile Foundation (mandatory)", "6–12 m", "IS 2911 Part 1")
        }
        None => ISOLATED_FOOTINGS,
    }
}

/// Column section by storey band. `spacing_m` does not alter the band yet.
pub fn recommend_column(floors: i64, spacing_m: f64) -> ColumnRecommendation {
    let _ = spacing_m;

    let (size, grade, steel, min_ratio) = match floors {
        f if f <= 2 => ("230×230 mm", "M20", "Fe 415", "1.2%"),
        f if f <= 4 => ("300×300 mm", "M25", "Fe 500", "1.4%"),
        f if f <= 6 => ("350×350 mm", "M25", "Fe 500", "1.6%"),
        _ => ("450×450 mm", "M30", "Fe 500D", "1.8%"),
    };

    ColumnRecommendation {
        size,
        grade,
        steel,
        min_ratio,
    }
}

/// Raw foundation lookup as it arrives from a form or query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoundationQuery {
    pub soil_type: Option<String>,
    pub floors: Option<FieldValue>,
    pub seismic_zone: Option<FieldValue>,
}

impl FoundationQuery {
    pub fn recommend(&self) -> FoundationRecommendation {
        recommend_foundation(
            self.soil_type.as_deref().and_then(SoilType::parse),
            parse_int_with_default(self.floors.as_ref(), DEFAULT_FLOORS),
            parse_int_with_default(self.seismic_zone.as_ref(), DEFAULT_SEISMIC_ZONE),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnQuery {
    pub floors: Option<FieldValue>,
    pub spacing: Option<FieldValue>,
}

impl ColumnQuery {
    pub fn recommend(&self) -> ColumnRecommendation {
        recommend_column(
            parse_int_with_default(self.floors.as_ref(), DEFAULT_FLOORS),
            parse_with_default(self.spacing.as_ref(), DEFAULT_COLUMN_SPACING_M),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_ground_always_needs_piles() {
        let expected = FoundationRecommendation {
            kind: "Bored Pile Foundation (mandatory)",
            min_depth: "6–12 m",
            code: "IS 2911 Part 1",
        };
        assert_eq!(recommend_foundation(Some(SoilType::Filled), 5, 4), expected);
        assert_eq!(recommend_foundation(Some(SoilType::Filled), 1, 2), expected);
    }

    #[test]
    fn clay_splits_on_floor_count() {
        assert_eq!(
            recommend_foundation(Some(SoilType::HardClay), 3, 2).kind,
            "Isolated Footings + Tie Beams"
        );
        let raft = recommend_foundation(Some(SoilType::HardClay), 4, 2);
        assert_eq!((raft.kind, raft.min_depth), ("Raft Foundation", "1.5 m"));

        assert_eq!(
            recommend_foundation(Some(SoilType::MediumClay), 2, 2).kind,
            "Strip / Isolated Footings"
        );
        let raft = recommend_foundation(Some(SoilType::MediumClay), 3, 2);
        assert_eq!((raft.min_depth, raft.code), ("1.8 m", "IS 6403"));
    }

    #[test]
    fn seismic_zone_does_not_change_foundation() {
        for zone in 1..=5 {
            assert_eq!(
                recommend_foundation(Some(SoilType::Rock), 2, zone),
                recommend_foundation(Some(SoilType::Rock), 2, 2)
            );
        }
    }

    #[test]
    fn unknown_soil_falls_back_to_isolated_footings() {
        assert_eq!(recommend_foundation(None, 8, 5), ISOLATED_FOOTINGS);
        let query = FoundationQuery {
            soil_type: Some("laterite".to_string()),
            ..FoundationQuery::default()
        };
        assert_eq!(query.recommend(), ISOLATED_FOOTINGS);
    }

    #[test]
    fn column_bands_follow_storeys() {
        assert_eq!(recommend_column(2, 4.0).size, "230×230 mm");
        assert_eq!(recommend_column(3, 4.0).grade, "M25");
        assert_eq!(recommend_column(6, 4.0).min_ratio, "1.6%");
        let tall = recommend_column(7, 4.0);
        assert_eq!((tall.size, tall.steel), ("450×450 mm", "Fe 500D"));
        assert_eq!(recommend_column(5, 9.0), recommend_column(5, 3.0));
    }

    #[test]
    fn column_query_defaults_to_single_storey() {
        let query = ColumnQuery {
            floors: Some(FieldValue::from("not a number")),
            spacing: None,
        };
        assert_eq!(query.recommend(), recommend_column(1, DEFAULT_COLUMN_SPACING_M));
    }
}
