use gaia_advisor::advisory::{
    derive_site_outputs, material_suggestions, recommend_column, recommend_foundation,
    resolve_label, Climate, PredictionEngine, PredictionReport, ProjectData, Rainfall,
    ScoreCategory, Severity, SiteConditions, SoilType, WizardStep,
};
use serde_json::json;

fn coastal_highrise() -> ProjectData {
    ProjectData::from_json_value(json!({
        "site": {
            "climate": "coastal",
            "westWindows": "small",
            "rainfall": "heavy",
            "drainageSlope": "adequate",
            "windSpeed": "high",
            "crossVentilation": true
        },
        "client": {
            "budget": "4500000",
            "budgetRange": "high",
            "rooms": "4",
            "futureExpansion": false,
            "buildingType": "office"
        },
        "materials": {
            "wallType": "brick",
            "roofInsulation": "yes",
            "roofType": "sloped",
            "steelType": "corrosion_resistant"
        },
        "structural": {
            "floors": "6",
            "seismicZone": "3",
            "soilType": "medium_clay",
            "planShape": "rect",
            "openGroundFloor": false,
            "slabType": "flat",
            "expansionColumns": false,
            "fireEgress": true
        },
        "cost": {"estimated": "3900000"},
        "design": {"layout": "open-plan"}
    }))
    .expect("project document parses")
}

#[test]
fn coastal_highrise_project_walkthrough() {
    let project = coastal_highrise();
    let engine = PredictionEngine::standard();

    let report = engine.evaluate(&project);

    let summary: Vec<(Severity, &str, WizardStep)> = report
        .predictions
        .iter()
        .map(|prediction| (prediction.severity, prediction.title.as_str(), prediction.step))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                Severity::Warning,
                "Wind Pressure Risk",
                WizardStep::StructuralSafety
            ),
            (
                Severity::Warning,
                "Seismic Zone III — Moderate Risk",
                WizardStep::StructuralSafety
            ),
            (
                Severity::Warning,
                "Punching Shear Risk",
                WizardStep::StructuralSafety
            ),
        ]
    );
    assert_eq!(report.suggestions.len(), 3);
    assert_eq!(report.scores.get(ScoreCategory::Structural), 76);
    assert_eq!(report.scores.get(ScoreCategory::IsCode), 80);
    assert_eq!(report.scores.get(ScoreCategory::Energy), 100);
    assert_eq!(report.scores.get(ScoreCategory::Cost), 100);

    let site = derive_site_outputs(&SiteConditions::from_project(&project));
    assert_eq!(
        site.roof,
        "Sloped roof (1:12+ pitch), metal/RCC, with gutters and downpipes"
    );
    assert_eq!(site.foundation, "Isolated footings with tie beams — IS 1904");

    let foundation = recommend_foundation(Some(SoilType::MediumClay), 6, 3);
    assert_eq!(foundation.kind, "Raft Foundation");
    assert_eq!(recommend_column(6, 4.0).size, "350×350 mm");

    let materials = material_suggestions(Some(Climate::Coastal), Some(Rainfall::Heavy));
    assert_eq!(materials[0].item, "Corrosion-resistant TMT Fe 500");
}

#[test]
fn storage_snapshot_matches_direct_document() {
    let direct = coastal_highrise();
    let snapshot = json!({
        "gaia_site": serde_json::to_string(&direct.site).expect("site encodes"),
        "gaia_client": serde_json::to_value(&direct.client).expect("client encodes"),
        "gaia_materials": serde_json::to_string(&direct.materials).expect("materials encode"),
        "gaia_structural": serde_json::to_value(&direct.structural).expect("structural encodes"),
        "gaia_cost": serde_json::to_string(&direct.cost).expect("cost encodes"),
        "gaia_design": serde_json::to_string(&direct.design).expect("design encodes")
    });

    let restored = ProjectData::from_json_value(snapshot).expect("snapshot parses");

    assert_eq!(restored, direct);
    assert_eq!(
        PredictionEngine::standard().evaluate(&restored),
        PredictionEngine::standard().evaluate(&direct)
    );
}

#[test]
fn report_json_round_trips_through_serde() {
    let report = gaia_advisor::advisory::evaluate(&coastal_highrise());

    let encoded = serde_json::to_string(&report).expect("report encodes");
    let decoded: PredictionReport = serde_json::from_str(&encoded).expect("report decodes");

    assert_eq!(report, decoded);
}

#[test]
fn labels_fall_back_to_raw_values() {
    assert_eq!(resolve_label("soilType", "loose_sand"), "Loose Sand");
    assert_eq!(resolve_label("soilType", "peat"), "peat");
    assert_eq!(resolve_label("climate", "hot"), "hot");
}
