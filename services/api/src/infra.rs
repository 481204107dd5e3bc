use gaia_advisor::advisory::{
    ClientData, CostData, DesignData, FieldValue, MaterialsData, ProjectData, SiteData,
    StructuralData,
};
use gaia_advisor::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a project file in either the direct or the storage-snapshot layout.
pub(crate) fn load_project(path: &Path) -> Result<ProjectData, AppError> {
    let file = File::open(path)?;
    Ok(ProjectData::from_reader(BufReader::new(file))?)
}

fn field(value: &str) -> Option<FieldValue> {
    Some(FieldValue::from(value))
}

/// Three-storey house on soft clay in a hot, seismically active region.
pub(crate) fn sample_project() -> ProjectData {
    ProjectData {
        site: SiteData {
            climate: field("hot"),
            west_windows: field("large"),
            rainfall: field("light"),
            drainage_slope: field("adequate"),
            wind_speed: field("normal"),
            cross_ventilation: Some(FieldValue::Flag(true)),
        },
        client: ClientData {
            budget: field("2500000"),
            budget_range: field("medium"),
            rooms: field("4"),
            future_expansion: Some(FieldValue::Flag(true)),
            building_type: field("house"),
        },
        materials: MaterialsData {
            wall_type: field("brick"),
            roof_insulation: field("no"),
            roof_type: field("flat"),
            steel_type: field("standard"),
        },
        structural: StructuralData {
            floors: field("3"),
            seismic_zone: field("3"),
            soil_type: field("soft_clay"),
            plan_shape: field("L"),
            open_ground_floor: Some(FieldValue::Flag(false)),
            slab_type: field("beam-slab"),
            expansion_columns: Some(FieldValue::Flag(false)),
            fire_egress: Some(FieldValue::Flag(true)),
        },
        cost: CostData {
            estimated: field("2700000"),
        },
        design: DesignData::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_project_reads_snapshot_files() {
        let path = std::env::temp_dir().join(format!("gaia-project-{}.json", std::process::id()));
        {
            let mut file = File::create(&path).expect("create temp file");
            file.write_all(br#"{"gaia_structural": "{\"floors\":\"4\",\"soilType\":\"rock\"}"}"#)
                .expect("write temp file");
        }

        let project = load_project(&path).expect("project loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(project.structural.floors, Some(FieldValue::from("4")));
        assert_eq!(project.site, SiteData::default());
    }

    #[test]
    fn load_project_reports_missing_files() {
        let missing = std::env::temp_dir().join("gaia-project-does-not-exist.json");
        assert!(matches!(load_project(&missing), Err(AppError::Io(_))));
    }
}
