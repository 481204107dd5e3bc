//! Project import from JSON documents.
//!
//! Two layouts are accepted: the direct `{site, client, materials, structural, cost, design}`
//! record, and a browser storage snapshot whose keys are `gaia_site`, `gaia_client`, and so on,
//! with each value either an object or a JSON-encoded string.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use super::domain::ProjectData;

const STORAGE_PREFIX: &str = "gaia_";

#[derive(Debug, thiserror::Error)]
pub enum ProjectInputError {
    #[error("project document is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("project document has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("project document must be a JSON object")]
    NotAnObject,
    #[error("failed to read project document: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProjectInputError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::Shape(err)
        } else {
            Self::Syntax(err)
        }
    }
}

impl ProjectData {
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ProjectInputError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProjectInputError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self, ProjectInputError> {
        let Value::Object(document) = value else {
            return Err(ProjectInputError::NotAnObject);
        };

        if is_storage_snapshot(&document) {
            return Ok(Self::from_storage_snapshot(&document));
        }

        Ok(serde_json::from_value(Value::Object(document))?)
    }

    /// Rebuilds the project from a storage snapshot; unreadable entries count as missing.
    pub fn from_storage_snapshot(snapshot: &Map<String, Value>) -> Self {
        Self {
            site: storage_entry(snapshot, "site"),
            client: storage_entry(snapshot, "client"),
            materials: storage_entry(snapshot, "materials"),
            structural: storage_entry(snapshot, "structural"),
            cost: storage_entry(snapshot, "cost"),
            design: storage_entry(snapshot, "design"),
        }
    }
}

fn is_storage_snapshot(document: &Map<String, Value>) -> bool {
    document.keys().any(|key| key.starts_with(STORAGE_PREFIX))
}

fn storage_entry<T>(snapshot: &Map<String, Value>, step: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let key = format!("{STORAGE_PREFIX}{step}");
    let value = match snapshot.get(&key) {
        None | Some(Value::Null) => return T::default(),
        Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(%key, error = %err, "ignoring unreadable storage entry");
                return T::default();
            }
        },
        Some(other) => other.clone(),
    };

    if value.is_null() {
        return T::default();
    }

    serde_json::from_value(value).unwrap_or_else(|err| {
        warn!(%key, error = %err, "ignoring malformed storage entry");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::domain::{ClientData, CostData, FieldValue};
    use serde_json::json;

    #[test]
    fn reads_direct_layout_with_missing_and_null_steps() {
        let data = ProjectData::from_json_str(
            r#"{"site": {"climate": "hot"}, "client": null, "structural": {"floors": 3}}"#,
        )
        .expect("document parses");

        assert_eq!(data.site.climate, Some(FieldValue::from("hot")));
        assert_eq!(data.client, ClientData::default());
        assert_eq!(data.structural.floors, Some(FieldValue::Number(3.0)));
        assert_eq!(data.cost, CostData::default());
    }

    #[test]
    fn reads_storage_snapshot_with_encoded_entries() {
        let snapshot = json!({
            "gaia_site": "{\"climate\":\"coastal\",\"crossVentilation\":true}",
            "gaia_cost": {"estimated": "1200000"},
            "gaia_client": "{not json",
            "gaia_completed": "[\"site\"]"
        });

        let data = ProjectData::from_json_value(snapshot).expect("snapshot parses");

        assert_eq!(data.site.climate, Some(FieldValue::from("coastal")));
        assert_eq!(data.site.cross_ventilation, Some(FieldValue::Flag(true)));
        assert_eq!(data.cost.estimated, Some(FieldValue::from("1200000")));
        assert_eq!(data.client, ClientData::default());
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(
            ProjectData::from_json_str("[1, 2]"),
            Err(ProjectInputError::NotAnObject)
        ));
        assert!(matches!(
            ProjectData::from_json_str("{"),
            Err(ProjectInputError::Syntax(_))
        ));
    }

    #[test]
    fn step_that_is_not_a_record_is_a_shape_error() {
        let err = ProjectData::from_json_str(r#"{"site": 5}"#).expect_err("site must be an object");
        assert!(matches!(err, ProjectInputError::Shape(_)));
        assert!(err.to_string().starts_with("project document has an unexpected shape"));
    }

    #[test]
    fn odd_field_shapes_keep_the_rest_of_the_project() {
        let direct = ProjectData::from_json_str(
            r#"{"site": {"climate": "hot", "westWindows": "large"},
                "structural": {"fireEgress": ["stairs"], "floors": "2"}}"#,
        )
        .expect("document parses");
        assert_eq!(direct.site.climate, Some(FieldValue::from("hot")));
        assert_eq!(direct.structural.floors, Some(FieldValue::from("2")));

        let snapshot = ProjectData::from_json_value(json!({
            "gaia_structural": "{\"fireEgress\":{\"stairs\":2},\"floors\":\"2\"}"
        }))
        .expect("snapshot parses");
        assert_eq!(snapshot.structural.floors, Some(FieldValue::from("2")));
    }

    #[test]
    fn ignores_unknown_fields() {
        let data = ProjectData::from_json_str(
            r#"{"site": {"climate": "cold", "orientation": "north"}, "feedback": {"rating": 4}}"#,
        )
        .expect("document parses");
        assert_eq!(data.site.climate, Some(FieldValue::from("cold")));
    }
}
