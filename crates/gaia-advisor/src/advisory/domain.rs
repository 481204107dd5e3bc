use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::coerce;

/// Raw wizard field as captured by the browser: a checkbox, a number input, or text.
///
/// Any other JSON shape lands in `Other` and reads as absent, so one odd field never
/// rejects the rest of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Other(Value),
}

impl FieldValue {
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Numeric reading with browser `parseFloat` semantics; `None` when nothing parses.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) if value.is_finite() => Some(*value),
            FieldValue::Text(value) => coerce::float_prefix(value),
            _ => None,
        }
    }

    /// Integer reading with browser `parseInt` semantics (truncates toward zero).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Number(value) if value.is_finite() => Some(value.trunc() as i64),
            FieldValue::Text(value) => coerce::integer_prefix(value),
            _ => None,
        }
    }

    pub fn is_affirmative(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Number(value) => *value != 0.0 && !value.is_nan(),
            FieldValue::Text(value) => coerce::is_affirmative_text(value),
            FieldValue::Other(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Site Analysis step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteData {
    pub climate: Option<FieldValue>,
    pub west_windows: Option<FieldValue>,
    pub rainfall: Option<FieldValue>,
    pub drainage_slope: Option<FieldValue>,
    pub wind_speed: Option<FieldValue>,
    pub cross_ventilation: Option<FieldValue>,
}

/// Client Requirements step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientData {
    pub budget: Option<FieldValue>,
    pub budget_range: Option<FieldValue>,
    pub rooms: Option<FieldValue>,
    pub future_expansion: Option<FieldValue>,
    pub building_type: Option<FieldValue>,
}

/// Material Selection step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialsData {
    pub wall_type: Option<FieldValue>,
    pub roof_insulation: Option<FieldValue>,
    pub roof_type: Option<FieldValue>,
    pub steel_type: Option<FieldValue>,
}

/// Structural Safety step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuralData {
    pub floors: Option<FieldValue>,
    pub seismic_zone: Option<FieldValue>,
    pub soil_type: Option<FieldValue>,
    pub plan_shape: Option<FieldValue>,
    pub open_ground_floor: Option<FieldValue>,
    pub slab_type: Option<FieldValue>,
    pub expansion_columns: Option<FieldValue>,
    pub fire_egress: Option<FieldValue>,
}

/// Cost Planning step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostData {
    pub estimated: Option<FieldValue>,
}

/// Smart Design step. Not read by the engine; carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignData(pub Map<String, Value>);

/// Snapshot of every wizard step, assembled by the caller for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectData {
    #[serde(deserialize_with = "null_as_default")]
    pub site: SiteData,
    #[serde(deserialize_with = "null_as_default")]
    pub client: ClientData,
    #[serde(deserialize_with = "null_as_default")]
    pub materials: MaterialsData,
    #[serde(deserialize_with = "null_as_default")]
    pub structural: StructuralData,
    #[serde(deserialize_with = "null_as_default")]
    pub cost: CostData,
    #[serde(deserialize_with = "null_as_default")]
    pub design: DesignData,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn field_text(field: &Option<FieldValue>) -> Option<&str> {
    field.as_ref().and_then(FieldValue::text)
}

pub(crate) fn field_flag(field: &Option<FieldValue>) -> bool {
    field.as_ref().map(FieldValue::is_affirmative).unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Hot,
    Cold,
    Coastal,
    Temperate,
}

impl Climate {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hot" => Some(Self::Hot),
            "cold" => Some(Self::Cold),
            "coastal" => Some(Self::Coastal),
            "temperate" => Some(Self::Temperate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rainfall {
    Light,
    Heavy,
}

impl Rainfall {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Rock,
    HardClay,
    MediumClay,
    SoftClay,
    LooseSand,
    Filled,
}

impl SoilType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Rock,
            Self::HardClay,
            Self::MediumClay,
            Self::SoftClay,
            Self::LooseSand,
            Self::Filled,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|soil| soil.key() == value)
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::HardClay => "hard_clay",
            Self::MediumClay => "medium_clay",
            Self::SoftClay => "soft_clay",
            Self::LooseSand => "loose_sand",
            Self::Filled => "filled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rock => "Hard Rock",
            Self::HardClay => "Hard Clay",
            Self::MediumClay => "Medium Clay",
            Self::SoftClay => "Soft Clay",
            Self::LooseSand => "Loose Sand",
            Self::Filled => "Filled / Made-up Ground",
        }
    }

    /// Soils prone to uneven settlement under multi-storey loads.
    pub const fn is_weak(self) -> bool {
        matches!(self, Self::LooseSand | Self::Filled | Self::SoftClay)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanShape {
    #[serde(rename = "rect")]
    Rect,
    L,
    T,
    U,
    Plus,
}

impl PlanShape {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rect" => Some(Self::Rect),
            "L" => Some(Self::L),
            "T" => Some(Self::T),
            "U" => Some(Self::U),
            "Plus" => Some(Self::Plus),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::L => "L",
            Self::T => "T",
            Self::U => "U",
            Self::Plus => "Plus",
        }
    }

    pub const fn is_irregular(self) -> bool {
        !matches!(self, Self::Rect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    #[serde(rename = "house")]
    House,
    #[serde(rename = "office")]
    Office,
}

impl BuildingType {
    /// Only the occupancies the engine reasons about; anything else reads as `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "house" => Some(Self::House),
            "office" => Some(Self::Office),
            _ => None,
        }
    }
}

/// Wizard page a finding links back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    #[serde(rename = "Site Analysis")]
    SiteAnalysis,
    #[serde(rename = "Client Requirements")]
    ClientRequirements,
    #[serde(rename = "Smart Design")]
    SmartDesign,
    #[serde(rename = "Material Selection")]
    MaterialSelection,
    #[serde(rename = "Structural Safety")]
    StructuralSafety,
    #[serde(rename = "Cost Planning")]
    CostPlanning,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::SiteAnalysis,
            Self::ClientRequirements,
            Self::SmartDesign,
            Self::MaterialSelection,
            Self::StructuralSafety,
            Self::CostPlanning,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SiteAnalysis => "Site Analysis",
            Self::ClientRequirements => "Client Requirements",
            Self::SmartDesign => "Smart Design",
            Self::MaterialSelection => "Material Selection",
            Self::StructuralSafety => "Structural Safety",
            Self::CostPlanning => "Cost Planning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Danger,
    Warning,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Danger => "Danger",
            Self::Warning => "Warning",
        }
    }
}

/// Domain a finding belongs to, rendered as the `cat` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCategory {
    Thermal,
    Water,
    Material,
    Wind,
    Cost,
    Space,
    Structural,
    Seismic,
    Ventilation,
    Safety,
}

impl FindingCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thermal => "Thermal",
            Self::Water => "Water",
            Self::Material => "Material",
            Self::Wind => "Wind",
            Self::Cost => "Cost",
            Self::Space => "Space",
            Self::Structural => "Structural",
            Self::Seismic => "Seismic",
            Self::Ventilation => "Ventilation",
            Self::Safety => "Safety",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    #[serde(rename = "energy")]
    Energy,
    #[serde(rename = "cost")]
    Cost,
    #[serde(rename = "structural")]
    Structural,
    #[serde(rename = "isCode")]
    IsCode,
}

impl ScoreCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Energy, Self::Cost, Self::Structural, Self::IsCode]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Cost => "cost",
            Self::Structural => "structural",
            Self::IsCode => "isCode",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Energy => "Energy Efficiency",
            Self::Cost => "Cost Control",
            Self::Structural => "Structural Safety",
            Self::IsCode => "IS Code Compliance",
        }
    }
}
