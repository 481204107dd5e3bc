use super::domain::SoilType;

/// Display labels keyed by wizard field name, then by stored value.
const LABELS: &[(&str, fn(&str) -> Option<&'static str>)] = &[("soilType", soil_label)];

fn soil_label(value: &str) -> Option<&'static str> {
    SoilType::parse(value).map(SoilType::label)
}

/// Human-readable label for a stored enum value; the raw value when unmapped.
pub fn resolve_label(field: &str, value: &str) -> String {
    LABELS
        .iter()
        .find(|(name, _)| *name == field)
        .and_then(|(_, lookup)| lookup(value))
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
