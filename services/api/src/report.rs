use crate::infra::{load_project, sample_project};
use chrono::Local;
use clap::Args;
use gaia_advisor::advisory::{
    derive_site_outputs, material_suggestions, ColumnQuery, ColumnRecommendation, Climate,
    FieldValue, FoundationQuery, FoundationRecommendation, MaterialSuggestion, PredictionEngine,
    PredictionReport, Rainfall, Severity, SiteConditions, SiteOutputs,
};
use gaia_advisor::error::AppError;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Project file: a direct project document or a browser storage snapshot
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SiteArgs {
    /// hot | cold | coastal | temperate
    #[arg(long)]
    pub(crate) climate: Option<String>,
    /// light | heavy
    #[arg(long)]
    pub(crate) rainfall: Option<String>,
    /// rock | hard_clay | medium_clay | soft_clay | loose_sand | filled
    #[arg(long)]
    pub(crate) soil_type: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct MaterialsArgs {
    /// hot | cold | coastal | temperate
    #[arg(long)]
    pub(crate) climate: Option<String>,
    /// light | heavy
    #[arg(long)]
    pub(crate) rainfall: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FoundationArgs {
    #[arg(long)]
    pub(crate) soil_type: Option<String>,
    /// Storey count (defaults to 1)
    #[arg(long)]
    pub(crate) floors: Option<String>,
    /// IS 1893 seismic zone (defaults to 2)
    #[arg(long)]
    pub(crate) seismic_zone: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ColumnArgs {
    /// Storey count (defaults to 1)
    #[arg(long)]
    pub(crate) floors: Option<String>,
    /// Column spacing in metres (defaults to 4)
    #[arg(long)]
    pub(crate) spacing: Option<String>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, json } = args;

    let project = load_project(&input)?;
    let report = PredictionEngine::standard().evaluate(&project);
    print_report(&report, &input.display().to_string(), json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) {
    let report = PredictionEngine::standard().evaluate(&sample_project());
    print_report(&report, "built-in sample project", args.json);
}

pub(crate) fn run_site(args: SiteArgs) {
    let conditions = SiteConditions::parse(
        args.climate.as_deref(),
        args.rainfall.as_deref(),
        args.soil_type.as_deref(),
    );
    print!("{}", format_site_outputs(&derive_site_outputs(&conditions)));
}

pub(crate) fn run_materials(args: MaterialsArgs) {
    let suggestions = material_suggestions(
        args.climate.as_deref().and_then(Climate::parse),
        args.rainfall.as_deref().and_then(Rainfall::parse),
    );
    print!("{}", format_materials(&suggestions));
}

pub(crate) fn run_foundation(args: FoundationArgs) {
    let query = FoundationQuery {
        soil_type: args.soil_type,
        floors: args.floors.as_deref().map(FieldValue::from),
        seismic_zone: args.seismic_zone.as_deref().map(FieldValue::from),
    };
    print!("{}", format_foundation(&query.recommend()));
}

pub(crate) fn run_column(args: ColumnArgs) {
    let query = ColumnQuery {
        floors: args.floors.as_deref().map(FieldValue::from),
        spacing: args.spacing.as_deref().map(FieldValue::from),
    };
    print!("{}", format_column(&query.recommend()));
}

fn print_report(report: &PredictionReport, source: &str, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
        return;
    }

    println!(
        "Gaia advisory report for {source} ({})",
        Local::now().date_naive()
    );
    print!("{}", format_report(report));
}

pub(crate) fn format_report(report: &PredictionReport) -> String {
    let mut out = String::new();

    if report.is_clear() {
        let _ = writeln!(out, "\nRisk predictions: none");
    } else {
        let _ = writeln!(
            out,
            "\nRisk predictions: {} ({} danger, {} warning)",
            report.predictions.len(),
            report.count_by_severity(Severity::Danger),
            report.count_by_severity(Severity::Warning)
        );
        for prediction in &report.predictions {
            let _ = writeln!(
                out,
                "- [{}] {} | {} ({})",
                prediction.severity.label(),
                prediction.category.label(),
                prediction.title,
                prediction.step.label()
            );
            let _ = writeln!(out, "  {}", prediction.detail);
        }
    }

    if !report.suggestions.is_empty() {
        let _ = writeln!(out, "\nSuggestions");
        for suggestion in &report.suggestions {
            let _ = writeln!(
                out,
                "- {} {}: {}",
                suggestion.icon, suggestion.title, suggestion.detail
            );
        }
    }

    let _ = writeln!(out, "\nScores");
    for (category, score) in report.scores.iter() {
        let _ = writeln!(out, "- {}: {score}/100", category.label());
    }

    out
}

pub(crate) fn format_site_outputs(outputs: &SiteOutputs) -> String {
    format!(
        "Orientation: {}\nWindows: {}\nRoof: {}\nFoundation: {}\n",
        outputs.orientation, outputs.windows, outputs.roof, outputs.foundation
    )
}

pub(crate) fn format_materials(suggestions: &[MaterialSuggestion]) -> String {
    suggestions
        .iter()
        .map(|entry| format!("- {}: {} ({})\n", entry.category, entry.item, entry.reason))
        .collect()
}

pub(crate) fn format_foundation(recommendation: &FoundationRecommendation) -> String {
    format!(
        "Foundation: {}\nMinimum depth: {}\nCode: {}\n",
        recommendation.kind, recommendation.min_depth, recommendation.code
    )
}

pub(crate) fn format_column(recommendation: &ColumnRecommendation) -> String {
    format!(
        "Column: {}\nConcrete: {}\nSteel: {}\nMinimum steel ratio: {}\n",
        recommendation.size, recommendation.grade, recommendation.steel, recommendation.min_ratio
    )
}
