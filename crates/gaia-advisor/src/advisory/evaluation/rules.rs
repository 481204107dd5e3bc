use std::fmt;

use super::super::domain::{
    BuildingType, Climate, FindingCategory, Rainfall, ScoreCategory, Severity, WizardStep,
};
use super::super::labels::resolve_label;
use super::locale::{format_inr, format_percent};
use super::signals::ProjectSignals;

/// Finding text that is either fixed or rendered from the evaluated signals.
#[derive(Clone, Copy)]
pub enum RuleText {
    Fixed(&'static str),
    Computed(fn(&ProjectSignals) -> String),
}

impl RuleText {
    pub fn render(&self, signals: &ProjectSignals) -> String {
        match self {
            RuleText::Fixed(text) => (*text).to_string(),
            RuleText::Computed(render) => render(signals),
        }
    }
}

impl fmt::Debug for RuleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleText::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            RuleText::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTemplate {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Points removed from one score category. Unsigned so no rule can raise a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePenalty {
    pub category: ScoreCategory,
    pub points: u8,
}

/// One advisory rule: a predicate over the signals and the findings it emits when it holds.
#[derive(Clone)]
pub struct Rule {
    pub key: &'static str,
    pub severity: Severity,
    pub category: FindingCategory,
    pub step: WizardStep,
    pub applies: fn(&ProjectSignals) -> bool,
    pub title: RuleText,
    pub detail: RuleText,
    pub suggestions: Vec<SuggestionTemplate>,
    pub penalties: Vec<ScorePenalty>,
}

impl Rule {
    pub fn penalty_for(&self, category: ScoreCategory) -> u8 {
        self.penalties
            .iter()
            .filter(|penalty| penalty.category == category)
            .map(|penalty| penalty.points)
            .sum()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("severity", &self.severity)
            .field("category", &self.category)
            .field("step", &self.step)
            .field("title", &self.title)
            .field("suggestions", &self.suggestions.len())
            .field("penalties", &self.penalties)
            .finish()
    }
}

const fn suggestion(
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
) -> SuggestionTemplate {
    SuggestionTemplate {
        icon,
        title,
        detail,
    }
}

const fn penalty(category: ScoreCategory, points: u8) -> ScorePenalty {
    ScorePenalty { category, points }
}

pub(crate) fn standard_rules() -> Vec<Rule> {
    use FindingCategory as Cat;
    use ScoreCategory::{Cost, Energy, IsCode, Structural};
    use Severity::{Danger, Warning};
    use WizardStep as Step;

    vec![
        Rule {
            key: "thermal_west_glazing",
            severity: Danger,
            category: Cat::Thermal,
            step: Step::SiteAnalysis,
            applies: |s| s.climate == Some(Climate::Hot) && s.west_windows_large,
            title: RuleText::Fixed("High Heat Gain Risk"),
            detail: RuleText::Fixed(
                "Large west-facing windows in a hot climate will cause severe indoor heat gain, increasing cooling load by 30–40%.",
            ),
            suggestions: vec![
                suggestion(
                    "🪟",
                    "Reduce west glass area",
                    "Limit west-facing glazing to ≤10% of wall area or use deep overhangs.",
                ),
                suggestion(
                    "🌿",
                    "Add external sunshades",
                    "Horizontal louvers or chajjas on west windows reduce solar gain by 60%.",
                ),
            ],
            penalties: vec![penalty(Energy, 22)],
        },
        Rule {
            key: "thermal_cold_walls",
            severity: Warning,
            category: Cat::Thermal,
            step: Step::MaterialSelection,
            applies: |s| s.climate == Some(Climate::Cold) && !s.wall_insulated,
            title: RuleText::Fixed("Thermal Discomfort — Cold Climate"),
            detail: RuleText::Fixed(
                "Non-insulated walls in a cold climate lead to high heating costs and occupant discomfort.",
            ),
            suggestions: vec![suggestion(
                "🧱",
                "Use insulated wall panels",
                "Double brick with 50 mm insulation core, or AAC blocks with plaster.",
            )],
            penalties: vec![penalty(Energy, 15)],
        },
        Rule {
            key: "thermal_roof_insulation",
            severity: Warning,
            category: Cat::Thermal,
            step: Step::MaterialSelection,
            applies: |s| s.climate == Some(Climate::Hot) && !s.roof_insulated,
            title: RuleText::Fixed("Roof Heat Transmission Risk"),
            detail: RuleText::Fixed(
                "Uninsulated flat roof in hot climate becomes a major heat absorber causing high AC load.",
            ),
            suggestions: vec![suggestion(
                "🏠",
                "Add roof insulation",
                "Use 75 mm EPS/XPS insulation under roof slab, or heat-reflective cool-roof paint.",
            )],
            penalties: vec![penalty(Energy, 12)],
        },
        Rule {
            key: "water_flat_roof",
            severity: Danger,
            category: Cat::Water,
            step: Step::MaterialSelection,
            applies: |s| s.rainfall == Some(Rainfall::Heavy) && s.roof_flat,
            title: RuleText::Fixed("Water Stagnation Risk"),
            detail: RuleText::Fixed(
                "Flat roof in heavy rainfall zone will cause standing water, roof leaks, and structural seepage.",
            ),
            suggestions: vec![
                suggestion(
                    "🏠",
                    "Switch to sloped roof",
                    "Provide minimum 1:12 pitch with ridge cap and proper eaves drainage.",
                ),
                suggestion(
                    "💧",
                    "Rainwater harvesting",
                    "Capture roof runoff in underground sump — reduces urban flooding risk.",
                ),
            ],
            penalties: vec![penalty(Structural, 15)],
        },
        Rule {
            key: "water_site_drainage",
            severity: Warning,
            category: Cat::Water,
            step: Step::SiteAnalysis,
            applies: |s| s.rainfall == Some(Rainfall::Heavy) && !s.drainage_adequate,
            title: RuleText::Fixed("Site Waterlogging Risk"),
            detail: RuleText::Fixed(
                "Heavy rainfall combined with inadequate site drainage slope leads to foundation soaking.",
            ),
            suggestions: vec![suggestion(
                "🌊",
                "Improve site drainage slope",
                "Maintain ≥1.5% slope away from building plinth as per NBC guidelines.",
            )],
            penalties: vec![penalty(Structural, 8)],
        },
        Rule {
            key: "material_coastal_corrosion",
            severity: Danger,
            category: Cat::Material,
            step: Step::MaterialSelection,
            applies: |s| s.climate == Some(Climate::Coastal) && !s.steel_corrosion_resistant,
            title: RuleText::Fixed("Corrosion Risk — Coastal Zone"),
            detail: RuleText::Fixed(
                "Standard mild steel in coastal salt-laden air corrodes 5–8× faster, compromising structural integrity.",
            ),
            suggestions: vec![
                suggestion(
                    "🛡",
                    "Use HYSD / corrosion-resistant steel",
                    "Epoxy-coated rebar or TMT Fe 500 with anti-corrosion coating as per IS 800.",
                ),
                suggestion(
                    "🎨",
                    "Apply weather-resistant coating",
                    "Use two-coat epoxy primer + polyurethane topcoat on all exposed steel.",
                ),
            ],
            penalties: vec![penalty(Structural, 18), penalty(IsCode, 10)],
        },
        Rule {
            key: "wind_pressure",
            severity: Warning,
            category: Cat::Wind,
            step: Step::StructuralSafety,
            applies: |s| s.high_wind && s.floors > 4,
            title: RuleText::Fixed("Wind Pressure Risk"),
            detail: RuleText::Computed(|s| {
                format!(
                    "{}-storey building in high wind zone needs wind analysis per IS 875 Part 3.",
                    s.floors
                )
            }),
            suggestions: vec![suggestion(
                "🏗",
                "Provide lateral bracing / shear walls",
                "Design shear walls at building core for wind load resistance per IS 875:3.",
            )],
            penalties: vec![penalty(Structural, 10), penalty(IsCode, 8)],
        },
        Rule {
            key: "cost_overrun",
            severity: Danger,
            category: Cat::Cost,
            step: Step::CostPlanning,
            applies: ProjectSignals::exceeds_budget,
            title: RuleText::Computed(|s| {
                let overrun_pct = (s.estimate - s.budget) / s.budget * 100.0;
                format!("Budget Overrun: +{}%", format_percent(overrun_pct))
            }),
            detail: RuleText::Computed(|s| {
                format!(
                    "Estimated cost (₹{}) exceeds budget by ₹{}.",
                    format_inr(s.estimate),
                    format_inr(s.estimate - s.budget)
                )
            }),
            suggestions: vec![
                suggestion(
                    "💰",
                    "Reduce non-essential spaces",
                    "Remove utility/store rooms >10 m² or merge living + dining area.",
                ),
                suggestion(
                    "🧱",
                    "Use cost-effective local materials",
                    "Switch from imported tiles to vitrified / local stone; saves 8–12%.",
                ),
            ],
            penalties: vec![penalty(Cost, 30)],
        },
        Rule {
            key: "cost_tight_margin",
            severity: Warning,
            category: Cat::Cost,
            step: Step::CostPlanning,
            applies: ProjectSignals::within_tight_margin,
            title: RuleText::Fixed("Budget Margin Tight"),
            detail: RuleText::Fixed(
                "Estimate is close to budget — cost escalation during construction may cause overrun.",
            ),
            suggestions: vec![suggestion(
                "📊",
                "Keep 10% contingency buffer",
                "Allocate minimum 10% of budget as contingency for price escalations.",
            )],
            penalties: vec![penalty(Cost, 12)],
        },
        Rule {
            key: "space_shortage",
            severity: Warning,
            category: Cat::Space,
            step: Step::ClientRequirements,
            applies: |s| s.rooms > 5 && s.budget_range_low,
            title: RuleText::Fixed("Space Shortage Risk"),
            detail: RuleText::Fixed(
                "High room count with low budget typically leads to cramped room sizes below NBC minimum standards.",
            ),
            suggestions: vec![suggestion(
                "📐",
                "Use open-plan design",
                "Combine kitchen + dining, or use foldable partitions to save area.",
            )],
            penalties: vec![penalty(Cost, 10)],
        },
        Rule {
            key: "structural_future_expansion",
            severity: Warning,
            category: Cat::Structural,
            step: Step::StructuralSafety,
            applies: |s| s.future_expansion && !s.expansion_columns,
            title: RuleText::Fixed("Future Expansion Not Planned"),
            detail: RuleText::Fixed(
                "No expansion columns provided — future vertical addition will require costly retrofitting.",
            ),
            suggestions: vec![suggestion(
                "🏗",
                "Provide provision columns now",
                "Extend columns to top slab level with projecting rebars for future floors.",
            )],
            penalties: vec![penalty(Structural, 8), penalty(IsCode, 5)],
        },
        Rule {
            key: "structural_differential_settlement",
            severity: Danger,
            category: Cat::Structural,
            step: Step::StructuralSafety,
            applies: |s| s.soil_type.is_some_and(|soil| soil.is_weak()) && s.floors >= 2,
            title: RuleText::Fixed("Differential Settlement Risk"),
            detail: RuleText::Computed(|s| {
                let soil = s
                    .soil_type
                    .map(|soil| resolve_label("soilType", soil.key()))
                    .unwrap_or_default();
                format!(
                    "{soil} with {} floors risks uneven settlement causing cracks and tilt.",
                    s.floors
                )
            }),
            suggestions: vec![
                suggestion(
                    "🏗",
                    "Use raft / pile foundation",
                    "Raft foundation distributes load on weak soil. Design per IS 6403.",
                ),
                suggestion(
                    "🔍",
                    "Conduct soil investigation",
                    "Bore holes at each column location before finalising foundation type.",
                ),
            ],
            penalties: vec![penalty(Structural, 22), penalty(IsCode, 15)],
        },
        Rule {
            key: "seismic_high_zone",
            severity: Danger,
            category: Cat::Seismic,
            step: Step::StructuralSafety,
            applies: |s| s.seismic_zone >= 4,
            title: RuleText::Computed(|s| format!("Seismic Zone {} — High Risk", s.seismic_zone)),
            detail: RuleText::Fixed(
                "Zone IV/V demands ductile detailing for all RC members per IS 13920 to prevent collapse.",
            ),
            suggestions: vec![
                suggestion(
                    "🔩",
                    "Follow ductile detailing (IS 13920)",
                    "Use 135° stirrup hooks, closer spacing at column/beam junctions.",
                ),
                suggestion(
                    "🏛",
                    "Provide RC shear walls",
                    "Core shear walls at building centre reduce lateral drift by 60%.",
                ),
            ],
            penalties: vec![penalty(Structural, 12), penalty(IsCode, 12)],
        },
        Rule {
            key: "seismic_moderate_zone",
            severity: Warning,
            category: Cat::Seismic,
            step: Step::StructuralSafety,
            applies: |s| s.seismic_zone == 3,
            title: RuleText::Fixed("Seismic Zone III — Moderate Risk"),
            detail: RuleText::Fixed(
                "Zone III requires IS 1893 seismic load checks and proper ductile design.",
            ),
            suggestions: vec![suggestion(
                "📐",
                "Check IS 1893 Part 1 compliance",
                "Calculate design base shear and distribute to frames/shear walls.",
            )],
            penalties: vec![penalty(Structural, 6), penalty(IsCode, 6)],
        },
        Rule {
            key: "structural_torsional_irregularity",
            severity: Warning,
            category: Cat::Structural,
            step: Step::StructuralSafety,
            applies: |s| s.plan_shape.is_some_and(|shape| shape.is_irregular()) && s.seismic_zone >= 3,
            title: RuleText::Fixed("Torsional Irregularity Risk"),
            detail: RuleText::Computed(|s| {
                let shape = s.plan_shape.map(|shape| shape.key()).unwrap_or_default();
                format!(
                    "{shape}-shaped plan in Zone {} will experience torsional forces during earthquakes.",
                    s.seismic_zone
                )
            }),
            suggestions: vec![
                suggestion(
                    "⚖",
                    "Add seismic / expansion joints",
                    "Break irregular plan into regular units with 50 mm seismic joints.",
                ),
                suggestion(
                    "🏗",
                    "Place shear walls symmetrically",
                    "Symmetric shear wall layout reduces torsion by matching stiffness centres.",
                ),
            ],
            penalties: vec![penalty(Structural, 14), penalty(IsCode, 10)],
        },
        Rule {
            key: "structural_soft_storey",
            severity: Danger,
            category: Cat::Structural,
            step: Step::StructuralSafety,
            applies: |s| s.open_ground_floor && s.floors > 2,
            title: RuleText::Fixed("Soft Storey Risk"),
            detail: RuleText::Fixed(
                "Open ground floor (stilt) with load-bearing floors above is most vulnerable failure mode in earthquakes.",
            ),
            suggestions: vec![suggestion(
                "🏗",
                "Add infill masonry or bracing",
                "Brick infill or RC bracing at ground floor stiffens the soft storey.",
            )],
            penalties: vec![penalty(Structural, 18), penalty(IsCode, 14)],
        },
        Rule {
            key: "structural_punching_shear",
            severity: Warning,
            category: Cat::Structural,
            step: Step::StructuralSafety,
            applies: |s| s.slab_flat && s.floors > 3,
            title: RuleText::Fixed("Punching Shear Risk"),
            detail: RuleText::Fixed(
                "Flat slab without shear caps in tall building is susceptible to punching failure at column heads.",
            ),
            suggestions: vec![suggestion(
                "🔩",
                "Provide drop panels / shear studs",
                "Column drop panels (min 300 mm thick) or headed shear studs per IS 456.",
            )],
            penalties: vec![penalty(Structural, 8), penalty(IsCode, 6)],
        },
        Rule {
            key: "ventilation_cross_flow",
            severity: Warning,
            category: Cat::Ventilation,
            step: Step::SmartDesign,
            applies: |s| {
                !s.cross_ventilation
                    && matches!(
                        s.building_type,
                        Some(BuildingType::Office) | Some(BuildingType::House)
                    )
            },
            title: RuleText::Fixed("Poor Natural Ventilation Risk"),
            detail: RuleText::Fixed(
                "No cross-ventilation provision leads to full AC dependence — high energy costs and poor air quality.",
            ),
            suggestions: vec![
                suggestion(
                    "💨",
                    "Design cross-ventilation corridors",
                    "Align openings on opposite walls perpendicular to prevailing wind direction.",
                ),
                suggestion(
                    "☀",
                    "Add skylights / clerestory windows",
                    "Stack ventilation via skylights improves air changes by 3–4 ACH naturally.",
                ),
            ],
            penalties: vec![penalty(Energy, 18)],
        },
        Rule {
            key: "safety_fire_egress",
            severity: Warning,
            category: Cat::Safety,
            step: Step::StructuralSafety,
            applies: |s| s.floors > 4 && !s.fire_egress,
            title: RuleText::Fixed("Fire Safety Compliance Gap"),
            detail: RuleText::Fixed(
                "Buildings >15 m height require fire escape staircases and hydrant provisions per NBC Part 4.",
            ),
            suggestions: vec![suggestion(
                "🚒",
                "Provide fire egress per NBC Part 4",
                "Min 1.2 m wide fire staircase, fire doors, and fire hydrant on each floor.",
            )],
            penalties: vec![penalty(IsCode, 12)],
        },
    ]
}
