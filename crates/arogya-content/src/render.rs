use serde::Serialize;
use tera::{Context, Tera};

use arogya_core::models::analysis::AnalysisResult;
use arogya_core::models::biometrics::{BiometricAnalysis, BiometricReading, BiometricStatus};
use arogya_core::models::insight::PrimaryInsights;
use arogya_core::models::profile::PatientProfile;

use crate::catalog::{ContentCatalog, DetailBlock};
use crate::error::ContentError;

const REPORT_TEMPLATE_NAME: &str = "report.txt";

const REPORT_TEMPLATE: &str = "\
NCD SCREENING REPORT
{% if name %}Patient: {{ name }}
{% endif %}
CBAC score: {{ score }}/10 ({{ band }})
{% if alert %}
! {{ alert }}
{% endif %}
BMI: {{ bmi.value }} ({{ bmi.status }}){% if bmi.note %}
  {{ bmi.note }}{% endif %}
Waist: {{ waist.value }} in ({{ waist.status }}){% if waist.note %}
  {{ waist.note }}{% endif %}
{% if positive %}
Doing well: {{ positive }}
{% endif %}{% if focus %}
Focus areas:
{% for area in focus %}  - {{ area }}
{% endfor %}{% endif %}
Recommended screenings:
{% for rec in recommendations %}
[{{ rec.priority }}] {{ rec.test }} ({{ rec.category }})
  How often: {{ rec.frequency }}
  Why: {{ rec.reason }}
{% for detail in rec.details %}  {{ detail }}
{% endfor %}{% endfor %}
{{ disclaimer }}
";

#[derive(Serialize)]
struct ReportView<'a> {
    name: &'a str,
    score: u8,
    band: String,
    alert: Option<String>,
    bmi: MeasureView,
    waist: MeasureView,
    positive: Option<String>,
    focus: Vec<String>,
    recommendations: Vec<RecommendationView>,
    disclaimer: &'a str,
}

#[derive(Serialize)]
struct MeasureView {
    value: f64,
    status: String,
    note: Option<String>,
}

#[derive(Serialize)]
struct RecommendationView {
    priority: &'static str,
    category: String,
    test: String,
    frequency: String,
    reason: String,
    details: Vec<String>,
}

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// context must serialize to a JSON object; its fields become the template
/// variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ContentError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ContentError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ContentError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the plain-text screening report for one analysis.
pub fn render_report(
    catalog: &dyn ContentCatalog,
    profile: &PatientProfile,
    analysis: &AnalysisResult,
    biometrics: &BiometricAnalysis,
    insights: &PrimaryInsights,
) -> Result<String, ContentError> {
    let recommendations = analysis
        .recommendations
        .iter()
        .map(|rec| {
            let content = catalog.display(rec);
            RecommendationView {
                priority: if rec.is_high_priority() { "HIGH" } else { "ROUTINE" },
                category: content.category,
                test: content.test,
                frequency: content.frequency,
                reason: content.reason,
                details: catalog
                    .details(rec.key.as_str())
                    .into_iter()
                    .filter_map(|block| match block {
                        DetailBlock::Text { title, body } => Some(format!("{title}: {body}")),
                        DetailBlock::Interactive { .. } => None,
                    })
                    .collect(),
            }
        })
        .collect();

    let view = ReportView {
        name: profile.name.trim(),
        score: analysis.cbac_score,
        band: catalog.text(analysis.risk_band().label_key()),
        alert: analysis
            .has_lifestyle_risk_alert
            .then(|| catalog.text("lifestyle_alert")),
        bmi: measure(catalog, &biometrics.bmi),
        waist: measure(catalog, &biometrics.waist),
        positive: insights
            .positive_finding
            .as_ref()
            .map(|i| catalog.text(&i.label_key)),
        focus: insights
            .focus_areas
            .iter()
            .map(|i| catalog.text(&i.label_key))
            .collect(),
        recommendations,
        disclaimer: &analysis.disclaimer,
    };

    tracing::debug!(
        recommendations = analysis.recommendations.len(),
        "rendering screening report"
    );
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &view)
}

fn measure(catalog: &dyn ContentCatalog, reading: &BiometricReading) -> MeasureView {
    MeasureView {
        value: reading.value,
        status: catalog.text(status_key(reading.status)),
        note: reading
            .note
            .as_ref()
            .map(|n| format!("{} {}.", catalog.text(&n.key), n.threshold)),
    }
}

fn status_key(status: BiometricStatus) -> &'static str {
    match status {
        BiometricStatus::Healthy => "status_healthy",
        BiometricStatus::Borderline => "status_borderline",
        BiometricStatus::HighRisk => "status_high_risk",
    }
}
