use serde::Serialize;

use arogya_content::{English, render_report};
use arogya_core::models::analysis::AnalysisResult;
use arogya_core::models::biometrics::BiometricAnalysis;
use arogya_core::models::insight::PrimaryInsights;
use arogya_core::models::profile::PatientProfile;
use arogya_rules::{analyze_at, biometrics, insights};

use crate::store::{ProfileStore, read_profile_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Everything the engine knows about one profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    pub analysis: AnalysisResult,
    pub biometrics: BiometricAnalysis,
    pub insights: PrimaryInsights,
}

pub fn run_analysis(profile: &PatientProfile, reference_year: i32) -> AnalysisOutput {
    AnalysisOutput {
        analysis: analyze_at(profile, reference_year),
        biometrics: biometrics::analyze(profile),
        insights: insights::primary_insights(profile),
    }
}

pub fn analyze(
    profile: &PatientProfile,
    reference_year: i32,
    format: OutputFormat,
) -> eyre::Result<String> {
    let output = run_analysis(profile, reference_year);
    tracing::info!(
        score = output.analysis.cbac_score,
        recommendations = output.analysis.recommendations.len(),
        "analysis complete"
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => Ok(render_report(
            &English,
            profile,
            &output.analysis,
            &output.biometrics,
            &output.insights,
        )?),
    }
}

/// Import a profile file into the store, returning the sanitized profile.
pub fn save_profile(store: &ProfileStore, file: &std::path::Path) -> eyre::Result<PatientProfile> {
    let profile = read_profile_file(file)?;
    store.save(&profile)?;
    Ok(profile)
}

pub fn show_profile(store: &ProfileStore) -> eyre::Result<String> {
    if !store.exists() {
        return Err(eyre::eyre!("no saved profile at {}", store.path().display()));
    }
    Ok(serde_json::to_string_pretty(&store.load()?)?)
}
