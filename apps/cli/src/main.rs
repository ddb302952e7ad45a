use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    resolve_settings, DemoPreset, PredictionClient, PredictionForm, PredictionSession,
    RequestState, RiskSummary, SessionError,
};
use shared::{domain::FeatureField, protocol::PredictionResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "predictor", about = "Diabetes risk prediction from the command line")]
struct Args {
    /// Base URL of the prediction service, e.g. http://127.0.0.1:5000
    #[arg(long, global = true)]
    url: Option<String>,
    /// Explicit predictor.toml to load instead of the default locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print the raw service response instead of the summary.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the given metrics and request a prediction.
    Predict(FeatureArgs),
    /// Submit one of the built-in sample records.
    Demo {
        #[arg(value_enum)]
        preset: PresetArg,
        /// 1-based sample number within the preset.
        #[arg(long, default_value_t = 1)]
        sample: usize,
    },
}

// Values stay text so they go through the same validation as the GUI form.
#[derive(clap::Args, Debug)]
struct FeatureArgs {
    #[arg(long, allow_hyphen_values = true)]
    pregnancies: String,
    #[arg(long, allow_hyphen_values = true)]
    glucose: String,
    #[arg(long, allow_hyphen_values = true)]
    blood_pressure: String,
    #[arg(long, allow_hyphen_values = true)]
    skin_thickness: String,
    #[arg(long, allow_hyphen_values = true)]
    insulin: String,
    #[arg(long, allow_hyphen_values = true)]
    bmi: String,
    #[arg(long, allow_hyphen_values = true)]
    diabetes_pedigree_function: String,
    #[arg(long, allow_hyphen_values = true)]
    age: String,
}

impl FeatureArgs {
    fn value(&self, field: FeatureField) -> &str {
        match field {
            FeatureField::Pregnancies => &self.pregnancies,
            FeatureField::Glucose => &self.glucose,
            FeatureField::BloodPressure => &self.blood_pressure,
            FeatureField::SkinThickness => &self.skin_thickness,
            FeatureField::Insulin => &self.insulin,
            FeatureField::Bmi => &self.bmi,
            FeatureField::DiabetesPedigreeFunction => &self.diabetes_pedigree_function,
            FeatureField::Age => &self.age,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PresetArg {
    Normal,
    AboveNormal,
}

impl From<PresetArg> for DemoPreset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::Normal => DemoPreset::Normal,
            PresetArg::AboveNormal => DemoPreset::AboveNormal,
        }
    }
}

fn build_form(command: &Command) -> Result<PredictionForm> {
    let mut form = PredictionForm::new();
    match command {
        Command::Predict(features) => {
            for field in FeatureField::ALL {
                form.set_value(field, features.value(field));
            }
        }
        Command::Demo { preset, sample } => {
            let preset = DemoPreset::from(*preset);
            let (_, total) = form.demo_position(preset);
            if *sample == 0 || !form.seek_demo(preset, sample - 1) {
                bail!("{preset} has samples 1 to {total}, got {sample}");
            }
            form.load_demo(preset);
        }
    }
    Ok(form)
}

fn render_summary(result: &PredictionResult) -> String {
    let summary = RiskSummary::from_result(result);
    format!(
        "{}\n  Prediction probability: {}\n  Confidence level: {}\n\n{}\n\nDisclaimer: {}",
        summary.title,
        summary.probability_percent,
        summary.confidence_percent,
        summary.message,
        client_core::summary::DISCLAIMER,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = resolve_settings(args.config.as_deref(), args.url.as_deref())
        .context("failed to load predictor settings")?;
    let client =
        PredictionClient::from_settings(&settings).context("failed to build prediction client")?;
    tracing::debug!(endpoint = %client.endpoint(), "using prediction service");

    let mut session = PredictionSession::with_form(build_form(&args.command)?);
    let state = match session.submit_with(&client).await {
        Ok(state) => state.clone(),
        Err(SessionError::Invalid(errors)) => {
            for (field, error) in errors.iter() {
                eprintln!("{}: {error}", field.label());
            }
            bail!("{} field(s) failed validation", errors.len());
        }
        Err(SessionError::Busy) => bail!("a prediction is already in flight"),
    };

    match state {
        RequestState::Success(result) if args.json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        RequestState::Success(result) => {
            println!("{}", render_summary(&result));
            Ok(())
        }
        RequestState::Failed(message) => Err(anyhow!(message)),
        RequestState::Idle | RequestState::Loading => {
            Err(anyhow!("prediction finished without a result"))
        }
    }
}
