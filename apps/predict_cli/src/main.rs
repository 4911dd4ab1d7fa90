use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use client_core::PredictClient;
use form_controller::{FormController, FormEvent, FormSurface, MemoryForm, SubmissionOutcome};
use shared::domain::FormSchema;
use tracing::info;

mod config;

use config::{load_settings, Settings, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(about = "Submit the cardiovascular risk form from the terminal")]
struct Args {
    /// Base URL of the prediction service; overrides the config file.
    #[arg(long)]
    server_url: Option<String>,
    /// Form field as NAME=VALUE; repeatable. BMI is derived from Height and Weight.
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,
    /// Checkbox to tick; repeatable. Unticked checkboxes are sent as 0.
    #[arg(long = "check")]
    checks: Vec<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("field name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Fills the form the way a user would, one input event per field.
fn fill_form(
    controller: &mut FormController,
    form: &mut MemoryForm,
    fields: &[(String, String)],
    checks: &[String],
) -> Result<()> {
    for (name, value) in fields {
        form.set_field_value(name, value);
        controller.handle_event(form, FormEvent::input(name.clone()));
    }
    for name in checks {
        if !form.schema().is_checkbox(name) {
            bail!("'{name}' is not a checkbox field");
        }
        form.set_checked(name, true);
    }
    Ok(())
}

async fn run(settings: Settings, fields: &[(String, String)], checks: &[String]) -> Result<String> {
    let client = PredictClient::new(&settings.server_url, &settings.controller.endpoint_path)
        .context("invalid prediction service url")?;
    let mut controller = FormController::new(settings.controller);
    let mut form = MemoryForm::new(FormSchema::cardiovascular());
    fill_form(&mut controller, &mut form, fields, checks)?;

    match controller.submit(&mut form, &client).await {
        SubmissionOutcome::Rendered(risk) => {
            let view = form
                .rendered()
                .ok_or_else(|| anyhow!("prediction rendered without a result view"))?;
            info!(?risk, "prediction complete");
            Ok(format!("{} ({})", view.label, view.percentage))
        }
        SubmissionOutcome::Alerted { reason } => {
            let alert = form.alerts().last().cloned().unwrap_or_default();
            Err(anyhow!(reason).context(alert))
        }
        SubmissionOutcome::Ignored => bail!("a submission is already in flight"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let summary = run(settings, &args.fields, &args.checks).await?;
    println!("{summary}");
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
