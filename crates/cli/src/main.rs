use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use risk_client::HttpCollaboratorClient;
use risk_core::{
    classify, resolve_core_config, Gender, RawCoreConfig, RiskAssessor, TriggerExtractor,
    TriggerVocabulary,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "risk")]
#[command(about = "Diabetes risk assessment CLI")]
struct Cli {
    /// Trigger vocabulary (`en` or `fr`); falls back to RISK_VOCABULARY
    #[arg(long, global = true)]
    vocabulary: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a patient against the configured data sources
    Assess {
        /// Patient identifier
        patient_id: String,
        /// Assessment date (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Classify without contacting any data source
    Classify {
        /// Age in whole years
        #[arg(long)]
        age: u32,
        /// Gender code as stored by the patient service
        #[arg(long)]
        gender: String,
        /// Number of distinct trigger terms found
        #[arg(long)]
        triggers: usize,
    },
    /// Print the active trigger vocabulary
    Vocabulary,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("risk=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let raw = RawCoreConfig {
        patient_service_url: std::env::var("PATIENT_SERVICE_URL").ok(),
        note_service_url: std::env::var("NOTE_SERVICE_URL").ok(),
        request_timeout_secs: std::env::var("RISK_REQUEST_TIMEOUT_SECS").ok(),
        vocabulary: cli
            .vocabulary
            .clone()
            .or_else(|| std::env::var("RISK_VOCABULARY").ok()),
    };

    match cli.command {
        Commands::Assess { patient_id, date } => {
            let cfg = resolve_core_config(raw).context("invalid risk configuration")?;
            let client = Arc::new(HttpCollaboratorClient::new(&cfg)?);
            let assessor = RiskAssessor::new(
                client.clone(),
                client,
                TriggerExtractor::new(cfg.vocabulary()),
            );

            let runtime = tokio::runtime::Runtime::new()?;
            let report = runtime.block_on(async {
                match date {
                    Some(date) => assessor.assess_on(&patient_id, date).await,
                    None => assessor.assess(&patient_id).await,
                }
            })?;

            println!("{}", report.message);
            println!("Risk level: {}", report.risk_level.code());
            println!(
                "Triggers ({}, vocabulary {}): {}",
                report.trigger_count,
                report.vocabulary_version,
                report.matched_triggers.join(", ")
            );
        }
        Commands::Classify {
            age,
            gender,
            triggers,
        } => {
            let level = classify(age, &Gender::parse(&gender), triggers);
            println!("{}: {}", level.code(), level.description());
        }
        Commands::Vocabulary => {
            let cfg = resolve_core_config(raw).context("invalid risk configuration")?;
            print_vocabulary(&cfg.vocabulary());
        }
    }

    Ok(())
}

fn print_vocabulary(vocabulary: &TriggerVocabulary) {
    println!(
        "Vocabulary {} ({} terms)",
        vocabulary.version(),
        vocabulary.len()
    );
    for term in vocabulary.terms() {
        println!("  {term}");
    }
}
