//! Command-line front end for the maintenance-note diagnosis engine.
//!
//! ## Commands
//!
//! - `diagnose`: Diagnose one note and print the report
//! - `samples`: Run the bundled demonstration notes
//! - `lexicon`: List the domain terms registered with the tokenizer

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use diag_core::{AppConfig, DiagnosisEngine, KeywordRules};
use diag_engine::RuleDiagnosisEngine;
use diag_extraction::{JiebaTagger, Lexicon, RuleEntityExtractor};
use diag_knowledge::InMemoryKnowledgeBase;

const SAMPLE_NOTES: &[&str] = &[
    "检修员小明在5月5日9:00发现430号轧机制动力出现异常波动",
    "电机自由端H测点包络谱轴承外圈特征触发报警",
    "需要对轧机进行定期维修保养",
];

#[derive(Parser)]
#[command(name = "diag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rule-based diagnosis of industrial maintenance notes", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diagnose a single maintenance note
    Diagnose {
        /// Free-text note, e.g. "430号轧机制动力出现异常波动"
        text: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Diagnose the bundled demonstration notes against the sample history
    Samples {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the domain terms registered with the tokenizer
    Lexicon,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.json, level);

    let config = AppConfig::from_env();

    match cli.command {
        Commands::Diagnose { text, format } => cmd_diagnose(&config, &text, format),
        Commands::Samples { format } => cmd_samples(&config, format),
        Commands::Lexicon => cmd_lexicon(&config),
    }
}

/// Logs go to stderr so report output on stdout stays machine-readable.
fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

fn cmd_diagnose(config: &AppConfig, text: &str, format: OutputFormat) -> Result<()> {
    if text.trim().is_empty() {
        bail!("input text must not be empty");
    }

    let engine =
        RuleDiagnosisEngine::from_config(config).context("Failed to initialize diagnosis engine")?;
    let report = engine.diagnose(text).context("Diagnosis failed")?;
    print_report(&report, format)
}

fn cmd_samples(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let tagger = JiebaTagger::from_config(config).context("Failed to load lexicon")?;
    let rules = KeywordRules::load(config).context("Failed to load keyword rules")?;
    let engine = RuleDiagnosisEngine::new(
        Arc::new(RuleEntityExtractor::new(Arc::new(tagger))),
        Arc::new(InMemoryKnowledgeBase::sample()),
        rules,
    );

    for note in SAMPLE_NOTES {
        debug!(note, "Running sample");
        let report = engine
            .diagnose(note)
            .with_context(|| format!("Diagnosis failed for sample {note:?}"))?;
        if matches!(format, OutputFormat::Text) {
            println!("{}", "=".repeat(50));
        }
        print_report(&report, format)?;
    }
    Ok(())
}

fn cmd_lexicon(config: &AppConfig) -> Result<()> {
    let lexicon = Lexicon::load(config).context("Failed to load lexicon")?;
    for entry in lexicon.entries() {
        println!("{}\t{}", entry.term, entry.tag);
    }
    println!("\n{} terms", lexicon.len());
    Ok(())
}

fn print_report(report: &diag_core::DiagnosisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{report}\n"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
