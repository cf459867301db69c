//! audit-runner: run one optimization audit over an Amazon Ads CSV export.
//!
//! Usage:
//!   cargo run -p audit-runner -- report.csv
//!   cargo run -p audit-runner -- report.csv --target-acos 25 --min-clicks 15
//!   cargo run -p audit-runner -- report.csv --out ./reports --kpi-only
//!
//! Set OPENAI_API_KEY to have the executive summary rewritten into prose;
//! without it the structured summary is used as-is.

use audit_core::{AuditError, Thresholds};
use audit_orchestrator::{run_audit, AuditConfig};
use narrative_client::NarrativeClient;
use strategy_engine::EngineMode;

fn flag_value(args: &[String], flag: &str) -> Option<f64> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audit_runner=info,audit_orchestrator=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(report_path) = args.iter().find(|a| !a.starts_with("--")).cloned() else {
        eprintln!("usage: audit-runner <report.csv> [--waste-spend N] [--target-acos N] [--min-clicks N] [--min-orders N] [--min-ctr N] [--min-cvr N] [--out DIR] [--kpi-only]");
        std::process::exit(2);
    };

    let defaults = Thresholds::default();
    let thresholds = Thresholds {
        waste_spend: flag_value(&args, "--waste-spend").unwrap_or(defaults.waste_spend),
        target_acos: flag_value(&args, "--target-acos").unwrap_or(defaults.target_acos),
        min_clicks: flag_value(&args, "--min-clicks").unwrap_or(defaults.min_clicks),
        min_orders: flag_value(&args, "--min-orders").unwrap_or(defaults.min_orders),
        min_ctr: flag_value(&args, "--min-ctr").unwrap_or(defaults.min_ctr),
        min_cvr: flag_value(&args, "--min-cvr").unwrap_or(defaults.min_cvr),
    };

    let out_dir = args
        .iter()
        .position(|a| a == "--out")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
        .unwrap_or(".");

    let mode = if args.iter().any(|a| a == "--kpi-only") {
        EngineMode::KpiOnly
    } else {
        EngineMode::Full
    };

    let csv_data = std::fs::read_to_string(&report_path)
        .map_err(|e| AuditError::ParseFailure(format!("cannot read {report_path}: {e}")))?;

    let mut config = AuditConfig::new(out_dir);
    config.thresholds = thresholds;
    config.mode = mode;

    let narrator = NarrativeClient::with_defaults();
    if !narrator.has_credential() {
        tracing::info!("no OPENAI_API_KEY set, executive summary stays structured");
    }

    match run_audit(&csv_data, &config, &narrator).await {
        Ok(outcome) => {
            println!("{}", outcome.executive_summary);
            println!("Full report: {}", outcome.csv_path.display());
            println!("Executive PDF: {}", outcome.pdf_path.display());
            Ok(())
        }
        Err(e) => {
            // Every engine failure is a user-facing message, not a crash.
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
