//! Pipeline wiring: ingest -> classify -> summarize -> enhance -> export.
//!
//! One upload is one full synchronous run; nothing is shared between runs.

use std::path::PathBuf;

use audit_core::{AuditResult, PortfolioSummary, Recommendation, TermRecord, Thresholds};
use chrono::Utc;
use narrative_client::NarrativeClient;
use report_export::{sort_by_spend_desc, write_labeled_csv, write_summary_pdf};
use report_ingest::ingest;
use strategy_engine::{EngineMode, StrategyEngine};
use summary_builder::{render_summary, summarize};

const CSV_FILENAME: &str = "amazon_analysis.csv";
const PDF_FILENAME: &str = "executive_summary.pdf";

/// One audit run's configuration.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub thresholds: Thresholds,
    pub mode: EngineMode,
    /// Directory the caller wants artifacts written into.
    pub output_dir: PathBuf,
}

impl AuditConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            thresholds: Thresholds::default(),
            mode: EngineMode::Full,
            output_dir: output_dir.into(),
        }
    }
}

/// Everything one run produces for the caller.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    /// Enhanced prose when a credential is configured, otherwise the
    /// structured summary verbatim.
    pub executive_summary: String,
    pub summary: PortfolioSummary,
    /// Full labeled dataset, spend-descending.
    pub records: Vec<TermRecord>,
    /// NEGATE rows (wasted spend list).
    pub wasted: Vec<TermRecord>,
    /// SCALE rows (scalable winners list).
    pub scaled: Vec<TermRecord>,
    pub csv_path: PathBuf,
    pub pdf_path: PathBuf,
}

/// Run the full audit over one uploaded report.
pub async fn run_audit(
    csv_data: &str,
    config: &AuditConfig,
    narrator: &NarrativeClient,
) -> AuditResult<AuditOutcome> {
    let (columns, mut records) = ingest(csv_data)?;

    let engine = StrategyEngine::new(config.thresholds, config.mode);
    engine.classify(&mut records);
    sort_by_spend_desc(&mut records);

    let summary = summarize(&records, Utc::now());
    let structured = render_summary(&summary);
    let executive_summary = narrator.enhance(&structured).await;

    let csv_path = config.output_dir.join(CSV_FILENAME);
    let pdf_path = config.output_dir.join(PDF_FILENAME);
    write_labeled_csv(&csv_path, &records, &columns)?;
    // The PDF carries the deterministic structured block regardless of
    // enhancement, so the artifact stays reproducible.
    write_summary_pdf(&pdf_path, &structured)?;

    let wasted: Vec<TermRecord> = records
        .iter()
        .filter(|r| r.recommendation == Recommendation::Negate)
        .cloned()
        .collect();
    let scaled: Vec<TermRecord> = records
        .iter()
        .filter(|r| r.recommendation == Recommendation::Scale)
        .cloned()
        .collect();

    tracing::info!(
        rows = records.len(),
        negate = summary.counts.negate,
        lower_bid = summary.counts.lower_bid,
        scale = summary.counts.scale,
        promote = summary.counts.promote,
        "audit complete"
    );

    Ok(AuditOutcome {
        executive_summary,
        summary,
        records,
        wasted,
        scaled,
        csv_path,
        pdf_path,
    })
}
