use std::cmp::Ordering;
use std::path::Path;

use audit_core::{AuditError, AuditResult, TermRecord};
use report_ingest::{ColumnMap, Field};

/// Highest spend first; ties keep input order.
pub fn sort_by_spend_desc(records: &mut [TermRecord]) {
    records.sort_by(|a, b| b.spend.partial_cmp(&a.spend).unwrap_or(Ordering::Equal));
}

fn format_metric(value: f64) -> String {
    value.to_string()
}

fn field_value(record: &TermRecord, field: Field) -> String {
    match field {
        Field::Term => record.term.clone(),
        Field::MatchType => record.match_type.clone().unwrap_or_default(),
        Field::AddedAs => record.added_as.clone().unwrap_or_default(),
        Field::Impressions => format_metric(record.impressions),
        Field::Clicks => format_metric(record.clicks),
        Field::Ctr => format_metric(record.ctr),
        Field::Spend => format_metric(record.spend),
        Field::Cpc => format_metric(record.cost_per_click),
        Field::Orders => format_metric(record.orders),
        Field::Sales => format_metric(record.sales),
        Field::Acos => format_metric(record.acos),
        Field::Roas => format_metric(record.roas),
        Field::Cvr => format_metric(record.cvr),
    }
}

/// Write the labeled dataset as CSV: every resolved display column (under
/// its actual header name) plus Recommendation and Reason. Rows are written
/// in the order given; callers sort by spend first.
pub fn write_labeled_csv(
    path: &Path,
    records: &[TermRecord],
    columns: &ColumnMap,
) -> AuditResult<()> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| AuditError::Export(e.to_string()))?;

    let display = columns.display_columns();
    let mut header: Vec<&str> = display.iter().map(|(_, name)| *name).collect();
    header.push("Recommendation");
    header.push("Reason");
    writer
        .write_record(&header)
        .map_err(|e| AuditError::Export(e.to_string()))?;

    for record in records {
        let mut row: Vec<String> = display
            .iter()
            .map(|(field, _)| field_value(record, *field))
            .collect();
        row.push(record.recommendation.as_label().to_string());
        row.push(record.reason.clone());
        writer
            .write_record(&row)
            .map_err(|e| AuditError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| AuditError::Export(e.to_string()))?;
    tracing::debug!(rows = records.len(), path = %path.display(), "wrote labeled csv");
    Ok(())
}
