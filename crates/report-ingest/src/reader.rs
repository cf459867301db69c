use audit_core::{AuditError, AuditResult};

/// Raw tabular report: the header row plus positional string cells.
#[derive(Debug, Clone)]
pub struct RawReport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawReport {
    /// Index of an actual header name within this report.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// Parse a comma-separated UTF-8 export with a header row.
///
/// Short rows are tolerated (missing cells read as empty downstream);
/// anything unreadable surfaces as `ParseFailure`.
pub fn read_report(csv_data: &str) -> AuditResult<RawReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AuditError::ParseFailure(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(AuditError::ParseFailure(
            "report has no header row".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| AuditError::ParseFailure(e.to_string()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "parsed report");
    Ok(RawReport { headers, rows })
}
