pub mod columns;
pub mod normalizer;
pub mod reader;

pub use columns::{find_column, ColumnMap, Field};
pub use normalizer::{normalize, parse_metric};
pub use reader::{read_report, RawReport};

use audit_core::{AuditResult, TermRecord};

/// Full ingest path: parse the CSV, resolve the schema, normalize rows.
pub fn ingest(csv_data: &str) -> AuditResult<(ColumnMap, Vec<TermRecord>)> {
    let report = read_report(csv_data)?;
    let columns = ColumnMap::resolve(&report.headers)?;
    let records = normalize(&report, &columns);
    Ok((columns, records))
}
