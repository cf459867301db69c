use audit_core::TermRecord;

use crate::columns::ColumnMap;
use crate::reader::RawReport;

/// Coerce one cell to a float; empty or unparsable values become 0.0.
pub fn parse_metric(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn text_cell(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn metric_cell(row: &[String], idx: Option<usize>) -> f64 {
    idx.and_then(|i| row.get(i))
        .map(|s| parse_metric(s))
        .unwrap_or(0.0)
}

/// Build normalized records from the raw report under a resolved schema.
///
/// Applied per column, never dropping rows: missing optional columns read
/// as 0.0 so downstream rules see zeroes rather than gaps.
pub fn normalize(report: &RawReport, columns: &ColumnMap) -> Vec<TermRecord> {
    let idx = |header: &str| report.column_index(header);
    let opt_idx = |header: &Option<String>| header.as_deref().and_then(idx);

    let term_i = idx(&columns.term);
    let match_type_i = opt_idx(&columns.match_type);
    let added_as_i = opt_idx(&columns.added_as);
    let impressions_i = idx(&columns.impressions);
    let clicks_i = idx(&columns.clicks);
    let ctr_i = opt_idx(&columns.ctr);
    let spend_i = idx(&columns.spend);
    let cpc_i = opt_idx(&columns.cpc);
    let orders_i = idx(&columns.orders);
    let sales_i = idx(&columns.sales);
    let acos_i = opt_idx(&columns.acos);
    let roas_i = opt_idx(&columns.roas);
    let cvr_i = opt_idx(&columns.cvr);

    report
        .rows
        .iter()
        .map(|row| TermRecord {
            term: text_cell(row, term_i).unwrap_or_default(),
            match_type: text_cell(row, match_type_i),
            added_as: text_cell(row, added_as_i),
            impressions: metric_cell(row, impressions_i),
            clicks: metric_cell(row, clicks_i),
            spend: metric_cell(row, spend_i),
            cost_per_click: metric_cell(row, cpc_i),
            orders: metric_cell(row, orders_i),
            sales: metric_cell(row, sales_i),
            acos: metric_cell(row, acos_i),
            roas: metric_cell(row, roas_i),
            ctr: metric_cell(row, ctr_i),
            cvr: metric_cell(row, cvr_i),
            ..TermRecord::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_report;

    #[test]
    fn test_parse_metric_coercion() {
        let values = ["12", "", "abc", "7.5"];
        let parsed: Vec<f64> = values.iter().map(|v| parse_metric(v)).collect();
        assert_eq!(parsed, vec![12.0, 0.0, 0.0, 7.5]);
    }

    #[test]
    fn test_parse_metric_whitespace() {
        assert_eq!(parse_metric("  3.25 "), 3.25);
    }

    #[test]
    fn test_normalize_missing_optional_columns_read_zero() {
        let csv = "Search Term,Impressions,Clicks,Spend,Orders,Sales\n\
                   widget blue,1000,12,10.5,2,40\n";
        let report = read_report(csv).unwrap();
        let columns = ColumnMap::resolve(&report.headers).unwrap();
        let records = normalize(&report, &columns);

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.term, "widget blue");
        assert_eq!(r.spend, 10.5);
        assert_eq!(r.acos, 0.0);
        assert_eq!(r.ctr, 0.0);
        assert_eq!(r.cvr, 0.0);
        assert!(r.added_as.is_none());
    }

    #[test]
    fn test_normalize_blank_added_as_is_absent() {
        let csv = "Search Term,Impressions,Clicks,Spend,Orders,Sales,Added As\n\
                   winner,500,20,4.0,5,80,\n\
                   veteran,500,20,4.0,5,80,exact\n";
        let report = read_report(csv).unwrap();
        let columns = ColumnMap::resolve(&report.headers).unwrap();
        let records = normalize(&report, &columns);

        assert!(records[0].added_as.is_none());
        assert_eq!(records[1].added_as.as_deref(), Some("exact"));
    }

    #[test]
    fn test_normalize_bad_cells_never_drop_rows() {
        let csv = "Search Term,Impressions,Clicks,Spend,Orders,Sales\n\
                   a,not-a-number,12,,0,\n\
                   b,100,5,3.2,1,9.9\n";
        let report = read_report(csv).unwrap();
        let columns = ColumnMap::resolve(&report.headers).unwrap();
        let records = normalize(&report, &columns);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].impressions, 0.0);
        assert_eq!(records[0].spend, 0.0);
        assert_eq!(records[1].sales, 9.9);
    }
}
