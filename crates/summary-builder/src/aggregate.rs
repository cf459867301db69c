use audit_core::{LabelCounts, PortfolioSummary, TermRecord};
use chrono::{DateTime, Utc};

/// Compute the portfolio snapshot for one labeled run.
///
/// Pure function of the records and the supplied timestamp; division by a
/// zero total yields 0 rather than a fault.
pub fn summarize(records: &[TermRecord], generated_at: DateTime<Utc>) -> PortfolioSummary {
    let total_spend: f64 = records.iter().map(|r| r.spend).sum();
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();

    let acos = if total_sales > 0.0 {
        total_spend / total_sales * 100.0
    } else {
        0.0
    };
    let roas = if total_spend > 0.0 {
        total_sales / total_spend
    } else {
        0.0
    };

    let mut counts = LabelCounts::default();
    for record in records {
        counts.count(record.recommendation);
    }

    PortfolioSummary {
        generated_at,
        total_spend,
        total_sales,
        acos,
        roas,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_core::Recommendation;

    fn row(spend: f64, sales: f64, label: Recommendation) -> TermRecord {
        TermRecord {
            spend,
            sales,
            recommendation: label,
            ..TermRecord::default()
        }
    }

    #[test]
    fn test_portfolio_arithmetic() {
        let records = vec![
            row(600.0, 2500.0, Recommendation::Scale),
            row(400.0, 1500.0, Recommendation::Monitor),
        ];
        let summary = summarize(&records, Utc::now());
        assert_eq!(summary.total_spend, 1000.0);
        assert_eq!(summary.total_sales, 4000.0);
        assert!((summary.acos - 25.0).abs() < 1e-9);
        assert!((summary.roas - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_sales_no_division_fault() {
        let records = vec![row(50.0, 0.0, Recommendation::Negate)];
        let summary = summarize(&records, Utc::now());
        assert_eq!(summary.acos, 0.0);
        assert_eq!(summary.roas, 0.0);
    }

    #[test]
    fn test_zero_spend_no_division_fault() {
        let records = vec![row(0.0, 10.0, Recommendation::Monitor)];
        let summary = summarize(&records, Utc::now());
        assert_eq!(summary.roas, 0.0);
        assert!((summary.acos - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_counting() {
        let records = vec![
            row(1.0, 0.0, Recommendation::Negate),
            row(1.0, 0.0, Recommendation::Negate),
            row(1.0, 5.0, Recommendation::LowerBid),
            row(1.0, 5.0, Recommendation::Scale),
            row(1.0, 5.0, Recommendation::Monitor),
        ];
        let summary = summarize(&records, Utc::now());
        assert_eq!(summary.counts.negate, 2);
        assert_eq!(summary.counts.lower_bid, 1);
        assert_eq!(summary.counts.scale, 1);
        assert_eq!(summary.counts.monitor, 1);
    }

    #[test]
    fn test_empty_dataset() {
        let summary = summarize(&[], Utc::now());
        assert_eq!(summary.total_spend, 0.0);
        assert_eq!(summary.acos, 0.0);
        assert_eq!(summary.counts.negate, 0);
    }
}
