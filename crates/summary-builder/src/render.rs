use audit_core::PortfolioSummary;

/// Currency with thousands separators and two decimals.
fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac:02}")
}

/// Render the deterministic executive summary block: timestamp, the four
/// headline metrics, three risk counts, and the fixed action checklist.
pub fn render_summary(summary: &PortfolioSummary) -> String {
    format!(
        "EXECUTIVE PERFORMANCE SUMMARY\n\
         \n\
         Reporting Date: {date}\n\
         \n\
         Total Spend: {spend}\n\
         Total Sales: {sales}\n\
         ROAS: {roas:.2}x\n\
         ACOS: {acos:.2}%\n\
         \n\
         Operational Risk:\n\
         • {negate} search terms wasting spend\n\
         • {lower} terms inefficient\n\
         • {scale} scalable winners\n\
         \n\
         Strategic Actions:\n\
         1. Cut waste immediately (NEGATE list)\n\
         2. Reduce bids on inefficiencies\n\
         3. Increase exposure on winners\n\
         4. Promote profitable queries into exact match\n",
        date = summary.generated_at.format("%Y-%m-%d"),
        spend = format_usd(summary.total_spend),
        sales = format_usd(summary.total_sales),
        roas = summary.roas,
        acos = summary.acos,
        negate = summary.counts.negate,
        lower = summary.counts.lower_bid,
        scale = summary.counts.scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_core::LabelCounts;
    use chrono::{TimeZone, Utc};

    fn sample_summary() -> PortfolioSummary {
        PortfolioSummary {
            generated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            total_spend: 1000.0,
            total_sales: 4000.0,
            acos: 25.0,
            roas: 4.0,
            counts: LabelCounts {
                negate: 3,
                lower_bid: 2,
                scale: 1,
                promote: 0,
                monitor: 10,
            },
        }
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(7.5), "$7.50");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_render_headline_metrics() {
        let text = render_summary(&sample_summary());
        assert!(text.starts_with("EXECUTIVE PERFORMANCE SUMMARY"));
        assert!(text.contains("Reporting Date: 2025-06-01"));
        assert!(text.contains("Total Spend: $1,000.00"));
        assert!(text.contains("Total Sales: $4,000.00"));
        assert!(text.contains("ROAS: 4.00x"));
        assert!(text.contains("ACOS: 25.00%"));
    }

    #[test]
    fn test_render_risk_counts_and_actions() {
        let text = render_summary(&sample_summary());
        assert!(text.contains("3 search terms wasting spend"));
        assert!(text.contains("2 terms inefficient"));
        assert!(text.contains("1 scalable winners"));
        assert!(text.contains("4. Promote profitable queries into exact match"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let summary = sample_summary();
        assert_eq!(render_summary(&summary), render_summary(&summary));
    }
}
