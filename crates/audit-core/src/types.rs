use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action assigned to a search term by the classification cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Negate,
    LowerBid,
    Scale,
    Promote,
    Monitor,
}

impl Recommendation {
    /// Label as it appears in exported reports.
    pub fn as_label(&self) -> &'static str {
        match self {
            Recommendation::Negate => "NEGATE",
            Recommendation::LowerBid => "LOWER BID",
            Recommendation::Scale => "SCALE",
            Recommendation::Promote => "PROMOTE",
            Recommendation::Monitor => "MONITOR",
        }
    }
}

impl Default for Recommendation {
    fn default() -> Self {
        Recommendation::Monitor
    }
}

/// One advertising entity (search term or product target) after
/// column resolution and metric normalization.
///
/// Numeric fields default to 0.0 when the source column is missing or a
/// cell fails to parse; text fields stay as the report provided them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermRecord {
    pub term: String,
    pub match_type: Option<String>,
    /// Blank or absent means the term has not been promoted into a
    /// dedicated targeting entry yet.
    pub added_as: Option<String>,
    pub impressions: f64,
    pub clicks: f64,
    pub spend: f64,
    pub cost_per_click: f64,
    pub orders: f64,
    pub sales: f64,
    /// Advertising cost of sales, percent.
    pub acos: f64,
    pub roas: f64,
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Conversion rate, percent.
    pub cvr: f64,
    #[serde(default)]
    pub recommendation: Recommendation,
    #[serde(default)]
    pub reason: String,
}

/// Caller-supplied rule thresholds. Defaults match the audit form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Spend at or above this with zero orders is wasted spend.
    pub waste_spend: f64,
    /// Target ACOS, percent.
    pub target_acos: f64,
    pub min_clicks: f64,
    pub min_orders: f64,
    /// Minimum click-through rate, percent.
    pub min_ctr: f64,
    /// Minimum conversion rate, percent.
    pub min_cvr: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            waste_spend: 5.0,
            target_acos: 30.0,
            min_clicks: 10.0,
            min_orders: 3.0,
            min_ctr: 0.3,
            min_cvr: 10.0,
        }
    }
}

/// Per-label row counts for one audit run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LabelCounts {
    pub negate: usize,
    pub lower_bid: usize,
    pub scale: usize,
    pub promote: usize,
    pub monitor: usize,
}

impl LabelCounts {
    pub fn count(&mut self, label: Recommendation) {
        match label {
            Recommendation::Negate => self.negate += 1,
            Recommendation::LowerBid => self.lower_bid += 1,
            Recommendation::Scale => self.scale += 1,
            Recommendation::Promote => self.promote += 1,
            Recommendation::Monitor => self.monitor += 1,
        }
    }
}

/// Portfolio-level aggregate snapshot, computed once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub generated_at: DateTime<Utc>,
    pub total_spend: f64,
    pub total_sales: f64,
    /// total spend / total sales x 100, or 0 when sales is 0.
    pub acos: f64,
    /// total sales / total spend, or 0 when spend is 0.
    pub roas: f64,
    pub counts: LabelCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recommendation_is_monitor() {
        let record = TermRecord::default();
        assert_eq!(record.recommendation, Recommendation::Monitor);
        assert!(record.reason.is_empty());
    }

    #[test]
    fn test_threshold_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.waste_spend, 5.0);
        assert_eq!(t.target_acos, 30.0);
        assert_eq!(t.min_clicks, 10.0);
        assert_eq!(t.min_orders, 3.0);
        assert_eq!(t.min_ctr, 0.3);
        assert_eq!(t.min_cvr, 10.0);
    }

    #[test]
    fn test_label_counts() {
        let mut counts = LabelCounts::default();
        counts.count(Recommendation::Negate);
        counts.count(Recommendation::Negate);
        counts.count(Recommendation::Scale);
        assert_eq!(counts.negate, 2);
        assert_eq!(counts.scale, 1);
        assert_eq!(counts.monitor, 0);
    }
}
