use audit_core::{Recommendation, TermRecord, Thresholds};

use crate::rules::rule_cascade;

/// Consolidation switch for the two historical report variants: the basic
/// run computes KPIs only and leaves every row on MONITOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    #[default]
    Full,
    KpiOnly,
}

/// Parameterized classification engine.
#[derive(Debug, Clone, Copy)]
pub struct StrategyEngine {
    pub thresholds: Thresholds,
    pub mode: EngineMode,
}

impl StrategyEngine {
    pub fn new(thresholds: Thresholds, mode: EngineMode) -> Self {
        Self { thresholds, mode }
    }

    /// Label every record in place. Idempotent: labels are recomputed from
    /// the metric fields, never from a previous label.
    pub fn classify(&self, records: &mut [TermRecord]) {
        if self.mode == EngineMode::KpiOnly {
            for record in records.iter_mut() {
                record.recommendation = Recommendation::Monitor;
                record.reason.clear();
            }
            return;
        }

        for record in records.iter_mut() {
            let (label, reason) = classify_one(record, &self.thresholds);
            record.recommendation = label;
            record.reason = reason.to_string();
        }

        tracing::debug!(rows = records.len(), "classification complete");
    }
}

fn classify_one(record: &TermRecord, thresholds: &Thresholds) -> (Recommendation, &'static str) {
    for rule in rule_cascade() {
        if (rule.applies)(record, thresholds) {
            return (rule.label, rule.reason);
        }
    }
    (Recommendation::Monitor, "")
}

/// Convenience wrapper for the full-cascade engine.
pub fn classify(records: &mut [TermRecord], thresholds: &Thresholds) {
    StrategyEngine::new(*thresholds, EngineMode::Full).classify(records);
}
