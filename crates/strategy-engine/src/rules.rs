use audit_core::{Recommendation, TermRecord, Thresholds};

/// One tagged rule in the cascade: label + reason + predicate.
pub struct Rule {
    pub label: Recommendation,
    pub reason: &'static str,
    pub applies: fn(&TermRecord, &Thresholds) -> bool,
}

fn wasted_spend(r: &TermRecord, t: &Thresholds) -> bool {
    r.spend >= t.waste_spend && r.orders == 0.0 && r.clicks >= t.min_clicks
}

fn acos_above_goal(r: &TermRecord, t: &Thresholds) -> bool {
    r.orders > 0.0 && r.acos > t.target_acos
}

fn profitable_converter(r: &TermRecord, t: &Thresholds) -> bool {
    r.orders >= t.min_orders
        && r.acos <= t.target_acos
        && r.cvr >= t.min_cvr
        && r.ctr >= t.min_ctr
}

fn unpromoted_winner(r: &TermRecord, t: &Thresholds) -> bool {
    r.orders >= t.min_orders && r.acos <= t.target_acos && r.added_as.is_none()
}

/// The ordered cascade. Business priority is encoded in the ordering:
/// wasted spend first (exclusive with everything else), then bid pressure,
/// then the two profitability rules — SCALE before PROMOTE since both
/// share the profitability gate but SCALE also demands conversion strength.
pub fn rule_cascade() -> &'static [Rule] {
    static CASCADE: [Rule; 4] = [
        Rule {
            label: Recommendation::Negate,
            reason: "Spend with no orders",
            applies: wasted_spend,
        },
        Rule {
            label: Recommendation::LowerBid,
            reason: "ACOS above goal",
            applies: acos_above_goal,
        },
        Rule {
            label: Recommendation::Scale,
            reason: "Profitable + strong conversion",
            applies: profitable_converter,
        },
        Rule {
            label: Recommendation::Promote,
            reason: "Winner not yet added",
            applies: unpromoted_winner,
        },
    ];
    &CASCADE
}
