use audit_core::{AuditError, AuditResult};

/// Canonical semantic fields an Amazon Ads export may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Term,
    MatchType,
    AddedAs,
    Impressions,
    Clicks,
    Ctr,
    Spend,
    Cpc,
    Orders,
    Sales,
    Acos,
    Roas,
    Cvr,
}

impl Field {
    /// Export/display order, matching the audit report layout.
    pub const DISPLAY_ORDER: [Field; 13] = [
        Field::Term,
        Field::MatchType,
        Field::AddedAs,
        Field::Impressions,
        Field::Clicks,
        Field::Spend,
        Field::Cpc,
        Field::Orders,
        Field::Sales,
        Field::Acos,
        Field::Roas,
        Field::Ctr,
        Field::Cvr,
    ];

    pub fn canonical(&self) -> &'static str {
        match self {
            Field::Term => "term",
            Field::MatchType => "match_type",
            Field::AddedAs => "added_as",
            Field::Impressions => "impressions",
            Field::Clicks => "clicks",
            Field::Ctr => "ctr",
            Field::Spend => "spend",
            Field::Cpc => "cpc",
            Field::Orders => "orders",
            Field::Sales => "sales",
            Field::Acos => "acos",
            Field::Roas => "roas",
            Field::Cvr => "cvr",
        }
    }

    /// Header spellings seen across seller-central and bulk exports.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Term => &["matched product", "customer search term", "search term"],
            Field::MatchType => &["product targets", "match type", "targeting"],
            Field::AddedAs => &["added as"],
            Field::Impressions => &["impressions"],
            Field::Clicks => &["clicks"],
            Field::Ctr => &["ctr"],
            Field::Spend => &["spend(usd)", "spend", "cost"],
            Field::Cpc => &["cpc(usd)", "cpc"],
            Field::Orders => &["orders"],
            Field::Sales => &["sales(usd)", "sales"],
            Field::Acos => &["acos"],
            Field::Roas => &["roas"],
            Field::Cvr => &["conversion rate", "cvr"],
        }
    }
}

/// Case-insensitive, whitespace-tolerant header lookup: returns the first
/// actual header equal to any alias.
pub fn find_column<'a>(headers: &'a [String], aliases: &[&str]) -> Option<&'a str> {
    for header in headers {
        let clean = header.trim().to_lowercase();
        if aliases.iter().any(|a| clean == a.trim().to_lowercase()) {
            return Some(header.as_str());
        }
    }
    None
}

/// Resolved mapping from canonical fields to the report's actual headers.
/// Required fields hold the matched header name; optional ones degrade to
/// `None` and normalize to zero downstream.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub term: String,
    pub match_type: Option<String>,
    pub added_as: Option<String>,
    pub impressions: String,
    pub clicks: String,
    pub ctr: Option<String>,
    pub spend: String,
    pub cpc: Option<String>,
    pub orders: String,
    pub sales: String,
    pub acos: Option<String>,
    pub roas: Option<String>,
    pub cvr: Option<String>,
}

impl ColumnMap {
    /// Resolve every canonical field against the actual header list.
    ///
    /// Fails with `SchemaMismatch` naming all unresolved required fields;
    /// the original header list is passed through untouched so the caller
    /// can show actionable feedback.
    pub fn resolve(headers: &[String]) -> AuditResult<Self> {
        let lookup = |field: Field| {
            find_column(headers, field.aliases()).map(|h| h.to_string())
        };

        let term = lookup(Field::Term);
        let impressions = lookup(Field::Impressions);
        let clicks = lookup(Field::Clicks);
        let spend = lookup(Field::Spend);
        let orders = lookup(Field::Orders);
        let sales = lookup(Field::Sales);

        let required = [
            (Field::Term, &term),
            (Field::Impressions, &impressions),
            (Field::Clicks, &clicks),
            (Field::Spend, &spend),
            (Field::Orders, &orders),
            (Field::Sales, &sales),
        ];
        let missing: Vec<String> = required
            .iter()
            .filter(|(_, resolved)| resolved.is_none())
            .map(|(field, _)| field.canonical().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AuditError::SchemaMismatch {
                missing,
                headers: headers.to_vec(),
            });
        }

        Ok(Self {
            term: term.unwrap_or_default(),
            match_type: lookup(Field::MatchType),
            added_as: lookup(Field::AddedAs),
            impressions: impressions.unwrap_or_default(),
            clicks: clicks.unwrap_or_default(),
            ctr: lookup(Field::Ctr),
            spend: spend.unwrap_or_default(),
            cpc: lookup(Field::Cpc),
            orders: orders.unwrap_or_default(),
            sales: sales.unwrap_or_default(),
            acos: lookup(Field::Acos),
            roas: lookup(Field::Roas),
            cvr: lookup(Field::Cvr),
        })
    }

    /// Actual header resolved for a field, if any.
    pub fn header(&self, field: Field) -> Option<&str> {
        match field {
            Field::Term => Some(self.term.as_str()),
            Field::MatchType => self.match_type.as_deref(),
            Field::AddedAs => self.added_as.as_deref(),
            Field::Impressions => Some(self.impressions.as_str()),
            Field::Clicks => Some(self.clicks.as_str()),
            Field::Ctr => self.ctr.as_deref(),
            Field::Spend => Some(self.spend.as_str()),
            Field::Cpc => self.cpc.as_deref(),
            Field::Orders => Some(self.orders.as_str()),
            Field::Sales => Some(self.sales.as_str()),
            Field::Acos => self.acos.as_deref(),
            Field::Roas => self.roas.as_deref(),
            Field::Cvr => self.cvr.as_deref(),
        }
    }

    /// Resolved fields in display order with their actual header names.
    pub fn display_columns(&self) -> Vec<(Field, &str)> {
        Field::DISPLAY_ORDER
            .iter()
            .filter_map(|&field| self.header(field).map(|h| (field, h)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_column_case_and_whitespace() {
        let h = headers(&["  Spend(USD) ", "Clicks"]);
        let found = find_column(&h, Field::Spend.aliases());
        assert_eq!(found, Some("  Spend(USD) "));
    }

    #[test]
    fn test_find_column_first_match_wins() {
        let h = headers(&["Cost", "Spend"]);
        // "cost" appears first in the header list, so it resolves.
        assert_eq!(find_column(&h, Field::Spend.aliases()), Some("Cost"));
    }

    #[test]
    fn test_find_column_not_found() {
        let h = headers(&["Clicks", "Impressions"]);
        assert_eq!(find_column(&h, Field::Spend.aliases()), None);
    }

    #[test]
    fn test_resolve_full_schema() {
        let h = headers(&[
            "Customer Search Term",
            "Match Type",
            "Added As",
            "Impressions",
            "Clicks",
            "CTR",
            "Spend(USD)",
            "CPC(USD)",
            "Orders",
            "Sales(USD)",
            "ACOS",
            "ROAS",
            "Conversion Rate",
        ]);
        let map = ColumnMap::resolve(&h).unwrap();
        assert_eq!(map.term, "Customer Search Term");
        assert_eq!(map.spend, "Spend(USD)");
        assert_eq!(map.cvr.as_deref(), Some("Conversion Rate"));
        assert_eq!(map.display_columns().len(), 13);
    }

    #[test]
    fn test_resolve_missing_orders() {
        let h = headers(&[
            "Search Term",
            "Impressions",
            "Clicks",
            "Spend",
            "Sales",
        ]);
        let err = ColumnMap::resolve(&h).unwrap_err();
        match err {
            audit_core::AuditError::SchemaMismatch { missing, headers } => {
                assert_eq!(missing, vec!["orders".to_string()]);
                assert_eq!(headers, h);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_optional_fields_degrade() {
        let h = headers(&[
            "Search Term",
            "Impressions",
            "Clicks",
            "Spend",
            "Orders",
            "Sales",
        ]);
        let map = ColumnMap::resolve(&h).unwrap();
        assert!(map.acos.is_none());
        assert!(map.ctr.is_none());
        assert!(map.cvr.is_none());
        assert!(map.added_as.is_none());
        // Only the six required columns show up in the display set.
        assert_eq!(map.display_columns().len(), 6);
    }
}
