use serde::{Deserialize, Serialize};

/// Outcome of a rank lookup.
///
/// Both fields are `None` when the identifier was not found or there was
/// nothing to rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// "Top X%" figure with two decimals; lower is better
    #[serde(rename = "percentage", default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<String>,
}

impl RankResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn found(rank: u32, total: usize) -> Self {
        Self {
            rank: Some(rank),
            percentile: Some(format_percentile(rank, total)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rank.is_none()
    }

    /// Display form for the results panel
    pub fn report(&self, total: usize) -> Option<StandingReport> {
        let rank = self.rank?;
        let percentile = self.percentile.clone()?;
        Some(StandingReport {
            rank,
            total,
            rank_label: format!("{} of {}", rank, total),
            percentile_label: format!("Top {}%", percentile),
            percentile,
        })
    }
}

/// Rank and percentile as the results panel shows them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingReport {
    pub rank: u32,
    pub total: usize,
    pub percentile: String,
    pub rank_label: String,
    pub percentile_label: String,
}

/// `rank / total * 100` to two decimals, halves rounded away from zero.
fn format_percentile(rank: u32, total: usize) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    let percent = f64::from(rank) / total as f64 * 100.0;
    let rounded = (percent * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}
