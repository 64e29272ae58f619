use super::domain::RiskEntry;
use super::scoring::{classify_risk_tier, RiskTier};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct TierCountEntry {
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub count: usize,
}

/// Tier distribution across a report's risk entries.
#[derive(Debug, Clone, Serialize)]
pub struct RiskSummary {
    pub total: usize,
    pub by_tier: Vec<TierCountEntry>,
    /// Entries whose stored score is missing or zero; these block Gate C.
    pub pending: usize,
    /// Entries with a stored score that is negative or not finite.
    pub unclassified: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_tier: Option<RiskTier>,
}

impl RiskSummary {
    pub fn from_entries(entries: &[RiskEntry]) -> Self {
        let mut counts: HashMap<RiskTier, usize> = HashMap::new();
        let mut pending = 0;
        let mut unclassified = 0;

        for entry in entries {
            let score = match entry.hrn_number {
                Some(score) if entry.has_completed_score() => score,
                _ => {
                    pending += 1;
                    continue;
                }
            };
            match classify_risk_tier(score) {
                Ok(tier) => *counts.entry(tier).or_default() += 1,
                Err(_) => unclassified += 1,
            }
        }

        let by_tier = RiskTier::ordered()
            .into_iter()
            .map(|tier| TierCountEntry {
                tier,
                tier_label: tier.label(),
                count: counts.get(&tier).copied().unwrap_or(0),
            })
            .collect();

        let highest_tier = counts.keys().copied().max();

        Self {
            total: entries.len(),
            by_tier,
            pending,
            unclassified,
            highest_tier,
        }
    }

    pub fn count_for(&self, tier: RiskTier) -> usize {
        self.by_tier
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, hrn_number: Option<f64>) -> RiskEntry {
        RiskEntry {
            id: id.to_string(),
            machine_id: "prensa-01".to_string(),
            hazard: "Esmagamento".to_string(),
            hrn_number,
        }
    }

    #[test]
    fn counts_entries_per_tier_in_tier_order() {
        let entries = vec![
            entry("r1", Some(12.0)),
            entry("r2", Some(60.0)),
            entry("r3", Some(75.0)),
            entry("r4", Some(450.0)),
        ];

        let summary = RiskSummary::from_entries(&entries);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.count_for(RiskTier::Acceptable), 1);
        assert_eq!(summary.count_for(RiskTier::Tolerable), 2);
        assert_eq!(summary.count_for(RiskTier::Unacceptable), 0);
        assert_eq!(summary.count_for(RiskTier::Critical), 1);
        assert_eq!(summary.highest_tier, Some(RiskTier::Critical));
        let tiers: Vec<_> = summary.by_tier.iter().map(|entry| entry.tier).collect();
        assert_eq!(tiers, RiskTier::ordered().to_vec());
    }

    #[test]
    fn missing_and_zero_scores_are_pending() {
        let entries = vec![entry("r1", None), entry("r2", Some(0.0))];

        let summary = RiskSummary::from_entries(&entries);

        assert_eq!(summary.pending, 2);
        assert_eq!(summary.unclassified, 0);
        assert!(summary.highest_tier.is_none());
    }

    #[test]
    fn negative_and_non_finite_scores_are_unclassified_not_pending() {
        let entries = vec![
            entry("r1", Some(-4.0)),
            entry("r2", Some(f64::NAN)),
            entry("r3", Some(f64::INFINITY)),
            entry("r4", Some(60.0)),
        ];

        let summary = RiskSummary::from_entries(&entries);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.unclassified, 3);
        assert_eq!(summary.count_for(RiskTier::Tolerable), 1);
        assert_eq!(summary.highest_tier, Some(RiskTier::Tolerable));
    }
}
