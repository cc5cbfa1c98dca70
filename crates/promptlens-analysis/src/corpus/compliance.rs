//! Weighted compliance score.

use std::collections::BTreeMap;

use crate::detector::DetectionRecord;

/// Upper bound of the compliance score.
pub const MAX_COMPLIANCE: f64 = 100.0;

/// Sum of the weights of matched categories, capped at 100. Weights for
/// categories the library does not define never match.
pub fn compliance_score(detection: &DetectionRecord, weights: &BTreeMap<String, f64>) -> f64 {
    weights
        .iter()
        .filter(|(category, _)| detection.is_matched(category))
        .map(|(_, weight)| weight)
        .sum::<f64>()
        .min(MAX_COMPLIANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlens_core::config::corpus_config::default_compliance_weights;

    fn detection(matched: &[&str]) -> DetectionRecord {
        let mut record = DetectionRecord::default();
        for name in matched {
            record.counts.insert(name.to_string(), 1);
            record.matched.insert(name.to_string());
        }
        record
    }

    #[test]
    fn test_weighted_sum() {
        let weights = default_compliance_weights();
        assert_eq!(compliance_score(&detection(&[]), &weights), 0.0);
        assert_eq!(compliance_score(&detection(&["xml_blocks", "variables"]), &weights), 45.0);
    }

    #[test]
    fn test_capped() {
        let mut weights = BTreeMap::new();
        weights.insert("a".to_string(), 80.0);
        weights.insert("b".to_string(), 80.0);
        assert_eq!(compliance_score(&detection(&["a", "b"]), &weights), 100.0);
    }
}
