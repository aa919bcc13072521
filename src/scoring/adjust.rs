//! Cross-dimension adjustment rules.
//!
//! A fixed, ordered list of conditional boosts applied once after
//! normalization. Each rule reads the running score state, so an earlier
//! rule's boost can create the trigger for a later rule. The list is
//! never re-evaluated to a fixpoint.

use super::engine::ScoreCard;
use crate::model::Dimension;

/// One conditional boost: if `trigger`'s score exceeds `threshold`,
/// multiply `target`'s score by `factor`, clamped to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentRule {
    pub trigger: Dimension,
    pub threshold: f32,
    pub target: Dimension,
    pub factor: f32,
}

/// The declared rule sequence. Order is part of the contract.
pub const ADJUSTMENT_RULES: [AdjustmentRule; 4] = [
    AdjustmentRule {
        trigger: Dimension::LD,
        threshold: 70.0,
        target: Dimension::TR,
        factor: 1.10,
    },
    AdjustmentRule {
        trigger: Dimension::TR,
        threshold: 70.0,
        target: Dimension::Psy,
        factor: 1.05,
    },
    AdjustmentRule {
        trigger: Dimension::CT,
        threshold: 75.0,
        target: Dimension::Cog,
        factor: 1.10,
    },
    AdjustmentRule {
        trigger: Dimension::Psy,
        threshold: 80.0,
        target: Dimension::LD,
        factor: 1.05,
    },
];

/// Apply the rule sequence in declared order.
pub fn apply_adjustments(scores: &mut ScoreCard) {
    for rule in &ADJUSTMENT_RULES {
        if scores.get(rule.trigger) > rule.threshold {
            let boosted = (scores.get(rule.target) * rule.factor).min(100.0);
            scores.set(rule.target, boosted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimension::{Cog, Psy, CT, LD, TR};

    #[test]
    fn boost_applies_above_threshold_only() {
        let mut scores = ScoreCard::from_pairs(&[(LD, 71.0), (TR, 50.0)]);
        apply_adjustments(&mut scores);
        assert!((scores.get(TR) - 55.0).abs() < 1e-4);

        let mut scores = ScoreCard::from_pairs(&[(LD, 70.0), (TR, 50.0)]);
        apply_adjustments(&mut scores);
        // Threshold is strict
        assert!((scores.get(TR) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn boost_clamps_to_one_hundred() {
        let mut scores = ScoreCard::from_pairs(&[(LD, 80.0), (TR, 95.0)]);
        apply_adjustments(&mut scores);
        assert_eq!(scores.get(TR), 100.0);
    }

    #[test]
    fn earlier_rule_can_create_later_trigger() {
        // TR starts below its own trigger threshold; rule 1 lifts it past
        // 70 and rule 2 must then fire on Psy.
        let mut scores = ScoreCard::from_pairs(&[(LD, 75.0), (TR, 68.0), (Psy, 40.0)]);
        apply_adjustments(&mut scores);
        assert!((scores.get(TR) - 74.8).abs() < 1e-3);
        assert!((scores.get(Psy) - 42.0).abs() < 1e-3);
    }

    #[test]
    fn full_sequence_applies_each_rule_once() {
        // Psy crosses 80 only through rule 2's boost; rule 4 comes later
        // in the sequence and must see it. Each boost applies exactly once.
        let mut scores = ScoreCard::from_pairs(&[(LD, 75.0), (TR, 72.0), (Psy, 78.0)]);
        apply_adjustments(&mut scores);
        // rule 1: TR -> 79.2; rule 2: Psy -> 81.9; rule 4: LD -> 78.75
        assert!((scores.get(TR) - 79.2).abs() < 1e-3);
        assert!((scores.get(Psy) - 81.9).abs() < 1e-3);
        assert!((scores.get(LD) - 78.75).abs() < 1e-3);
        assert_eq!(scores.get(Cog), 0.0);
        assert_eq!(scores.get(CT), 0.0);
    }
}
