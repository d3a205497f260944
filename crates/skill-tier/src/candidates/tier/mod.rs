mod catalog;
mod rules;

pub use catalog::{describe, rationale, TierDescriptor};
pub use rules::TierRule;

use super::domain::{Assessment, Tier};
use rules::TIER_RULES;

/// Tier assigned when no rule in the cascade matches.
pub const FALLBACK_TIER: Tier = Tier::Beginner;

/// Classify an assessment by walking the rule table; the first matching rule wins.
pub fn classify(assessment: &Assessment) -> Tier {
    classify_with_rule(assessment).0
}

/// Same as [`classify`], also returning the rule that fired (`None` for the fallback).
pub fn classify_with_rule(assessment: &Assessment) -> (Tier, Option<&'static TierRule>) {
    TIER_RULES
        .iter()
        .find(|rule| (rule.matches)(assessment))
        .map(|rule| (rule.tier, Some(rule)))
        .unwrap_or((FALLBACK_TIER, None))
}

/// Ordered rule table backing the classifier, exposed for audits and logging.
pub fn rules() -> &'static [TierRule] {
    &TIER_RULES
}
