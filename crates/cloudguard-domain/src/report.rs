use crate::policy::FailOn;
use crate::rule::RuleOutput;
use cloudguard_types::{SeverityCounts, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// One output per evaluated rule, in rule-id order.
    pub rules: Vec<RuleOutput>,
    pub counts: SeverityCounts,
}

pub fn compute_verdict(counts: &SeverityCounts, fail_on: FailOn) -> Verdict {
    if counts.failing > 0 {
        return Verdict::Fail;
    }

    if counts.warning > 0 {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Failing => Verdict::Warn,
        };
    }

    if counts.unknown > 0 {
        return Verdict::Incomplete;
    }

    Verdict::Pass
}
