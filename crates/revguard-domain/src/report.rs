use revguard_types::{Finding, RevguardData, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Findings in encounter order.
    pub findings: Vec<Finding>,
    pub data: RevguardData,
}
