use super::super::domain::RiskLevel;

/// Medium-weight triggers needed before the level rises above low.
pub(crate) const MEDIUM_TRIGGER_THRESHOLD: usize = 2;

/// Priority-ordered decision: any high trigger wins, then the medium count.
pub(crate) fn decide_level(high_count: usize, medium_count: usize) -> RiskLevel {
    if high_count > 0 {
        RiskLevel::High
    } else if medium_count >= MEDIUM_TRIGGER_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
