//! Figures derived from server statistics, and a consistency report.
//!
//! The report only flags suspicious combinations; the values the backend
//! sent are always displayed as-is.

use crate::model::{dashboard::HealthStatus, server::ServerStatsDto};

pub const HEALTHY_THRESHOLD: f64 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct DerivedStats {
    /// Violations per processed message, 0 when nothing was processed.
    pub violation_rate: f64,
    /// `1 - false_positives / violations`, 1 when there are no violations.
    pub accuracy: f64,
    pub is_healthy: bool,
    pub status: HealthStatus,
}

impl DerivedStats {
    pub fn from_stats(stats: &ServerStatsDto) -> Self {
        let violation_rate = if stats.total_messages > 0 {
            stats.total_violations as f64 / stats.total_messages as f64
        } else {
            0.0
        };
        let accuracy = if stats.total_violations > 0 {
            (1.0 - stats.false_positives as f64 / stats.total_violations as f64).clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self {
            violation_rate,
            accuracy,
            is_healthy: stats.health_score > HEALTHY_THRESHOLD,
            status: HealthStatus::from_score(stats.health_score),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsWarning {
    ViolationsWithoutMessages,
    PerfectHealthWithViolations,
    MoreFalsePositivesThanViolations,
    HealthOutOfRange,
}

impl StatsWarning {
    pub fn message(&self) -> &'static str {
        match self {
            StatsWarning::ViolationsWithoutMessages => {
                "Violations were recorded but no processed messages were reported."
            }
            StatsWarning::PerfectHealthWithViolations => {
                "Health score is 100% although violations were recorded."
            }
            StatsWarning::MoreFalsePositivesThanViolations => {
                "More false positives than violations were reported."
            }
            StatsWarning::HealthOutOfRange => "Health score is outside the 0-100% range.",
        }
    }
}

pub fn consistency_report(stats: &ServerStatsDto) -> Vec<StatsWarning> {
    let mut warnings = Vec::new();

    if stats.total_messages == 0 && stats.total_violations > 0 {
        warnings.push(StatsWarning::ViolationsWithoutMessages);
    }
    if stats.health_score >= 1.0 && stats.total_violations > 0 {
        warnings.push(StatsWarning::PerfectHealthWithViolations);
    }
    if stats.false_positives > stats.total_violations {
        warnings.push(StatsWarning::MoreFalsePositivesThanViolations);
    }
    if !(0.0..=1.0).contains(&stats.health_score) {
        warnings.push(StatsWarning::HealthOutOfRange);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(messages: u64, violations: u64, false_positives: u64, health: f64) -> ServerStatsDto {
        ServerStatsDto {
            total_messages: messages,
            total_violations: violations,
            false_positives,
            health_score: health,
            ..Default::default()
        }
    }

    #[test]
    fn derived_figures() {
        let derived = DerivedStats::from_stats(&stats(1000, 50, 5, 0.92));

        assert!((derived.violation_rate - 0.05).abs() < 1e-9);
        assert!((derived.accuracy - 0.9).abs() < 1e-9);
        assert!(derived.is_healthy);
        assert_eq!(derived.status, HealthStatus::Excellent);
    }

    #[test]
    fn empty_server_is_not_an_error() {
        let derived = DerivedStats::from_stats(&stats(0, 0, 0, 0.0));

        assert_eq!(derived.violation_rate, 0.0);
        assert_eq!(derived.accuracy, 1.0);
        assert!(consistency_report(&stats(0, 0, 0, 0.0)).is_empty());
    }

    #[test]
    fn inconsistent_values_are_reported_not_rewritten() {
        let input = stats(0, 12, 0, 1.0);
        let warnings = consistency_report(&input);

        assert_eq!(
            warnings,
            vec![
                StatsWarning::ViolationsWithoutMessages,
                StatsWarning::PerfectHealthWithViolations
            ]
        );
        assert_eq!(input.total_messages, 0);
        assert_eq!(input.health_score, 1.0);
    }
}
