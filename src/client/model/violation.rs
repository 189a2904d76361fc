//! Recent-violations list: de-duplication, feedback tracking and the detail
//! panel.

use std::collections::{HashMap, HashSet};

use crate::{
    client::model::{error::ApiError, format::format_datetime},
    model::violation::{ViolationDto, ViolationType},
};

/// Identity of a listed violation: `(id, created_at, user_id, violation_type)`.
/// The backend can repeat an id across users and types, so the id alone is
/// not unique.
pub fn row_key(violation: &ViolationDto) -> String {
    format!(
        "{}|{}|{}|{}",
        violation.id,
        violation.created_at,
        violation.user_id.as_deref().unwrap_or_default(),
        violation.violation_type.as_str()
    )
}

/// Drops repeated row keys, keeping the first occurrence, and sorts newest
/// first.
pub fn dedup_violations(violations: Vec<ViolationDto>) -> Vec<ViolationDto> {
    let mut seen = HashSet::new();
    let mut unique: Vec<ViolationDto> = violations
        .into_iter()
        .filter(|v| seen.insert(row_key(v)))
        .collect();

    // Unparseable timestamps sort last
    unique.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    unique
}

#[derive(Clone, Debug, PartialEq)]
enum FeedbackState {
    Submitting,
    Recorded(bool),
    Failed(String),
}

/// What a row shows in its feedback column.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedbackView {
    /// Both buttons enabled, with the last failure if any.
    Actionable { error: Option<String> },
    /// Buttons disabled while the call is in flight.
    Submitting,
    /// `true` for a false positive.
    Recorded(bool),
}

impl FeedbackView {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            FeedbackView::Recorded(true) => Some("False"),
            FeedbackView::Recorded(false) => Some("Correct"),
            _ => None,
        }
    }
}

/// Session-local feedback per violation id. Recorded feedback is final.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackTracker {
    states: HashMap<i64, FeedbackState>,
}

impl FeedbackTracker {
    pub fn view(&self, violation: &ViolationDto) -> FeedbackView {
        if let Some(false_positive) = violation.false_positive {
            return FeedbackView::Recorded(false_positive);
        }

        match self.states.get(&violation.id) {
            Some(FeedbackState::Recorded(value)) => FeedbackView::Recorded(*value),
            Some(FeedbackState::Submitting) => FeedbackView::Submitting,
            Some(FeedbackState::Failed(error)) => FeedbackView::Actionable {
                error: Some(error.clone()),
            },
            None => FeedbackView::Actionable { error: None },
        }
    }

    /// Marks the violation as submitting. Returns `false` when feedback is
    /// not allowed, in which case no call must be made.
    pub fn begin(&mut self, violation: &ViolationDto) -> bool {
        if !matches!(self.view(violation), FeedbackView::Actionable { .. }) {
            return false;
        }
        self.states.insert(violation.id, FeedbackState::Submitting);
        true
    }

    pub fn finish(&mut self, violation_id: i64, is_false_positive: bool, result: Result<(), ApiError>) {
        let state = match result {
            Ok(()) => FeedbackState::Recorded(is_false_positive),
            Err(err) => FeedbackState::Failed(err.user_message()),
        };
        self.states.insert(violation_id, state);
    }
}

/// Fields shown when a row is expanded.
#[derive(Clone, Debug, PartialEq)]
pub struct ViolationDetail {
    pub type_label: String,
    pub icon: &'static str,
    pub confidence_percent: u8,
    pub action: String,
    pub user: String,
    pub channel: String,
    pub timestamp: String,
    pub verdict: &'static str,
    pub content: Option<String>,
}

impl ViolationDetail {
    pub fn new(violation: &ViolationDto, feedback: &FeedbackView) -> Self {
        let user = match (&violation.username, &violation.user_id) {
            (Some(name), Some(id)) => format!("{} ({})", name, id),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => "Unknown".to_string(),
        };

        Self {
            type_label: type_label(&violation.violation_type),
            icon: violation.violation_type.icon(),
            confidence_percent: violation.confidence_percent(),
            action: violation
                .action_taken
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "none".to_string()),
            user,
            channel: violation
                .channel_id
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            timestamp: violation
                .created_at()
                .map(format_datetime)
                .unwrap_or_else(|| violation.created_at.clone()),
            verdict: match feedback {
                FeedbackView::Recorded(true) => "Marked as false positive",
                FeedbackView::Recorded(false) => "Confirmed as correct",
                _ => "Awaiting feedback",
            },
            content: violation.content.clone().filter(|c| !c.is_empty()),
        }
    }
}

/// "hate_speech" -> "Hate Speech".
pub fn type_label(violation_type: &ViolationType) -> String {
    violation_type
        .as_str()
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(id: i64, created_at: &str, user: &str, kind: &str) -> ViolationDto {
        ViolationDto {
            id,
            violation_type: ViolationType::from(kind.to_string()),
            created_at: created_at.to_string(),
            user_id: Some(user.to_string()),
            confidence_score: 0.9,
            ..Default::default()
        }
    }

    #[test]
    fn dedup_keeps_one_entry_per_tuple_newest_first() {
        let list = vec![
            violation(1, "2025-08-01T10:00:00", "u1", "toxicity"),
            violation(2, "2025-08-02T10:00:00", "u1", "spam"),
            violation(1, "2025-08-01T10:00:00", "u1", "toxicity"),
            // Same id, different type: distinct entry
            violation(1, "2025-08-01T10:00:00", "u1", "spam"),
        ];

        let unique = dedup_violations(list);

        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0].id, 2);
        assert!(unique[1..].iter().all(|v| v.id == 1));

        let keys: HashSet<String> = unique.iter().map(row_key).collect();
        assert_eq!(keys.len(), unique.len());
    }

    #[test]
    fn rows_show_buttons_false_and_correct() {
        let tracker = FeedbackTracker::default();
        let mut rows = vec![
            violation(1, "2025-08-01T10:00:00", "u", "spam"),
            violation(2, "2025-08-01T10:00:00", "u", "spam"),
            violation(3, "2025-08-01T10:00:00", "u", "spam"),
        ];
        rows[1].false_positive = Some(true);
        rows[2].false_positive = Some(false);

        let views: Vec<FeedbackView> = rows.iter().map(|v| tracker.view(v)).collect();

        assert_eq!(views[0], FeedbackView::Actionable { error: None });
        assert_eq!(views[1].label(), Some("False"));
        assert_eq!(views[2].label(), Some("Correct"));
    }

    #[test]
    fn feedback_is_recorded_once() {
        let mut tracker = FeedbackTracker::default();
        let v = violation(7, "2025-08-01T10:00:00", "u", "toxicity");

        assert!(tracker.begin(&v));
        assert_eq!(tracker.view(&v), FeedbackView::Submitting);
        // Double click while in flight
        assert!(!tracker.begin(&v));

        tracker.finish(7, true, Ok(()));
        assert_eq!(tracker.view(&v), FeedbackView::Recorded(true));
        assert!(!tracker.begin(&v));
    }

    #[test]
    fn failed_feedback_can_be_retried() {
        let mut tracker = FeedbackTracker::default();
        let v = violation(8, "2025-08-01T10:00:00", "u", "toxicity");

        tracker.begin(&v);
        tracker.finish(8, false, Err(ApiError::new(500, "Database unavailable")));

        assert_eq!(
            tracker.view(&v),
            FeedbackView::Actionable {
                error: Some("Database unavailable".to_string())
            }
        );
        assert!(tracker.begin(&v));
    }

    #[test]
    fn detail_panel_fields() {
        let mut v = violation(9, "2025-08-01T10:00:00", "42", "hate_speech");
        v.username = Some("troll".to_string());
        v.action_taken = Some("deleted".to_string());

        let detail = ViolationDetail::new(&v, &FeedbackView::Recorded(false));

        assert_eq!(detail.type_label, "Hate Speech");
        assert_eq!(detail.confidence_percent, 90);
        assert_eq!(detail.user, "troll (42)");
        assert_eq!(detail.channel, "Unknown");
        assert_eq!(detail.verdict, "Confirmed as correct");
    }
}
