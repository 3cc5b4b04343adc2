//! # Priority Classifier
//!
//! Derives an urgency tier and a waiting-time label from an order's age.
//! Both are recomputed on every render against the caller's clock.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt::Display;

/// Urgency tier. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Normal,
    Medium,
    High,
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Normal => write!(f, "normal"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Tier thresholds in whole minutes. A tier starts strictly *after* its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriorityPolicy {
    pub medium_after_minutes: i64,
    pub high_after_minutes: i64,
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            medium_after_minutes: 15,
            high_after_minutes: 30,
        }
    }
}

impl PriorityPolicy {
    pub fn tier(&self, elapsed_minutes: i64) -> Priority {
        if elapsed_minutes > self.high_after_minutes {
            Priority::High
        } else if elapsed_minutes > self.medium_after_minutes {
            Priority::Medium
        } else {
            Priority::Normal
        }
    }
}

/// How long an order has been waiting, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingTime {
    pub minutes: i64,
}

impl WaitingTime {
    pub fn label(&self) -> String {
        match self.minutes {
            m if m < 1 => "just arrived".to_string(),
            1 => "1 minute".to_string(),
            m => format!("{m} minutes"),
        }
    }
}

impl Display for WaitingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Result of classifying one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub priority: Priority,
    pub waiting: WaitingTime,
}

/// Whole minutes between `created_at` and `now`, floored. Clock skew that puts
/// `created_at` in the future counts as zero.
pub fn elapsed_minutes(now: DateTime<Utc>, created_at: DateTime<Utc>) -> i64 {
    let seconds = (now - created_at).num_seconds().max(0);
    seconds / 60
}

pub fn classify_with(
    policy: &PriorityPolicy,
    now: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> Classification {
    let minutes = elapsed_minutes(now, created_at);
    Classification {
        priority: policy.tier(minutes),
        waiting: WaitingTime { minutes },
    }
}

/// Classifies with the default 15/30 minute thresholds.
pub fn classify(now: DateTime<Utc>, created_at: DateTime<Utc>) -> Classification {
    classify_with(&PriorityPolicy::default(), now, created_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn aged(seconds: i64) -> Classification {
        classify(now(), now() - Duration::seconds(seconds))
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(aged(15 * 60 + 59).priority, Priority::Normal);
        assert_eq!(aged(16 * 60).priority, Priority::Medium);
        assert_eq!(aged(30 * 60 + 59).priority, Priority::Medium);
        assert_eq!(aged(31 * 60).priority, Priority::High);
    }

    #[test]
    fn test_waiting_labels() {
        assert_eq!(aged(0).waiting.label(), "just arrived");
        assert_eq!(aged(59).waiting.label(), "just arrived");
        assert_eq!(aged(60).waiting.label(), "1 minute");
        assert_eq!(aged(2 * 60).waiting.label(), "2 minutes");
        assert_eq!(aged(35 * 60).waiting.to_string(), "35 minutes");
    }

    #[test]
    fn test_priority_is_monotonic_in_age() {
        let mut previous = Priority::Normal;
        for minutes in 0..120 {
            let current = aged(minutes * 60).priority;
            assert!(current >= previous, "regressed at {minutes} minutes");
            previous = current;
        }
    }

    #[test]
    fn test_future_created_at_is_clamped() {
        let result = aged(-5 * 60);
        assert_eq!(result.waiting.minutes, 0);
        assert_eq!(result.priority, Priority::Normal);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PriorityPolicy {
            medium_after_minutes: 5,
            high_after_minutes: 10,
        };
        let created = now() - Duration::minutes(7);
        assert_eq!(classify_with(&policy, now(), created).priority, Priority::Medium);
    }
}
