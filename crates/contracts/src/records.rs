//! Shift record contracts shared between frontend and backend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::earnings::{self, EarningsBreakdown, ShiftInput};

// ============================================================================
// Persisted record
// ============================================================================

/// One shift record, unique per (account, calendar date).
///
/// The derived fields are computed at write time by the backend from the raw
/// counters and are never independently mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub date: NaiveDate,

    pub morning_cash: i64,
    pub evening_cash: i64,
    pub total_orders: i64,
    pub cash_orders: i64,
    pub online_tips: i64,

    pub cash_earnings: i64,
    pub online_earnings: i64,
    pub bonus_earnings: i64,
    pub total_earnings: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Form draft + validation
// ============================================================================

/// A single violated validation rule, addressed to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// What the entry form submits: raw counters only, derived fields are the
/// backend's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecordDraft {
    pub date: NaiveDate,
    pub morning_cash: i64,
    pub evening_cash: i64,
    pub total_orders: i64,
    pub cash_orders: i64,
    #[serde(default)]
    pub online_tips: i64,
}

impl ShiftRecordDraft {
    /// Checks every field rule and reports all violations at once, so the
    /// form can mark fields inline. Runs on the client before any remote
    /// call and again on the server before the insert.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.morning_cash < 0 {
            errors.push(FieldError::new("morning_cash", "Cannot be negative"));
        }
        if self.evening_cash < 0 {
            errors.push(FieldError::new("evening_cash", "Cannot be negative"));
        }
        if self.total_orders < 0 {
            errors.push(FieldError::new("total_orders", "Cannot be negative"));
        }
        if self.cash_orders < 0 {
            errors.push(FieldError::new("cash_orders", "Cannot be negative"));
        }
        if self.online_tips < 0 {
            errors.push(FieldError::new("online_tips", "Cannot be negative"));
        }
        if self.cash_orders >= 0 && self.total_orders >= 0 && self.cash_orders > self.total_orders {
            errors.push(FieldError::new(
                "cash_orders",
                "Cannot exceed total orders",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn raw_input(&self) -> ShiftInput {
        ShiftInput {
            total_orders: self.total_orders,
            cash_orders: self.cash_orders,
            morning_cash: self.morning_cash,
            evening_cash: self.evening_cash,
        }
    }

    /// Derived figures for this draft, for the form's live preview.
    pub fn breakdown(&self) -> EarningsBreakdown {
        earnings::calculate(self.raw_input())
    }
}

// ============================================================================
// Account-wide summary
// ============================================================================

/// Aggregate of the derived fields across all of one account's records.
/// Derived on demand, never persisted. An account with no records gets all
/// zeroes.
///
/// `grand_total_earnings` includes online tips on top of the per-record
/// totals; tips are money received, they belong in the headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_cash_earnings: i64,
    pub total_online_earnings: i64,
    pub total_bonus_earnings: i64,
    pub total_online_tips: i64,
    pub grand_total_earnings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ShiftRecordDraft {
        ShiftRecordDraft {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date"),
            morning_cash: 200,
            evening_cash: 850,
            total_orders: 25,
            cash_orders: 10,
            online_tips: 0,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn cash_orders_above_total_is_rejected() {
        let d = ShiftRecordDraft {
            total_orders: 10,
            cash_orders: 11,
            ..draft()
        };
        let errors = d.validate().expect_err("must be rejected");
        assert!(errors.iter().any(|e| e.field == "cash_orders"));
    }

    #[test]
    fn negative_values_are_reported_per_field() {
        let d = ShiftRecordDraft {
            morning_cash: -1,
            evening_cash: -1,
            online_tips: -5,
            ..draft()
        };
        let errors = d.validate().expect_err("must be rejected");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"morning_cash"));
        assert!(fields.contains(&"evening_cash"));
        assert!(fields.contains(&"online_tips"));
    }

    #[test]
    fn preview_matches_the_calculator() {
        let b = draft().breakdown();
        assert_eq!(b.total_earnings, 2025);
    }

    #[test]
    fn default_summary_is_all_zero() {
        let s = Summary::default();
        assert_eq!(s.grand_total_earnings, 0);
        assert_eq!(s.total_cash_earnings, 0);
        assert_eq!(s.total_online_tips, 0);
    }
}
