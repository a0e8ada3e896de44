//! Bucket building for the weekly earnings chart.
//!
//! Pure so the windowing rules stay testable off the DOM. The chart always
//! shows exactly seven buckets ending today; days without a record render as
//! zero-height bars.

use chrono::{Days, NaiveDate};
use contracts::records::ShiftRecord;

use crate::shared::date_utils::format_date_short;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub date: NaiveDate,
    pub label: String,
    pub total_earnings: i64,
}

/// Seven buckets for `today - 6 ..= today`, ascending, zero-filled.
pub fn weekly_bars(records: &[ShiftRecord], today: NaiveDate) -> Vec<ChartBar> {
    let window_start = today.checked_sub_days(Days::new(6)).unwrap_or(today);

    (0..7)
        .filter_map(|offset| window_start.checked_add_days(Days::new(offset)))
        .map(|date| {
            let total_earnings = records
                .iter()
                .find(|r| r.date == date)
                .map(|r| r.total_earnings)
                .unwrap_or(0);
            ChartBar {
                date,
                label: format_date_short(date),
                total_earnings,
            }
        })
        .collect()
}

/// Tallest bar of the window, floored at 1 so height percentages never
/// divide by zero.
pub fn max_bar_value(bars: &[ChartBar]) -> i64 {
    bars.iter()
        .map(|b| b.total_earnings)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Bar height as a 0..=100 percentage. Negative totals (a shift that lost
/// money) clamp to zero height; the numeric label still shows the real value.
pub fn bar_height_percent(bar: &ChartBar, max_value: i64) -> i64 {
    (bar.total_earnings.max(0) * 100) / max_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn record(date: &str, total_earnings: i64) -> ShiftRecord {
        let created: DateTime<Utc> = "2026-08-07T10:00:00Z".parse().unwrap();
        ShiftRecord {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            date: date.parse().unwrap(),
            morning_cash: 0,
            evening_cash: 0,
            total_orders: 0,
            cash_orders: 0,
            online_tips: 0,
            cash_earnings: 0,
            online_earnings: 0,
            bonus_earnings: 0,
            total_earnings,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn window_is_seven_days_ascending() {
        let bars = weekly_bars(&[], "2026-08-07".parse().unwrap());
        assert_eq!(bars.len(), 7);
        assert_eq!(bars[0].date.to_string(), "2026-08-01");
        assert_eq!(bars[6].date.to_string(), "2026-08-07");
        assert_eq!(bars[0].label, "01.08");
    }

    #[test]
    fn records_land_in_their_bucket_and_gaps_stay_zero() {
        let records = vec![
            record("2026-08-07", 2025),
            record("2026-08-05", 2900),
            // Outside the window, must not appear
            record("2026-07-20", 9999),
        ];
        let bars = weekly_bars(&records, "2026-08-07".parse().unwrap());

        assert_eq!(bars[6].total_earnings, 2025);
        assert_eq!(bars[4].total_earnings, 2900);
        assert_eq!(bars[5].total_earnings, 0);
        assert!(bars.iter().all(|b| b.total_earnings != 9999));
    }

    #[test]
    fn heights_scale_against_the_window_maximum() {
        let records = vec![record("2026-08-06", 500), record("2026-08-07", 1000)];
        let bars = weekly_bars(&records, "2026-08-07".parse().unwrap());
        let max = max_bar_value(&bars);

        assert_eq!(max, 1000);
        assert_eq!(bar_height_percent(&bars[5], max), 50);
        assert_eq!(bar_height_percent(&bars[6], max), 100);
    }

    #[test]
    fn empty_window_does_not_divide_by_zero() {
        let bars = weekly_bars(&[], "2026-08-07".parse().unwrap());
        let max = max_bar_value(&bars);
        assert_eq!(max, 1);
        assert_eq!(bar_height_percent(&bars[0], max), 0);
    }

    #[test]
    fn losing_day_clamps_to_zero_height() {
        let records = vec![record("2026-08-07", -300), record("2026-08-06", 600)];
        let bars = weekly_bars(&records, "2026-08-07".parse().unwrap());
        let max = max_bar_value(&bars);
        assert_eq!(bar_height_percent(&bars[6], max), 0);
        assert_eq!(bars[6].total_earnings, -300);
    }
}
