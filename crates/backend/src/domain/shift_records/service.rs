use chrono::Utc;
use contracts::records::{ShiftRecord, ShiftRecordDraft, Summary};
use uuid::Uuid;

use super::error::StoreError;
use super::repository;

/// All records of the account, newest first.
pub async fn list(account_id: Uuid) -> Result<Vec<ShiftRecord>, StoreError> {
    repository::list_for_account(account_id).await
}

/// Validates the draft, derives the earnings fields and persists the record.
///
/// The derived fields are always recomputed here; whatever preview the
/// client showed, the stored figures come from this single calculation.
pub async fn insert(account_id: Uuid, draft: ShiftRecordDraft) -> Result<ShiftRecord, StoreError> {
    draft.validate().map_err(StoreError::Validation)?;

    let breakdown = draft.breakdown();
    let now = Utc::now();

    let record = ShiftRecord {
        id: Uuid::new_v4(),
        account_id,
        date: draft.date,
        morning_cash: draft.morning_cash,
        evening_cash: draft.evening_cash,
        total_orders: draft.total_orders,
        cash_orders: draft.cash_orders,
        online_tips: draft.online_tips,
        cash_earnings: breakdown.cash_earnings,
        online_earnings: breakdown.online_earnings,
        bonus_earnings: breakdown.bonus_earnings,
        total_earnings: breakdown.total_earnings,
        created_at: now,
        updated_at: now,
    };

    repository::insert(&record).await?;

    tracing::debug!(
        account = %account_id,
        date = %record.date,
        total = record.total_earnings,
        "Shift record stored"
    );

    Ok(record)
}

/// Irreversible, user-initiated delete. Rows of other accounts are invisible
/// and report NotFound.
pub async fn delete(account_id: Uuid, id: Uuid) -> Result<(), StoreError> {
    repository::delete_for_account(account_id, id).await
}

/// Account-wide aggregation across all visible records.
pub async fn summary(account_id: Uuid) -> Result<Summary, StoreError> {
    repository::summary_for_account(account_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(date: &str, inputs: (i64, i64, i64, i64), tips: i64) -> ShiftRecordDraft {
        let (total_orders, cash_orders, morning_cash, evening_cash) = inputs;
        ShiftRecordDraft {
            date: date.parse::<NaiveDate>().expect("valid date literal"),
            morning_cash,
            evening_cash,
            total_orders,
            cash_orders,
            online_tips: tips,
        }
    }

    /// One sequential pass over a scratch database. Kept as a single test
    /// because the connection is a process-wide singleton.
    #[tokio::test]
    async fn record_flow_against_scratch_database() {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("target/test-db/flow.db{}", suffix));
        }
        crate::shared::data::db::initialize_database(Some("target/test-db/flow.db"))
            .await
            .expect("scratch database initializes");

        // Sign-up and credential check
        let account = crate::system::accounts::service::register("driver", "wheels-up")
            .await
            .expect("registration succeeds");
        let verified = crate::system::accounts::service::verify_credentials("driver", "wheels-up")
            .await
            .expect("verification runs");
        assert_eq!(verified.map(|a| a.id), Some(account.id.clone()));
        assert!(crate::system::accounts::service::verify_credentials("driver", "wrong")
            .await
            .expect("verification runs")
            .is_none());
        assert!(
            crate::system::accounts::service::register("driver", "wheels-up")
                .await
                .is_err(),
            "duplicate username must be rejected"
        );

        let account_id = Uuid::parse_str(&account.id).expect("account id is a uuid");

        // Insert derives the earnings fields server-side
        let first = insert(account_id, draft("2026-08-01", (25, 10, 200, 850), 40))
            .await
            .expect("first insert succeeds");
        assert_eq!(first.cash_earnings, 1200);
        assert_eq!(first.online_earnings, 825);
        assert_eq!(first.bonus_earnings, 0);
        assert_eq!(first.total_earnings, 2025);

        // Same account + date collides on the unique index
        let dup = insert(account_id, draft("2026-08-01", (5, 5, 0, 0), 0)).await;
        assert!(matches!(dup, Err(StoreError::DuplicateDate(_))));

        // Invalid draft never reaches the store
        let invalid = insert(account_id, draft("2026-08-03", (10, 11, 0, 0), 0)).await;
        match invalid {
            Err(StoreError::Validation(fields)) => {
                assert!(fields.iter().any(|f| f.field == "cash_orders"));
            }
            other => panic!("expected validation failure, got {:?}", other.map(|r| r.id)),
        }

        let second = insert(account_id, draft("2026-08-02", (40, 35, 100, 500), 0))
            .await
            .expect("second insert succeeds");
        assert_eq!(second.total_earnings, 2900);

        // Listing is date descending
        let records = list(account_id).await.expect("list succeeds");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date.to_string(), "2026-08-02");
        assert_eq!(records[1].date.to_string(), "2026-08-01");

        // Aggregation mirrors the calculator, tips counted into the grand total
        let totals = summary(account_id).await.expect("summary succeeds");
        assert_eq!(totals.total_cash_earnings, 1200 + 2425);
        assert_eq!(totals.total_online_earnings, 825 + 275);
        assert_eq!(totals.total_bonus_earnings, 200);
        assert_eq!(totals.total_online_tips, 40);
        assert_eq!(totals.grand_total_earnings, (2025 + 40) + 2900);

        // Another account can neither see nor delete these rows
        let stranger = Uuid::new_v4();
        assert!(list(stranger).await.expect("list succeeds").is_empty());
        assert!(matches!(
            delete(stranger, first.id).await,
            Err(StoreError::NotFound)
        ));
        let empty = summary(stranger).await.expect("summary succeeds");
        assert_eq!(empty, Summary::default());

        // The owner can, and the delete is gone for good
        delete(account_id, first.id).await.expect("delete succeeds");
        assert!(matches!(
            delete(account_id, first.id).await,
            Err(StoreError::NotFound)
        ));
        let after = list(account_id).await.expect("list succeeds");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, second.id);
    }
}
