use chrono::Utc;
use contracts::records::{ShiftRecord, Summary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, Set, SqlErr,
    Statement};

use super::error::StoreError;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shift_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub account_id: String,
    pub date: chrono::NaiveDate,
    pub morning_cash: i64,
    pub evening_cash: i64,
    pub total_orders: i64,
    pub cash_orders: i64,
    pub online_tips: i64,
    pub cash_earnings: i64,
    pub online_earnings: i64,
    pub bonus_earnings: i64,
    pub total_earnings: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ShiftRecord {
    fn from(m: Model) -> Self {
        ShiftRecord {
            id: Uuid::parse_str(&m.id).unwrap_or_default(),
            account_id: Uuid::parse_str(&m.account_id).unwrap_or_default(),
            date: m.date,
            morning_cash: m.morning_cash,
            evening_cash: m.evening_cash,
            total_orders: m.total_orders,
            cash_orders: m.cash_orders,
            online_tips: m.online_tips,
            cash_earnings: m.cash_earnings,
            online_earnings: m.online_earnings,
            bonus_earnings: m.bonus_earnings,
            total_earnings: m.total_earnings,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All records of one account, newest shift first.
pub async fn list_for_account(account_id: Uuid) -> Result<Vec<ShiftRecord>, StoreError> {
    let items = Entity::find()
        .filter(Column::AccountId.eq(account_id.to_string()))
        .order_by_desc(Column::Date)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Inserts a fully derived record. The unique index on (account_id, date)
/// turns a second record for the same day into [`StoreError::DuplicateDate`].
pub async fn insert(record: &ShiftRecord) -> Result<(), StoreError> {
    let active = ActiveModel {
        id: Set(record.id.to_string()),
        account_id: Set(record.account_id.to_string()),
        date: Set(record.date),
        morning_cash: Set(record.morning_cash),
        evening_cash: Set(record.evening_cash),
        total_orders: Set(record.total_orders),
        cash_orders: Set(record.cash_orders),
        online_tips: Set(record.online_tips),
        cash_earnings: Set(record.cash_earnings),
        online_earnings: Set(record.online_earnings),
        bonus_earnings: Set(record.bonus_earnings),
        total_earnings: Set(record.total_earnings),
        created_at: Set(record.created_at),
        updated_at: Set(record.updated_at),
    };

    match active.insert(conn()).await {
        Ok(_) => Ok(()),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Err(StoreError::DuplicateDate(record.date))
            }
            _ => Err(StoreError::Database(e)),
        },
    }
}

/// Deletes a record, but only within the account's visibility. A row owned by
/// someone else deletes zero rows and reports NotFound.
pub async fn delete_for_account(account_id: Uuid, id: Uuid) -> Result<(), StoreError> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::AccountId.eq(account_id.to_string()))
        .exec(conn())
        .await?;

    if result.rows_affected == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

/// Raw aggregation row for the account summary
#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    total_cash_earnings: i64,
    total_online_earnings: i64,
    total_bonus_earnings: i64,
    total_online_tips: i64,
    grand_total_earnings: i64,
}

/// Account-wide totals in a single aggregation query, the SQL counterpart of
/// the earnings calculator. The grand total counts online tips on top of the
/// per-record totals. COALESCE keeps an empty account at zero instead of NULL.
pub async fn summary_for_account(account_id: Uuid) -> Result<Summary, StoreError> {
    let sql = r#"
        SELECT
            COALESCE(SUM(cash_earnings), 0) AS total_cash_earnings,
            COALESCE(SUM(online_earnings), 0) AS total_online_earnings,
            COALESCE(SUM(bonus_earnings), 0) AS total_bonus_earnings,
            COALESCE(SUM(online_tips), 0) AS total_online_tips,
            COALESCE(SUM(total_earnings + online_tips), 0) AS grand_total_earnings
        FROM shift_records
        WHERE account_id = ?
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [account_id.to_string().into()],
    );

    let row = SummaryRow::find_by_statement(stmt).one(conn()).await?;

    Ok(match row {
        Some(r) => Summary {
            total_cash_earnings: r.total_cash_earnings,
            total_online_earnings: r.total_online_earnings,
            total_bonus_earnings: r.total_bonus_earnings,
            total_online_tips: r.total_online_tips,
            grand_total_earnings: r.grand_total_earnings,
        },
        None => Summary::default(),
    })
}
