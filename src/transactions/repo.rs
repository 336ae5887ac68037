use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::CreateTransactionRequest;

/// Income adds to the balance, expense subtracts from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_kind", rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Transaction record in the database. Immutable once created except for
/// deletion; the owner reference never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    #[serde(rename = "date", with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

impl Transaction {
    /// All of one owner's transactions, most recent first.
    pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, kind, amount, category, description, occurred_at, note, created_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY occurred_at DESC, created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Insert a transaction for the verified owner. The owner id comes from
    /// the request context, never from the payload.
    pub async fn create(
        db: &PgPool,
        owner_id: Uuid,
        fields: CreateTransactionRequest,
    ) -> anyhow::Result<Transaction> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (user_id, kind, amount, category, description, occurred_at, note)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6::timestamptz, now()), $7)
            RETURNING id, user_id, kind, amount, category, description, occurred_at, note, created_at
            "#,
        )
        .bind(owner_id)
        .bind(fields.kind)
        .bind(fields.amount)
        .bind(&fields.category)
        .bind(&fields.description)
        .bind(fields.date)
        .bind(&fields.note)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Delete at most one record matching both id and owner. Returns the
    /// number of rows removed; callers treat 0 and 1 alike.
    pub async fn delete_by_owner(db: &PgPool, owner_id: Uuid, id: Uuid) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn totals_for_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Totals> {
        let totals = sqlx::query_as::<_, Totals>(
            r#"
            SELECT
                COALESCE(SUM(amount) FILTER (WHERE kind = 'income'), 0) AS total_income,
                COALESCE(SUM(amount) FILTER (WHERE kind = 'expense'), 0) AS total_expense
            FROM transactions
            WHERE user_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_one(db)
        .await?;
        Ok(totals)
    }

    pub async fn expense_by_category(
        db: &PgPool,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<CategoryTotal>> {
        let rows = sqlx::query_as::<_, CategoryTotal>(
            r#"
            SELECT category, SUM(amount) AS total
            FROM transactions
            WHERE user_id = $1 AND kind = 'expense'
            GROUP BY category
            ORDER BY total DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
