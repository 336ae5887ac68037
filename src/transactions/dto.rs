use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::{CategoryTotal, TransactionKind};

/// Request body for creating a transaction. There is deliberately no owner
/// field here: the owner is stamped from the verified token, and any owner
/// id a client smuggles into the JSON is dropped during deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    pub note: Option<String>,
}

/// Acknowledgement returned by delete, identical whether or not a record
/// was actually removed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Aggregates for the authenticated owner: the balance card totals and the
/// per-category expense breakdown.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub expense_by_category: Vec<CategoryTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_body() {
        let body = r#"{"type":"income","amount":500,"category":"Salary"}"#;
        let req: CreateTransactionRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.kind, TransactionKind::Income);
        assert_eq!(req.amount, 500.0);
        assert_eq!(req.category, "Salary");
        assert!(req.description.is_none());
        assert!(req.date.is_none());
        assert!(req.note.is_none());
    }

    #[test]
    fn parses_optional_date() {
        let body = r#"{"type":"expense","amount":12.5,"category":"Food","date":"2026-08-01T10:30:00Z"}"#;
        let req: CreateTransactionRequest = serde_json::from_str(body).unwrap();
        let date = req.date.unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month() as u8, 8);
    }

    #[test]
    fn client_supplied_owner_is_dropped() {
        // A conflicting owner id in the payload never reaches the store.
        let body = r#"{"type":"expense","amount":1,"category":"Misc","user_id":"7f3c2c1e-0000-0000-0000-000000000000"}"#;
        let req: CreateTransactionRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.category, "Misc");
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(serde_json::from_str::<CreateTransactionRequest>(r#"{"amount":1}"#).is_err());
        assert!(
            serde_json::from_str::<CreateTransactionRequest>(r#"{"type":"income"}"#).is_err()
        );
    }
}
