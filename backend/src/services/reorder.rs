//! Reorder workflow: place, list open, receive

use chrono::NaiveDate;
use shared::{
    validate_place_reorder, HistoryEvent, PendingReorder, PlaceReorder, ReorderStatus,
    StockChangeType,
};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::services::ledger;

/// Reorder service
#[derive(Clone)]
pub struct ReorderService {
    db: PgPool,
}

/// Row for pending reorder query
#[derive(Debug, FromRow)]
struct PendingReorderRow {
    reorder_id: i64,
    product_name: String,
    reorder_quantity: i32,
    reorder_date: NaiveDate,
    status: String,
}

impl TryFrom<PendingReorderRow> for PendingReorder {
    type Error = AppError;

    fn try_from(row: PendingReorderRow) -> Result<Self, Self::Error> {
        Ok(PendingReorder {
            reorder_id: row.reorder_id,
            product_name: row.product_name,
            reorder_quantity: row.reorder_quantity,
            reorder_date: row.reorder_date,
            status: parse_status(&row.status)?,
        })
    }
}

/// Row locked while a reorder is received
#[derive(Debug, FromRow)]
struct LockedReorderRow {
    product_id: i64,
    reorder_quantity: i32,
    status: String,
}

/// Outcome of receiving a reorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedReorder {
    pub reorder_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Product stock after the delivery was booked
    pub stock_quantity: i32,
}

fn parse_status(value: &str) -> AppResult<ReorderStatus> {
    value
        .parse()
        .map_err(|e: shared::ParseEnumError| AppError::InternalError(e.into()))
}

impl ReorderService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Place a reorder for a product in status `Ordered`
    ///
    /// The id comes from the identity column, so concurrent placements never
    /// share an id.
    pub async fn place_reorder(&self, input: PlaceReorder) -> AppResult<i64> {
        validate_place_reorder(&input)?;

        let reorder_id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO reorders (product_id, reorder_quantity, reorder_date, status)
            SELECT product_id, $2, CURRENT_DATE, $3
            FROM products
            WHERE product_id = $1
            RETURNING reorder_id
            "#,
        )
        .bind(input.product_id)
        .bind(input.reorder_quantity)
        .bind(ReorderStatus::Ordered.as_str())
        .fetch_optional(&self.db)
        .await?;

        let reorder_id =
            reorder_id.ok_or_else(|| AppError::NotFound(format!("Product {}", input.product_id)))?;

        tracing::info!(
            reorder_id,
            product_id = input.product_id,
            quantity = input.reorder_quantity,
            "Reorder placed"
        );

        Ok(reorder_id)
    }

    /// Reorders still awaiting delivery, oldest first
    pub async fn get_pending_reorders(&self) -> AppResult<Vec<PendingReorder>> {
        let open_statuses: Vec<&'static str> =
            ReorderStatus::OPEN.iter().map(|s| s.as_str()).collect();

        let rows = sqlx::query_as::<_, PendingReorderRow>(
            r#"
            SELECT r.reorder_id, p.product_name, r.reorder_quantity, r.reorder_date, r.status
            FROM reorders r
            JOIN products p ON r.product_id = p.product_id
            WHERE r.status = ANY($1)
            ORDER BY r.reorder_id ASC
            "#,
        )
        .bind(open_statuses)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(PendingReorder::try_from).collect()
    }

    /// Mark a reorder received and book the delivered stock
    ///
    /// The reorder row is locked for the duration of the transaction, so a
    /// delivery is booked at most once even under concurrent requests.
    pub async fn mark_reorder_as_received(&self, reorder_id: i64) -> AppResult<ReceivedReorder> {
        let mut tx = self.db.begin().await?;

        let locked = sqlx::query_as::<_, LockedReorderRow>(
            r#"
            SELECT product_id, reorder_quantity, status
            FROM reorders
            WHERE reorder_id = $1
            FOR UPDATE
            "#,
        )
        .bind(reorder_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reorder {}", reorder_id)))?;

        let status = parse_status(&locked.status)?;
        if !status.can_transition_to(ReorderStatus::Received) {
            return Err(AppError::InvalidStateTransition(format!(
                "Reorder {} is {} and cannot be received",
                reorder_id, status
            )));
        }

        sqlx::query("UPDATE reorders SET status = $1 WHERE reorder_id = $2")
            .bind(ReorderStatus::Received.as_str())
            .bind(reorder_id)
            .execute(&mut *tx)
            .await?;

        let stock_quantity: i32 = sqlx::query_scalar(
            r#"
            UPDATE products
            SET stock_quantity = stock_quantity + $1
            WHERE product_id = $2
            RETURNING stock_quantity
            "#,
        )
        .bind(locked.reorder_quantity)
        .bind(locked.product_id)
        .fetch_one(&mut *tx)
        .await?;

        ledger::append_stock_entry(
            &mut *tx,
            locked.product_id,
            StockChangeType::Restock,
            locked.reorder_quantity,
        )
        .await?;

        ledger::append_history(
            &mut *tx,
            locked.product_id,
            HistoryEvent::from(StockChangeType::Restock),
            locked.reorder_quantity,
            stock_quantity,
        )
        .await?;

        tx.commit().await?;

        Ok(ReceivedReorder {
            reorder_id,
            product_id: locked.product_id,
            quantity: locked.reorder_quantity,
            stock_quantity,
        })
    }
}
