//! Append-only writes to the stock ledger and inventory history
//!
//! Both helpers take a connection so callers can run them inside their own
//! transaction.

use shared::{HistoryEvent, StockChangeType};
use sqlx::PgConnection;

/// Append a stock ledger entry dated today
pub async fn append_stock_entry(
    conn: &mut PgConnection,
    product_id: i64,
    change: StockChangeType,
    quantity: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO stock_entries (product_id, change_quantity, change_type, entry_date)
        VALUES ($1, $2, $3, CURRENT_DATE)
        "#,
    )
    .bind(product_id)
    .bind(change.ledger_quantity(quantity))
    .bind(change.as_str())
    .execute(conn)
    .await?;

    Ok(())
}

/// Append a history row recording the stock level after a change
pub async fn append_history(
    conn: &mut PgConnection,
    product_id: i64,
    event: HistoryEvent,
    change_quantity: i32,
    stock_after: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO product_inventory_history
            (product_id, record_date, change_type, change_quantity, stock_quantity)
        VALUES ($1, CURRENT_DATE, $2, $3, $4)
        "#,
    )
    .bind(product_id)
    .bind(event.as_str())
    .bind(change_quantity)
    .bind(stock_after)
    .execute(conn)
    .await?;

    Ok(())
}
