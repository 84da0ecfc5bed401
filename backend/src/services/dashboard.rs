//! Dashboard figures computed over the whole inventory

use rust_decimal::Decimal;
use shared::{BasicInfo, ReorderStatus, StockChangeType, VALUE_WINDOW_MONTHS};
use sqlx::{PgConnection, PgPool};

use crate::error::AppResult;

/// Sale value: sales are stored negative, so the quantity is taken absolute
const SALE_VALUE_SQL: &str = r#"
    SELECT COALESCE(ROUND(SUM(ABS(se.change_quantity) * p.price), 2), 0)
    FROM stock_entries se
    JOIN products p ON p.product_id = se.product_id
    WHERE se.change_type = $1
      AND se.entry_date >= (
          SELECT MAX(entry_date) - make_interval(months => $2) FROM stock_entries
      )
"#;

const RESTOCK_VALUE_SQL: &str = r#"
    SELECT COALESCE(ROUND(SUM(se.change_quantity * p.price), 2), 0)
    FROM stock_entries se
    JOIN products p ON p.product_id = se.product_id
    WHERE se.change_type = $1
      AND se.entry_date >= (
          SELECT MAX(entry_date) - make_interval(months => $2) FROM stock_entries
      )
"#;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

impl DashboardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute the six headline figures on a single pooled connection
    pub async fn get_basic_info(&self) -> AppResult<BasicInfo> {
        let mut conn = self.db.acquire().await?;

        let total_suppliers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&mut *conn)
            .await?;

        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await?;

        let total_categories: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT category) FROM products")
                .fetch_one(&mut *conn)
                .await?;

        let sale_value_6m =
            window_value(&mut *conn, SALE_VALUE_SQL, StockChangeType::Sale).await?;
        let restock_value_6m =
            window_value(&mut *conn, RESTOCK_VALUE_SQL, StockChangeType::Restock).await?;

        // Pending and Ordered reorders both count as open
        let open_statuses: Vec<&'static str> =
            ReorderStatus::OPEN.iter().map(|s| s.as_str()).collect();
        let below_reorder_unordered: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products p
            WHERE p.stock_quantity < p.reorder_level
              AND NOT EXISTS (
                  SELECT 1 FROM reorders r
                  WHERE r.product_id = p.product_id AND r.status = ANY($1)
              )
            "#,
        )
        .bind(open_statuses)
        .fetch_one(&mut *conn)
        .await?;

        let info = BasicInfo {
            total_suppliers,
            total_products,
            total_categories,
            sale_value_6m,
            restock_value_6m,
            below_reorder_unordered,
        };

        tracing::debug!(?info, "Computed basic info");

        Ok(info)
    }
}

/// Ledger value of one change type over the trailing window
///
/// The window ends at the latest ledger entry rather than today, so an empty
/// ledger yields zero.
async fn window_value(
    conn: &mut PgConnection,
    sql: &'static str,
    change: StockChangeType,
) -> AppResult<Decimal> {
    let value: Option<Decimal> = sqlx::query_scalar(sql)
        .bind(change.as_str())
        .bind(VALUE_WINDOW_MONTHS)
        .fetch_one(conn)
        .await?;

    Ok(value.unwrap_or(Decimal::ZERO))
}
