//! Catalog service: paginated views, reference lookups, products and history

use serde::Serialize;
use shared::{
    validate_new_product, validate_page_window, HistoryEvent, HistoryRecord, NewProduct,
    PageWindow, ProductRef, SupplierRef, TableView,
};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::services::ledger;

/// Catalog service for suppliers, products and their history
#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

/// Row of the "Suppliers Contact Details" view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SupplierContactRow {
    pub supplier_name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Row of the "Products with Supplier and Stock" view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ProductStockRow {
    pub product_name: String,
    pub supplier_name: String,
    pub stock_quantity: i32,
    pub reorder_level: i32,
}

/// Row of the "Products Needing Reorder" view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ReorderCandidateRow {
    pub product_name: String,
    pub stock_quantity: i32,
    pub reorder_level: i32,
}

/// One page of a named view, serialized as a bare array of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableRows {
    SupplierContacts(Vec<SupplierContactRow>),
    ProductsWithSupplier(Vec<ProductStockRow>),
    ProductsNeedingReorder(Vec<ReorderCandidateRow>),
}

impl TableRows {
    pub fn len(&self) -> usize {
        match self {
            TableRows::SupplierContacts(rows) => rows.len(),
            TableRows::ProductsWithSupplier(rows) => rows.len(),
            TableRows::ProductsNeedingReorder(rows) => rows.len(),
        }
    }
}

/// Row for history query
#[derive(Debug, FromRow)]
struct HistoryRow {
    history_id: i64,
    product_id: i64,
    record_date: chrono::NaiveDate,
    change_type: String,
    change_quantity: i32,
    stock_quantity: i32,
}

impl TryFrom<HistoryRow> for HistoryRecord {
    type Error = AppError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let change_type: HistoryEvent = row
            .change_type
            .parse()
            .map_err(|e: shared::ParseEnumError| AppError::InternalError(e.into()))?;

        Ok(HistoryRecord {
            history_id: row.history_id,
            product_id: row.product_id,
            record_date: row.record_date,
            change_type,
            change_quantity: row.change_quantity,
            stock_quantity: row.stock_quantity,
        })
    }
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch one page of a named view
    ///
    /// Ordering is by name with the row id as tie-breaker, so adjacent windows
    /// never overlap.
    pub async fn get_table_page(&self, view: TableView, window: PageWindow) -> AppResult<TableRows> {
        validate_page_window(window.offset, window.limit)?;

        let rows = match view {
            TableView::SupplierContacts => TableRows::SupplierContacts(
                sqlx::query_as::<_, SupplierContactRow>(
                    r#"
                    SELECT supplier_name, contact_name, email, phone
                    FROM suppliers
                    ORDER BY supplier_name ASC, supplier_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(&self.db)
                .await?,
            ),
            TableView::ProductsWithSupplier => TableRows::ProductsWithSupplier(
                sqlx::query_as::<_, ProductStockRow>(
                    r#"
                    SELECT p.product_name, s.supplier_name, p.stock_quantity, p.reorder_level
                    FROM products p
                    JOIN suppliers s ON p.supplier_id = s.supplier_id
                    ORDER BY p.product_name ASC, p.product_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(&self.db)
                .await?,
            ),
            TableView::ProductsNeedingReorder => TableRows::ProductsNeedingReorder(
                sqlx::query_as::<_, ReorderCandidateRow>(
                    r#"
                    SELECT product_name, stock_quantity, reorder_level
                    FROM products
                    WHERE stock_quantity <= reorder_level
                    ORDER BY product_name ASC, product_id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(window.limit)
                .bind(window.offset)
                .fetch_all(&self.db)
                .await?,
            ),
        };

        Ok(rows)
    }

    /// Distinct product categories, ascending
    pub async fn get_categories(&self) -> AppResult<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM products ORDER BY category ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(categories)
    }

    /// All suppliers by name
    pub async fn get_suppliers(&self) -> AppResult<Vec<SupplierRef>> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT supplier_id, supplier_name FROM suppliers ORDER BY supplier_name ASC, supplier_id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(supplier_id, supplier_name)| SupplierRef {
                supplier_id,
                supplier_name,
            })
            .collect())
    }

    /// All products by name
    pub async fn get_all_products(&self) -> AppResult<Vec<ProductRef>> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT product_id, product_name FROM products ORDER BY product_name ASC, product_id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(product_id, product_name)| ProductRef {
                product_id,
                product_name,
            })
            .collect())
    }

    /// Add a product and record its opening stock
    ///
    /// Runs in one transaction: the product row and an `Added` history row
    /// carrying the opening stock. Opening stock is not a ledger movement.
    pub async fn add_product(&self, input: NewProduct) -> AppResult<i64> {
        let input = input.normalized();
        validate_new_product(&input)?;

        let mut tx = self.db.begin().await?;

        let supplier_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE supplier_id = $1)",
        )
        .bind(input.supplier_id)
        .fetch_one(&mut *tx)
        .await?;

        if !supplier_exists {
            return Err(AppError::NotFound(format!("Supplier {}", input.supplier_id)));
        }

        let product_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products
                (product_name, category, price, stock_quantity, reorder_level, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING product_id
            "#,
        )
        .bind(&input.product_name)
        .bind(&input.category)
        .bind(input.price)
        .bind(input.stock_quantity)
        .bind(input.reorder_level)
        .bind(input.supplier_id)
        .fetch_one(&mut *tx)
        .await?;

        ledger::append_history(
            &mut *tx,
            product_id,
            HistoryEvent::Added,
            input.stock_quantity,
            input.stock_quantity,
        )
        .await?;

        tx.commit().await?;

        tracing::info!(product_id, product_name = %input.product_name, "Product added");

        Ok(product_id)
    }

    /// Inventory history of a product, newest first
    pub async fn get_product_history(&self, product_id: i64) -> AppResult<Vec<HistoryRecord>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT history_id, product_id, record_date, change_type, change_quantity, stock_quantity
            FROM product_inventory_history
            WHERE product_id = $1
            ORDER BY record_date DESC, history_id DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(HistoryRecord::try_from).collect()
    }
}
