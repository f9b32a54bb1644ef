/// Product model and catalog query
///
/// Products are owned by an external PostgreSQL database. This service only
/// reads them and never caches the result.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE products (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL,
///     price NUMERIC(10, 2) NOT NULL,
///     quantity INTEGER NOT NULL
/// );
/// ```
///
/// Columns are decoded by position, so the table must keep this column order.
/// `price` may also be a `DOUBLE PRECISION` column; both decode to `f64`.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::debug;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "product")]
pub struct Product {
    /// Row identifier
    pub id: i32,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub quantity: i32,
}

impl Product {
    /// Reads every row of the `products` table
    ///
    /// Acquires one connection from the pool for the duration of the query
    /// and returns it before the rows are handed back. Row order is whatever
    /// the database produces.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be acquired, the query fails,
    /// or a row does not decode into a `Product`.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let rows = sqlx::query("SELECT * FROM products")
            .fetch_all(&mut *conn)
            .await?;

        drop(conn);

        debug!(rows = rows.len(), "Fetched product rows");

        rows.iter().map(Self::from_positional_row).collect()
    }

    fn from_positional_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            description: row.try_get(2)?,
            price: decode_price(row, 3)?,
            quantity: row.try_get(4)?,
        })
    }
}

/// Reads a `DOUBLE PRECISION` or `NUMERIC` price column as `f64`
fn decode_price(row: &PgRow, index: usize) -> Result<f64, sqlx::Error> {
    match row.try_get::<f64, _>(index) {
        Ok(price) => Ok(price),
        Err(float_err) => {
            let decimal: Decimal = row.try_get(index).map_err(|_| float_err)?;
            price_from_decimal(decimal).ok_or_else(|| sqlx::Error::ColumnDecode {
                index: index.to_string(),
                source: format!("price {} is out of range for f64", decimal).into(),
            })
        }
    }
}

fn price_from_decimal(price: Decimal) -> Option<f64> {
    price.to_f64()
}
