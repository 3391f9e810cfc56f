use crate::data::TableSchema;
use anyhow::Result;
use async_trait::async_trait;
use mysql_async::Value;

/// Destination for parsed CSV rows. Every `write` call is one independently committed batch.
#[async_trait]
pub trait BulkWriter: Send {
    /// Makes sure the destination table exists.
    async fn setup(&mut self, schema: &TableSchema) -> Result<()>;
    /// Removes every row of the table.
    async fn clear(&mut self, schema: &TableSchema) -> Result<()>;
    /// Writes one batch of rows, values in column order. Returns the number of rows written.
    async fn write(&mut self, schema: &TableSchema, rows: Vec<Vec<Value>>) -> Result<usize>;
}

mod mysql_writer;
pub use mysql_writer::MysqlWriter;
