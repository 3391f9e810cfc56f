use crate::data::TableSchema;
use crate::writers::BulkWriter;
use anyhow::{Result, bail};
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Params, Pool, TxOpts, Value};

//MySQL rejects prepared statements with more placeholders than this
const MAX_PLACEHOLDERS: usize = 65_535;

///Loads rows into MySQL with multi-row INSERT statements, one transaction per batch.
pub struct MysqlWriter {
    pool: Pool,
    rows_per_statement: usize,
}

impl MysqlWriter {
    pub async fn connect(pool: Pool, rows_per_statement: usize) -> Result<MysqlWriter> {
        let mut conn = pool.get_conn().await?;
        conn.ping().await?;
        log::info!("Connected to database");
        Ok(MysqlWriter {
            pool,
            rows_per_statement: rows_per_statement.max(1),
        })
    }

    pub async fn disconnect(self) -> Result<()> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl BulkWriter for MysqlWriter {
    async fn setup(&mut self, schema: &TableSchema) -> Result<()> {
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop(schema.create_query).await?;
        log::info!("Table {} is ready", schema.table_name);
        Ok(())
    }

    async fn clear(&mut self, schema: &TableSchema) -> Result<()> {
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop(format!("DELETE FROM {}", schema.table_name)).await?;
        log::info!("Removed existing rows from {}", schema.table_name);
        Ok(())
    }

    async fn write(&mut self, schema: &TableSchema, rows: Vec<Vec<Value>>) -> Result<usize> {
        let total = rows.len();
        let mut conn = self.pool.get_conn().await?;
        let mut transaction = conn.start_transaction(TxOpts::default()).await?;

        let per_statement = self
            .rows_per_statement
            .min(MAX_PLACEHOLDERS / schema.columns.len().max(1));
        let mut rows = rows.into_iter().peekable();
        while rows.peek().is_some() {
            let chunk: Vec<Vec<Value>> = rows.by_ref().take(per_statement).collect();
            let statement = schema.insert_query(chunk.len());
            let params: Vec<Value> = chunk.into_iter().flatten().collect();
            if let Err(e) = transaction
                .exec_drop(statement, Params::Positional(params))
                .await
            {
                transaction.rollback().await?;
                bail!(e);
            }
        }

        transaction.commit().await?;
        Ok(total)
    }
}
