use crate::data::{Customer, Data, Order, OrderItem, Product, schemas};
use crate::error::LoadError;
use crate::progress::{Progress, group_thousands, summary};
use crate::writers::BulkWriter;
use anyhow::{Context, Result};
use mysql_async::Value;
use std::path::PathBuf;
use std::time::Instant;
use tokio::fs;

/// Rows loaded per table. A missing file counts as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadSummary {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub order_items: usize,
}

impl UploadSummary {
    pub fn total(&self) -> usize {
        self.customers + self.products + self.orders + self.order_items
    }
}

/// Non-blank lines after the header, paired with their 1-based line number in the file.
pub fn data_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1)
        .collect()
}

/// Plain comma split with every quote character removed. Generated files never
/// contain commas or quotes inside a field, so nothing smarter is needed.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.replace('"', "")).collect()
}

pub fn parse_line<T: Data>(file: &str, line_number: usize, line: &str) -> Result<T, LoadError> {
    let fields = split_fields(line);
    let expected = T::schema().columns.len();
    if fields.len() != expected {
        return Err(LoadError::FieldCount {
            file: file.to_string(),
            line_number,
            expected,
            found: fields.len(),
            line: line.to_string(),
        });
    }
    T::from_fields(&fields).map_err(|source| LoadError::InvalidField {
        file: file.to_string(),
        line_number,
        source,
    })
}

fn parse_batch<T: Data>(file: &str, batch: &[(usize, &str)]) -> Result<Vec<Vec<Value>>, LoadError> {
    batch
        .iter()
        .map(|&(line_number, line)| parse_line::<T>(file, line_number, line).map(T::into_values))
        .collect()
}

/// Reads the generated CSV files back and hands them to a `BulkWriter` in fixed-size batches.
pub struct Uploader<W: BulkWriter> {
    directory: PathBuf,
    batch_size: usize,
    truncate: bool,
    writer: W,
}

impl<W: BulkWriter> Uploader<W> {
    pub fn new(directory: PathBuf, batch_size: usize, writer: W) -> Uploader<W> {
        Uploader {
            directory,
            batch_size: batch_size.max(1),
            truncate: false,
            writer,
        }
    }

    /// Empty every table before loading, children first.
    pub fn truncate_first(mut self, truncate: bool) -> Uploader<W> {
        self.truncate = truncate;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Loads customers, products, orders and order items, in that order.
    pub async fn upload(&mut self) -> Result<UploadSummary> {
        println!("Start inserting records");
        let started = Instant::now();

        for schema in schemas() {
            self.writer.setup(schema).await?;
        }
        if self.truncate {
            for schema in schemas().iter().rev() {
                self.writer.clear(schema).await?;
            }
        }

        let loaded = UploadSummary {
            customers: self.upload_dataset::<Customer>().await?,
            products: self.upload_dataset::<Product>().await?,
            orders: self.upload_dataset::<Order>().await?,
            order_items: self.upload_dataset::<OrderItem>().await?,
        };

        println!("\n{}", summary("inserting", loaded.total(), started.elapsed()));
        Ok(loaded)
    }

    pub async fn upload_dataset<T: Data>(&mut self) -> Result<usize> {
        let schema = T::schema();
        let path = self.directory.join(schema.file_name);
        if !fs::try_exists(&path).await? {
            log::warn!(
                "File '{}' does not exist. Please generate data first.",
                path.display()
            );
            return Ok(0);
        }

        println!("Reading {} from file '{}'.", schema.table_name, schema.file_name);
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Could not read {}", path.display()))?;
        let lines = data_lines(&content);
        let total = lines.len();
        println!(
            "Inserting '{}' {} records in batches of '{}'.",
            group_thousands(total as u64),
            schema.table_name,
            group_thousands(self.batch_size as u64)
        );

        let progress = Progress::start(total);
        let mut inserted = 0;
        for batch in lines.chunks(self.batch_size) {
            //the whole batch is parsed first so a bad line never reaches the database
            let rows = parse_batch::<T>(schema.file_name, batch)?;
            let copied = self.writer.write(schema, rows).await?;
            log::info!("Batch copied: {copied} rows into {}", schema.table_name);
            inserted += copied;
            progress.update(inserted);
        }

        let elapsed = progress.finish();
        println!("{}", summary("inserting", inserted, elapsed));
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TableSchema;
    use async_trait::async_trait;
    use tempfile::tempdir;
    use test_case::test_case;

    const CUSTOMER_LINE: &str = "\"5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11\",\"Ada Byron Lovelace\",\"1980-02-29\",\"2025-01-31 08:15:00\"";

    #[derive(Default)]
    struct CountingWriter {
        setups: Vec<&'static str>,
        cleared: Vec<&'static str>,
        batches: Vec<(&'static str, usize)>,
    }

    #[async_trait]
    impl BulkWriter for CountingWriter {
        async fn setup(&mut self, schema: &TableSchema) -> Result<()> {
            self.setups.push(schema.table_name);
            Ok(())
        }

        async fn clear(&mut self, schema: &TableSchema) -> Result<()> {
            self.cleared.push(schema.table_name);
            Ok(())
        }

        async fn write(&mut self, schema: &TableSchema, rows: Vec<Vec<Value>>) -> Result<usize> {
            self.batches.push((schema.table_name, rows.len()));
            Ok(rows.len())
        }
    }

    #[test]
    fn data_lines_skip_header_and_blanks() {
        let content = "ID,Name\r\n\"1\",\"a\"\r\n\r\n   \n\"2\",\"b\"\n";
        assert_eq!(data_lines(content), vec![(2, "\"1\",\"a\""), (5, "\"2\",\"b\"")]);
    }

    #[test]
    fn blank_lines_before_header_are_ignored() {
        let content = "\n\nID,Name\n\"1\",\"a\"\n";
        assert_eq!(data_lines(content), vec![(4, "\"1\",\"a\"")]);
    }

    #[test_case("\"a\",\"b\",\"c\"", &["a", "b", "c"])]
    #[test_case("a,\"b\"", &["a", "b"])]
    #[test_case("\"x\"\"y\"", &["xy"])]
    #[test_case("", &[""])]
    fn fields_lose_their_quotes(line: &str, expected: &[&str]) {
        assert_eq!(split_fields(line), expected);
    }

    #[test]
    fn parse_line_builds_record() {
        let customer = parse_line::<Customer>("_customers.csv", 2, CUSTOMER_LINE).unwrap();
        assert_eq!(customer.name, "Ada Byron Lovelace");
    }

    #[test_case("\"5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11\",\"Ada\",\"1980-02-29\"", 3; "too few")]
    #[test_case("\"5f0c6a56-4b8e-4a43-9a3f-2f5e0d1f6c11\",\"Ada, Countess\",\"1980-02-29\",\"2025-01-31 08:15:00\"", 5; "embedded comma")]
    fn wrong_field_count_is_reported(line: &str, found: usize) {
        let error = parse_line::<Customer>("_customers.csv", 9, line).unwrap_err();
        assert_eq!(
            error,
            LoadError::FieldCount {
                file: "_customers.csv".to_string(),
                line_number: 9,
                expected: 4,
                found,
                line: line.to_string(),
            }
        );
    }

    #[test]
    fn bad_value_is_reported_with_line() {
        let line = CUSTOMER_LINE.replace("1980-02-29", "1980-02-30");
        match parse_line::<Customer>("_customers.csv", 4, &line).unwrap_err() {
            LoadError::InvalidField {
                line_number, source, ..
            } => {
                assert_eq!(line_number, 4);
                assert_eq!(source.column, "DateOfBirth");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[tokio::test]
    async fn batches_split_at_batch_size() {
        let dir = tempdir().unwrap();
        let mut content = String::from("ID,Name,DateOfBirth,CreatedAt\n");
        for _ in 0..7 {
            content.push_str(CUSTOMER_LINE);
            content.push('\n');
        }
        std::fs::write(dir.path().join("_customers.csv"), content).unwrap();

        let mut uploader = Uploader::new(dir.path().to_path_buf(), 3, CountingWriter::default());
        let count = uploader.upload_dataset::<Customer>().await.unwrap();
        assert_eq!(count, 7);
        assert_eq!(
            uploader.writer().batches,
            vec![("Customers", 3), ("Customers", 3), ("Customers", 1)]
        );
    }

    #[tokio::test]
    async fn header_only_file_loads_nothing() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("_orders.csv"), "ID,CustomerId,CreatedAt\n").unwrap();
        let mut uploader = Uploader::new(dir.path().to_path_buf(), 10, CountingWriter::default());
        assert_eq!(uploader.upload_dataset::<Order>().await.unwrap(), 0);
        assert!(uploader.writer().batches.is_empty());
    }

    #[tokio::test]
    async fn missing_files_count_as_zero() {
        let dir = tempdir().unwrap();
        let mut uploader = Uploader::new(dir.path().to_path_buf(), 10, CountingWriter::default())
            .truncate_first(true);
        let summary = uploader.upload().await.unwrap();
        assert_eq!(summary, UploadSummary::default());

        let writer = uploader.into_writer();
        assert_eq!(writer.setups, vec!["Customers", "Products", "Orders", "OrderItems"]);
        assert_eq!(writer.cleared, vec!["OrderItems", "Orders", "Products", "Customers"]);
        assert!(writer.batches.is_empty());
    }

    #[tokio::test]
    async fn malformed_line_stops_before_its_batch() {
        let dir = tempdir().unwrap();
        let mut content = String::from("ID,Name,DateOfBirth,CreatedAt\n");
        for i in 0..5 {
            if i == 3 {
                content.push_str("\"broken\",\"line\"\n");
            } else {
                content.push_str(CUSTOMER_LINE);
                content.push('\n');
            }
        }
        std::fs::write(dir.path().join("_customers.csv"), content).unwrap();

        let mut uploader = Uploader::new(dir.path().to_path_buf(), 2, CountingWriter::default());
        let error = uploader.upload_dataset::<Customer>().await.unwrap_err();
        match error.downcast_ref::<LoadError>() {
            Some(LoadError::FieldCount { line_number, .. }) => assert_eq!(*line_number, 5),
            other => panic!("unexpected error {other:?}"),
        }
        //first batch (lines 2 and 3) went through, the batch holding line 5 did not
        assert_eq!(uploader.writer().batches, vec![("Customers", 2)]);
    }
}
