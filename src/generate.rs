use crate::catalog::ProductNames;
use crate::data::{Customer, Data, Order, OrderItem, Product};
use crate::progress::{Progress, group_thousands, short_display, summary};
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime, SubsecRound};
use csv_async::{AsyncSerializer, AsyncWriterBuilder, QuoteStyle, Terminator};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use uuid::Uuid;

/// Buffers records of one entity and appends them to its CSV file on `flush`.
///
/// The header line is written unquoted when the file is created; every data
/// field is double-quoted. An existing file is overwritten.
pub struct DataSetWriter<T: Data> {
    path: PathBuf,
    serializer: AsyncSerializer<Compat<File>>,
    buffer: Vec<T>,
    written: usize,
}

impl<T: Data> DataSetWriter<T> {
    pub async fn create(directory: &Path, capacity: usize) -> Result<DataSetWriter<T>> {
        let path = directory.join(T::schema().file_name);
        let mut file = File::create(&path)
            .await
            .with_context(|| format!("Could not create {}", path.display()))?;
        let header = format!("{}\n", T::schema().header());
        file.write_all(header.as_bytes()).await?;
        let serializer = AsyncWriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .create_serializer(file.compat_write());
        Ok(DataSetWriter {
            path,
            serializer,
            buffer: Vec::with_capacity(capacity),
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn push(&mut self, record: T) {
        self.buffer.push(record);
    }

    pub async fn flush(&mut self) -> Result<()> {
        for record in self.buffer.drain(..) {
            self.serializer.serialize(&record).await?;
            self.written += 1;
        }
        self.serializer.flush().await?;
        Ok(())
    }

    /// Flushes what is left and returns the number of rows in the file.
    pub async fn finish(mut self) -> Result<usize> {
        self.flush().await?;
        Ok(self.written)
    }
}

/// Ids of everything produced by one generator run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratedIds {
    pub customers: Vec<Uuid>,
    pub products: Vec<Uuid>,
    pub orders: Vec<Uuid>,
    pub order_items: Vec<Uuid>,
}

impl GeneratedIds {
    pub fn total(&self) -> usize {
        self.customers.len() + self.products.len() + self.orders.len() + self.order_items.len()
    }
}

/// Flushes on every `batch_size`th iteration and on the last one.
async fn checkpoint<T: Data>(
    writer: &mut DataSetWriter<T>,
    progress: &Progress,
    batch_size: usize,
    iteration: usize,
    count: usize,
) -> Result<()> {
    if iteration % batch_size == 0 || iteration == count {
        writer.flush().await?;
        progress.update(iteration);
    }
    Ok(())
}

fn finished(entity: &str, rows: usize, progress: &Progress) {
    let elapsed = progress.finish();
    println!(
        "Finished generating '{}' {entity} in {}",
        group_thousands(rows as u64),
        short_display(elapsed)
    );
}

pub struct Generator<R: Rng> {
    directory: PathBuf,
    batch_size: usize,
    now: NaiveDateTime,
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(directory: PathBuf, batch_size: usize, rng: R) -> Generator<R> {
        Generator {
            directory,
            batch_size: batch_size.max(1),
            now: Local::now().naive_local().trunc_subsecs(0),
            rng,
        }
    }

    /// Pins the reference time used for every generated timestamp.
    pub fn with_now(mut self, now: NaiveDateTime) -> Generator<R> {
        self.now = now;
        self
    }

    /// Writes all four files in dependency order.
    pub async fn generate(&mut self, records: usize) -> Result<GeneratedIds> {
        println!("Generating {} records...", group_thousands(records as u64));
        let started = Instant::now();

        let customers = self.generate_customers(records).await?;
        let products = self
            .generate_products(records, &mut ProductNames::new())
            .await?;
        let orders = self.generate_orders(records, &customers).await?;
        let order_items = self
            .generate_order_items(records, &orders, &products)
            .await?;

        let ids = GeneratedIds {
            customers,
            products,
            orders,
            order_items,
        };
        println!("\n{}", summary("generating", ids.total(), started.elapsed()));
        Ok(ids)
    }

    async fn open<T: Data>(&self, entity: &str, count: usize) -> Result<DataSetWriter<T>> {
        let writer = DataSetWriter::<T>::create(&self.directory, self.batch_size.min(count)).await?;
        log::info!("Generating {count} {entity} into {}", writer.path().display());
        Ok(writer)
    }

    pub async fn generate_customers(&mut self, count: usize) -> Result<Vec<Uuid>> {
        let mut writer = self.open::<Customer>("customers", count).await?;
        let progress = Progress::start(count);
        let mut ids = Vec::with_capacity(count);

        for i in 1..=count {
            let customer = Customer::generate(&mut self.rng, self.now);
            ids.push(customer.id);
            writer.push(customer);
            checkpoint(&mut writer, &progress, self.batch_size, i, count).await?;
        }

        writer.finish().await?;
        finished("customers", ids.len(), &progress);
        Ok(ids)
    }

    pub async fn generate_products(
        &mut self,
        count: usize,
        names: &mut ProductNames,
    ) -> Result<Vec<Uuid>> {
        let mut writer = self.open::<Product>("products", count).await?;
        let progress = Progress::start(count);
        let mut ids = Vec::with_capacity(count);

        for i in 1..=count {
            let product = Product::generate(&mut self.rng, self.now, &names.next_name());
            ids.push(product.id);
            writer.push(product);
            checkpoint(&mut writer, &progress, self.batch_size, i, count).await?;
        }

        writer.finish().await?;
        finished("products", ids.len(), &progress);
        Ok(ids)
    }

    pub async fn generate_orders(&mut self, count: usize, customer_ids: &[Uuid]) -> Result<Vec<Uuid>> {
        if count > 0 && customer_ids.is_empty() {
            bail!("Orders need at least one customer to reference.");
        }
        let mut writer = self.open::<Order>("orders", count).await?;
        let progress = Progress::start(count);
        let mut ids = Vec::with_capacity(count);

        for i in 1..=count {
            let customer_id = customer_ids[self.rng.random_range(0..customer_ids.len())];
            let order = Order::generate(&mut self.rng, self.now, customer_id);
            ids.push(order.id);
            writer.push(order);
            checkpoint(&mut writer, &progress, self.batch_size, i, count).await?;
        }

        writer.finish().await?;
        finished("orders", ids.len(), &progress);
        Ok(ids)
    }

    /// Runs `count` iterations, each writing 1 to 14 items. Every item picks its order and
    /// its product independently and uniformly from the full pools.
    pub async fn generate_order_items(
        &mut self,
        count: usize,
        order_ids: &[Uuid],
        product_ids: &[Uuid],
    ) -> Result<Vec<Uuid>> {
        if count > 0 && (order_ids.is_empty() || product_ids.is_empty()) {
            bail!("Order items need at least one order and one product to reference.");
        }
        let mut writer = self.open::<OrderItem>("order items", count).await?;
        let progress = Progress::start(count);
        let mut ids = Vec::with_capacity(count * 8);

        for i in 1..=count {
            let items = self.rng.random_range(1..15);
            for _ in 0..items {
                let order_id = order_ids[self.rng.random_range(0..order_ids.len())];
                let product_id = product_ids[self.rng.random_range(0..product_ids.len())];
                let item = OrderItem::generate(&mut self.rng, order_id, product_id);
                ids.push(item.id);
                writer.push(item);
            }
            checkpoint(&mut writer, &progress, self.batch_size, i, count).await?;
        }

        writer.finish().await?;
        finished("order items", ids.len(), &progress);
        Ok(ids)
    }
}
