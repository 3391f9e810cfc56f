use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod config;
pub use config::Config;
pub mod catalog;
pub mod data;
pub mod error;
mod generate;
pub use generate::{DataSetWriter, GeneratedIds, Generator};
mod options;
pub use options::{Mode, Options};
pub mod progress;
mod upload;
pub use upload::{UploadSummary, Uploader, data_lines, parse_line, split_fields};
pub mod writers;

use crate::writers::MysqlWriter;

pub async fn run(options: Options, config: Config) -> Result<()> {
    match options.mode {
        Mode::Create => {
            let rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut generator =
                Generator::new(config.data_directory, config.generate_batch_size, rng);
            generator.generate(options.records).await?;
        }
        Mode::Insert => {
            let uri = config.get_uri().map_err(|e| anyhow!(e))?;
            let pool = mysql_async::Pool::new(uri);
            let writer = MysqlWriter::connect(pool, config.rows_per_statement).await?;
            let mut uploader =
                Uploader::new(config.data_directory, config.insert_batch_size, writer)
                    .truncate_first(config.truncate_before_insert);
            let result = uploader.upload().await;
            uploader.into_writer().disconnect().await?;
            result?;
        }
    }
    Ok(())
}
