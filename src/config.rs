use dotenvy;
use std::env;
use std::path::PathBuf;

const DEFAULT_GENERATE_BATCH_SIZE: usize = 10_000;
const DEFAULT_INSERT_BATCH_SIZE: usize = 100_000;
const DEFAULT_ROWS_PER_STATEMENT: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_uri: Option<String>,
    pub data_directory: PathBuf,
    pub generate_batch_size: usize,
    pub insert_batch_size: usize,
    pub rows_per_statement: usize,
    pub truncate_before_insert: bool,
}

fn get_env(key: &str) -> Option<String> {
    dotenvy::var(key).ok()
}

fn parse_size(key: &str, value: Option<String>, default: usize) -> Result<usize, String> {
    match value {
        Some(s) => match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("{key} must be a positive integer.")),
        },
        None => Ok(default),
    }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<bool, String> {
    match value.as_deref().map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(s) => match s.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(format!("{key} must be true or false.")),
        },
    }
}

fn executable_directory() -> Result<PathBuf, String> {
    let exe = env::current_exe().map_err(|e| format!("Could not locate the executable: {e}"))?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err("Executable has no parent directory.".to_string()),
    }
}

impl Config {
    pub fn build() -> Result<Config, String> {
        Config::from_lookup(get_env)
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_uri = lookup("database_uri").filter(|s| !s.trim().is_empty());
        let data_directory = match lookup("data_directory") {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => executable_directory()?,
        };
        let generate_batch_size = parse_size(
            "generate_batch_size",
            lookup("generate_batch_size"),
            DEFAULT_GENERATE_BATCH_SIZE,
        )?;
        let insert_batch_size = parse_size(
            "insert_batch_size",
            lookup("insert_batch_size"),
            DEFAULT_INSERT_BATCH_SIZE,
        )?;
        let rows_per_statement = parse_size(
            "rows_per_statement",
            lookup("rows_per_statement"),
            DEFAULT_ROWS_PER_STATEMENT,
        )?;
        let truncate_before_insert =
            parse_flag("truncate_before_insert", lookup("truncate_before_insert"))?;
        Ok(Config {
            database_uri,
            data_directory,
            generate_batch_size,
            insert_batch_size,
            rows_per_statement,
            truncate_before_insert,
        })
    }

    pub fn get_uri(&self) -> Result<&str, String> {
        match &self.database_uri {
            Some(uri) => Ok(uri.as_str()),
            None => Err("Environment variable database_uri is required.".to_string()),
        }
    }
}
