use bulkseed::{Config, Mode, Options, progress::short_display, run};
use clap::Parser;
use dotenvy;
use env_logger::Env;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bulkseed")]
#[command(version, about = "Generates related test data to CSV files and bulk loads them into a database.")]
struct Cli {
    /// create: write the CSV files, insert: load them into the database
    #[arg(long, value_enum, ignore_case = true)]
    mode: Option<Mode>,

    /// Customers, products and orders to generate
    #[arg(long, allow_negative_numbers = true)]
    records: Option<i64>,

    /// Seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = Options::build(cli.mode, cli.records, cli.seed).unwrap_or_else(|errors| {
        eprintln!("{errors}");
        process::exit(1);
    });

    //Detect parsing errors in the .env file only.
    if let Err(e @ dotenvy::Error::LineParse(..)) = dotenvy::dotenv() {
        eprintln!("Error parsing .env file\n{e}");
        process::exit(1);
    }

    let config = Config::build().unwrap_or_else(|error| {
        eprintln!("Could not build config\n{error}");
        process::exit(1);
    });

    let started = Instant::now();
    if let Err(e) = run(options, config).await {
        eprintln!("{e:#}");
        process::exit(1);
    }
    println!("Finished in '{}'", short_display(started.elapsed()));
}
