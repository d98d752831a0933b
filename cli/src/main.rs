#![deny(missing_docs)]

//! # dbdef CLI
//!
//! Reads a Prisma schema and writes a database definition sheet
//! (one row per column: table, column, type, PK, nullable, unique, default, comment).
//!
//! Every argument can also come from the environment or a `.env` file.

use clap::Parser;

mod error;
mod extract;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prisma schema to database definition sheet")]
struct Cli {
    #[clap(flatten)]
    extract: extract::ExtractArgs,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match extract::execute(&cli.extract) {
        Ok(summary) => println!("{}", summary.message(&cli.extract.output)),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
