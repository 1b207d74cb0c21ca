use std::path::PathBuf;
use std::process;

use clap::Parser;
use mirna_de::pipeline::{self, Config};

#[derive(Parser, Debug)]
#[clap(
    name = "mirna-de",
    version,
    about = "Find miRNAs differentially expressed between two sample groups (t-test, Bonferroni)."
)]
struct Args {
    /// Expression matrix: header line, then one comma-separated numeric row per miRNA.
    #[clap(long, default_value = pipeline::DEFAULT_EXPRESSION_FILE)]
    expression: PathBuf,

    /// Row identifiers, one per line.
    #[clap(long, default_value = pipeline::DEFAULT_IDENTIFIER_FILE)]
    identifiers: PathBuf,

    /// File whose first line holds the group label of every sample column.
    #[clap(long, default_value = pipeline::DEFAULT_HEADER_FILE)]
    header: PathBuf,

    /// Where to write the differentially expressed identifiers.
    #[clap(long, default_value = pipeline::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// First group label.
    #[clap(long, default_value = pipeline::DEFAULT_GROUP1)]
    group1: String,

    /// Second group label.
    #[clap(long, default_value = pipeline::DEFAULT_GROUP2)]
    group2: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            expression_path: args.expression,
            identifiers_path: args.identifiers,
            header_path: args.header,
            output_path: args.output,
            group1: args.group1,
            group2: args.group2,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());

    match pipeline::run(&config) {
        Ok(summary) => {
            println!(
                "The amount of differentially expressed miRNAs is {}",
                summary.count()
            );
        }
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    }
}
