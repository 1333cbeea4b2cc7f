use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

use ddltex::input::{collect_inputs, read_input};
use ddltex::{DEFAULT_SCHEMA, Locale, Options, generate};

#[derive(Debug, Parser)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    author=env!("CARGO_PKG_AUTHORS"),
    about=env!("CARGO_PKG_DESCRIPTION"),
    version=env!("CARGO_PKG_VERSION"),
)]
struct Args {
    /// SQL files or directories; `-` reads stdin [default: ./script.sql]
    files: Vec<PathBuf>,

    /// Schema qualifier of the CREATE TABLE statements
    #[clap(short, long, default_value = DEFAULT_SCHEMA)]
    schema: String,

    /// Language of the generated tables
    #[clap(short, long, value_enum, default_value_t = Locale::Et)]
    locale: Locale,

    /// Name the REFERENCES target in foreign key descriptions
    #[clap(long)]
    resolve_references: bool,

    /// Exit with failure when anything was skipped
    #[clap(long)]
    strict: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let options = Options {
        schema: args.schema,
        locale: args.locale,
        resolve_references: args.resolve_references,
    };

    let mut failed = false;
    let mut skipped = 0;

    for path in collect_inputs(&args.files) {
        let sql = match read_input(&path) {
            Ok(sql) => sql,
            Err(e) => {
                error!("{}", e);
                failed = true;
                continue;
            }
        };

        let document = match generate(&sql, &options) {
            Ok(document) => document,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failed = true;
                continue;
            }
        };

        info!(
            "{}: {} tables rendered",
            path.display(),
            document.fragments.len()
        );
        for diagnostic in &document.diagnostics {
            warn!("{}:{}", path.display(), diagnostic);
        }
        skipped += document.diagnostics.len();

        for fragment in &document.fragments {
            println!("{}", fragment);
        }
    }

    if failed || (args.strict && skipped > 0) {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
