use std::path::PathBuf;

use addressbook_export::config::{
    BirthdayZone, DEFAULT_CSV_PATH, DEFAULT_STORE_PATH, DEFAULT_XLSX_PATH, ExportConfig,
    PipelineOptions,
};
use addressbook_export::{Result, export, logging};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.verbose)?;
    let config = cli.into_config()?;
    export::export_contacts(&config)?;
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export an address book store as a flat contact list (XLSX and CSV)."
)]
struct Cli {
    /// Address book SQLite store to read.
    #[arg(long, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Spreadsheet output path.
    #[arg(long, default_value = DEFAULT_XLSX_PATH)]
    xlsx: PathBuf,

    /// CSV output path.
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Render birthdays at this UTC offset (`+HH:MM`, `-HH:MM`, `Z`) instead
    /// of the local time zone.
    #[arg(long, value_name = "OFFSET")]
    utc_offset: Option<String>,

    /// Drop the trailing space after the last name part.
    #[arg(long)]
    trim_names: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<ExportConfig> {
        let zone = match &self.utc_offset {
            Some(raw) => raw.parse()?,
            None => BirthdayZone::Local,
        };

        Ok(ExportConfig {
            store_path: self.store,
            xlsx_path: self.xlsx,
            csv_path: self.csv,
            pipeline: PipelineOptions {
                zone,
                trim_names: self.trim_names,
            },
        })
    }
}
