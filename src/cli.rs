use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::parser::DEFAULT_OVERRIDES_PATH;
use crate::writer::DEFAULT_OUTPUT_PATH;

#[derive(Parser, Debug)]
#[command(name = "item-enum-keys")]
#[command(version, about = "Generate readable enum keys for an item template catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive keys for every item and write the sorted key table
    Generate {
        /// Item template file (JSON object of id -> template)
        catalog: PathBuf,

        /// Locale file (JSON object of "<id> <Field>" -> text)
        locale: PathBuf,

        /// Manual name overrides (JSON5 object of id -> name)
        #[arg(short, long, default_value = DEFAULT_OVERRIDES_PATH)]
        overrides: PathBuf,

        /// Output path for the generated table
        #[arg(short = 'O', long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Run the whole pipeline but don't write the table
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List the baseclasses used for classification
    ListBaseclasses,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
