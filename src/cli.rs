use clap::{Parser, Subcommand};

use crate::domain::constants::DEFAULT_OUTPUT;

#[derive(Parser, Debug)]
#[command(
    name = "solbundle",
    version,
    about = "Bundle contract sources into one XML context document"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Directory contract filenames are resolved against"
    )]
    pub dir: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the listed sources and write the combined XML document.
    /// With no FILES, bundles the built-in contract set.
    Bundle {
        files: Vec<String>,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: String,
    },
    /// Report whether each listed source exists and is readable.
    Check { files: Vec<String> },
    /// Print the built-in contract set in bundling order.
    List,
}
