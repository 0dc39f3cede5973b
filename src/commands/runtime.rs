use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::domain::constants::{default_contracts, DEFAULT_OUTPUT};
use crate::services::bundler;
use crate::services::check;
use crate::services::output::{envelope, print_report, print_rows};

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    let base_dir = PathBuf::from(&cli.dir);
    match cli.command.as_ref() {
        // Bare invocation: bundle the built-in set into the default output.
        None => run_bundle(cli, &base_dir, &[], DEFAULT_OUTPUT),
        Some(Commands::Bundle { files, output }) => run_bundle(cli, &base_dir, files, output),
        Some(Commands::Check { files }) => {
            let sources = selected_sources(files);
            let report = check::check_sources(&base_dir, &sources);
            let failed = report.overall != "ok";
            if cli.json {
                println!("{}", envelope(&report)?);
            } else {
                println!("overall: {}", report.overall);
                for s in &report.sources {
                    println!("{}\t{}", s.name, s.status);
                }
            }
            if failed {
                // Report already printed; signal failure without a second
                // error envelope on stdout.
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::List) => print_rows(cli.json, &default_contracts(), |name| name.clone()),
    }
}

fn run_bundle(cli: &Cli, base_dir: &Path, files: &[String], output: &str) -> anyhow::Result<()> {
    let sources = selected_sources(files);
    let output_path = bundler::resolve_output(base_dir, output);
    let report = bundler::bundle(base_dir, &sources, &output_path)?;
    print_report(cli.json, report, |r| {
        format!("wrote {} ({} documents, {} bytes)", r.output, r.documents, r.bytes)
    })
}

fn selected_sources(files: &[String]) -> Vec<String> {
    if files.is_empty() {
        default_contracts()
    } else {
        files.to_vec()
    }
}
