use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use domain::models::{ErrorBody, JsonErr};
use services::bundler::BundleError;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = commands::handle_commands(&cli) {
        report_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn report_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: err.to_string(),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<BundleError>().is_some() {
        "MISSING_SOURCE"
    } else {
        "IO"
    }
}
