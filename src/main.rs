//! Binary entry point.

use tracing::trace;
use tracing_subscriber::EnvFilter;

use idcli::cli;
use idcli::commands;
use idcli::configuration::Configuration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    trace!("Starting...");

    // Config subcommands create the file themselves; here we only make
    // sure the configuration directory is usable before doing anything else.
    if let Err(e) = Configuration::load_or_create_default() {
        eprintln!("ERROR: {}", e);
        std::process::exit(exitcode::CONFIG);
    }

    let matches = commands::create_cli_commands();

    match cli::execute_command(&matches).await {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(e) => {
            if let Some(body) = e.response_body() {
                if !body.is_empty() {
                    println!("{}", body);
                }
            }
            eprintln!("ERROR: {}", e);
            std::process::exit(e.exit_code().code());
        }
    }
}
