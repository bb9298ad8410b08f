//! Configuration action implementations.
//!
//! These commands are local; they never touch the network.

use clap::ArgMatches;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

use crate::actions::CliActionError;
use crate::commands::params::{PARAMETER_FILE, PARAMETER_OUTPUT, PARAMETER_URL};
use crate::configuration::Configuration;

pub fn get_configuration() -> Result<(), CliActionError> {
    let configuration = Configuration::load_or_create_default()?;
    print!("{}", configuration.to_yaml()?);
    Ok(())
}

pub fn get_configuration_path() -> Result<(), CliActionError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

pub fn set_org(matches: &ArgMatches) -> Result<(), CliActionError> {
    let url = matches
        .get_one::<Url>(PARAMETER_URL)
        .expect("--url is required by clap");

    let mut configuration = Configuration::load_or_create_default()?;
    configuration.set_org_url(url.to_owned());
    configuration.save_to_default()?;
    debug!("Organization URL set to {}", url);
    Ok(())
}

pub fn export_configuration(matches: &ArgMatches) -> Result<(), CliActionError> {
    let path = matches
        .get_one::<PathBuf>(PARAMETER_OUTPUT)
        .expect("--output is required by clap");

    let configuration = Configuration::load_or_create_default()?;
    configuration.save(path)?;
    Ok(())
}

pub fn import_configuration(matches: &ArgMatches) -> Result<(), CliActionError> {
    let path = matches
        .get_one::<PathBuf>(PARAMETER_FILE)
        .expect("--file is required by clap");

    let configuration = Configuration::load_from_file(path.to_owned())?;
    configuration.save_to_default()?;
    Ok(())
}
