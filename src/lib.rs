//! Command line client for an identity management admin API.
//!
//! The CLI mirrors the API one to one: every subcommand performs a single
//! HTTP call, request payloads are passed through as raw JSON with `--data`,
//! and response bodies are printed as the server returned them.

pub mod actions;
pub mod admin_v1;
pub mod cli;
pub mod commands;
pub mod configuration;
#[cfg(feature = "dev-keyring")]
pub mod dev_keyring;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod keyring;
