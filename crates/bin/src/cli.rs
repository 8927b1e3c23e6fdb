//! CLI argument definitions for the libconf binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use libconf::ScalarKind;

use crate::output::OutputFormat;

/// Inspect and query libconfig-format configuration files
#[derive(Parser, Debug)]
#[command(name = "libconf")]
#[command(about = "libconf: inspect and query libconfig-format configuration files")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human", env = "LIBCONF_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a configuration file parses
    Check(CheckArgs),
    /// Print the value of a setting
    Get(GetArgs),
    /// List the settings below a path
    List(ListArgs),
    /// Set a scalar setting and print the result
    ///
    /// The file on disk is not modified.
    Set(SetArgs),
}

/// Arguments for the check command
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Configuration file to read
    pub file: PathBuf,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Configuration file to read
    pub file: PathBuf,

    /// Dotted path of the setting, e.g. "server.port"
    pub path: String,
}

/// Arguments for the list command
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Configuration file to read
    pub file: PathBuf,

    /// Dotted path of the group to list; the whole file by default
    #[arg(default_value = "")]
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration file to read
    pub file: PathBuf,

    /// Dotted path of the setting, e.g. "server.port"
    pub path: String,

    /// New value, interpreted according to the setting's kind
    pub value: String,

    /// Create the setting with this kind if it does not exist
    /// (int, float, bool or string)
    #[arg(long, value_name = "KIND")]
    pub create: Option<ScalarKind>,
}
