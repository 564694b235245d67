//! Command-line interface.

pub mod convert;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::core::constants;

/// env2secret - Convert a .env file into a Kubernetes Secret manifest.
#[derive(Parser, Debug)]
#[command(
    name = "env2secret",
    about = "Convert a .env file into a Kubernetes Secret manifest",
    version
)]
pub struct Cli {
    /// Path to the .env file
    #[arg(short, long, env = "ENV2SECRET_ENV", default_value = constants::ENV_FILE)]
    pub env: PathBuf,

    /// Path to the output YAML file (created with mode 0600 on unix)
    #[arg(short, long, env = "ENV2SECRET_OUTPUT", default_value = constants::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Kubernetes namespace (omitted from the manifest when empty)
    #[arg(short, long, env = "ENV2SECRET_NAMESPACE", default_value = "")]
    pub namespace: String,

    /// Name of the Kubernetes Secret
    #[arg(long, env = "ENV2SECRET_NAME", default_value = constants::SECRET_NAME)]
    pub name: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the conversion described by the parsed arguments.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    let namespace = Some(cli.namespace.as_str()).filter(|ns| !ns.is_empty());
    convert::execute(&cli.env, &cli.output, &cli.name, namespace)
}
