//! mdmgen CLI - Go type generator for Apple Device Management schemas
//!
//! Commands:
//! - `mdmgen commands` - Generate command and response structs from MDM command schemas
//! - `mdmgen ddm-refs` - Generate the declaration reference table from DDM schemas

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod ddm_refs;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "mdmgen")]
#[command(author, version, about = "Go type generator for Apple Device Management schemas", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go types from MDM command schema files
    Commands {
        /// Command schema YAML files, processed in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Go package name (overrides config)
        #[arg(short, long)]
        package: Option<String>,

        /// Output file; "-" for stdout
        #[arg(short, long, default_value = output::STDOUT)]
        output: String,

        /// Path to mdmgen.toml (default: ./mdmgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Do not generate response structs
        #[arg(long)]
        no_responses: bool,

        /// Do not generate the GenericCommand/GenericResponse types
        #[arg(long)]
        no_shared: bool,

        /// Treat dictionaries with a single dictionary subkey as string maps
        #[arg(long)]
        string_maps: bool,

        /// Emit every key description as a field comment
        #[arg(long)]
        describe_fields: bool,
    },

    /// Generate the declaration reference table from a DDM schema directory
    DdmRefs {
        /// Directory containing declaration schema YAML files
        dir: PathBuf,

        /// Go package name (overrides config)
        #[arg(short, long)]
        package: Option<String>,

        /// Name of the generated variable (overrides config)
        #[arg(short, long)]
        name: Option<String>,

        /// Output file; "-" for stdout
        #[arg(short, long, default_value = output::STDOUT)]
        output: String,

        /// Path to mdmgen.toml (default: ./mdmgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Commands {
            inputs,
            package,
            output,
            config,
            no_responses,
            no_shared,
            string_maps,
            describe_fields,
        } => {
            commands::run(commands::CommandsArgs {
                inputs,
                output,
                config,
                package,
                no_responses,
                no_shared,
                string_maps,
                describe_fields,
            })?;
        }
        Commands::DdmRefs {
            dir,
            package,
            name,
            output,
            config,
        } => {
            ddm_refs::run(ddm_refs::DdmRefsArgs {
                dir,
                output,
                config,
                package,
                name,
            })?;
        }
    }

    Ok(())
}
