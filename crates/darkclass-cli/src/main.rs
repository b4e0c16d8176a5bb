//! darkclass CLI - Dark class generator
//!
//! Commands:
//! - `darkclass generate` - Generate a dark class from a spec file or flags
//! - `darkclass extract` - Recover the spec from a generated script
//! - `darkclass regenerate` - Extract a generated script and generate it again
//! - `darkclass check` - Validate a spec file

use clap::{Parser, Subcommand};
use darkclass::DarkClassError;
use std::path::PathBuf;
use std::process::ExitCode;

mod check;
mod extract;
mod generate;
mod options;

use options::OptionArgs;

#[derive(Parser)]
#[command(name = "darkclass")]
#[command(author, version, about = "Generator for UdonSharp dark classes", long_about = None)]
struct Cli {
    /// Path to a darkclass.toml (or .json) configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dark class
    Generate {
        /// Spec file (TOML) with namespace, class, fields and options
        #[arg(short, long, conflicts_with = "class")]
        spec: Option<PathBuf>,

        /// Class name (converted to PascalCase)
        #[arg(long)]
        class: Option<String>,

        /// Namespace to wrap the generated code in
        #[arg(short, long, default_value = "")]
        namespace: String,

        /// Field line "type name [key]" (repeatable)
        #[arg(short, long = "field", value_name = "FIELD")]
        fields: Vec<String>,

        /// Output file for the generated code (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the spec recovered from a generated script
    Extract {
        /// Generated C# script
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = extract::Format::Toml)]
        format: extract::Format,
    },

    /// Extract a generated script and generate it again
    Regenerate {
        /// Generated C# script
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Validate a spec file
    Check {
        /// Spec file (default: ./darkclass-spec.toml)
        #[arg(short, long)]
        spec: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Exit status for a failed command: the library error code when a
/// [`DarkClassError`] caused it, 1 otherwise
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<DarkClassError>()
        .and_then(|e| u8::try_from(e.error_code()).ok())
        .unwrap_or(1)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = options::load_config(cli.config.as_deref())?;
    let level = if cli.verbose {
        darkclass::LogLevel::Debug
    } else {
        config.log_level()
    };
    darkclass::init_logging(level);

    match cli.command {
        Commands::Generate {
            spec,
            class,
            namespace,
            fields,
            output,
            options,
        } => {
            let request = generate::Request {
                spec,
                class,
                namespace,
                fields,
                output,
            };
            generate::run(request, &options, config)?;
        }
        Commands::Extract { file, format } => {
            extract::run(&file, format)?;
        }
        Commands::Regenerate {
            file,
            output,
            options,
        } => {
            generate::regenerate(&file, output.as_deref(), &options, config)?;
        }
        Commands::Check { spec } => {
            check::run(spec)?;
        }
    }

    Ok(())
}
