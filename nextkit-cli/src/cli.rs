//! Argument parsing and command dispatch.
//!
//! The argument vector is parsed exactly once into a [`Cli`], turned into an
//! [`Invocation`] holding that command's own options, and executed by value.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

use crate::commands::scaffold::{self, ScaffoldKind, ScaffoldOptions};
use crate::commands::start::{self, StartOptions};
use crate::commands::version;
use crate::error::{ScaffoldError, EXIT_OK};

#[derive(Parser, Debug)]
#[command(
    name = "nextkit",
    version,
    about = "A simple tool to generate files and folders in a Next.js project.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print debug logs for every filesystem operation
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Clean files and create basic folder structure for a new project
    Start {
        /// The project has tailwind installed (affects style folder cleanup)
        #[arg(long)]
        tailwind: bool,
    },
    /// Create a new empty component inside components folder
    Component {
        /// Component name; the first letter is capitalized
        name: Option<String>,
        /// Use JavaScript file extensions instead of TypeScript
        #[arg(long)]
        js: bool,
    },
    /// Create a new empty container inside containers folder
    Container {
        /// Container name; the first letter is capitalized
        name: Option<String>,
        /// Use JavaScript file extensions instead of TypeScript
        #[arg(long)]
        js: bool,
    },
    /// Print the version string
    Version,
}

/// A parsed command, ready to run once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Start(StartOptions),
    Scaffold(ScaffoldOptions),
    Version,
}

impl Commands {
    pub fn into_invocation(self) -> Invocation {
        match self {
            Commands::Start { tailwind } => Invocation::Start(StartOptions { tailwind }),
            Commands::Component { name, js } => Invocation::Scaffold(ScaffoldOptions {
                kind: ScaffoldKind::Component,
                name,
                js,
            }),
            Commands::Container { name, js } => Invocation::Scaffold(ScaffoldOptions {
                kind: ScaffoldKind::Container,
                name,
                js,
            }),
            Commands::Version => Invocation::Version,
        }
    }
}

impl Invocation {
    fn name(&self) -> &'static str {
        match self {
            Invocation::Start(_) => "start",
            Invocation::Scaffold(opts) => opts.kind.label(),
            Invocation::Version => "version",
        }
    }

    /// Run the command. Step failures are printed along the way and never
    /// returned; only a missing name is an error.
    pub fn execute(self) -> Result<(), ScaffoldError> {
        tracing::info!(command = self.name(), "dispatching");
        match self {
            Invocation::Start(opts) => {
                start::run(&opts);
            }
            Invocation::Scaffold(opts) => {
                scaffold::run(&opts)?;
            }
            Invocation::Version => version::run(),
        }
        Ok(())
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse `args`, run the selected command and return the process exit status.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    init_tracing(cli.verbose);

    match cli.command.into_invocation().execute() {
        Ok(()) => EXIT_OK,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            e.exit_code()
        }
    }
}

fn report_parse_error(err: clap::Error) -> i32 {
    if err.kind() != ErrorKind::InvalidSubcommand {
        let _ = err.print();
        return err.exit_code();
    }

    let token = match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(token)) => token.clone(),
        _ => String::new(),
    };
    let e = ScaffoldError::UnrecognizedCommand(token.red().to_string());
    eprintln!("nextkit: {e}");
    eprintln!("Run 'nextkit --help' to list the available commands.");
    e.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("nextkit").chain(args.iter().copied()))
    }

    #[test]
    fn start_flag_is_owned_by_its_invocation() {
        let cli = parse(&["start", "--tailwind"]).unwrap();
        assert_eq!(
            cli.command.into_invocation(),
            Invocation::Start(StartOptions { tailwind: true })
        );
        let cli = parse(&["start"]).unwrap();
        assert_eq!(
            cli.command.into_invocation(),
            Invocation::Start(StartOptions { tailwind: false })
        );
    }

    #[test]
    fn component_name_comes_from_parsed_positional() {
        let cli = parse(&["component", "--js", "button"]).unwrap();
        assert_eq!(
            cli.command.into_invocation(),
            Invocation::Scaffold(ScaffoldOptions {
                kind: ScaffoldKind::Component,
                name: Some("button".into()),
                js: true,
            })
        );
    }

    #[test]
    fn container_without_name_still_parses() {
        let cli = parse(&["container"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Container {
                name: None,
                js: false
            }
        );
    }

    #[test]
    fn unknown_command_is_invalid_subcommand() {
        let err = parse(&["deploy"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn start_rejects_unknown_flag() {
        let err = parse(&["start", "--tailwindcss"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn verbose_is_global() {
        let cli = parse(&["version", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Commands::Version);
    }
}
