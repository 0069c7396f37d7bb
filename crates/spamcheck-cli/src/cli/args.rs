//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Check IP addresses against a DNS blackhole list
///
/// Queries the Spamhaus zen zone (or any DNSBL zone you configure) to tell
/// known spam sources from legitimate ones. With no addresses on the
/// command line, reads them interactively from stdin.
#[derive(Parser, Debug)]
#[command(name = "spamcheck")]
#[command(author, version, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// IP addresses to check
    pub hosts: Vec<String>,

    /// Blackhole zone to query (default: zen.spamhaus.org)
    #[arg(short, long, env = "SPAMCHECK_ZONE", global = true)]
    pub zone: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (zone, output_format, no_color)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_parse_as_positionals() {
        let cli = Cli::try_parse_from(["spamcheck", "8.8.8.8", "127.0.0.2"]).unwrap();
        assert_eq!(cli.hosts, ["8.8.8.8", "127.0.0.2"]);
        assert!(cli.command.is_none());
        assert!(cli.zone.is_none());
    }

    #[test]
    fn zone_flag_overrides() {
        let cli =
            Cli::try_parse_from(["spamcheck", "--zone", "bl.example.net", "1.2.3.4"]).unwrap();
        assert_eq!(cli.zone.as_deref(), Some("bl.example.net"));
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = Cli::try_parse_from(["spamcheck", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommands::Show
            }))
        ));
    }
}
