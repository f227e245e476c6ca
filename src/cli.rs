//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Callboard - promo site backend (offers, click tracking, call board)
#[derive(Parser)]
#[command(name = "callboard")]
#[command(version)]
#[command(about = "Promo site backend: offer catalog, click tracking and a shared call board", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Generate example configuration file
    ConfigGen {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["callboard"]);
        assert_eq!(cli.config, "config.toml");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_gen_with_path() {
        let cli = Cli::parse_from(["callboard", "-c", "prod.toml", "config-gen", "out.toml"]);
        assert_eq!(cli.config, "prod.toml");
        assert_eq!(
            cli.command,
            Some(Commands::ConfigGen {
                output_path: Some("out.toml".to_string()),
                force: false,
            })
        );
    }
}
