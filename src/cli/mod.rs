pub mod output;

use clap::{Parser, Subcommand};

pub use output::{print_analysis, print_game_dates, OutputMode, PitchRow};

#[derive(Parser)]
#[command(name = "pitchcast")]
#[command(version = "0.1.0")]
#[command(about = "Pitch-type prediction service for MLB pitchers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding default.toml and environment overrides
    #[arg(short, long, env = "PITCHCAST_CONFIG_DIR", default_value = "config")]
    pub config_dir: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List a pitcher's game dates over the configured season range
    Dates {
        /// Display name, e.g. "Logan Webb"
        #[arg(short, long)]
        player: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Predict every pitch of one game and report accuracy
    Analyze {
        /// Display name, e.g. "Logan Webb"
        #[arg(short, long)]
        player: String,
        /// Game date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::parse_from([
            "pitchcast",
            "analyze",
            "--player",
            "Logan Webb",
            "--date",
            "2023-04-08",
        ]);
        match cli.command {
            Some(Commands::Analyze { player, date, json }) => {
                assert_eq!(player, "Logan Webb");
                assert_eq!(date, "2023-04-08");
                assert!(!json);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["pitchcast", "--config-dir", "conf"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config_dir, "conf");
    }
}
