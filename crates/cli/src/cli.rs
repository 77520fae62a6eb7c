use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// StockPilot: inventory dashboard, reorder suggestions, and stock assistant.
#[derive(Debug, Parser)]
#[command(name = "stockpilot", version, long_about = None)]
pub struct Cli {
    /// Inventory snapshot file (JSON object with `products` and `sales`).
    #[arg(short, long, env = "STOCKPILOT_SNAPSHOT", default_value = "inventory.json")]
    pub snapshot: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show dashboard metrics and reorder suggestions
    Dashboard {
        /// Reference instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// Emit the reorder insight as JSON
        #[arg(long)]
        json: bool,
    },
    /// List products with their stock status
    Products,
    /// Record a sale and update the snapshot
    Sell {
        product_id: String,
        #[arg(short, long, default_value_t = 1)]
        units: u64,
    },
    /// Ask the inventory assistant a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_dashboard_with_fixed_instant() {
        let cli = Cli::try_parse_from([
            "stockpilot",
            "--snapshot",
            "data.json",
            "dashboard",
            "--now",
            "2024-06-30T12:00:00Z",
        ])
        .unwrap();

        assert_eq!(cli.snapshot, PathBuf::from("data.json"));
        match cli.command {
            Command::Dashboard { now, json } => {
                assert_eq!(now, Some(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()));
                assert!(!json);
            }
            other => panic!("expected dashboard, got {other:?}"),
        }
    }

    #[test]
    fn sell_defaults_to_one_unit() {
        let cli = Cli::try_parse_from(["stockpilot", "sell", "p1"]).unwrap();
        match cli.command {
            Command::Sell { product_id, units } => {
                assert_eq!(product_id, "p1");
                assert_eq!(units, 1);
            }
            other => panic!("expected sell, got {other:?}"),
        }
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["stockpilot", "ask"]).is_err());
        let cli = Cli::try_parse_from(["stockpilot", "ask", "what", "is", "low?"]).unwrap();
        match cli.command {
            Command::Ask { question } => assert_eq!(question.join(" "), "what is low?"),
            other => panic!("expected ask, got {other:?}"),
        }
    }
}
