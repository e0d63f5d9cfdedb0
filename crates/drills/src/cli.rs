use clap::{Parser, Subcommand};
use drills_compress::CompressionVariant;

#[derive(Parser)]
#[command(name = "drills")]
#[command(version)]
#[command(about = "Strategy-pattern compressor and expense tracker exercises")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a compression strategy against a file name
    Compress {
        /// File name to compress (never opened)
        file: String,

        /// Strategy to use: jpeg, png or gif
        #[arg(short, long)]
        strategy: Option<CompressionVariant>,

        /// Pick the strategy from the file extension when --strategy is omitted
        #[arg(long)]
        auto: bool,
    },

    /// Build an expense ledger and print it with its total
    Expenses {
        /// Expense to add, as DESCRIPTION=AMOUNT (repeatable)
        #[arg(long = "add", value_name = "DESCRIPTION=AMOUNT", value_parser = parse_expense)]
        add: Vec<(String, f64)>,

        /// Description to remove after all adds (repeatable)
        #[arg(long = "remove", value_name = "DESCRIPTION")]
        remove: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List supported compression strategies
    Strategies,

    /// Print version information
    Version,
}

/// Split on the last `=` so descriptions may themselves contain one
fn parse_expense(s: &str) -> Result<(String, f64), String> {
    let (description, amount) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected DESCRIPTION=AMOUNT, got '{}'", s))?;
    if description.is_empty() {
        return Err("expense description must not be empty".to_string());
    }
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;
    Ok((description.to_string(), amount))
}
