use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use carbase_core::VERSION;

/// carbase - keep a small register of vehicles in a plain-text file
#[derive(Parser)]
#[command(name = "carbase")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file
    #[arg(short, long, global = true, env = "CARBASE_DATA")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII borders and symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub model: String,

    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    /// Engine capacity in cm^3
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: i32,

    #[arg(long)]
    pub fuel: String,

    /// Vehicle type (e.g. Sedan, Hatchback)
    #[arg(long = "type", value_name = "TYPE")]
    pub vehicle_type: String,

    /// Registration number
    #[arg(long)]
    pub registration: String,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Car number as shown by `carbase list`
    #[arg(value_name = "NUMBER")]
    pub ordinal: usize,
}

/// Arguments for the `search` command
#[derive(Args)]
#[command(group(
    ArgGroup::new("criterion")
        .required(true)
        .args(["exact", "contains", "equals", "range"]),
))]
pub struct SearchArgs {
    /// Field to search (brand, model, year, capacity, fuel, type, registration)
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Match the whole value (text fields)
    #[arg(long, value_name = "TERM")]
    pub exact: Option<String>,

    /// Match part of the value (text fields)
    #[arg(long, value_name = "TERM")]
    pub contains: Option<String>,

    /// Match a single number (year, capacity)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub equals: Option<i32>,

    /// Match an inclusive range (year, capacity)
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    pub range: Option<Vec<i32>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive numbered menu (default)
    Menu,

    /// List all cars
    List(ListArgs),

    /// Add a car and save the data file
    Add(AddArgs),

    /// Remove a car by number and save the data file
    Remove(RemoveArgs),

    /// Search cars by one field
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
