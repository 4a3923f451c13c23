use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hemobank",
    about = "HemoBank — blood bank inventory and transaction ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the JSON document holding all bank state
    #[arg(long, global = true, default_value = ".hemobank.json")]
    pub store: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum RoleArg {
    Donor,
    Receiver,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start a session as a donor or receiver
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Show blood-group inventory levels
    Inventory,
    /// Donate units as the current donor
    Donate(DonateArgs),
    /// Request units as the current receiver
    Request(RequestArgs),
    /// Show your transactions, newest first
    History,
}

#[derive(Args)]
pub struct LoginArgs {
    pub email: String,
    #[arg(long, value_enum)]
    pub role: RoleArg,
}

#[derive(Args)]
pub struct DonateArgs {
    pub units: u32,
    /// Blood group, e.g. "O+" or "AB-"
    #[arg(long)]
    pub group: String,
}

#[derive(Args)]
pub struct RequestArgs {
    pub units: u32,
    /// Blood group, e.g. "O+" or "AB-"
    #[arg(long)]
    pub group: String,
    /// Explicitly acknowledge the request
    #[arg(long)]
    pub confirm: bool,
}
