use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "staffa-tui")]
#[command(about = "Terminal UI for the Staffa HR backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the UI against a Staffa server
    Run,
    /// Authenticate and store a bearer token
    Login,
    /// Remove the stored bearer token
    Logout,
    /// Print config path and create a default file if missing
    ConfigPath,
}
