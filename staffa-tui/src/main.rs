mod app;
mod cli;
mod collection;
mod config;
mod dashboard;
mod login;
mod runtime;
mod session_store;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use staffa_client::{Session, StaffaClient};
use std::io;

use cli::{Cli, Commands};
use config::StaffaConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => run().await,
        Commands::Login => {
            let config = StaffaConfig::load()?;
            login::run_login(&config.api_url).await
        }
        Commands::Logout => {
            session_store::clear_token()?;
            println!("Logged out.");
            Ok(())
        }
        Commands::ConfigPath => {
            let path = StaffaConfig::config_path()?;
            if !path.exists() {
                StaffaConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run() -> Result<()> {
    let config = StaffaConfig::load()?;
    // An empty token still lets the UI start; authenticated views report
    // the missing login instead of exiting.
    let token = session_store::load_token()?.unwrap_or_default();
    let session = Session::new(&config.api_url, &token);
    let client = StaffaClient::new(session);

    let mut app = app::App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
