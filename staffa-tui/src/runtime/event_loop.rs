use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use staffa_client::StaffaClient;
use std::io;
use std::time::Duration;

use crate::app::App;
use crate::ui;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &StaffaClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // Initial load for the view the app opens on.
    let _ = action_tx.send(Action::LoadEmployees);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
