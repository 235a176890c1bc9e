//! Terminal User Interface Module
//!
//! A terminal client for the search proxy, built with Ratatui.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │       Podcast RSS Search  Enter a podcast name to get its RSS   │
//! ├─ Podcast name ──────────────────────────────────────────────────┤
//! │ the daily                                                       │
//! ├─ Results (1) ───────────────────────────────────────────────────┤
//! │▶The Daily                                                       │
//! │   RSS: https://podwise.ai/feed/podcasts/123/rss.xml             │
//! └─────────────────────────────────────────────────────────────────┘
//!  ✓ Copied
//!  Ready │ [Enter] Search [↑/↓] Select [Ctrl+Y] Copy link [Ctrl+Q] Quit
//! ```

pub mod app;
pub mod clipboard;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::{App, AppEvent, Notification, NotificationLevel, View};
pub use clipboard::{Clipboard, Osc52Clipboard};
pub use event::{AppAction, EventHandler};

use crate::client::ProxyClient;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI against the proxy at `proxy_url`
pub async fn run(proxy_url: &str) -> anyhow::Result<()> {
    info!(proxy = %proxy_url, "Starting TUI mode");

    let mut terminal = init_terminal()?;

    let backend = Arc::new(ProxyClient::new(proxy_url));
    let mut app = App::new(backend, Box::new(Osc52Clipboard));
    let mut events = EventHandler::new(std::time::Duration::from_millis(150));

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            action = events.next() => match action {
                Some(action) => app.handle_action(action),
                None => break,
            },
            Some(event) = app.next_event() => app.handle_event(event),
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}
