//! UI Rendering
//!
//! Layout and rendering for the terminal search UI.

use crate::feed::rss_link;
use crate::tui::app::{App, NotificationLevel, View};
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let notification_height = (app.notifications.len() as u16).min(4) * 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(3),                   // Input
            Constraint::Min(6),                      // Results
            Constraint::Length(notification_height), // Notifications
            Constraint::Length(1),                   // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_input(frame, chunks[1], app);
    render_results(frame, chunks[2], app);
    render_notifications(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    if app.view == View::Help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Podcast RSS Search", Theme::title()),
        Span::styled("  Enter a podcast name to get its RSS feed link", Theme::text_secondary()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Podcast name ")
        .borders(Borders::ALL)
        .border_style(if app.view == View::Search {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.input, inner);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Results ({}) ", app.results.len()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if app.loading {
        let spinner = Icons::SPINNER[app.tick % Icons::SPINNER.len()];
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!("{} Searching...", spinner),
            Theme::active(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    if app.results.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Type a podcast name and press Enter",
            Theme::text_dim(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|result| {
            ListItem::new(vec![
                Line::from(Span::styled(result.name.clone(), Theme::heading())),
                Line::from(vec![
                    Span::styled("  RSS: ", Theme::text_secondary()),
                    Span::styled(rss_link(&result.seq), Theme::link()),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected())
        .highlight_symbol(Icons::SELECTED);

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_notifications(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .rev()
        .take(4)
        .flat_map(|n| {
            let (icon, style) = match n.level {
                NotificationLevel::Info => (Icons::INFO, Theme::warning()),
                NotificationLevel::Success => (Icons::SUCCESS, Theme::success()),
                NotificationLevel::Error => (Icons::ERROR, Theme::error()),
            };
            vec![
                Line::from(Span::styled(format!("{} {}", icon, n.title), style)),
                Line::from(Span::styled(
                    format!("  {}", n.description.clone().unwrap_or_default()),
                    Theme::text(),
                )),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.loading {
        Span::styled("Searching...", Theme::active())
    } else {
        Span::styled("Ready", Theme::text_secondary())
    };

    let shortcuts = vec![
        Span::styled(" [Enter]", Theme::shortcut_key()),
        Span::styled(" Search ", Theme::shortcut_desc()),
        Span::styled("[↑/↓]", Theme::shortcut_key()),
        Span::styled(" Select ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+Y]", Theme::shortcut_key()),
        Span::styled(" Copy link ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+Q]", Theme::shortcut_key()),
        Span::styled(" Quit ", Theme::shortcut_desc()),
        Span::styled("[F1]", Theme::shortcut_key()),
        Span::styled(" Help", Theme::shortcut_desc()),
    ];

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter        ", Theme::shortcut_key()),
            Span::styled("Search (cancels a running search)", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("↑/↓          ", Theme::shortcut_key()),
            Span::styled("Select result", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+Y / F2  ", Theme::shortcut_key()),
            Span::styled("Copy RSS link of selected result", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+Q       ", Theme::shortcut_key()),
            Span::styled("Quit", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Esc          ", Theme::shortcut_key()),
            Span::styled("Close help", Theme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Theme::text_dim())),
    ];

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
