//! Render dispatch for the TUI.
//!
//! Draws the two panels and the status bar, then stacks overlays in a
//! fixed order: category feeds, confirm dialog, modal form, help, toasts.
//! Later overlays paint over earlier ones.

use crate::app::{App, CategoryFeedsView, ConfirmAction};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{categories, feeds, form_view, help, status, toast};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 50;
pub(super) const MIN_HEIGHT: u16 = 10;

pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[0]);

    categories::render(f, app, panels[0]);
    feeds::render(f, app, panels[1]);
    status::render(f, app, chunks[1]);

    if let Some(view) = &app.category_feeds {
        render_category_feeds_overlay(f, app, view);
    }

    if let Some(confirm) = &app.pending_confirm {
        render_confirm_overlay(f, app, confirm);
    }

    if let Some(message) = &app.pending_alert {
        render_alert_overlay(f, app, message);
    }

    form_view::render(f, app);

    if app.show_help {
        help::render(f, app);
    }

    // Toasts always paint last so they stay visible over any overlay.
    toast::render(f, app, chunks[0]);
}

/// Render the feeds-in-category listing as a centered overlay.
fn render_category_feeds_overlay(f: &mut Frame, app: &App, view: &CategoryFeedsView) {
    let area = f.area();

    let width = 60u16.min(area.width.saturating_sub(4));
    let height = 16u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 20 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let body = if view.loading {
        "Loading...".to_string()
    } else if view.feeds.feeds.is_empty() {
        "No feeds in this category.\n\n(Esc) Close".to_string()
    } else {
        let max_rows = overlay.height.saturating_sub(4) as usize;
        let mut lines: Vec<String> = view
            .feeds
            .feeds
            .iter()
            .take(max_rows)
            .map(|feed| {
                let marker = if feed.enabled { " " } else { "-" };
                format!("{} {}", marker, feed.title())
            })
            .collect();
        if view.feeds.total > lines.len() {
            lines.push(format!("  ... {} total", view.feeds.total));
        }
        lines.push(String::new());
        lines.push("(Esc) Close".to_string());
        lines.join("\n")
    };

    let paragraph = Paragraph::new(body).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border_focused"))
            .title(format!(" Feeds in {} ", view.category_name)),
    );

    f.render_widget(paragraph, overlay);
}

/// Render a single-button acknowledge dialog centered on screen.
fn render_alert_overlay(f: &mut Frame, app: &App, message: &str) {
    let area = f.area();

    let width = 50u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 10 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let paragraph = Paragraph::new(format!("{}\n\n(Enter) OK", message))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(" Notice "),
        )
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, overlay);
}

/// Render a confirmation dialog overlay centered on screen.
fn render_confirm_overlay(f: &mut Frame, app: &App, confirm: &ConfirmAction) {
    let area = f.area();

    let text = match confirm {
        ConfirmAction::DeleteCategory { name, .. } => {
            format!(
                "Delete category \"{}\"?\n\nFeeds keep their other categories.\n\n(y) Confirm  (n/Esc) Cancel",
                name
            )
        }
        ConfirmAction::DeleteFeed { title, .. } => {
            format!(
                "Delete feed \"{}\"?\n\n(y) Confirm  (n/Esc) Cancel",
                title
            )
        }
    };

    let width = 50u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 10 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(" Confirm "),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, overlay);
}
