use crate::app::{App, Panel};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the feed list panel.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let is_focused = app.focus == Panel::Feeds;

    let style_selected = app.style("list_selected");
    let style_normal = app.style("list_normal");
    let style_disabled = app.style("list_disabled");
    let style_meta = app.style("list_meta");

    let items: Vec<ListItem> = if app.feeds_loading {
        vec![ListItem::new("Loading...")]
    } else if app.feeds.is_empty() {
        vec![ListItem::new("No feeds (a to add)")]
    } else {
        app.feeds
            .iter()
            .enumerate()
            .map(|(i, feed)| {
                let style = if i == app.selected_feed && is_focused {
                    style_selected
                } else if !feed.enabled {
                    style_disabled
                } else {
                    style_normal
                };

                let marker = if feed.enabled { "  " } else { "- " };
                let mut spans = vec![
                    Span::styled(marker, style),
                    Span::styled(feed.title().to_string(), style),
                ];
                if !feed.categories.is_empty() {
                    spans.push(Span::styled(
                        format!(" [{}]", feed.categories.join(", ")),
                        style_meta,
                    ));
                }

                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let title = format!(" Feeds ({}) ", app.feeds.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    let mut state = ListState::default().with_selected(Some(app.selected_feed));
    f.render_stateful_widget(list, area, &mut state);
}
