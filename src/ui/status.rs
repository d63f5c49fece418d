use crate::app::{App, Panel};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Cow keeps the static hint strings allocation-free.
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.modal.is_open() {
        Cow::Borrowed("Editing form | Esc close")
    } else {
        match app.focus {
            Panel::Categories => Cow::Borrowed(
                "[a]dd [e]dit [d]elete [t]oggle [Enter]feeds [Tab]switch [?]help [q]uit",
            ),
            Panel::Feeds => Cow::Borrowed(
                "[a]dd [d]elete [t]oggle [c]ategories [Tab]switch [?]help [q]uit",
            ),
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
