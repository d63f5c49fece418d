//! Modal form overlay — fields, inline errors, and the submit control.

use crate::app::App;
use crate::form::FieldKind;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the open modal as a centered overlay. No-op when closed.
pub fn render(f: &mut Frame, app: &App) {
    let Some(handle) = app.modal.handle() else {
        return;
    };
    let area = f.area();

    let form = &handle.form;

    // One line per field, one more per inline error, plus the submit
    // control and hint.
    let error_lines = form.fields.iter().filter(|fld| fld.error.is_some()).count();
    let content_lines = form.fields.len() + error_lines + 4;

    let width = 56u16.min(area.width.saturating_sub(4));
    let height = (content_lines as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    if overlay.width < 20 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let style_label = app.style("field_label");
    let style_value = app.style("field_value");
    let style_focused = app.style("field_focused");
    let style_error = app.style("field_error");

    let mut lines: Vec<Line> = Vec::with_capacity(content_lines);

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focused;

        let value_text = match &field.kind {
            FieldKind::Checkbox | FieldKind::Radio => {
                let mark = if field.checked { "x" } else { " " };
                let bracket = if field.kind == FieldKind::Radio {
                    format!("({mark})")
                } else {
                    format!("[{mark}]")
                };
                format!("{} {}", bracket, field.display_label())
            }
            FieldKind::Select { .. } => format!("< {} >", field.value),
            _ => {
                if focused && form.editing {
                    format!("{}_", field.value)
                } else {
                    field.value.clone()
                }
            }
        };

        let mut spans = Vec::with_capacity(3);
        if matches!(field.kind, FieldKind::Checkbox | FieldKind::Radio) {
            spans.push(Span::styled(
                value_text,
                if focused { style_focused } else { style_value },
            ));
        } else {
            let required_mark = if field.required { "*" } else { "" };
            spans.push(Span::styled(
                format!("{}{}: ", field.display_label(), required_mark),
                style_label,
            ));
            spans.push(Span::styled(
                value_text,
                if focused { style_focused } else { style_value },
            ));
        }
        lines.push(Line::from(spans));

        if let Some(error) = &field.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                style_error,
            )));
        }
    }

    lines.push(Line::from(""));

    let submit_style = if form.in_flight() {
        app.style("submit_button_busy")
    } else if form.submit_focused() {
        style_focused
    } else {
        app.style("submit_button")
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", form.submit_label),
        submit_style,
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "(Tab/j/k) Move  (Enter) Edit/Submit  (Space) Toggle  (Esc) Close",
        app.style("help_hint"),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border_focused"))
            .title(Span::styled(
                format!(" {} ", handle.title),
                app.style("modal_title"),
            )),
    );

    f.render_widget(paragraph, overlay);
}
