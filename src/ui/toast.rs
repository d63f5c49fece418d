//! Toast notifications — a bounded stack of transient messages.
//!
//! Toasts expire on the periodic tick once their deadline passes, or can
//! be dismissed early by id. Dismissal is idempotent: a toast that already
//! expired is simply gone.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tokio::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Severity of a toast, selecting its style role and prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    pub fn style_role(self) -> &'static str {
        match self {
            Self::Success => "toast_success",
            Self::Error => "toast_error",
            Self::Warning => "toast_warning",
            Self::Info => "toast_info",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
    deadline: Instant,
}

/// Active toasts in arrival order, oldest first.
#[derive(Debug)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl ToastStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Queue a toast with the stack's default lifetime and return its id
    /// for early dismissal.
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) -> u64 {
        let ttl = self.ttl;
        self.push_with_ttl(message, level, ttl)
    }

    /// Queue a toast with a caller-chosen lifetime.
    pub fn push_with_ttl(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
        ttl: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            level,
            deadline: Instant::now() + ttl,
        });
        id
    }

    /// Remove a toast by id. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose deadline has passed. Returns true when any
    /// were removed, so the caller knows to redraw.
    pub fn expire(&mut self) -> bool {
        let now = Instant::now();
        let before = self.toasts.len();
        self.toasts.retain(|t| t.deadline > now);
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.toasts.len()
    }
}

/// Render the toast stack anchored to the bottom-right corner, newest at
/// the bottom, each toast a one-line bordered box.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if app.toasts.is_empty() || area.width < 12 || area.height < 3 {
        return;
    }

    const TOAST_HEIGHT: u16 = 3;
    let max_visible = (area.height / TOAST_HEIGHT).min(4) as usize;
    let visible: Vec<&Toast> = app.toasts.iter().collect();
    let visible = &visible[visible.len().saturating_sub(max_visible)..];

    let max_width = area.width.saturating_sub(2).min(48);
    let mut y = area.y + area.height;

    for toast in visible.iter().rev() {
        if y < area.y + TOAST_HEIGHT {
            break;
        }
        y -= TOAST_HEIGHT;

        let text = format!("{} {}", toast.level.prefix(), toast.message);
        let width = (text.width() as u16 + 4).min(max_width).max(12);
        let x = area.x + area.width.saturating_sub(width + 1);
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);

        f.render_widget(Clear, rect);
        let style = app.style(toast.level.style_role());
        let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    fn stack() -> ToastStack {
        ToastStack::new(Duration::from_millis(4000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_ttl() {
        let mut toasts = stack();
        toasts.push("Category created", ToastLevel::Success);

        time::advance(Duration::from_millis(3999)).await;
        assert!(!toasts.expire());
        assert_eq!(toasts.len(), 1);

        time::advance(Duration::from_millis(2)).await;
        assert!(toasts.expire());
        assert!(toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_is_idempotent() {
        let mut toasts = stack();
        let id = toasts.push("Saved", ToastLevel::Success);

        assert!(toasts.dismiss(id));
        assert!(!toasts.dismiss(id));
        assert!(toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_toast_does_not_expire_twice() {
        let mut toasts = stack();
        let id = toasts.push("Saved", ToastLevel::Info);
        toasts.dismiss(id);

        time::advance(Duration::from_millis(5000)).await;
        assert!(!toasts.expire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique_across_pushes() {
        let mut toasts = stack();
        let a = toasts.push("one", ToastLevel::Info);
        let b = toasts.push("two", ToastLevel::Info);
        assert_ne!(a, b);

        // Dismissing one leaves the other.
        toasts.dismiss(a);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().id, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_is_unbounded_and_keeps_order() {
        let mut toasts = stack();
        for i in 0..10 {
            toasts.push(format!("toast {i}"), ToastLevel::Info);
        }
        // Nothing is dropped until it expires; the renderer limits what is
        // visible, not the queue.
        assert_eq!(toasts.len(), 10);
        assert_eq!(toasts.iter().next().unwrap().message, "toast 0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_per_toast_ttl_overrides_default() {
        let mut toasts = stack();
        toasts.push("default", ToastLevel::Info);
        toasts.push_with_ttl("sticky", ToastLevel::Warning, Duration::from_millis(10_000));

        time::advance(Duration::from_millis(4001)).await;
        assert!(toasts.expire());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().message, "sticky");

        time::advance(Duration::from_millis(6000)).await;
        assert!(toasts.expire());
        assert!(toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_keeps_newer_toasts() {
        let mut toasts = stack();
        toasts.push("old", ToastLevel::Info);
        time::advance(Duration::from_millis(3000)).await;
        toasts.push("new", ToastLevel::Info);
        time::advance(Duration::from_millis(1500)).await;

        assert!(toasts.expire());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().message, "new");
    }
}
