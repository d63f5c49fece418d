//! Application state and state transitions.
//!
//! `App` owns everything the render and input layers touch: the API
//! client, panel data, the modal state machine, the toast stack, and the
//! shortcut registry. Mutations happen through methods here or in the
//! input layer; rendering never mutates.

use std::borrow::Cow;

use ratatui::style::Style;
use tokio::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::config::Config;
use crate::form::{Field, FormState, SubmitSpec};
use crate::modal::{ModalHandle, ModalIntent, ModalState};
use crate::model::{Category, CategoryFeeds, FeedSummary};
use crate::shortcuts::{Context, ShortcutRegistry};
use crate::theme::{StyleMap, ThemeVariant};
use crate::ui::toast::{ToastLevel, ToastStack};

/// How long status bar messages stay up.
const STATUS_TTL_SECS: u64 = 3;

/// Default color offered when creating a category.
const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

// ============================================================================
// Panels and Focus
// ============================================================================

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Categories,
    Feeds,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Self::Categories => Self::Feeds,
            Self::Feeds => Self::Categories,
        }
    }
}

// ============================================================================
// Confirmation Dialogs
// ============================================================================

/// A destructive action awaiting y/n confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCategory { id: i64, name: String },
    DeleteFeed { id: i64, title: String },
}

// ============================================================================
// Category Feeds Overlay
// ============================================================================

/// Feeds-in-category listing shown as an overlay.
#[derive(Debug, Clone)]
pub struct CategoryFeedsView {
    pub category_name: String,
    pub feeds: CategoryFeeds,
    pub loading: bool,
}

// ============================================================================
// App Events
// ============================================================================

/// Events sent from background load tasks back to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    CategoriesLoaded(Result<Vec<Category>, String>),
    FeedsLoaded(Result<Vec<FeedSummary>, String>),
    CategoryFeedsLoaded {
        category_name: String,
        result: Result<CategoryFeeds, String>,
    },
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub api: ApiClient,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Shortcuts
    pub shortcuts: ShortcutRegistry,
    pub shortcut_symbols: bool,

    // Panel data
    pub categories: Vec<Category>,
    pub selected_category: usize,
    pub categories_loading: bool,
    pub feeds: Vec<FeedSummary>,
    pub selected_feed: usize,
    pub feeds_loading: bool,
    pub focus: Panel,

    // Overlays
    pub modal: ModalState,
    pub toasts: ToastStack,
    pub pending_confirm: Option<ConfirmAction>,
    pub pending_alert: Option<String>,
    pub category_feeds: Option<CategoryFeedsView>,
    pub show_help: bool,
    pub help_scroll_offset: usize,

    // Chrome
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        let theme_variant =
            ThemeVariant::from_str_name(&config.theme).unwrap_or(ThemeVariant::Dark);
        let theme = StyleMap::from_palette(&theme_variant.palette());

        let mut shortcuts = ShortcutRegistry::new();
        let warnings = shortcuts.apply_overrides(&config.shortcuts);

        let mut app = Self {
            api,
            theme_variant,
            theme,
            shortcuts,
            shortcut_symbols: config.use_shortcut_symbols(),
            categories: Vec::new(),
            selected_category: 0,
            categories_loading: false,
            feeds: Vec::new(),
            selected_feed: 0,
            feeds_loading: false,
            focus: Panel::Categories,
            modal: ModalState::default(),
            toasts: ToastStack::new(Duration::from_millis(config.toast_duration_ms)),
            pending_confirm: None,
            pending_alert: None,
            category_feeds: None,
            show_help: false,
            help_scroll_offset: 0,
            status_message: None,
            needs_redraw: true,
        };

        for warning in warnings {
            app.toast_warning(warning);
        }

        app
    }

    /// Resolve a named style role against the active theme.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to the next theme variant and rebuild the style map.
    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.theme = StyleMap::from_palette(&self.theme_variant.palette());
        self.set_status(format!("Theme: {}", self.theme_variant.name()));
    }

    // ------------------------------------------------------------------
    // Status bar
    // ------------------------------------------------------------------

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Toasts
    // ------------------------------------------------------------------

    pub fn toast_success(&mut self, message: impl Into<String>) -> u64 {
        self.toasts.push(message, ToastLevel::Success)
    }

    pub fn toast_error(&mut self, message: impl Into<String>) -> u64 {
        self.toasts.push(message, ToastLevel::Error)
    }

    pub fn toast_warning(&mut self, message: impl Into<String>) -> u64 {
        self.toasts.push(message, ToastLevel::Warning)
    }

    pub fn toast_info(&mut self, message: impl Into<String>) -> u64 {
        self.toasts.push(message, ToastLevel::Info)
    }

    /// Show a blocking acknowledge dialog, for situations where a toast
    /// would be too easy to miss.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.pending_alert = Some(message.into());
    }

    // ------------------------------------------------------------------
    // Selection and focus
    // ------------------------------------------------------------------

    pub fn selected_category(&self) -> Option<&Category> {
        self.categories.get(self.selected_category)
    }

    pub fn selected_feed(&self) -> Option<&FeedSummary> {
        self.feeds.get(self.selected_feed)
    }

    pub fn nav_down(&mut self) {
        match self.focus {
            Panel::Categories => {
                if !self.categories.is_empty() {
                    self.selected_category =
                        (self.selected_category + 1).min(self.categories.len() - 1);
                }
            }
            Panel::Feeds => {
                if !self.feeds.is_empty() {
                    self.selected_feed = (self.selected_feed + 1).min(self.feeds.len() - 1);
                }
            }
        }
    }

    pub fn nav_up(&mut self) {
        match self.focus {
            Panel::Categories => {
                self.selected_category = self.selected_category.saturating_sub(1);
            }
            Panel::Feeds => {
                self.selected_feed = self.selected_feed.saturating_sub(1);
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Shortcut dispatch context for the focused panel.
    pub fn shortcut_context(&self) -> Context {
        match self.focus {
            Panel::Categories => Context::Categories,
            Panel::Feeds => Context::Feeds,
        }
    }

    /// Keep selections inside bounds after panel data changes.
    pub fn clamp_selections(&mut self) {
        if self.selected_category >= self.categories.len() {
            self.selected_category = self.categories.len().saturating_sub(1);
        }
        if self.selected_feed >= self.feeds.len() {
            self.selected_feed = self.feeds.len().saturating_sub(1);
        }
    }

    // ------------------------------------------------------------------
    // Modal builders
    // ------------------------------------------------------------------

    fn category_fields() -> Vec<Field> {
        vec![
            Field::text("name", "Name").required(),
            Field::textarea("description", "Description"),
            Field::text("color", "Color").with_value(DEFAULT_CATEGORY_COLOR),
            Field::text("icon", "Icon"),
            Field::checkbox("enabled", "Enabled").with_checked(true),
        ]
    }

    pub fn add_category_modal(&self) -> ModalHandle {
        let form = FormState::new(Self::category_fields()).with_submit_label("Create");
        ModalHandle::new(
            "Add Category",
            form,
            SubmitSpec::post("/api/categories"),
            ModalIntent::AddCategory,
        )
    }

    pub fn edit_category_modal(&self, category: &Category) -> ModalHandle {
        let mut form = FormState::new(Self::category_fields()).with_submit_label("Save");
        form.populate(&category.to_form_data());
        ModalHandle::new(
            "Edit Category",
            form,
            SubmitSpec::put(&format!("/api/categories/{}", category.id)),
            ModalIntent::EditCategory { id: category.id },
        )
    }

    pub fn add_feed_modal(&self) -> ModalHandle {
        let form = FormState::new(vec![
            Field::url("url", "Feed URL").required(),
            Field::text("name", "Name"),
            Field::checkbox("enabled", "Enabled").with_checked(true),
        ])
        .with_submit_label("Add");
        ModalHandle::new(
            "Add Feed",
            form,
            SubmitSpec::post("/api/feeds"),
            ModalIntent::AddFeed,
        )
    }

    /// Checkbox group over every known category, pre-checked from the
    /// feed's current assignments.
    pub fn assign_categories_modal(&self, feed: &FeedSummary) -> ModalHandle {
        let fields = self
            .categories
            .iter()
            .map(|cat| {
                Field::group_checkbox("category_ids", &cat.name, &cat.id.to_string())
                    .with_checked(feed.categories.iter().any(|name| name == &cat.name))
            })
            .collect();
        let form = FormState::new(fields).with_submit_label("Save");
        ModalHandle::new(
            &format!("Categories for {}", feed.title()),
            form,
            SubmitSpec::put(&format!("/api/feeds/{}/categories", feed.id)),
            ModalIntent::AssignFeedCategories { feed_id: feed.id },
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
