//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Canonical name, as written in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Next variant in the cycle order.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- List panels --
    pub list_normal: Style,
    pub list_selected: Style,
    pub list_disabled: Style,
    pub list_meta: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,

    // -- Modal forms --
    pub modal_title: Style,
    pub field_label: Style,
    pub field_value: Style,
    pub field_focused: Style,
    pub field_error: Style,
    pub submit_button: Style,
    pub submit_button_busy: Style,

    // -- Toasts --
    pub toast_success: Style,
    pub toast_error: Style,
    pub toast_warning: Style,
    pub toast_info: Style,

    // -- Help overlay --
    pub help_heading: Style,
    pub help_body: Style,
    pub help_hint: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            list_normal: Style::default(),
            list_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            list_disabled: Style::default().fg(Color::DarkGray),
            list_meta: Style::default().fg(Color::Cyan),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),

            modal_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            field_label: Style::default().fg(Color::Gray),
            field_value: Style::default(),
            field_focused: Style::default().bg(Color::DarkGray).fg(Color::White),
            field_error: Style::default().fg(Color::Red),
            submit_button: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            submit_button_busy: Style::default().fg(Color::DarkGray),

            toast_success: Style::default().fg(Color::Green),
            toast_error: Style::default().fg(Color::Red),
            toast_warning: Style::default().fg(Color::Yellow),
            toast_info: Style::default().fg(Color::Blue),

            help_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            help_body: Style::default(),
            help_hint: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            list_normal: Style::default().fg(Color::Black),
            list_selected: Style::default().bg(Color::Blue).fg(Color::White),
            list_disabled: Style::default().fg(Color::DarkGray),
            list_meta: Style::default().fg(Color::Blue),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),

            modal_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            field_label: Style::default().fg(Color::DarkGray),
            field_value: Style::default().fg(Color::Black),
            field_focused: Style::default().bg(Color::Blue).fg(Color::White),
            field_error: Style::default().fg(Color::Red),
            submit_button: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            submit_button_busy: Style::default().fg(Color::DarkGray),

            toast_success: Style::default().fg(Color::Green),
            toast_error: Style::default().fg(Color::Red),
            toast_warning: Style::default().fg(Color::Magenta),
            toast_info: Style::default().fg(Color::Blue),

            help_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            help_body: Style::default().fg(Color::Black),
            help_hint: Style::default().fg(Color::DarkGray),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"field_error"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 21] = [
    "list_normal",
    "list_selected",
    "list_disabled",
    "list_meta",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "modal_title",
    "field_label",
    "field_value",
    "field_focused",
    "field_error",
    "submit_button",
    "submit_button_busy",
    "toast_success",
    "toast_error",
    "toast_warning",
    "toast_info",
    "help_heading",
    "help_body",
    "help_hint",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 21] = [
            p.list_normal,
            p.list_selected,
            p.list_disabled,
            p.list_meta,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.modal_title,
            p.field_label,
            p.field_value,
            p.field_focused,
            p.field_error,
            p.submit_button,
            p.submit_button_busy,
            p.toast_success,
            p.toast_error,
            p.toast_warning,
            p.toast_info,
            p.help_heading,
            p.help_body,
            p.help_hint,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_focus_border() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.panel_border_focused,
            Style::default().fg(Color::Cyan)
        );
    }

    #[test]
    fn dark_palette_status_bar() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.status_bar,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.list_selected, light.list_selected);
        assert_ne!(dark.panel_border_focused, light.panel_border_focused);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycle_covers_all_and_returns() {
        let start = ThemeVariant::Dark;
        assert_eq!(start.next(), ThemeVariant::Light);
        assert_eq!(start.next().next(), start);
        assert_eq!(ThemeVariant::Light.name(), "light");
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);

        assert_eq!(sm.resolve("list_selected"), palette.list_selected);
        assert_eq!(sm.resolve("field_error"), palette.field_error);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn role_names_count_matches_palette_fields() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
    }
}
