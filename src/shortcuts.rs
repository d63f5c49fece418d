//! Shortcut registry — maps key chords to actions with config overrides.
//!
//! Chord strings from config are normalized before lookup so "ctrl+shift+P"
//! and "Ctrl+Shift+p" resolve to the same binding. The registry keeps
//! insertion order for the help overlay.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    CycleFocus,
    Back,
    Select,
    Refresh,
    ShowHelp,
    CycleTheme,
    AddCategory,
    EditCategory,
    DeleteCategory,
    ToggleCategory,
    ViewCategoryFeeds,
    AddFeed,
    DeleteFeed,
    ToggleFeed,
    AssignCategories,
}

impl Action {
    /// Human-readable description for the help overlay.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::CycleFocus => "Cycle panel focus",
            Self::Back => "Go back / dismiss",
            Self::Select => "Select / open",
            Self::Refresh => "Reload panels from server",
            Self::ShowHelp => "Show help",
            Self::CycleTheme => "Cycle color theme",
            Self::AddCategory => "Add category",
            Self::EditCategory => "Edit category",
            Self::DeleteCategory => "Delete category",
            Self::ToggleCategory => "Enable/disable category",
            Self::ViewCategoryFeeds => "View feeds in category",
            Self::AddFeed => "Add feed",
            Self::DeleteFeed => "Delete feed",
            Self::ToggleFeed => "Enable/disable feed",
            Self::AssignCategories => "Assign feed categories",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Categories,
    Feeds,
}

// ============================================================================
// Key Chords
// ============================================================================

/// A normalized key chord: code + modifiers.
///
/// Normalization folds uppercase letters to lowercase and drops the Shift
/// modifier for printable characters, since the character itself already
/// carries the case. Shift survives only on named keys (Shift+Tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Normalize a raw terminal key event for lookup.
    pub fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Self {
        normalize(Self::new(code, modifiers))
    }
}

fn normalize(chord: KeyChord) -> KeyChord {
    let mut modifiers = chord.modifiers;
    let code = match chord.code {
        KeyCode::Char(c) => {
            modifiers.remove(KeyModifiers::SHIFT);
            KeyCode::Char(c.to_ascii_lowercase())
        }
        other => other,
    };
    KeyChord { code, modifiers }
}

/// Parse a chord string from config into a normalized KeyChord.
///
/// Supported formats:
/// - Single char: "q", "j", "?"
/// - Named keys: "Enter", "Escape", "Tab", "Up", "Down", "Backspace"
/// - Modifier combos with any casing and order: "Ctrl+d", "ctrl+shift+P",
///   "Alt+Enter", "Meta+k"
/// - Function keys: "F1" through "F12"
pub fn parse_chord(s: &str) -> Option<KeyChord> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts = s.split('+').map(str::trim).peekable();

    let key = loop {
        let part = parts.next()?;
        if parts.peek().is_none() {
            break part;
        }
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "meta" | "cmd" | "super" => modifiers |= KeyModifiers::SUPER,
            _ => return None,
        }
    };

    let code = match key.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "up" | "arrowup" => KeyCode::Up,
        "down" | "arrowdown" => KeyCode::Down,
        "left" | "arrowleft" => KeyCode::Left,
        "right" | "arrowright" => KeyCode::Right,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            if let Some(n) = key
                .strip_prefix('F')
                .or_else(|| key.strip_prefix('f'))
                .and_then(|rest| rest.parse::<u8>().ok())
            {
                if !(1..=12).contains(&n) {
                    return None;
                }
                KeyCode::F(n)
            } else if key.chars().count() == 1 {
                KeyCode::Char(key.chars().next()?)
            } else {
                return None;
            }
        }
    };

    Some(normalize(KeyChord::new(code, modifiers)))
}

/// Canonical chord string: modifiers in Ctrl, Alt, Shift, Meta order, then
/// the canonical key name.
pub fn format_chord(chord: &KeyChord) -> String {
    let mut out = String::new();
    if chord.modifiers.contains(KeyModifiers::CONTROL) {
        out.push_str("Ctrl+");
    }
    if chord.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("Alt+");
    }
    if chord.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("Shift+");
    }
    if chord.modifiers.contains(KeyModifiers::SUPER) {
        out.push_str("Meta+");
    }
    out.push_str(&key_name(chord.code));
    out
}

/// Chord string for the help overlay. With `symbols` set, modifier
/// prefixes render as ⌃ ⌥ ⇧ ⌘ and arrows/Space as ↑ ↓ ← → ␣.
pub fn display_chord(chord: &KeyChord, symbols: bool) -> String {
    let canonical = format_chord(chord);
    if !symbols {
        return canonical;
    }
    let mut out = String::new();
    if chord.modifiers.contains(KeyModifiers::CONTROL) {
        out.push('\u{2303}');
    }
    if chord.modifiers.contains(KeyModifiers::ALT) {
        out.push('\u{2325}');
    }
    if chord.modifiers.contains(KeyModifiers::SHIFT) {
        out.push('\u{21E7}');
    }
    if chord.modifiers.contains(KeyModifiers::SUPER) {
        out.push('\u{2318}');
    }
    match chord.code {
        KeyCode::Up => out.push('\u{2191}'),
        KeyCode::Down => out.push('\u{2193}'),
        KeyCode::Left => out.push('\u{2190}'),
        KeyCode::Right => out.push('\u{2192}'),
        KeyCode::Char(' ') => out.push('\u{2423}'),
        code => out.push_str(&key_name(code)),
    }
    out
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    }
}

// ============================================================================
// Shortcut Registry
// ============================================================================

/// Registry of shortcuts, supporting default bindings and config overrides.
///
/// Lookup is O(1) via HashMap. Dispatch is context-aware: the same chord
/// can map to different actions in different contexts, with fallback to
/// Global. Insertion order is preserved for the help overlay.
pub struct ShortcutRegistry {
    /// Primary lookup: (Context, KeyChord) -> Action
    lookup: HashMap<(Context, KeyChord), Action>,
    /// All bindings for help overlay enumeration
    bindings: Vec<(Context, KeyChord, Action)>,
    /// When false, every lookup misses. Input layers that capture keys
    /// themselves (form text editing) flip this instead of consuming the
    /// registry's chords one by one.
    enabled: bool,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
            enabled: true,
        };
        registry.register_defaults();
        registry
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register a single binding. Re-registering a chord in the same
    /// context replaces the old action.
    fn bind(&mut self, context: Context, chord: KeyChord, action: Action) {
        let chord = normalize(chord);
        if self.lookup.insert((context, chord), action).is_some() {
            self.bindings
                .retain(|(c, k, _)| !(*c == context && *k == chord));
        }
        self.bindings.push((context, chord, action));
    }

    /// Remove a binding. Absent chords are ignored.
    pub fn unbind(&mut self, context: Context, chord: KeyChord) {
        let chord = normalize(chord);
        self.lookup.remove(&(context, chord));
        self.bindings
            .retain(|(c, k, _)| !(*c == context && *k == chord));
    }

    fn register_defaults(&mut self) {
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Char('q')),
            Action::Quit,
        );

        // Navigation
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Char('j')),
            Action::NavDown,
        );
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Down),
            Action::NavDown,
        );
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Char('k')),
            Action::NavUp,
        );
        self.bind(Context::Global, KeyChord::plain(KeyCode::Up), Action::NavUp);
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Tab),
            Action::CycleFocus,
        );

        // Dismiss + select
        self.bind(Context::Global, KeyChord::plain(KeyCode::Esc), Action::Back);
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Enter),
            Action::Select,
        );

        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Char('r')),
            Action::Refresh,
        );
        self.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Char('?')),
            Action::ShowHelp,
        );
        self.bind(
            Context::Global,
            KeyChord::ctrl('t'),
            Action::CycleTheme,
        );

        // Category panel
        self.bind(
            Context::Categories,
            KeyChord::plain(KeyCode::Char('a')),
            Action::AddCategory,
        );
        self.bind(
            Context::Categories,
            KeyChord::plain(KeyCode::Char('e')),
            Action::EditCategory,
        );
        self.bind(
            Context::Categories,
            KeyChord::plain(KeyCode::Char('d')),
            Action::DeleteCategory,
        );
        self.bind(
            Context::Categories,
            KeyChord::plain(KeyCode::Char('t')),
            Action::ToggleCategory,
        );
        self.bind(
            Context::Categories,
            KeyChord::plain(KeyCode::Enter),
            Action::ViewCategoryFeeds,
        );

        // Feed panel
        self.bind(
            Context::Feeds,
            KeyChord::plain(KeyCode::Char('a')),
            Action::AddFeed,
        );
        self.bind(
            Context::Feeds,
            KeyChord::plain(KeyCode::Char('d')),
            Action::DeleteFeed,
        );
        self.bind(
            Context::Feeds,
            KeyChord::plain(KeyCode::Char('t')),
            Action::ToggleFeed,
        );
        self.bind(
            Context::Feeds,
            KeyChord::plain(KeyCode::Char('c')),
            Action::AssignCategories,
        );
    }

    /// Apply user overrides from the config shortcuts map.
    ///
    /// Keys in the map are action names (e.g., "quit", "add_category").
    /// Values are chord strings (e.g., "q", "Ctrl+n", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or
    /// unparseable chords.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, chord_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let chord = match parse_chord(chord_str) {
                Some(c) => c,
                None => {
                    warnings.push(format!(
                        "Cannot parse chord '{}' for action '{}', ignoring",
                        chord_str, action_name
                    ));
                    continue;
                }
            };

            // Rebind in every context the action was bound in.
            let contexts_for_action: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts_for_action {
                self.bind(ctx, chord, action);
            }

            tracing::info!(
                action = %action_name,
                chord = %chord_str,
                "Applied shortcut override"
            );
        }

        warnings
    }

    /// Look up the action for a key event in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        if !self.enabled {
            return None;
        }
        let chord = KeyChord::from_event(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, chord)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, chord)) {
                return Some(action);
            }
        }

        None
    }

    /// All bindings for the help overlay, in registration order.
    ///
    /// Returns (context, chord_display_string, action, description) tuples.
    pub fn all_bindings(&self, symbols: bool) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, chord, action)| {
                (*ctx, display_chord(chord, symbols), *action, action.describe())
            })
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "navdown" | "down" => Some(Action::NavDown),
        "nav_up" | "navup" | "up" => Some(Action::NavUp),
        "cycle_focus" | "cyclefocus" | "tab" => Some(Action::CycleFocus),
        "back" => Some(Action::Back),
        "select" | "enter" => Some(Action::Select),
        "refresh" => Some(Action::Refresh),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "add_category" | "addcategory" => Some(Action::AddCategory),
        "edit_category" | "editcategory" => Some(Action::EditCategory),
        "delete_category" | "deletecategory" => Some(Action::DeleteCategory),
        "toggle_category" | "togglecategory" => Some(Action::ToggleCategory),
        "view_category_feeds" | "viewcategoryfeeds" => Some(Action::ViewCategoryFeeds),
        "add_feed" | "addfeed" => Some(Action::AddFeed),
        "delete_feed" | "deletefeed" => Some(Action::DeleteFeed),
        "toggle_feed" | "togglefeed" => Some(Action::ToggleFeed),
        "assign_categories" | "assigncategories" => Some(Action::AssignCategories),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_quit() {
        let reg = ShortcutRegistry::new();
        let action = reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_t_cycles_theme() {
        let reg = ShortcutRegistry::new();
        let action = reg.action_for_key(KeyCode::Char('t'), KeyModifiers::CONTROL, Context::Global);
        assert_eq!(action, Some(Action::CycleTheme));
    }

    #[test]
    fn test_context_overrides_global() {
        let reg = ShortcutRegistry::new();
        // In the categories panel, Enter opens the category's feeds.
        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE, Context::Categories),
            Some(Action::ViewCategoryFeeds)
        );
        // Elsewhere it selects.
        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE, Context::Feeds),
            Some(Action::Select)
        );
    }

    #[test]
    fn test_same_chord_differs_per_panel() {
        let reg = ShortcutRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('a'), KeyModifiers::NONE, Context::Categories),
            Some(Action::AddCategory)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('a'), KeyModifiers::NONE, Context::Feeds),
            Some(Action::AddFeed)
        );
    }

    #[test]
    fn test_falls_back_to_global() {
        let reg = ShortcutRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Feeds),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_disabled_registry_matches_nothing() {
        let mut reg = ShortcutRegistry::new();
        reg.set_enabled(false);
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            None
        );
        reg.set_enabled(true);
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbind_removes_binding_and_help_entry() {
        let mut reg = ShortcutRegistry::new();
        reg.unbind(Context::Global, KeyChord::plain(KeyCode::Char('r')));
        assert_eq!(
            reg.action_for_key(KeyCode::Char('r'), KeyModifiers::NONE, Context::Global),
            None
        );
        assert!(!reg
            .all_bindings(false)
            .iter()
            .any(|(ctx, chord, _, _)| *ctx == Context::Global && chord == "r"));

        // Unbinding an absent chord is a no-op.
        reg.unbind(Context::Global, KeyChord::plain(KeyCode::F(9)));
    }

    #[test]
    fn test_unknown_chord_returns_none() {
        let reg = ShortcutRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::F(12), KeyModifiers::NONE, Context::Global),
            None
        );
    }

    #[test]
    fn test_question_mark_matches_with_shift_held() {
        // Terminals report '?' with the Shift modifier set; normalization
        // drops it so the plain registration still matches.
        let reg = ShortcutRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('?'), KeyModifiers::SHIFT, Context::Global),
            Some(Action::ShowHelp)
        );
    }

    #[test]
    fn test_parse_chord_modifier_order_insensitive() {
        assert_eq!(
            parse_chord("Shift+Ctrl+p"),
            parse_chord("ctrl+shift+P"),
        );
    }

    #[test]
    fn test_parse_chord_uppercase_letter_folds() {
        // "Ctrl+P" and "Ctrl+p" are the same chord.
        assert_eq!(parse_chord("Ctrl+P"), Some(KeyChord::ctrl('p')));
    }

    #[test]
    fn test_parse_chord_named_keys() {
        assert_eq!(parse_chord("Enter"), Some(KeyChord::plain(KeyCode::Enter)));
        assert_eq!(parse_chord("escape"), Some(KeyChord::plain(KeyCode::Esc)));
        assert_eq!(parse_chord("ArrowUp"), Some(KeyChord::plain(KeyCode::Up)));
        assert_eq!(
            parse_chord("Space"),
            Some(KeyChord::plain(KeyCode::Char(' ')))
        );
        assert_eq!(
            parse_chord("Shift+Tab"),
            Some(KeyChord::new(KeyCode::Tab, KeyModifiers::SHIFT))
        );
    }

    #[test]
    fn test_parse_chord_function_keys() {
        assert_eq!(parse_chord("F1"), Some(KeyChord::plain(KeyCode::F(1))));
        assert_eq!(parse_chord("F12"), Some(KeyChord::plain(KeyCode::F(12))));
        assert_eq!(parse_chord("F0"), None);
        assert_eq!(parse_chord("F13"), None);
    }

    #[test]
    fn test_parse_chord_multiple_modifiers() {
        let chord = parse_chord("Ctrl+Alt+Delete").unwrap();
        assert_eq!(chord.code, KeyCode::Delete);
        assert!(chord.modifiers.contains(KeyModifiers::CONTROL));
        assert!(chord.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_parse_chord_rejects_garbage() {
        assert_eq!(parse_chord("NotAKey"), None);
        assert_eq!(parse_chord("Hyper+x"), None);
        assert_eq!(parse_chord(""), None);
    }

    #[test]
    fn test_format_chord_canonical_order() {
        let chord = parse_chord("meta+shift+alt+ctrl+k").unwrap();
        assert_eq!(format_chord(&chord), "Ctrl+Alt+Meta+k");

        let chord = parse_chord("shift+tab").unwrap();
        assert_eq!(format_chord(&chord), "Shift+Tab");
    }

    #[test]
    fn test_display_chord_symbols() {
        let chord = parse_chord("Ctrl+k").unwrap();
        assert_eq!(display_chord(&chord, false), "Ctrl+k");
        assert_eq!(display_chord(&chord, true), "\u{2303}k");

        let chord = parse_chord("Meta+Shift+Tab").unwrap();
        assert_eq!(display_chord(&chord, true), "\u{21E7}\u{2318}Tab");
    }

    #[test]
    fn test_display_chord_named_key_symbols() {
        assert_eq!(display_chord(&parse_chord("Up").unwrap(), true), "\u{2191}");
        assert_eq!(
            display_chord(&parse_chord("Ctrl+Down").unwrap(), true),
            "\u{2303}\u{2193}"
        );
        assert_eq!(display_chord(&parse_chord("Left").unwrap(), true), "\u{2190}");
        assert_eq!(display_chord(&parse_chord("Right").unwrap(), true), "\u{2192}");
        assert_eq!(display_chord(&parse_chord("Space").unwrap(), true), "\u{2423}");
        // PageUp keeps its word form, only the arrows substitute.
        assert_eq!(display_chord(&parse_chord("PageUp").unwrap(), true), "PageUp");
    }

    #[test]
    fn test_apply_overrides_valid() {
        let mut reg = ShortcutRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            None
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::CONTROL, Context::Global),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_apply_overrides_unknown_action() {
        let mut reg = ShortcutRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("nonexistent_action".to_string(), "q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown action"));
    }

    #[test]
    fn test_apply_overrides_bad_chord() {
        let mut reg = ShortcutRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Hyper+q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot parse chord"));
    }

    #[test]
    fn test_override_preserves_contexts() {
        let mut reg = ShortcutRegistry::new();
        // 'd' deletes in both panels via separate actions; toggling is
        // bound in both too, under one action name.
        let mut overrides = HashMap::new();
        overrides.insert("toggle_category".to_string(), "x".to_string());
        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Char('x'), KeyModifiers::NONE, Context::Categories),
            Some(Action::ToggleCategory)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('t'), KeyModifiers::NONE, Context::Categories),
            None
        );
    }

    #[test]
    fn test_rebinding_a_chord_replaces_help_entry() {
        let mut reg = ShortcutRegistry::new();
        reg.bind(
            Context::Global,
            KeyChord::plain(KeyCode::Char('r')),
            Action::ShowHelp,
        );

        let entries: Vec<_> = reg
            .all_bindings(false)
            .into_iter()
            .filter(|(ctx, chord, _, _)| *ctx == Context::Global && chord == "r")
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].2, Action::ShowHelp);
    }

    #[test]
    fn test_all_bindings_insertion_order() {
        let reg = ShortcutRegistry::new();
        let bindings = reg.all_bindings(false);
        assert!(!bindings.is_empty());
        // Quit is registered first.
        assert_eq!(bindings[0].2, Action::Quit);
        assert_eq!(bindings[0].1, "q");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_parse_chord_never_panics(s in ".{0,40}") {
                let _ = parse_chord(&s);
            }

            #[test]
            fn test_event_normalization_is_idempotent(c in any::<char>(), bits in 0u8..16) {
                let mods = KeyModifiers::from_bits_truncate(bits);
                let once = KeyChord::from_event(KeyCode::Char(c), mods);
                let twice = KeyChord::from_event(once.code, once.modifiers);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
