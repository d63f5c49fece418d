//! Keyboard input handling.
//!
//! Input is dispatched in layers: an open modal captures every key, then
//! the confirm dialog, the help overlay, and the category feeds overlay,
//! and only then the shortcut registry for the focused panel. While a
//! field is in text-edit mode, printable keys go into the field instead
//! of the registry.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::{App, AppEvent, ConfirmAction, Panel};
use crate::shortcuts::Action as ShortcutAction;

use super::helpers::{
    delete_category, delete_feed, spawn_load_categories, spawn_load_category_feeds,
    spawn_load_feeds, submit_active_modal, toggle_selected_category, toggle_selected_feed,
};
use super::loop_runner::Action;

pub(super) async fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    if app.modal.is_open() {
        handle_modal_input(app, code, modifiers, event_tx).await;
        return Ok(Action::Continue);
    }

    if app.pending_alert.is_some() {
        if matches!(
            code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('o')
        ) {
            app.pending_alert = None;
        }
        return Ok(Action::Continue);
    }

    if app.pending_confirm.is_some() {
        handle_confirm_input(app, code, event_tx).await;
        return Ok(Action::Continue);
    }

    if app.show_help {
        handle_help_input(app, code);
        return Ok(Action::Continue);
    }

    if app.category_feeds.is_some() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            app.category_feeds = None;
        }
        return Ok(Action::Continue);
    }

    let Some(action) = app
        .shortcuts
        .action_for_key(code, modifiers, app.shortcut_context())
    else {
        return Ok(Action::Continue);
    };

    match action {
        ShortcutAction::Quit => return Ok(Action::Quit),
        ShortcutAction::NavDown => app.nav_down(),
        ShortcutAction::NavUp => app.nav_up(),
        ShortcutAction::CycleFocus => app.cycle_focus(),
        ShortcutAction::Back => {
            app.status_message = None;
        }
        ShortcutAction::Select => match app.focus {
            // Enter in the feed panel falls back to Select; treat it as
            // opening the category assignment, the panel's main action.
            Panel::Feeds => open_assign_categories(app),
            Panel::Categories => {}
        },
        ShortcutAction::Refresh => {
            app.set_status("Refreshing...");
            spawn_load_categories(app, event_tx);
            spawn_load_feeds(app, event_tx);
        }
        ShortcutAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        ShortcutAction::CycleTheme => app.cycle_theme(),
        ShortcutAction::AddCategory => {
            let handle = app.add_category_modal();
            app.modal.open(handle);
        }
        ShortcutAction::EditCategory => {
            let handle = match app.selected_category() {
                Some(category) => app.edit_category_modal(category),
                None => return Ok(Action::Continue),
            };
            app.modal.open(handle);
        }
        ShortcutAction::DeleteCategory => {
            if let Some(category) = app.selected_category() {
                app.pending_confirm = Some(ConfirmAction::DeleteCategory {
                    id: category.id,
                    name: category.name.clone(),
                });
            }
        }
        ShortcutAction::ToggleCategory => {
            toggle_selected_category(app, event_tx).await;
        }
        ShortcutAction::ViewCategoryFeeds => {
            if let Some(category) = app.selected_category().cloned() {
                spawn_load_category_feeds(app, &category, event_tx);
            }
        }
        ShortcutAction::AddFeed => {
            let handle = app.add_feed_modal();
            app.modal.open(handle);
        }
        ShortcutAction::DeleteFeed => {
            if let Some(feed) = app.selected_feed() {
                app.pending_confirm = Some(ConfirmAction::DeleteFeed {
                    id: feed.id,
                    title: feed.title().to_string(),
                });
            }
        }
        ShortcutAction::ToggleFeed => {
            toggle_selected_feed(app, event_tx).await;
        }
        ShortcutAction::AssignCategories => open_assign_categories(app),
    }

    Ok(Action::Continue)
}

fn open_assign_categories(app: &mut App) {
    if app.categories.is_empty() {
        app.show_alert("No categories exist yet. Add one from the category panel first.");
        return;
    }
    let handle = match app.selected_feed() {
        Some(feed) => app.assign_categories_modal(feed),
        None => return,
    };
    app.modal.open(handle);
}

/// Keys while a modal is up. Text-edit mode captures printable keys;
/// otherwise keys navigate fields, toggle, submit, or dismiss.
async fn handle_modal_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let editing = app
        .modal
        .handle()
        .map(|h| h.form.editing)
        .unwrap_or(false);

    if editing {
        let Some(handle) = app.modal.handle_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => handle.form.editing = false,
            KeyCode::Enter | KeyCode::Tab => {
                handle.form.focus_down();
            }
            KeyCode::BackTab => handle.form.focus_up(),
            KeyCode::Backspace => handle.form.delete_char(),
            KeyCode::Char(c)
                if !modifiers.contains(KeyModifiers::CONTROL)
                    && !modifiers.contains(KeyModifiers::ALT) =>
            {
                handle.form.insert_char(c);
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Esc => {
            app.modal.close();
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            if let Some(handle) = app.modal.handle_mut() {
                handle.form.focus_down();
            }
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            if let Some(handle) = app.modal.handle_mut() {
                handle.form.focus_up();
            }
        }
        KeyCode::Char(' ') => {
            let submit_focused = match app.modal.handle_mut() {
                Some(handle) => {
                    handle.form.toggle_focused();
                    handle.form.submit_focused()
                }
                None => return,
            };
            if submit_focused {
                submit_active_modal(app, event_tx).await;
            }
        }
        KeyCode::Enter => {
            enum Next {
                Submit,
                Edit,
                Toggled,
            }
            let next = match app.modal.handle_mut() {
                Some(handle) => {
                    if handle.form.submit_focused() {
                        Next::Submit
                    } else if handle
                        .form
                        .focused_field()
                        .is_some_and(|f| f.kind.is_editable())
                    {
                        handle.form.editing = true;
                        Next::Edit
                    } else {
                        handle.form.toggle_focused();
                        Next::Toggled
                    }
                }
                None => return,
            };
            if matches!(next, Next::Submit) {
                submit_active_modal(app, event_tx).await;
            }
        }
        _ => {}
    }
}

/// y confirms the pending destructive action, n or Esc cancels it.
async fn handle_confirm_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let Some(confirm) = app.pending_confirm.take() else {
                return;
            };
            match confirm {
                ConfirmAction::DeleteCategory { id, .. } => {
                    delete_category(app, id, event_tx).await;
                }
                ConfirmAction::DeleteFeed { id, .. } => {
                    delete_feed(app, id, event_tx).await;
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_confirm = None;
            app.set_status("Cancelled");
        }
        _ => {}
    }
}

fn handle_help_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.show_help = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
}
