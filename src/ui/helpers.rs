//! Shared operations for the input layer: background panel loads and
//! awaited server mutations.
//!
//! List loads are spawned and report back through `AppEvent` so the UI
//! stays responsive; single-row mutations are awaited inline and toast
//! their outcome directly.

use tokio::sync::mpsc;

use crate::api::{ApiError, Envelope};
use crate::app::{App, AppEvent, CategoryFeedsView};
use crate::form::{submit, validate, SubmitError};
use crate::modal::ModalIntent;
use crate::model::{Category, CategoryFeeds, FeedSummary};

/// Shown when a submit never reaches a decodable server answer.
const SUBMIT_FAILED_MESSAGE: &str = "Operation failed";

/// Reduce a transport result to the envelope, folding `success: false`
/// into the error path with the server's message.
fn unwrap_envelope(result: Result<Envelope, ApiError>, fallback: &str) -> Result<Envelope, String> {
    let envelope = result.map_err(|e| e.to_string())?;
    if !envelope.success {
        return Err(envelope.error_or(fallback).to_string());
    }
    Ok(envelope)
}

// ----------------------------------------------------------------------
// Background list loads
// ----------------------------------------------------------------------

pub(super) fn spawn_load_categories(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    app.categories_loading = true;
    let api = app.api.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let result = async {
            let envelope =
                unwrap_envelope(api.get("/api/categories").await, "Failed to load categories")?;
            envelope
                .decode_data::<Vec<Category>>()
                .map_err(|e| e.to_string())
        }
        .await;

        if let Err(e) = tx.send(AppEvent::CategoriesLoaded(result)).await {
            tracing::warn!(error = %e, event = "CategoriesLoaded", "Channel send failed (receiver dropped)");
        }
    });
}

pub(super) fn spawn_load_feeds(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    app.feeds_loading = true;
    let api = app.api.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let result = async {
            let envelope = unwrap_envelope(api.get("/api/feeds").await, "Failed to load feeds")?;
            envelope
                .decode_data::<Vec<FeedSummary>>()
                .map_err(|e| e.to_string())
        }
        .await;

        if let Err(e) = tx.send(AppEvent::FeedsLoaded(result)).await {
            tracing::warn!(error = %e, event = "FeedsLoaded", "Channel send failed (receiver dropped)");
        }
    });
}

/// Open the feeds-in-category overlay in its loading state and fetch the
/// listing in the background.
pub(super) fn spawn_load_category_feeds(
    app: &mut App,
    category: &Category,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    app.category_feeds = Some(CategoryFeedsView {
        category_name: category.name.clone(),
        feeds: CategoryFeeds {
            feeds: Vec::new(),
            total: 0,
        },
        loading: true,
    });

    let api = app.api.clone();
    let tx = event_tx.clone();
    let path = format!("/api/categories/{}/feeds", category.id);
    let category_name = category.name.clone();

    tokio::spawn(async move {
        let result = async {
            let envelope = unwrap_envelope(api.get(&path).await, "Failed to load category feeds")?;
            envelope
                .decode_data::<CategoryFeeds>()
                .map_err(|e| e.to_string())
        }
        .await;

        let event = AppEvent::CategoryFeedsLoaded {
            category_name,
            result,
        };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, event = "CategoryFeedsLoaded", "Channel send failed (receiver dropped)");
        }
    });
}

// ----------------------------------------------------------------------
// Modal submit
// ----------------------------------------------------------------------

/// Run the open modal's submit lifecycle.
///
/// Validation failures stay local: inline field errors plus an error
/// toast per message, nothing sent. On success the modal closes, the
/// server's message becomes a toast, and the affected panels reload.
pub(super) async fn submit_active_modal(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let errors = {
        let Some(handle) = app.modal.handle_mut() else {
            return;
        };
        let check = validate(&handle.form);
        if check.valid {
            Vec::new()
        } else {
            for (name, message) in &check.field_errors {
                handle.form.set_field_error(name, message);
            }
            check.errors
        }
    };
    if !errors.is_empty() {
        for message in errors {
            app.toast_error(message);
        }
        return;
    }

    let (spec, intent) = {
        let Some(handle) = app.modal.handle() else {
            return;
        };
        (handle.submit.clone(), handle.intent)
    };

    let api = app.api.clone();
    let outcome = {
        let Some(handle) = app.modal.handle_mut() else {
            return;
        };
        submit(&mut handle.form, &api, &spec).await
    };

    match outcome {
        Ok(envelope) => {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| "Saved".to_string());
            app.modal.close();
            app.toast_success(message);
            match intent {
                ModalIntent::AddCategory | ModalIntent::EditCategory { .. } => {
                    spawn_load_categories(app, event_tx);
                }
                ModalIntent::AddFeed => {
                    spawn_load_feeds(app, event_tx);
                }
                ModalIntent::AssignFeedCategories { .. } => {
                    // Assignments change both feed badges and per-category
                    // counts.
                    spawn_load_feeds(app, event_tx);
                    spawn_load_categories(app, event_tx);
                }
            }
        }
        Err(SubmitError::InFlight) => {
            tracing::debug!("Ignoring submit while one is pending");
        }
        Err(SubmitError::Transport(err)) => {
            // The raw transport error goes to the log; the toast stays
            // generic.
            tracing::warn!(error = %err, "Form submit failed in transit");
            app.toast_error(SUBMIT_FAILED_MESSAGE);
        }
        Err(err) => {
            app.toast_error(err.to_string());
        }
    }
}

// ----------------------------------------------------------------------
// Inline mutations
// ----------------------------------------------------------------------

pub(super) async fn toggle_selected_category(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let Some(category) = app.selected_category() else {
        return;
    };
    let path = format!("/api/categories/{}/toggle", category.id);
    let name = category.name.clone();

    match unwrap_envelope(
        app.api.post(&path, None).await,
        "Failed to update category",
    ) {
        Ok(envelope) => {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| format!("Updated {}", name));
            app.toast_success(message);
            spawn_load_categories(app, event_tx);
        }
        Err(e) => {
            app.toast_error(e);
        }
    }
}

pub(super) async fn toggle_selected_feed(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let Some(feed) = app.selected_feed() else {
        return;
    };
    let path = format!("/api/feeds/{}/toggle", feed.id);
    let title = feed.title().to_string();

    match unwrap_envelope(app.api.post(&path, None).await, "Failed to update feed") {
        Ok(envelope) => {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| format!("Updated {}", title));
            app.toast_success(message);
            spawn_load_feeds(app, event_tx);
        }
        Err(e) => {
            app.toast_error(e);
        }
    }
}

pub(super) async fn delete_category(app: &mut App, id: i64, event_tx: &mpsc::Sender<AppEvent>) {
    let path = format!("/api/categories/{}", id);
    match unwrap_envelope(app.api.delete(&path).await, "Failed to delete category") {
        Ok(envelope) => {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| "Category deleted".to_string());
            app.toast_success(message);
            spawn_load_categories(app, event_tx);
            spawn_load_feeds(app, event_tx);
        }
        Err(e) => {
            app.toast_error(e);
        }
    }
}

pub(super) async fn delete_feed(app: &mut App, id: i64, event_tx: &mpsc::Sender<AppEvent>) {
    let path = format!("/api/feeds/{}", id);
    match unwrap_envelope(app.api.delete(&path).await, "Failed to delete feed") {
        Ok(envelope) => {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| "Feed deleted".to_string());
            app.toast_success(message);
            spawn_load_feeds(app, event_tx);
            spawn_load_categories(app, event_tx);
        }
        Err(e) => {
            app.toast_error(e);
        }
    }
}
