//! Background task event processing.
//!
//! Every variant of `AppEvent` lands here from the event loop. Handlers
//! mutate `App` and surface failures as error toasts; the loop itself
//! decides when to redraw.

use crate::app::{App, AppEvent};

pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CategoriesLoaded(result) => {
            app.categories_loading = false;
            match result {
                Ok(categories) => {
                    tracing::debug!(count = categories.len(), "Categories loaded");
                    app.categories = categories;
                    app.clamp_selections();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Category load failed");
                    app.toast_error(e);
                }
            }
        }

        AppEvent::FeedsLoaded(result) => {
            app.feeds_loading = false;
            match result {
                Ok(feeds) => {
                    tracing::debug!(count = feeds.len(), "Feeds loaded");
                    app.feeds = feeds;
                    app.clamp_selections();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Feed load failed");
                    app.toast_error(e);
                }
            }
        }

        AppEvent::CategoryFeedsLoaded {
            category_name,
            result,
        } => {
            // The overlay may have been dismissed, or replaced by a load
            // for a different category, while this request was in flight.
            let Some(view) = app.category_feeds.as_mut() else {
                return;
            };
            if view.category_name != category_name {
                return;
            }
            match result {
                Ok(feeds) => {
                    view.feeds = feeds;
                    view.loading = false;
                }
                Err(e) => {
                    app.category_feeds = None;
                    app.toast_error(e);
                }
            }
        }
    }
}
