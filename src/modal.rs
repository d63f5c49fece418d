//! Modal state machine.
//!
//! At most one modal is open at a time. Opening while another modal is up
//! closes the old one first, and a modal's close hook runs exactly once no
//! matter which path closed it (submit success, dismiss, or replacement).

use crate::form::{FormState, SubmitSpec};

/// What the open modal is for. The event layer uses this to decide which
/// panel to refresh after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalIntent {
    AddCategory,
    EditCategory { id: i64 },
    AddFeed,
    AssignFeedCategories { feed_id: i64 },
}

/// An open modal: title, its form, where it submits, and an optional
/// close hook.
pub struct ModalHandle {
    pub title: String,
    pub form: FormState,
    pub submit: SubmitSpec,
    pub intent: ModalIntent,
    on_close: Option<Box<dyn FnOnce() + Send>>,
}

impl ModalHandle {
    pub fn new(title: &str, form: FormState, submit: SubmitSpec, intent: ModalIntent) -> Self {
        Self {
            title: title.to_string(),
            form,
            submit,
            intent,
            on_close: None,
        }
    }

    /// Attach a hook that runs when this modal closes, on any path.
    pub fn with_on_close(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for ModalHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalHandle")
            .field("title", &self.title)
            .field("intent", &self.intent)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Box<ModalHandle>),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn handle(&self) -> Option<&ModalHandle> {
        match self {
            Self::Open(handle) => Some(handle),
            Self::Closed => None,
        }
    }

    pub fn handle_mut(&mut self) -> Option<&mut ModalHandle> {
        match self {
            Self::Open(handle) => Some(handle),
            Self::Closed => None,
        }
    }

    /// Open a modal, closing any modal already up (its close hook runs).
    pub fn open(&mut self, handle: ModalHandle) {
        self.close();
        *self = Self::Open(Box::new(handle));
    }

    /// Close the open modal, running its close hook exactly once.
    /// Returns false when no modal was open.
    pub fn close(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Open(mut handle) => {
                if let Some(hook) = handle.on_close.take() {
                    hook();
                }
                tracing::debug!(title = %handle.title, "Closed modal");
                true
            }
            Self::Closed => false,
        }
    }
}
