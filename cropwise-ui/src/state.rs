//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cropwise_core::auth::Session;
use cropwise_core::catalog::CropProfile;
use cropwise_core::error::FlowError;
use cropwise_core::flow::{FlowEvent, FlowState};
use cropwise_db::Database;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A dismissible toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Shared application state for every CropWise view.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Crop catalog database (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Crop profiles read from the database
    pub catalog: Signal<Vec<CropProfile>>,
    /// Whether the catalog is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Signed-in identity, if any
    pub session: Signal<Session>,
    /// Position in the sign-in / input / recommendations journey
    pub flow: Signal<FlowState>,
    /// Toast notifications, oldest first
    pub notifications: Signal<Vec<Notification>>,
    next_notification: Signal<u64>,
    /// One-shot message shown by the view a redirect lands on
    pub flash: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            catalog: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            session: Signal::new(Session::Anonymous),
            flow: Signal::new(FlowState::Anonymous),
            notifications: Signal::new(Vec::new()),
            next_notification: Signal::new(0),
            flash: Signal::new(None),
        }
    }

    /// Advance the journey state, logging rejected events.
    pub fn advance(&mut self, event: FlowEvent) -> Result<FlowState, FlowError> {
        let current = *self.flow.peek();
        match current.transition(event) {
            Ok(next) => {
                self.flow.set(next);
                Ok(next)
            }
            Err(err) => {
                log::warn!("[CropWise] flow: {err}");
                Err(err)
            }
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) {
        let id = *self.next_notification.peek();
        self.next_notification.set(id + 1);
        self.notifications.write().push(Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.write().retain(|n| n.id != id);
    }

    /// Take the pending flash message, leaving none behind.
    pub fn take_flash(&mut self) -> Option<String> {
        let message = self.flash.peek().clone();
        if message.is_some() {
            self.flash.set(None);
        }
        message
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
