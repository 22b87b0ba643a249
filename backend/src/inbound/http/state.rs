//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
}

impl HttpState {
    /// Construct state from the user command port.
    pub fn new(users: Arc<dyn UserCommand>) -> Self {
        Self { users }
    }
}
