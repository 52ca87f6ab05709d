//! This crate contains all shared UI for the workspace: the registration
//! form page, the user table, the small form controls they are built from,
//! and the pure client-side state types (form state machine, list cache,
//! request sequencing) that carry the testable behavior.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod form;
pub use form::{FormMode, FormState, ValidationError};

mod roster;
pub use roster::UserRoster;

mod requests;
pub use requests::RequestSeq;

pub mod activity_log;
pub use activity_log::{
    log_activity, use_activity_log, ActivityLog, ActivityLogPanel, LogLevel,
};

mod user_table;
pub use user_table::UserTable;

mod register_form;
pub use register_form::RegisterForm;

/// Consume the shared [`api::UsersClient`] from context.
///
/// Platform crates provide one instance at App level via
/// `use_context_provider`.
pub fn use_users_client() -> api::UsersClient {
    use_context::<api::UsersClient>()
}
