//! Form state for the registration page.
//!
//! All editable state lives in one [`FormState`] value held in a single
//! signal, so the create/edit distinction is an explicit [`FormMode`] instead
//! of scattered field variables. Validation runs synchronously on submission,
//! in a fixed order, and stops at the first failure; only a fully valid form
//! yields the [`UserDraft`] that goes over the wire.

use api::{Gender, User, UserDraft};
use regex::Regex;
use thiserror::Error;

/// A blocking validation notice, surfaced before any network call is made.
///
/// The `Display` strings are shown to the user verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all the fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long and contain at least one uppercase letter, one lowercase letter, and one number")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// What a successful submission will do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// No edit target armed: submission creates a new record.
    Create,
    /// Submission updates the record with this identifier.
    Editing(String),
}

/// The six editable fields plus the nullable edit target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: Gender,
    /// Identifier of the record being edited, or `None` when creating.
    pub edit_target: Option<String>,
}

impl FormState {
    pub fn mode(&self) -> FormMode {
        match &self.edit_target {
            Some(id) => FormMode::Editing(id.clone()),
            None => FormMode::Create,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.edit_target.is_some() {
            "Update"
        } else {
            "Register"
        }
    }

    /// Validate the fields in order, first failure wins:
    /// all fields present, then email shape, then password strength, then
    /// confirmation match. Success yields the mutation payload.
    pub fn validate(&self) -> Result<UserDraft, ValidationError> {
        if self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
            || self.gender.is_unspecified()
        {
            return Err(ValidationError::MissingField);
        }

        if !email_looks_valid(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if !password_is_strong(&self.password) {
            return Err(ValidationError::WeakPassword);
        }

        // Exact comparison: case-sensitive, no trimming.
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(UserDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            gender: self.gender,
        })
    }

    /// Arm the form to update `user` on the next submission.
    ///
    /// Copies the record's identity fields and sets the edit target. The
    /// stored password is never copied back into the visible inputs; the
    /// user re-enters one to confirm the update.
    pub fn load_for_edit(&mut self, user: &User) {
        self.first_name = user.first_name.clone();
        self.last_name = user.last_name.clone();
        self.email = user.email.clone();
        self.gender = user.gender;
        self.password.clear();
        self.confirm_password.clear();
        self.edit_target = Some(user.id.clone());
    }

    /// Reset every field and the edit target, returning to create mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Minimal "local@domain.tld" shape: non-whitespace, `@`, non-whitespace,
/// `.`, non-whitespace. Deliberately says nothing about domain validity.
fn email_looks_valid(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").map_or(false, |re| re.is_match(email))
}

/// At least one digit, one lowercase, one uppercase, and six characters.
fn password_is_strong(password: &str) -> bool {
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    has_digit && has_lower && has_upper && password.chars().count() >= 6
}
