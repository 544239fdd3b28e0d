//! Guestbook form handling and entry display rules.

use thiserror::Error;

use crate::store::{GuestbookEntry, NewGuestbookEntry, StoreError};

/// Stored as the author when the name field is left blank.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
/// Shown in the avatar bubble when there is no name to take a letter from.
pub const PLACEHOLDER_INITIAL: &str = "?";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuestbookError {
    #[error("Please write a message before signing the guestbook.")]
    EmptyMessage,
    #[error("Couldn't sign the guestbook: {0}")]
    Submit(String),
}

/// One edit coming from a form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    AuthorName(String),
    Message(String),
    Organization(String),
    Email(String),
    IsEmailPublic(bool),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestbookForm {
    pub author_name: String,
    pub message: String,
    pub organization: String,
    pub email: String,
    pub is_email_public: bool,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl GuestbookForm {
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::AuthorName(v) => self.author_name = v,
            FormEdit::Message(v) => self.message = v,
            FormEdit::Organization(v) => self.organization = v,
            FormEdit::Email(v) => self.email = v,
            FormEdit::IsEmailPublic(v) => self.is_email_public = v,
        }
    }

    /// The "show my email" checkbox only makes sense once an email is typed.
    pub fn shows_email_toggle(&self) -> bool {
        !self.email.is_empty()
    }

    pub fn validate(&self) -> Result<(), GuestbookError> {
        if self.message.trim().is_empty() {
            Err(GuestbookError::EmptyMessage)
        } else {
            Ok(())
        }
    }

    /// The insert payload with blanks defaulted or nulled.
    pub fn to_insert(&self) -> Result<NewGuestbookEntry, GuestbookError> {
        self.validate()?;
        Ok(NewGuestbookEntry {
            author_name: non_blank(&self.author_name)
                .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
            message: self.message.trim().to_string(),
            organization: non_blank(&self.organization),
            email: non_blank(&self.email),
            is_email_public: self.is_email_public,
        })
    }
}

/// Form contents plus the in-flight flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub form: GuestbookForm,
    pub is_submitting: bool,
}

impl Submission {
    /// Validates and marks the submission in flight.
    ///
    /// On a validation error nothing changes.
    pub fn begin(&mut self) -> Result<NewGuestbookEntry, GuestbookError> {
        let entry = self.form.to_insert()?;
        self.is_submitting = true;
        Ok(entry)
    }

    /// Settles an insert. Success clears the form, failure keeps it for a
    /// retry; either way the submission is no longer in flight.
    pub fn finish(&mut self, result: Result<(), StoreError>) -> Result<(), GuestbookError> {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.form = GuestbookForm::default();
                Ok(())
            }
            Err(err) => Err(GuestbookError::Submit(err.to_string())),
        }
    }
}

impl GuestbookEntry {
    pub fn initial(&self) -> String {
        self.author_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| PLACEHOLDER_INITIAL.to_string())
    }

    /// Long-form date, e.g. `January 5, 2025`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }

    /// The address to link, if the author chose to share one.
    pub fn public_email(&self) -> Option<&str> {
        if !self.is_email_public {
            return None;
        }
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }
}
