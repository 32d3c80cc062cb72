use std::sync::LazyLock;

use folio_core_contact_contracts::ContactFormError;
use folio_models::contact::ContactForm;
use regex::Regex;

pub const MIN_MESSAGE_LENGTH: usize = 10;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Checks the form fields in order (name, email, email format, message,
/// message length) and reports the first rule that is violated.
pub fn validate(form: &ContactForm) -> Result<(), ContactFormError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    if name.is_empty() {
        return Err(ContactFormError::MissingName);
    }
    if email.is_empty() {
        return Err(ContactFormError::MissingEmail);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ContactFormError::InvalidEmailFormat);
    }
    if message.is_empty() {
        return Err(ContactFormError::MissingMessage);
    }
    if message.chars().count() < MIN_MESSAGE_LENGTH {
        return Err(ContactFormError::MessageTooShort);
    }

    Ok(())
}
