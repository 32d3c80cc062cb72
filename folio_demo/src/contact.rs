use std::sync::LazyLock;

use folio_models::contact::{ContactForm, DispatchRequest};

use crate::NOW;

pub static ANA: LazyLock<ContactForm> =
    LazyLock::new(|| ContactForm::new("Ana", "a@b.com", "hello there friend"));

pub static ANA_REQUEST: LazyLock<DispatchRequest> =
    LazyLock::new(|| DispatchRequest::new(&ANA, *NOW));

/// Fills every field, but the message is below the minimum length.
pub static ANA_SHORT: LazyLock<ContactForm> =
    LazyLock::new(|| ContactForm::new("Ana", "a@b.com", "hi"));

pub static MAX: LazyLock<ContactForm> = LazyLock::new(|| {
    ContactForm::new(
        "Max Mustermann",
        "max.mustermann@example.de",
        "Hello! I would like to talk about a project.",
    )
});

pub static MAX_REQUEST: LazyLock<DispatchRequest> =
    LazyLock::new(|| DispatchRequest::new(&MAX, *NOW));
