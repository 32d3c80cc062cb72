use chrono::{DateTime, SecondsFormat, Utc};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// The visitor-entered contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Resets all fields to empty strings.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// User-visible state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn succeeded() -> Self {
        Self::Succeeded(SUCCESS_MESSAGE.into())
    }

    /// Builds a [`SubmissionStatus::Failed`], falling back to
    /// [`FALLBACK_FAILURE_MESSAGE`] if `detail` is missing or blank.
    pub fn failed(detail: Option<&str>) -> Self {
        let message = detail
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
            .unwrap_or(FALLBACK_FAILURE_MESSAGE);
        Self::Failed(message.into())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The banner text to show for this status, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Succeeded(message) | Self::Failed(message) => Some(message.as_str()),
        }
    }
}

/// Snapshot of a validated contact form, taken at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    name: String,
    email: String,
    message: String,
    time: DateTime<Utc>,
}

impl DispatchRequest {
    pub fn new(form: &ContactForm, time: DateTime<Utc>) -> Self {
        Self {
            name: form.name.trim().into(),
            email: form.email.trim().into(),
            message: form.message.trim().into(),
            time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The submission time as an ISO 8601 string, e.g.
    /// `2024-05-17T09:30:00.000Z`.
    pub fn timestamp(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clear_form() {
        let mut form = ContactForm::new("Ana", "a@b.com", "hello there friend");
        assert!(!form.is_empty());

        form.clear();

        assert_eq!(form, ContactForm::default());
        assert!(form.is_empty());
    }

    #[test]
    fn failed_falls_back_on_blank_detail() {
        for detail in [None, Some(""), Some("  \n")] {
            assert_eq!(
                SubmissionStatus::failed(detail),
                SubmissionStatus::Failed(FALLBACK_FAILURE_MESSAGE.into())
            );
        }
        assert_eq!(
            SubmissionStatus::failed(Some("quota exceeded")),
            SubmissionStatus::Failed("quota exceeded".into())
        );
    }

    #[test]
    fn status_message() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Submitting.message(), None);
        assert_eq!(
            SubmissionStatus::succeeded().message(),
            Some(SUCCESS_MESSAGE)
        );
        assert!(SubmissionStatus::Submitting.is_submitting());
        assert!(!SubmissionStatus::Failed("x".into()).is_submitting());
    }

    #[test]
    fn dispatch_request_snapshot() {
        let mut form = ContactForm::new(" Ana ", "a@b.com\n", "hello there friend ");
        let time = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();

        let request = DispatchRequest::new(&form, time);
        form.clear();

        assert_eq!(request.name(), "Ana");
        assert_eq!(request.email(), "a@b.com");
        assert_eq!(request.message(), "hello there friend");
        assert_eq!(request.timestamp(), "2024-05-17T09:30:00.000Z");
    }
}
