use clap::Args;
use folio_models::contact::ContactForm;

use crate::prompt::Prompt;

pub mod check;
pub mod send;

/// Contact form fields given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Your name
    #[arg(long)]
    pub name: Option<String>,
    /// Your email address
    #[arg(long)]
    pub email: Option<String>,
    /// The message to send
    #[arg(long)]
    pub message: Option<String>,
}

impl FormArgs {
    /// Builds the form, leaving missing fields empty.
    pub fn into_form(self) -> ContactForm {
        ContactForm {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        }
    }

    /// Builds the form, asking for every field that was not given.
    pub fn fill(self, prompt: &mut impl Prompt) -> anyhow::Result<ContactForm> {
        let mut read = |value: Option<String>, label: &str| match value {
            Some(value) => anyhow::Ok(value),
            None => prompt.field(label, ""),
        };

        Ok(ContactForm {
            name: read(self.name, "Name")?,
            email: read(self.email, "Email")?,
            message: read(self.message, "Message")?,
        })
    }
}
