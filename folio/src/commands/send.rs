use std::io::IsTerminal;

use anyhow::bail;
use folio_config::Config;
use folio_core_contact_contracts::ContactService;
use folio_core_contact_impl::ContactServiceImpl;
use folio_models::contact::{ContactForm, SubmissionStatus};
use folio_shared_impl::time::TimeServiceImpl;
use tracing::debug;

use super::FormArgs;
use crate::{
    dispatcher::Dispatcher,
    prompt::{LinePrompt, Prompt, TerminalPrompt},
};

pub async fn send(config: Config, args: FormArgs, dry_run: bool) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(&config.emailjs, dry_run)?;
    let contact = ContactServiceImpl::new(TimeServiceImpl, dispatcher);

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        let mut prompt = TerminalPrompt::new();
        let mut form = args.fill(&mut prompt)?;
        run(&contact, &mut prompt, &mut form, true).await
    } else {
        let mut prompt = LinePrompt::new(stdin.lock(), std::io::stderr());
        let mut form = args.fill(&mut prompt)?;
        run(&contact, &mut prompt, &mut form, false).await
    }
}

/// Submits `form` and reports the outcome. If sending fails and `interactive`
/// is set, the visitor may edit the form and try again.
pub async fn run(
    contact: &impl ContactService,
    prompt: &mut impl Prompt,
    form: &mut ContactForm,
    interactive: bool,
) -> anyhow::Result<()> {
    loop {
        let submission = contact.submit(form);
        if contact.is_submitting() {
            prompt.render(&SubmissionStatus::Submitting)?;
        }
        let status = submission.await?;
        prompt.render(&status)?;

        match status {
            SubmissionStatus::Failed(message) => {
                if !interactive || !prompt.confirm("Edit and resend?")? {
                    bail!(message);
                }
                debug!("Resubmitting contact form");
                prompt.edit(form)?;
            }
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use folio_core_contact_contracts::{ContactSubmitError, MockContactService};
    use folio_demo::contact::{ANA, ANA_SHORT};
    use folio_extern_impl::log::LogDispatcher;
    use folio_models::contact::FALLBACK_FAILURE_MESSAGE;
    use pretty_assertions::assert_eq;

    use super::*;

    type TestPrompt = LinePrompt<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompt(input: &str) -> TestPrompt {
        LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompt: TestPrompt) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    fn contact() -> MockContactService {
        let mut contact = MockContactService::new();
        contact.expect_is_submitting().return_const(true);
        contact
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let contact = contact().with_submit(ANA.clone(), Ok(SubmissionStatus::succeeded()));
        let mut prompt = prompt("");

        // Act
        let result = run(&contact, &mut prompt, &mut ANA.clone(), false).await;

        // Assert
        result.unwrap();
        assert_eq!(
            output(prompt),
            "Sending message...\n[ok] Message sent successfully! I will get back to you soon.\n"
        );
    }

    #[tokio::test]
    async fn failed_non_interactive() {
        // Arrange
        let contact = contact().with_submit(
            ANA.clone(),
            Ok(SubmissionStatus::Failed("quota exceeded".into())),
        );
        let mut prompt = prompt("y\n");

        // Act
        let result = run(&contact, &mut prompt, &mut ANA.clone(), false).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "quota exceeded");
        assert_eq!(output(prompt), "Sending message...\n[error] quota exceeded\n");
    }

    #[tokio::test]
    async fn edit_and_resend() {
        // Arrange
        let contact = contact()
            .with_submit(
                ANA_SHORT.clone(),
                Ok(SubmissionStatus::Failed(
                    "Message must be at least 10 characters long".into(),
                )),
            )
            .with_submit(ANA.clone(), Ok(SubmissionStatus::succeeded()));
        let mut prompt = prompt("y\n\n\nhello there friend\n");

        // Act
        let result = run(&contact, &mut prompt, &mut ANA_SHORT.clone(), true).await;

        // Assert
        result.unwrap();
        let output = output(prompt);
        assert!(output.contains("[error] Message must be at least 10 characters long\n"));
        assert!(output.contains("Message [hi]: "));
        assert!(output.ends_with("[ok] Message sent successfully! I will get back to you soon.\n"));
    }

    #[tokio::test]
    async fn declined_resend() {
        // Arrange
        let contact = contact().with_submit(
            ANA.clone(),
            Ok(SubmissionStatus::Failed(FALLBACK_FAILURE_MESSAGE.into())),
        );
        let mut prompt = prompt("n\n");

        // Act
        let result = run(&contact, &mut prompt, &mut ANA.clone(), true).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), FALLBACK_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn rejected_submission() {
        // Arrange
        let contact = contact().with_submit(ANA.clone(), Err(ContactSubmitError::InProgress));
        let mut prompt = prompt("");

        // Act
        let result = run(&contact, &mut prompt, &mut ANA.clone(), true).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "A message is already being sent."
        );
    }

    #[tokio::test]
    async fn banners_follow_controller_status() {
        // Arrange
        let contact = ContactServiceImpl::new(TimeServiceImpl, LogDispatcher);
        let mut prompt = prompt("");
        let mut form = ANA.clone();

        // Act
        let result = run(&contact, &mut prompt, &mut form, false).await;

        // Assert
        result.unwrap();
        assert_eq!(
            output(prompt),
            "Sending message...\n[ok] Message sent successfully! I will get back to you soon.\n"
        );
        assert_eq!(form, ContactForm::default());
        assert_eq!(contact.status(), SubmissionStatus::succeeded());
        assert!(!contact.is_submitting());
    }

    #[tokio::test]
    async fn invalid_form_with_controller() {
        // Arrange
        let contact = ContactServiceImpl::new(TimeServiceImpl, LogDispatcher);
        let mut prompt = prompt("");
        let mut form = ANA_SHORT.clone();

        // Act
        let result = run(&contact, &mut prompt, &mut form, false).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "Message must be at least 10 characters long"
        );
        assert_eq!(
            output(prompt),
            "Sending message...\n[error] Message must be at least 10 characters long\n"
        );
        assert_eq!(form, *ANA_SHORT);
        assert!(!contact.is_submitting());
    }

    #[test]
    fn fill_prompts_for_missing_fields() {
        let mut prompt = prompt("Ana\nhello there friend\n");
        let args = FormArgs {
            email: Some("a@b.com".into()),
            ..Default::default()
        };

        let form = args.fill(&mut prompt).unwrap();

        assert_eq!(form, *ANA);
        assert_eq!(output(prompt), "Name: Message: ");
    }
}
