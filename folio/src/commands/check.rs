use std::io::Write;

use anyhow::bail;
use folio_core_contact_impl::validate;

use super::FormArgs;

/// Validates the form without sending it.
pub fn check(args: FormArgs, mut out: impl Write) -> anyhow::Result<()> {
    let form = args.into_form();
    if let Err(err) = validate(&form) {
        bail!("{err}");
    }
    writeln!(out, "The contact form is valid.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, email: &str, message: &str) -> FormArgs {
        FormArgs {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    #[test]
    fn valid() {
        let mut out = Vec::new();
        check(args("Ana", "a@b.com", "hello there friend"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "The contact form is valid.\n");
    }

    #[test]
    fn invalid() {
        let err = check(args("Ana", "not-an-email", "hello world!"), Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn missing_fields() {
        let err = check(FormArgs::default(), Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter your name");
    }
}
