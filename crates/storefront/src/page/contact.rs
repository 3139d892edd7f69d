//! Contact form validation.

use thiserror::Error;
use vitrine_core::{Email, EmailError};

/// Acknowledgment shown after a successful submission.
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Mensagem enviada com sucesso! Entraremos em contato em breve.";

/// Why a submission was rejected. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingFields,
    #[error("Por favor, informe um e-mail válido.")]
    InvalidEmail(#[from] EmailError),
}

/// A validated submission, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub message: String,
}

/// The contact form's fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and submit. On success the form is reset.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingFields` if any field is blank, or
    /// `ContactError::InvalidEmail` if the email does not parse. The form
    /// keeps its contents on error.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let message = self.message.trim();
        if name.is_empty() || self.email.trim().is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        let submission = ContactSubmission {
            name: name.to_string(),
            email: Email::parse(&self.email)?,
            message: message.to_string(),
        };

        tracing::info!(domain = submission.email.domain(), "Contact form submitted");
        *self = Self::default();
        Ok(submission)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Ana ".to_string(),
            email: "Ana@Exemplo.com.br".to_string(),
            message: "Tem no tamanho M?".to_string(),
        }
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();

        let submission = form.submit().unwrap();

        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email.as_str(), "ana@exemplo.com.br");
        assert_eq!(submission.message, "Tem no tamanho M?");
        assert_eq!(form, ContactForm::new());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_submit_logs_domain_only() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();
        let mut form = filled();

        tracing::subscriber::with_default(subscriber, || form.submit()).unwrap();

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Contact form submitted"));
        assert!(logs.contains("exemplo.com.br"));
        assert!(!logs.contains("ana@"));
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut form = ContactForm {
            message: "   ".to_string(),
            ..filled()
        };

        let err = form.submit().unwrap_err();

        assert_eq!(err, ContactError::MissingFields);
        assert_eq!(
            err.to_string(),
            "Por favor, preencha todos os campos obrigatórios."
        );
        assert_eq!(form.name, " Ana ");
    }

    #[test]
    fn test_invalid_email() {
        let mut form = ContactForm {
            email: "ana@localhost".to_string(),
            ..filled()
        };

        let err = form.submit().unwrap_err();

        assert_eq!(err, ContactError::InvalidEmail(EmailError::InvalidDomain));
        assert_eq!(form.email, "ana@localhost");
    }
}
