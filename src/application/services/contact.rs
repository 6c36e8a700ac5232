//! External contact links for agents and the agency contact form.

use thiserror::Error;

/// Mailbox receiving contact form messages.
pub const DEFAULT_AGENCY_EMAIL: &str = "contato@alphaprime.com";

/// Builds a `mailto:` link for e-mail addresses and a `tel:` link otherwise.
#[must_use]
pub fn contact_link(contact: &str) -> String {
    if contact.contains('@') {
        format!("mailto:{contact}")
    } else {
        format!("tel:{contact}")
    }
}

/// Contact form validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Message typed into the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Checks that name, email and message are present. Phone is optional.
    ///
    /// # Errors
    /// Returns `ContactFormError::MissingFields` naming every empty required field.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactFormError::MissingFields(missing))
        }
    }

    /// Builds the `mailto:` link that hands the message to the mail client.
    #[must_use]
    pub fn mailto_link(&self, recipient: &str) -> String {
        let subject = format!("Contato de {}", self.name);
        let body = format!(
            "Nome: {}\nEmail: {}\nTelefone: {}\n\nMensagem:\n{}",
            self.name, self.email, self.phone, self.message
        );

        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ana Lima".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            message: "Olá".to_string(),
        }
    }

    #[test]
    fn test_contact_link() {
        assert_eq!(contact_link("corretor@imob.com"), "mailto:corretor@imob.com");
        assert_eq!(contact_link("+55 81 99999-0000"), "tel:+55 81 99999-0000");
    }

    #[test]
    fn test_validate_accepts_missing_phone() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let form = ContactForm {
            name: "  ".to_string(),
            ..ContactForm::default()
        };

        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingFields(vec!["name", "email", "message"]))
        );
    }

    #[test]
    fn test_mailto_link_encodes_subject_and_body() {
        let link = filled_form().mailto_link(DEFAULT_AGENCY_EMAIL);

        assert!(link.starts_with("mailto:contato@alphaprime.com?subject=Contato%20de%20Ana%20Lima&body="));
        assert!(link.contains("Nome%3A%20Ana%20Lima%0AEmail%3A%20ana%40example.com"));
        assert!(link.contains("Mensagem%3A%0AOl%C3%A1"));
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
