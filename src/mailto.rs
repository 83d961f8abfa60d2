use log::info;
use web_sys::window;

use crate::config;

/// A pre-filled message handed to the visitor's mail client.
#[derive(Debug, Clone, PartialEq)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn draft(&self) -> MailDraft {
        MailDraft {
            to: config::CONTACT_EMAIL.to_string(),
            subject: format!("Project inquiry from {}", self.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                self.name, self.email, self.message
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub portfolio: String,
    pub message: String,
}

impl ApplicationForm {
    /// `role` is `None` when the position slug did not resolve.
    pub fn draft(&self, role: Option<&str>) -> MailDraft {
        let role = role.unwrap_or("Open Position");
        MailDraft {
            to: config::CAREERS_EMAIL.to_string(),
            subject: format!("Application for {}", role),
            body: format!(
                "Name: {}\nEmail: {}\nLinkedIn: {}\nPortfolio: {}\n\nMessage:\n{}",
                self.name, self.email, self.linkedin, self.portfolio, self.message
            ),
        }
    }
}

/// Hands the draft to the default mail handler. Nothing is reported back.
pub fn open(draft: &MailDraft) {
    info!("Opening mail draft to {}", draft.to);
    if let Some(window) = window() {
        let _ = window.location().set_href(&draft.href());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_encodes_subject_and_body() {
        let draft = MailDraft {
            to: "careers@insightexus.com".to_string(),
            subject: "Application for UI/UX Designer".to_string(),
            body: "Name: Ada & Co\nMessage:\n100% yes?".to_string(),
        };
        assert_eq!(
            draft.href(),
            "mailto:careers@insightexus.com?subject=Application%20for%20UI%2FUX%20Designer\
             &body=Name%3A%20Ada%20%26%20Co%0AMessage%3A%0A100%25%20yes%3F"
        );
    }

    #[test]
    fn application_draft_lists_every_field() {
        let form = ApplicationForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            linkedin: "https://linkedin.com/in/jane".to_string(),
            portfolio: String::new(),
            message: "Hello\nthere".to_string(),
        };
        let draft = form.draft(Some("DevOps Engineer"));
        assert_eq!(draft.to, config::CAREERS_EMAIL);
        assert_eq!(draft.subject, "Application for DevOps Engineer");
        assert_eq!(
            draft.body,
            "Name: Jane Doe\nEmail: jane@example.com\nLinkedIn: https://linkedin.com/in/jane\n\
             Portfolio: \n\nMessage:\nHello\nthere"
        );
    }

    #[test]
    fn unresolved_role_falls_back_to_open_position() {
        let draft = ApplicationForm::default().draft(None);
        assert_eq!(draft.subject, "Application for Open Position");
    }

    #[test]
    fn contact_draft_goes_to_the_studio_inbox() {
        let form = ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "We need an app".to_string(),
        };
        let draft = form.draft();
        assert_eq!(draft.to, config::CONTACT_EMAIL);
        assert_eq!(draft.subject, "Project inquiry from Sam");
        assert!(draft.body.ends_with("Message:\nWe need an app"));
        assert!(draft.href().starts_with("mailto:hello@insightexus.com?subject=Project%20inquiry"));
    }
}
