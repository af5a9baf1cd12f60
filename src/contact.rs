use crate::errors::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    QuestionFeedback,
    FeatureRequest,
    BugReport,
    ContentSuggestion,
    Collaboration,
    General,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::QuestionFeedback,
        Subject::FeatureRequest,
        Subject::BugReport,
        Subject::ContentSuggestion,
        Subject::Collaboration,
        Subject::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::QuestionFeedback => "Question Feedback",
            Subject::FeatureRequest => "Feature Request",
            Subject::BugReport => "Bug Report",
            Subject::ContentSuggestion => "Content Suggestion",
            Subject::Collaboration => "Collaboration",
            Subject::General => "General Inquiry",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Subject::QuestionFeedback => "question-feedback",
            Subject::FeatureRequest => "new-feature",
            Subject::BugReport => "bug-report",
            Subject::ContentSuggestion => "content-suggestion",
            Subject::Collaboration => "collaboration",
            Subject::General => "general",
        }
    }
}

/// Borrador del formulario tal y como lo edita la vista.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

/// Mensaje ya validado, listo para el canal externo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail);
        }
        let subject = self.subject.ok_or(ContactError::MissingSubject)?;
        let message = required("message", &self.message)?;
        Ok(ContactSubmission {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

// Misma comprobación superficial que un <input type="email">: algo@algo.algo
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Entrega el mensaje. No hay backend: queda en el log.
pub fn submit(form: &ContactForm) -> Result<ContactSubmission, ContactError> {
    let submission = form.validate()?;
    log::info!(
        "contacto [{}] de {} <{}>: {} caracteres",
        submission.subject.slug(),
        submission.name,
        submission.email,
        submission.message.chars().count()
    );
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Ana ".into(),
            email: "ana@example.com".into(),
            subject: Some(Subject::BugReport),
            message: "Question 3 has two right answers".into(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let sub = filled().validate().unwrap();
        assert_eq!(sub.name, "Ana");
        assert_eq!(sub.subject, Subject::BugReport);
    }

    #[test]
    fn required_fields_and_subject() {
        let mut form = filled();
        form.message = "  ".into();
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));

        let mut form = filled();
        form.subject = None;
        assert_eq!(form.validate(), Err(ContactError::MissingSubject));

        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField("name"))
        );
    }

    #[test]
    fn email_shape() {
        for bad in ["ana", "ana@", "@example.com", "ana@example", "a b@example.com", "a@b@c.com"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn clear_resets_the_draft() {
        let mut form = filled();
        submit(&form).unwrap();
        form.clear();
        assert!(form.name.is_empty() && form.subject.is_none());
    }
}
