//! Contact-form state: the draft being edited, the submission state machine
//! and the validation rules. Pure so the whole cycle is testable without a
//! document.

use serde::Serialize;
use thiserror::Error;

/// Field values of the contact form as currently typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Where the current submission cycle stands. `Validating` and `Submitting`
/// are the in-flight phases; both reject further submit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// Reentrancy guard: a new cycle may only start from `Idle`.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmitPhase::Idle)
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, SubmitPhase::Validating | SubmitPhase::Submitting)
    }

    /// Submit-button label derived from the phase, so the original label is
    /// restored on every exit path.
    pub fn submit_label(&self) -> &'static str {
        if self.in_flight() {
            "Mengirim..."
        } else {
            "Kirim Pesan"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Nama harus diisi minimal 2 karakter")]
    Name,
    #[error("Email tidak valid")]
    Email,
    #[error("Subjek harus diisi minimal 3 karakter")]
    Subject,
    #[error("Pesan harus diisi minimal 10 karakter")]
    Message,
}

/// Checks every field and aggregates all violations into one report.
pub fn validate(draft: &ContactDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.name.trim().chars().count() < 2 {
        errors.push(FieldError::Name);
    }
    if !is_valid_email(&draft.email) {
        errors.push(FieldError::Email);
    }
    if draft.subject.trim().chars().count() < 3 {
        errors.push(FieldError::Subject);
    }
    if draft.message.trim().chars().count() < 10 {
        errors.push(FieldError::Message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Shape check only: no whitespace, exactly one `@`, and a dot with text on
/// both sides somewhere in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Budi Santoso".into(),
            email: "budi@example.co.id".into(),
            subject: "Jadwal ibadah".into(),
            message: "Selamat pagi, saya ingin bertanya.".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn each_field_rule_is_reported() {
        let draft = ContactDraft {
            name: " a ".into(),
            email: "a@b".into(),
            subject: "ab".into(),
            message: "pendek".into(),
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::Name,
                FieldError::Email,
                FieldError::Subject,
                FieldError::Message,
            ]
        );
    }

    #[test]
    fn single_violation_reports_only_that_field() {
        let mut draft = valid_draft();
        draft.message = "singkat".into();
        assert_eq!(validate(&draft), Err(vec![FieldError::Message]));
    }

    #[test]
    fn trimming_applies_before_length_checks() {
        let mut draft = valid_draft();
        draft.subject = "  ab  ".into();
        assert_eq!(validate(&draft), Err(vec![FieldError::Subject]));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(is_valid_email("a.b@c.d.co"));
    }

    #[test]
    fn only_idle_accepts_a_new_submission() {
        assert!(SubmitPhase::Idle.can_submit());
        for phase in [
            SubmitPhase::Validating,
            SubmitPhase::Submitting,
            SubmitPhase::Succeeded,
            SubmitPhase::Failed,
        ] {
            assert!(!phase.can_submit(), "{phase:?} must reject submits");
        }
    }

    #[test]
    fn failed_delivery_restores_the_submit_contract() {
        // a failed delivery leaves the button usable with its original label
        let failed = SubmitPhase::Failed;
        assert!(!failed.in_flight());
        assert_eq!(failed.submit_label(), SubmitPhase::Idle.submit_label());
        // and once the cycle settles back to Idle, a retry is admitted
        assert!(SubmitPhase::Idle.can_submit());
    }

    #[test]
    fn submit_label_follows_the_phase() {
        assert_eq!(SubmitPhase::Idle.submit_label(), "Kirim Pesan");
        assert_eq!(SubmitPhase::Submitting.submit_label(), "Mengirim...");
        // restored on both exit paths
        assert_eq!(SubmitPhase::Succeeded.submit_label(), "Kirim Pesan");
        assert_eq!(SubmitPhase::Failed.submit_label(), "Kirim Pesan");
    }
}
