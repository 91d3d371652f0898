//! Contact form state machine.
//!
//! idle → validating → (invalid → idle) | (valid → sending → idle)

use std::sync::Arc;

use tracing::debug;

use crate::contact::delivery::{dispatch, DeliveryError, EmailDelivery, EmailPayload};
use crate::contact::inflight::InFlight;
use crate::contact::validation::{validate, ContactFormValues, FieldErrors};
use crate::shell::Toaster;

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";
pub const FAILED_TITLE: &str = "Error";
pub const FAILED_DESCRIPTION: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
}

/// Result of one submit action.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// An identical delivery was already in flight; this action was ignored.
    AlreadySending,
    Sent,
    Failed(DeliveryError),
}

/// Outcome of the synchronous half of a submit.
#[derive(Debug)]
pub enum SubmitStep {
    Invalid,
    AlreadySending,
    Ready(EmailPayload),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactFormValues,
    errors: FieldErrors,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: ContactFormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == FormPhase::Sending
    }

    /// Validates the current values and, when they pass, enters `Sending`.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.is_sending() {
            return SubmitStep::AlreadySending;
        }

        match validate(&self.values) {
            Err(errors) => {
                debug!("Contact form rejected: {} field error(s)", errors.len());
                self.errors = errors;
                SubmitStep::Invalid
            }
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Sending;
                SubmitStep::Ready(EmailPayload::from(&submission))
            }
        }
    }

    /// Leaves `Sending` and reports the delivery outcome through the toaster.
    /// Values are cleared on success and kept on failure.
    pub fn settle(
        &mut self,
        outcome: Result<(), DeliveryError>,
        toaster: &mut Toaster,
    ) -> SubmitOutcome {
        self.phase = FormPhase::Idle;
        match outcome {
            Ok(()) => {
                toaster.toast(SENT_TITLE, SENT_DESCRIPTION);
                self.values = ContactFormValues::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                toaster.error(FAILED_TITLE, FAILED_DESCRIPTION);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Full submit action: validate, deliver on a detached task, settle.
    ///
    /// `inflight` is shared across requests; a payload identical to one still
    /// being delivered is ignored and the form stays as it was.
    pub async fn submit(
        &mut self,
        delivery: Arc<dyn EmailDelivery>,
        inflight: &InFlight,
        toaster: &mut Toaster,
    ) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            SubmitStep::Invalid => return SubmitOutcome::Invalid,
            SubmitStep::AlreadySending => return SubmitOutcome::AlreadySending,
            SubmitStep::Ready(payload) => payload,
        };

        let Some(claim) = inflight.claim(payload) else {
            debug!("Identical contact message already being delivered; ignoring");
            self.phase = FormPhase::Idle;
            return SubmitOutcome::AlreadySending;
        };

        let outcome = dispatch(delivery, claim)
            .await
            .unwrap_or(Err(DeliveryError::Abandoned));

        self.settle(outcome, toaster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::delivery::testing::RecordingDelivery;
    use crate::contact::validation::{Field, ValidationError};
    use crate::shell::ToastVariant;

    fn ana() -> ContactFormValues {
        ContactFormValues::new("Ana", "ana@example.com", "Hello, I would like to connect.")
    }

    #[tokio::test]
    async fn test_successful_submit_sends_once_and_resets() {
        let delivery = RecordingDelivery::succeeding();
        let mut toaster = Toaster::new(5_000);
        let mut form = ContactForm::with_values(ana());

        let outcome = form.submit(delivery.clone(), &InFlight::default(), &mut toaster).await;

        assert!(matches!(outcome, SubmitOutcome::Sent));
        assert_eq!(delivery.call_count(), 1);
        assert_eq!(
            delivery.last_payload().unwrap(),
            EmailPayload {
                from_name: "Ana".to_string(),
                reply_to: "ana@example.com".to_string(),
                message: "Hello, I would like to connect.".to_string(),
            }
        );
        assert_eq!(form.values(), &ContactFormValues::default());
        assert_eq!(form.phase(), FormPhase::Idle);

        let toast = toaster.latest().unwrap();
        assert_eq!(toaster.iter().count(), 1);
        assert_eq!(toast.title, SENT_TITLE);
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_call() {
        let delivery = RecordingDelivery::succeeding();
        let mut toaster = Toaster::new(5_000);
        let mut form = ContactForm::with_values(ContactFormValues::new("", "bad", "short"));

        let outcome = form.submit(delivery.clone(), &InFlight::default(), &mut toaster).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(delivery.call_count(), 0);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(
            form.errors().get(Field::Message),
            Some(ValidationError::MessageTooShort)
        );
        assert_eq!(form.values().email, "bad");
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(toaster.latest().is_none());
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_values_and_reenables() {
        let delivery = RecordingDelivery::failing(500);
        let mut toaster = Toaster::new(5_000);
        let mut form = ContactForm::with_values(ana());

        let outcome = form.submit(delivery.clone(), &InFlight::default(), &mut toaster).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(delivery.call_count(), 1);
        assert_eq!(form.values(), &ana());
        assert!(!form.is_sending());
        assert_eq!(toaster.iter().count(), 1);
        assert!(toaster.latest().unwrap().is_destructive());
        assert_eq!(toaster.latest().unwrap().description, FAILED_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_retry_after_failure_sends_again() {
        let failing = RecordingDelivery::failing(500);
        let working = RecordingDelivery::succeeding();
        let mut toaster = Toaster::new(5_000);
        let mut form = ContactForm::with_values(ana());

        let inflight = InFlight::default();
        form.submit(failing.clone(), &inflight, &mut toaster).await;
        let outcome = form.submit(working.clone(), &inflight, &mut toaster).await;

        assert!(matches!(outcome, SubmitOutcome::Sent));
        assert_eq!(failing.call_count(), 1);
        assert_eq!(working.call_count(), 1);
    }

    #[test]
    fn test_submit_while_sending_is_ignored() {
        let mut form = ContactForm::with_values(ana());

        assert!(matches!(form.begin_submit(), SubmitStep::Ready(_)));
        assert!(form.is_sending());
        assert!(matches!(form.begin_submit(), SubmitStep::AlreadySending));
        assert!(form.is_sending());
    }

    #[tokio::test]
    async fn test_submit_matching_pending_delivery_is_ignored() {
        let delivery = RecordingDelivery::succeeding();
        let inflight = InFlight::default();
        let mut toaster = Toaster::new(5_000);
        let _pending = inflight
            .claim(EmailPayload {
                from_name: "Ana".to_string(),
                reply_to: "ana@example.com".to_string(),
                message: "Hello, I would like to connect.".to_string(),
            })
            .unwrap();
        let mut form = ContactForm::with_values(ana());

        let outcome = form.submit(delivery.clone(), &inflight, &mut toaster).await;

        assert!(matches!(outcome, SubmitOutcome::AlreadySending));
        assert_eq!(delivery.call_count(), 0);
        assert_eq!(form.values(), &ana());
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(toaster.latest().is_none());
    }

    #[test]
    fn test_corrected_input_clears_previous_errors() {
        let mut form = ContactForm::with_values(ContactFormValues::new("", "bad", "short"));
        assert!(matches!(form.begin_submit(), SubmitStep::Invalid));

        let mut form = ContactForm {
            values: ana(),
            ..form
        };
        assert!(matches!(form.begin_submit(), SubmitStep::Ready(_)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_settle_returns_to_idle_on_either_outcome() {
        let mut toaster = Toaster::new(5_000);
        let mut form = ContactForm::with_values(ana());

        form.begin_submit();
        form.settle(Err(DeliveryError::Abandoned), &mut toaster);
        assert_eq!(form.phase(), FormPhase::Idle);

        form.begin_submit();
        form.settle(Ok(()), &mut toaster);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(toaster.iter().count(), 2);
    }
}
