// Contact form: validation, submission state machine, email delivery, HTTP handlers.
// All outbound email goes through `delivery`; handlers never call EmailJS directly.

pub mod delivery;
pub mod form;
pub mod handlers;
pub mod inflight;
pub mod validation;

pub use delivery::{DeliveryError, EmailDelivery, EmailJsClient, EmailJsCredentials};
pub use form::ContactForm;
pub use inflight::InFlight;
pub use validation::{Field, FieldErrors};
