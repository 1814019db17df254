//! Outgoing mail.
//!
//! Mail goes out through a [`MailTransport`] obtained from a [`MailTransportFactory`].
//! The SMTP factory builds and verifies a fresh lettre transport on every call,
//! so a provider outage surfaces on the request that needed it.

mod service;
mod types;

pub use service::{
  build_verification_email, MailTransport, MailTransportFactory, SmtpMailTransport, SmtpTransportFactory,
  VERIFICATION_SUBJECT,
};
pub use types::{EmailMessage, EmailerConfig, EMAIL_SERVICE_DISABLED};
