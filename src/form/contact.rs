//! Core of the contact endpoint: request validation, the notification email,
//! and the submit outcome returned to the client. Transport and the actual
//! email provider stay outside the crate behind [`Mailer`].

use crate::foundation::error::{BorderlineError, BorderlineResult};

/// Inbox receiving contact notifications.
pub const CONTACT_TO: &str = "theborderline21@gmail.com";
/// Sender address for contact notifications.
pub const CONTACT_FROM: &str = "noreply@thetaharpia.com";

const MSG_MISSING_FIELDS: &str = "All required fields must be filled.";
const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
const MSG_SEND_FAILED: &str = "Error sending email. Please try again later.";
const MSG_SENT: &str = "Message sent successfully! We will get back to you within 48 hours.";

/// A submitted contact form.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender email, used as the reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactRequest {
    /// Reject blank fields and implausible email addresses. The error
    /// messages are the user-facing strings the endpoint returns.
    pub fn validate(&self) -> BorderlineResult<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(BorderlineError::validation(MSG_MISSING_FIELDS));
        }
        if !is_plausible_email(&self.email) {
            return Err(BorderlineError::validation(MSG_INVALID_EMAIL));
        }
        Ok(())
    }
}

/// Shallow shape check: one `@`, non-empty local part, dotted domain, no
/// whitespace anywhere. Deliverability is the mail provider's problem.
pub fn is_plausible_email(address: &str) -> bool {
    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    !domain.is_empty()
        && !domain.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// A fully composed notification email, ready for a [`Mailer`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OutboundEmail {
    /// Recipient address.
    pub to: String,
    /// Sender address.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Reply-To address (the submitter).
    pub reply_to: String,
}

/// Compose the notification email for a contact request, stamped with the
/// submission time in unix seconds.
///
/// Field values are HTML-escaped before interpolation; message newlines
/// become `<br>`.
pub fn build_notification(req: &ContactRequest, now_unix: u64) -> OutboundEmail {
    let message_html = escape_html(&req.message).replace('\n', "<br>");
    let html = format!(
        "<h2>New contact message received via website</h2>\n\
         <ul>\n\
           <li><strong>Name:</strong> {}</li>\n\
           <li><strong>Email:</strong> {}</li>\n\
           <li><strong>Message:</strong><br>{}</li>\n\
         </ul>\n\
         <p><small>Sent on: {now_unix}</small></p>\n",
        escape_html(&req.name),
        escape_html(&req.email),
        message_html,
    );
    OutboundEmail {
        to: CONTACT_TO.to_string(),
        from: CONTACT_FROM.to_string(),
        subject: format!("New contact message from {}", req.name),
        html,
        reply_to: req.email.clone(),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Sends a composed email. Implemented outside the crate by the real
/// provider client; tests use a recording stub.
pub trait Mailer {
    /// Deliver `email`, or report why it could not be sent.
    fn send(&mut self, email: &OutboundEmail) -> BorderlineResult<()>;
}

/// Outcome returned to the submitting client.
///
/// Serializes as `{"success":true,"message":...}` or `{"error":...}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ContactOutcome {
    /// The notification was sent.
    Sent {
        /// Always `true`.
        success: bool,
        /// User-facing confirmation.
        message: String,
    },
    /// Validation or delivery failed.
    Failed {
        /// User-facing error description.
        error: String,
    },
}

impl ContactOutcome {
    fn sent() -> Self {
        Self::Sent {
            success: true,
            message: MSG_SENT.to_string(),
        }
    }

    /// Whether the submission succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Validate a request and send the notification through `mailer`.
///
/// Never returns an error: every failure mode maps to a user-facing
/// [`ContactOutcome::Failed`], as the endpoint response does.
pub fn handle_contact(req: &ContactRequest, mailer: &mut dyn Mailer) -> ContactOutcome {
    if let Err(err) = req.validate() {
        tracing::debug!(%err, "contact request rejected");
        let error = match err {
            BorderlineError::Validation(msg) => msg,
            other => other.to_string(),
        };
        return ContactOutcome::Failed { error };
    }
    let email = build_notification(req, crate::form::draft::unix_now());
    match mailer.send(&email) {
        Ok(()) => ContactOutcome::sent(),
        Err(err) => {
            tracing::warn!(%err, "contact notification send failed");
            ContactOutcome::Failed {
                error: MSG_SEND_FAILED.to_string(),
            }
        }
    }
}
