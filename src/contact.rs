use serde::Serialize;
use thiserror::Error;

/// EmailJS REST endpoint used for browser-side delivery.
pub const DELIVERY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// How long the success panel stays up before the form returns to idle.
pub const SUCCESS_RESET_MS: f64 = 5000.0;

const DEFAULT_RECIPIENT_NAME: &str = "Portfolio Owner";
const DEFAULT_RECIPIENT_EMAIL: &str = "absaralioff@gmail.com";
const FALLBACK_REASON: &str = "Failed to send message. Please try again later.";

/// Stage of the current submission attempt. Exactly one is active at a
/// time, which is why this is an enum rather than a set of flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Delivery-service identifiers plus recipient defaults, injected at build
/// time. Each value is individually detectable as absent so a
/// misconfigured deployment can name exactly what is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryConfig {
    pub service_id: Option<&'static str>,
    pub template_id: Option<&'static str>,
    pub public_key: Option<&'static str>,
    pub recipient_name: Option<&'static str>,
    pub recipient_email: Option<&'static str>,
}

impl DeliveryConfig {
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID"),
            template_id: option_env!("EMAILJS_TEMPLATE_ID"),
            public_key: option_env!("EMAILJS_PUBLIC_KEY"),
            recipient_name: option_env!("CONTACT_NAME"),
            recipient_email: option_env!("CONTACT_EMAIL"),
        }
    }

    fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.is_none() {
            missing.push("EMAILJS_SERVICE_ID");
        }
        if self.template_id.is_none() {
            missing.push("EMAILJS_TEMPLATE_ID");
        }
        if self.public_key.is_none() {
            missing.push("EMAILJS_PUBLIC_KEY");
        }
        missing
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    Validation,
    #[error("Missing EmailJS configuration: {}", .0.join(", "))]
    Configuration(Vec<&'static str>),
}

/// Template parameters for one outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub to_name: String,
    pub to_email: String,
    pub from_name: String,
    pub user_email: String,
    pub message: String,
    pub reply_to: String,
}

/// A validated, ready-to-send request body for the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: MessagePayload,
}

/// Validates the fields and configuration, then builds the request body.
/// Field validation runs first so an incomplete form never reports a
/// deployment problem.
pub fn prepare_submission(
    fields: &FormFields,
    config: &DeliveryConfig,
) -> Result<Submission, ContactError> {
    if !fields.is_complete() {
        return Err(ContactError::Validation);
    }
    let (Some(service_id), Some(template_id), Some(public_key)) =
        (config.service_id, config.template_id, config.public_key)
    else {
        return Err(ContactError::Configuration(config.missing_keys()));
    };
    Ok(Submission {
        service_id: service_id.to_string(),
        template_id: template_id.to_string(),
        public_key: public_key.to_string(),
        template_params: MessagePayload {
            to_name: config
                .recipient_name
                .unwrap_or(DEFAULT_RECIPIENT_NAME)
                .to_string(),
            to_email: config
                .recipient_email
                .unwrap_or(DEFAULT_RECIPIENT_EMAIL)
                .to_string(),
            from_name: fields.name.clone(),
            user_email: fields.email.clone(),
            message: fields.message.clone(),
            reply_to: fields.email.clone(),
        },
    })
}

/// What the delivery service (or transport) reported about a failed send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub message: Option<String>,
    pub text: Option<String>,
    pub status: Option<u16>,
}

impl DeliveryFailure {
    fn from_transport(err: reqwest::Error) -> Self {
        Self {
            message: Some(err.to_string()),
            text: None,
            status: err.status().map(|s| s.as_u16()),
        }
    }

    /// Human-readable reason, picked in priority order: explicit message,
    /// explicit body text, status code, fixed fallback. Empty strings
    /// count as absent.
    pub fn reason(&self) -> String {
        if let Some(message) = non_empty(&self.message) {
            return message.to_string();
        }
        if let Some(text) = non_empty(&self.text) {
            return text.to_string();
        }
        if let Some(status) = self.status {
            return format!("EmailJS Error: {status}");
        }
        FALLBACK_REASON.to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Sends one message. A single POST with no retry and no backoff; a
/// transient failure is surfaced to the user rather than retried.
pub async fn deliver(submission: &Submission) -> Result<(), DeliveryFailure> {
    let response = reqwest::Client::new()
        .post(DELIVERY_ENDPOINT)
        .json(submission)
        .send()
        .await
        .map_err(DeliveryFailure::from_transport)?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(DeliveryFailure {
        message: None,
        text: (!body.is_empty()).then_some(body),
        status: Some(status.as_u16()),
    })
}

/// State machine behind the contact form. The UI layer owns one of these
/// and calls in on input changes, submit, delivery completion, and the
/// post-success reset timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactController {
    pub fields: FormFields,
    pub phase: Phase,
}

impl ContactController {
    /// Field updates never validate and always succeed.
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    /// Starts a submission attempt. Returns the request body to dispatch,
    /// or `None` if nothing should be sent: either a submit is already in
    /// flight (silent no-op, the UI disables the trigger too) or the
    /// attempt failed before reaching the network.
    pub fn begin_submit(&mut self, config: &DeliveryConfig) -> Option<Submission> {
        if self.phase == Phase::Submitting {
            return None;
        }
        self.phase = Phase::Submitting;
        match prepare_submission(&self.fields, config) {
            Ok(submission) => Some(submission),
            Err(err) => {
                self.phase = Phase::Failed(err.to_string());
                None
            }
        }
    }

    /// Records the delivery outcome. Fields are cleared only on success so
    /// a failed attempt can be retried without retyping.
    pub fn finish(&mut self, result: Result<(), DeliveryFailure>) {
        match result {
            Ok(()) => {
                self.fields = FormFields::default();
                self.phase = Phase::Submitted;
            }
            Err(failure) => {
                self.phase = Phase::Failed(failure.reason());
            }
        }
    }

    /// Timer callback: the success panel reverts to the idle form. A
    /// no-op from any other phase in case the timer outlives a retry.
    pub fn reset(&mut self) {
        if self.phase == Phase::Submitted {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> DeliveryConfig {
        DeliveryConfig {
            service_id: Some("service_x1"),
            template_id: Some("template_y2"),
            public_key: Some("key_z3"),
            recipient_name: Some("Absar Ali"),
            recipient_email: Some("absar@example.com"),
        }
    }

    fn filled_fields() -> FormFields {
        FormFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn filled_controller() -> ContactController {
        ContactController {
            fields: filled_fields(),
            phase: Phase::Idle,
        }
    }

    #[test]
    fn empty_field_fails_validation_before_any_send() {
        for blank in [Field::Name, Field::Email, Field::Message] {
            let mut controller = filled_controller();
            controller.update_field(blank, "   ".to_string());
            let submission = controller.begin_submit(&full_config());
            assert!(submission.is_none(), "no request body for {blank:?}");
            assert_eq!(
                controller.phase,
                Phase::Failed("All fields are required".to_string())
            );
        }
    }

    #[test]
    fn payload_copies_fields_and_sets_reply_to() {
        let submission =
            prepare_submission(&filled_fields(), &full_config()).expect("should build");
        assert_eq!(submission.service_id, "service_x1");
        assert_eq!(submission.template_id, "template_y2");
        assert_eq!(submission.public_key, "key_z3");
        let params = &submission.template_params;
        assert_eq!(params.from_name, "Jane Doe");
        assert_eq!(params.user_email, "jane@example.com");
        assert_eq!(params.message, "Hello there");
        assert_eq!(params.reply_to, params.user_email);
        assert_eq!(params.to_name, "Absar Ali");
        assert_eq!(params.to_email, "absar@example.com");
    }

    #[test]
    fn recipient_defaults_apply_when_unset() {
        let config = DeliveryConfig {
            recipient_name: None,
            recipient_email: None,
            ..full_config()
        };
        let params = prepare_submission(&filled_fields(), &config)
            .expect("should build")
            .template_params;
        assert_eq!(params.to_name, "Portfolio Owner");
        assert_eq!(params.to_email, "absaralioff@gmail.com");
    }

    #[test]
    fn submission_serializes_to_delivery_wire_format() {
        let submission =
            prepare_submission(&filled_fields(), &full_config()).expect("should build");
        let value = serde_json::to_value(&submission).expect("should serialize");
        assert_eq!(value["service_id"], "service_x1");
        assert_eq!(value["template_id"], "template_y2");
        assert_eq!(value["user_id"], "key_z3");
        assert_eq!(value["template_params"]["from_name"], "Jane Doe");
        assert_eq!(value["template_params"]["reply_to"], "jane@example.com");
    }

    #[test]
    fn missing_identifiers_are_each_named() {
        let config = DeliveryConfig {
            template_id: None,
            public_key: None,
            ..full_config()
        };
        let err = prepare_submission(&filled_fields(), &config).unwrap_err();
        assert_eq!(
            err,
            ContactError::Configuration(vec!["EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"])
        );
        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "Missing EmailJS configuration: EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY"
        );
        assert!(!rendered.contains("EMAILJS_SERVICE_ID"));
    }

    #[test]
    fn validation_runs_before_configuration_check() {
        let err = prepare_submission(&FormFields::default(), &DeliveryConfig::default())
            .unwrap_err();
        assert_eq!(err, ContactError::Validation);
    }

    #[test]
    fn second_submit_while_submitting_is_a_noop() {
        let mut controller = filled_controller();
        let first = controller.begin_submit(&full_config());
        assert!(first.is_some());
        assert_eq!(controller.phase, Phase::Submitting);

        let second = controller.begin_submit(&full_config());
        assert!(second.is_none());
        assert_eq!(controller.phase, Phase::Submitting);
        assert_eq!(controller.fields, filled_fields());
    }

    #[test]
    fn success_clears_fields_then_reset_returns_to_idle() {
        let mut controller = filled_controller();
        controller.begin_submit(&full_config()).expect("should submit");
        controller.finish(Ok(()));
        assert_eq!(controller.phase, Phase::Submitted);
        assert_eq!(controller.fields, FormFields::default());

        controller.reset();
        assert_eq!(controller.phase, Phase::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_reports_reason_verbatim() {
        let mut controller = filled_controller();
        controller.begin_submit(&full_config()).expect("should submit");
        controller.finish(Err(DeliveryFailure {
            message: Some("The recipients address is corrupted".to_string()),
            text: Some("ignored".to_string()),
            status: Some(422),
        }));
        assert_eq!(
            controller.phase,
            Phase::Failed("The recipients address is corrupted".to_string())
        );
        assert_eq!(controller.fields, filled_fields());
    }

    #[test]
    fn failed_attempt_can_be_resubmitted() {
        let mut controller = filled_controller();
        controller.begin_submit(&full_config()).expect("should submit");
        controller.finish(Err(DeliveryFailure::default()));
        assert!(matches!(controller.phase, Phase::Failed(_)));

        let retry = controller.begin_submit(&full_config());
        assert!(retry.is_some());
        assert_eq!(controller.phase, Phase::Submitting);
    }

    #[test]
    fn reset_is_ignored_outside_submitted() {
        let mut controller = filled_controller();
        controller.reset();
        assert_eq!(controller.phase, Phase::Idle);

        controller.phase = Phase::Failed("nope".to_string());
        controller.reset();
        assert_eq!(controller.phase, Phase::Failed("nope".to_string()));
    }

    #[test]
    fn failure_reason_priority_order() {
        let all = DeliveryFailure {
            message: Some("message wins".to_string()),
            text: Some("text loses".to_string()),
            status: Some(500),
        };
        assert_eq!(all.reason(), "message wins");

        let text_and_status = DeliveryFailure {
            message: None,
            text: Some("text wins".to_string()),
            status: Some(500),
        };
        assert_eq!(text_and_status.reason(), "text wins");

        let status_only = DeliveryFailure {
            message: None,
            text: None,
            status: Some(503),
        };
        assert_eq!(status_only.reason(), "EmailJS Error: 503");

        assert_eq!(
            DeliveryFailure::default().reason(),
            "Failed to send message. Please try again later."
        );
    }

    #[test]
    fn empty_strings_fall_through_reason_priority() {
        let failure = DeliveryFailure {
            message: Some(String::new()),
            text: Some(String::new()),
            status: Some(400),
        };
        assert_eq!(failure.reason(), "EmailJS Error: 400");
    }
}
