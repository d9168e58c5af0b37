use aws_config::BehaviorVersion;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sns::types::MessageAttributeValue;
use reqwest::Client;

use crate::types::{NotificationError, TermiiConfig, TermiiSendRequest, TermiiSendResponse};

/// Trait for SMS service implementations
#[async_trait::async_trait]
pub trait SmsProvider: Send + Sync {
    /// Sends `message` to `to` and returns the provider's message id.
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, NotificationError>;
}

/// SMS delivery through the Termii HTTP API
#[derive(Debug, Clone)]
pub struct TermiiSmsProvider {
    client: Client,
    config: TermiiConfig,
}

impl TermiiSmsProvider {
    /// Creates a Termii provider. A missing API key is reported when sending.
    pub fn new(config: TermiiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn send_url(&self) -> String {
        format!("{}/api/sms/send", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl SmsProvider for TermiiSmsProvider {
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, NotificationError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            log::error!("❌ TERMII_API_KEY not configured");
            NotificationError::ServiceUnavailable("SMS service not configured".to_string())
        })?;

        let body = TermiiSendRequest {
            to,
            from: &self.config.sender_id,
            sms: message,
            message_type: "plain",
            channel: &self.config.channel,
            api_key,
        };

        let response = self
            .client
            .post(self.send_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Termii request failed: {}", e);
                NotificationError::ServiceUnavailable(format!("SMS provider unreachable: {}", e))
            })?;

        let status_ok = response.status().is_success();
        let text = response.text().await.map_err(|e| {
            NotificationError::DeliveryFailed(format!("Unreadable provider response: {}", e))
        })?;

        let message_id = interpret_termii_response(status_ok, &text)?;
        log::info!("📱 SMS sent to {} via Termii ({})", to, message_id);
        Ok(message_id)
    }
}

/// Decides whether a Termii response reports success. Anything other than a
/// 2xx status with `"code": "ok"` is a failed delivery.
pub fn interpret_termii_response(status_ok: bool, body: &str) -> Result<String, NotificationError> {
    let parsed: TermiiSendResponse = serde_json::from_str(body).map_err(|_| {
        log::error!("❌ Unexpected Termii response: {}", body);
        NotificationError::DeliveryFailed("Unexpected response from SMS provider".to_string())
    })?;

    if !status_ok || parsed.code.as_deref() != Some("ok") {
        log::error!("❌ Termii error: {}", body);
        return Err(NotificationError::DeliveryFailed(
            parsed
                .message
                .unwrap_or_else(|| "SMS provider rejected the message".to_string()),
        ));
    }

    Ok(parsed.message_id.unwrap_or_default())
}

/// SMS delivery through AWS SNS
#[derive(Debug, Clone)]
pub struct SnsSmsProvider {
    client: SnsClient,
    sender_id: String,
}

impl SnsSmsProvider {
    /// Creates an SNS provider from the default AWS configuration chain.
    pub async fn new(sender_id: impl Into<String>) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        Self {
            client: SnsClient::new(&config),
            sender_id: sender_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl SmsProvider for SnsSmsProvider {
    async fn send_sms(&self, to: &str, message: &str) -> Result<String, NotificationError> {
        let sender = MessageAttributeValue::builder()
            .data_type("String")
            .string_value(&self.sender_id)
            .build()
            .map_err(|e| {
                NotificationError::ServiceUnavailable(format!("Invalid SNS sender id: {}", e))
            })?;

        let result = self
            .client
            .publish()
            .phone_number(to)
            .message(message)
            .message_attributes("AWS.SNS.SMS.SenderID", sender)
            .send()
            .await;

        match result {
            Ok(output) => match output.message_id() {
                Some(message_id) => {
                    log::info!("📱 SMS sent to {} via SNS ({})", to, message_id);
                    Ok(message_id.to_string())
                }
                None => Err(NotificationError::DeliveryFailed(
                    "SNS returned no message id".to_string(),
                )),
            },
            Err(e) => {
                log::error!("❌ AWS SNS error: {:#?}", e);
                if let Some(service_error) = e.as_service_error() {
                    Err(NotificationError::DeliveryFailed(format!(
                        "AWS SNS service error: {}",
                        service_error
                    )))
                } else {
                    Err(NotificationError::ServiceUnavailable(format!(
                        "AWS SNS error: {}",
                        e
                    )))
                }
            }
        }
    }
}

/// Provider for local development that writes messages to the log instead of
/// sending them.
#[derive(Debug, Clone, Default)]
pub struct LogSmsProvider;

#[async_trait::async_trait]
impl SmsProvider for LogSmsProvider {
    async fn send_sms(&self, to: &str, _message: &str) -> Result<String, NotificationError> {
        // Message bodies carry secret codes and stay out of the log.
        log::info!("📱 [LOG SMS] To: {}", to);
        Ok(format!("log-sms-{}", to))
    }
}
