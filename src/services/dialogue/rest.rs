use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{DialogueEngine, EngineError};
use crate::models::BotMessage;

/// Client for an engine exposing the REST channel webhook and tracker API.
pub struct RestDialogueEngine {
    url: String,
    status_timeout: Duration,
    client: reqwest::Client,
}

impl RestDialogueEngine {
    pub fn new(
        url: String,
        request_timeout: Duration,
        status_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            status_timeout,
            client,
        })
    }
}

#[async_trait]
impl DialogueEngine for RestDialogueEngine {
    async fn send(&self, sender: &str, message: &str) -> Result<Vec<BotMessage>, EngineError> {
        let body = json!({
            "sender": sender,
            "message": message,
        });

        let resp = self
            .client
            .post(format!("{}/webhooks/rest/webhook", self.url))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "dialogue engine error");
            return Err(EngineError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<Vec<BotMessage>>()
            .await
            .map_err(|e| EngineError::Decode(e.to_string()))
    }

    async fn restart(&self, sender: &str) -> Result<(), EngineError> {
        let resp = self
            .client
            .post(format!("{}/conversations/{}/tracker/events", self.url, sender))
            .timeout(self.status_timeout)
            .json(&json!({"event": "restart"}))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EngineError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn is_reachable(&self) -> bool {
        match self
            .client
            .get(format!("{}/status", self.url))
            .timeout(self.status_timeout)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "dialogue engine status check failed");
                false
            }
        }
    }
}
