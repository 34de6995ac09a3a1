use async_trait::async_trait;
use reqwest::{
    Client,
    header::{COOKIE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER, USER_AGENT},
    multipart::Form,
};
use tracing::{error, info};

use super::types::{
    AUTHORITY, BROWSER_USER_AGENT, INVITE_BULK_METHOD, WEB_CLIENT_ORIGIN, WEB_CLIENT_REFERER,
    query_params,
};
use super::{BulkInviteForm, GuestInvite, InviteClient, InviteOutcome, SlackApiResponse};
use crate::config::SlackConfig;
use crate::error::{AppError, AppResult};

/// reqwest-backed client that impersonates the Slack web client.
#[derive(Clone, Debug)]
pub struct SlackInviteClient {
    config: SlackConfig,
    client: Client,
}

impl SlackInviteClient {
    pub fn new(config: SlackConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build Slack HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.config.api_base_url, INVITE_BULK_METHOD)
    }

    fn browser_headers(cookie: &str) -> Result<HeaderMap, reqwest::header::InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(&format!("d={}", cookie))?);
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ORIGIN, HeaderValue::from_static(WEB_CLIENT_ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static(WEB_CLIENT_REFERER));
        headers.insert(
            HeaderName::from_static("authority"),
            HeaderValue::from_static(AUTHORITY),
        );
        Ok(headers)
    }

    async fn send(&self, invite: &GuestInvite<'_>) -> Result<InviteOutcome, String> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis();

        let headers =
            Self::browser_headers(&invite.credentials.cookie).map_err(|e| e.to_string())?;

        let fields = BulkInviteForm::for_guest(invite)
            .fields()
            .map_err(|e| e.to_string())?;
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .client
            .post(self.endpoint())
            .query(&query_params(&invite.credentials.team_id, timestamp_ms))
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        info!(status = status.as_u16(), body = %body, "Slack inviteBulk response");

        Ok(SlackApiResponse::interpret(status, &body))
    }
}

#[async_trait]
impl InviteClient for SlackInviteClient {
    async fn invite_guest(&self, invite: GuestInvite<'_>) -> InviteOutcome {
        match self.send(&invite).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(channel_id = invite.channel_id, "Error in bulk invite: {}", e);
                InviteOutcome::rejected(format!("Exception: {}", e))
            }
        }
    }
}
