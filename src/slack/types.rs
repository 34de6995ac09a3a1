use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{GuestInvite, InviteOutcome};

pub const INVITE_BULK_METHOD: &str = "users.admin.inviteBulk";

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";
pub const WEB_CLIENT_ORIGIN: &str = "https://app.slack.com";
pub const WEB_CLIENT_REFERER: &str = "https://app.slack.com/";
pub const AUTHORITY: &str = "slack.com";
pub const CLIENT_SESSION_ID: &str = "replit-bot";

/// Guest account type requested for every invite.
pub const ULTRA_RESTRICTED: &str = "ultra_restricted";

/// Entry of the JSON-encoded `invites` form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteEntry {
    pub email: String,
    #[serde(rename = "type")]
    pub membership_type: String,
    pub mode: String,
}

impl InviteEntry {
    pub fn guest(email: &str) -> Self {
        Self {
            email: email.to_string(),
            membership_type: ULTRA_RESTRICTED.to_string(),
            mode: "manual".to_string(),
        }
    }
}

/// Multipart body of the bulk invite call, as the web client sends it.
#[derive(Debug, Clone)]
pub struct BulkInviteForm {
    pub token: String,
    pub invites: Vec<InviteEntry>,
    pub team_id: String,
    pub channels: String,
}

impl BulkInviteForm {
    pub fn for_guest(invite: &GuestInvite<'_>) -> Self {
        Self {
            token: invite.credentials.token.clone(),
            invites: vec![InviteEntry::guest(invite.email)],
            team_id: invite.credentials.team_id.clone(),
            channels: invite.channel_id.to_string(),
        }
    }

    /// Form fields in wire order. Booleans are the literal strings
    /// `"true"`/`"false"`, not JSON values.
    pub fn fields(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        Ok(vec![
            ("token", self.token.clone()),
            ("invites", serde_json::to_string(&self.invites)?),
            ("team_id", self.team_id.clone()),
            ("restricted", "false".to_string()),
            ("ultra_restricted", "true".to_string()),
            ("campaign", "channel_sidebar".to_string()),
            ("channels", self.channels.clone()),
            ("_x_reason", "submit-invite-to-workspace-invites".to_string()),
            ("_x_mode", "online".to_string()),
            ("_x_sonic", "true".to_string()),
            ("_x_app_name", "clientinvites".to_string()),
        ])
    }
}

/// Query string tags. `timestamp_ms` doubles as the request id suffix
/// and the version timestamp.
pub fn query_params(team_id: &str, timestamp_ms: i64) -> Vec<(&'static str, String)> {
    vec![
        ("_x_id", format!("invite-{}", timestamp_ms)),
        ("_x_csid", CLIENT_SESSION_ID.to_string()),
        ("slack_route", team_id.to_string()),
        ("_x_version_ts", timestamp_ms.to_string()),
        ("_x_frontend_build_type", "current".to_string()),
        ("_x_desktop_ia", "4".to_string()),
        ("_x_gantry", "true".to_string()),
        ("fp", "71".to_string()),
        ("_x_num_retries", "0".to_string()),
    ]
}

/// Fields read from a Slack API reply. Only `ok` decides success; other
/// keys may carry any JSON type.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackApiResponse {
    pub ok: bool,
    pub error: Option<String>,
}

impl SlackApiResponse {
    /// Parses a reply body. Returns `None` unless the body is a JSON object.
    pub fn parse(body: &str) -> Option<Self> {
        let value = serde_json::from_str::<Value>(body).ok()?;
        let object = value.as_object()?;

        let ok = object.get("ok").and_then(Value::as_bool) == Some(true);
        let error = object.get("error").map(|e| match e.as_str() {
            Some(s) => s.to_string(),
            None => e.to_string(),
        });

        Some(Self { ok, error })
    }

    /// Maps a raw HTTP status and body to an outcome.
    pub fn interpret(status: StatusCode, body: &str) -> InviteOutcome {
        if status != StatusCode::OK {
            return InviteOutcome::rejected(format!("HTTP {}: {}", status.as_u16(), body));
        }

        match Self::parse(body) {
            Some(parsed) if parsed.ok => InviteOutcome::Accepted,
            Some(parsed) => InviteOutcome::rejected(format!(
                "Slack API error: {} - {}",
                parsed.error.as_deref().unwrap_or("unknown"),
                body
            )),
            None => InviteOutcome::rejected(format!("Non-JSON response: {}", body)),
        }
    }
}
