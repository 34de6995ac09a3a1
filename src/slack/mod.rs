//! Slack's private `users.admin.inviteBulk` endpoint.
//!
//! Everything vendor specific (field names, query tags, browser headers)
//! lives under this module. Callers only see [`InviteClient`].

pub mod client;
pub mod types;

pub use client::SlackInviteClient;
pub use types::{BulkInviteForm, SlackApiResponse};

use crate::config::SlackCredentials;
use async_trait::async_trait;

/// One guest invite ready to be sent.
#[derive(Debug, Clone)]
pub struct GuestInvite<'a> {
    pub email: &'a str,
    pub channel_id: &'a str,
    pub credentials: &'a SlackCredentials,
}

/// Result of a single bulk invite call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteOutcome {
    Accepted,
    Rejected { details: String },
}

impl InviteOutcome {
    pub fn rejected(details: impl Into<String>) -> Self {
        Self::Rejected {
            details: details.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[async_trait]
pub trait InviteClient: Send + Sync {
    /// Sends the invite. Never fails: transport and vendor errors are
    /// folded into [`InviteOutcome::Rejected`].
    async fn invite_guest(&self, invite: GuestInvite<'_>) -> InviteOutcome;
}
