use crate::{
    config::Config,
    error::AppError,
    models::api::{InviteRequest, InviteResponse},
    slack::{GuestInvite, InviteClient, InviteOutcome},
};

pub struct InvitationsService;

impl InvitationsService {
    /// Invites `req.email` as a single-channel guest of `req.channel_id`.
    ///
    /// Credentials are checked before anything goes over the wire.
    pub async fn invite_to_channel(
        config: &Config,
        client: &dyn InviteClient,
        req: &InviteRequest,
    ) -> Result<InviteResponse, AppError> {
        let credentials = config.slack_credentials()?;

        let outcome = client
            .invite_guest(GuestInvite {
                email: &req.email,
                channel_id: &req.channel_id,
                credentials: &credentials,
            })
            .await;

        match outcome {
            InviteOutcome::Accepted => {
                tracing::info!(channel_id = %req.channel_id, "Guest invite accepted");
                Ok(InviteResponse::invited(&req.email, &req.channel_id))
            }
            InviteOutcome::Rejected { details } => Err(AppError::upstream(details)),
        }
    }
}
