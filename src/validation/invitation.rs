use validator::ValidationErrors;

use super::ValidationMessage;
use crate::models::api::InviteRequest;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: email, channel_id";

impl ValidationMessage for InviteRequest {
    fn validation_message(_errors: &ValidationErrors) -> String {
        MISSING_FIELDS_MESSAGE.to_string()
    }
}
