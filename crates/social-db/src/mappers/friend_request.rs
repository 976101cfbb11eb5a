//! Friend request model -> entity mapper

use social_core::entities::{Capabilities, FriendRequest, FriendRequestStatus, UserSummary};
use social_core::error::DomainError;
use social_core::traits::FriendRequestWithSender;
use social_core::value_objects::Id;

use crate::models::{FriendRequestModel, FriendRequestWithSenderModel};

impl TryFrom<FriendRequestModel> for FriendRequest {
    type Error = DomainError;

    fn try_from(model: FriendRequestModel) -> Result<Self, Self::Error> {
        let status = FriendRequestStatus::parse(&model.status).ok_or_else(|| {
            DomainError::Store(format!("unknown friend request status '{}'", model.status))
        })?;

        Ok(FriendRequest {
            id: Id::new(model.id),
            sender_id: Id::new(model.sender_id),
            receiver_id: Id::new(model.receiver_id),
            status,
            capabilities: Capabilities {
                chat_enabled: model.chat_enabled,
                video_enabled: model.video_enabled,
                feed_enabled: model.feed_enabled,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a joined row to a request plus the sender projection
pub fn request_with_sender(
    model: FriendRequestWithSenderModel,
) -> Result<FriendRequestWithSender, DomainError> {
    let sender = UserSummary {
        id: Id::new(model.request.sender_id),
        username: model.sender_username,
        profile_picture: model.sender_profile_picture,
        user_code: None,
    };

    Ok(FriendRequestWithSender {
        request: FriendRequest::try_from(model.request)?,
        sender,
    })
}
