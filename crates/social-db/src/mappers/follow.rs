//! Follow edge model -> entity mapper

use social_core::entities::{FollowEdge, FollowStatus, UserSummary};
use social_core::error::DomainError;
use social_core::traits::FollowWithUser;
use social_core::value_objects::Id;

use crate::models::{FollowModel, FollowWithUserModel};

impl TryFrom<FollowModel> for FollowEdge {
    type Error = DomainError;

    fn try_from(model: FollowModel) -> Result<Self, Self::Error> {
        let status = FollowStatus::parse(&model.status).ok_or_else(|| {
            DomainError::Store(format!("unknown follow status '{}'", model.status))
        })?;

        Ok(FollowEdge {
            id: Id::new(model.id),
            follower_id: Id::new(model.follower_id),
            following_id: Id::new(model.following_id),
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a joined row to an edge plus the counterpart projection
pub fn follow_with_user(model: FollowWithUserModel) -> Result<FollowWithUser, DomainError> {
    Ok(FollowWithUser {
        edge: FollowEdge::try_from(model.follow)?,
        user: UserSummary {
            id: Id::new(model.user_id),
            username: model.username,
            profile_picture: model.profile_picture,
            user_code: Some(model.user_code),
        },
    })
}
