//! User model -> entity mapper

use social_core::entities::{User, UserSummary};
use social_core::value_objects::Id;

use crate::models::{UserModel, UserSummaryModel};

/// Convert UserModel to User entity (drops the password hash)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            username: model.username,
            user_code: model.user_code,
            email: model.email,
            profile_picture: model.profile_picture,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<UserSummaryModel> for UserSummary {
    fn from(model: UserSummaryModel) -> Self {
        UserSummary {
            id: Id::new(model.id),
            username: model.username,
            profile_picture: model.profile_picture,
            user_code: model.user_code,
        }
    }
}
