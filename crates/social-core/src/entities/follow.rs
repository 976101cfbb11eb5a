//! Follow edge entity - a directional follower -> following relationship

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Id;

/// Follow edge status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowStatus {
    Pending,
    Accepted,
    Rejected,
}

impl FollowStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for FollowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directional follow edge. At most one exists per ordered
/// (follower, following) pair and the two ends are never equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub id: Id,
    pub follower_id: Id,
    pub following_id: Id,
    pub status: FollowStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FollowEdge {
    /// Create a new edge in the given status
    pub fn new(id: Id, follower_id: Id, following_id: Id, status: FollowStatus) -> Self {
        let now = Utc::now();
        Self {
            id,
            follower_id,
            following_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == FollowStatus::Pending
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == FollowStatus::Accepted
    }

    /// Only the followed user may accept or reject
    #[inline]
    pub fn is_target(&self, user_id: Id) -> bool {
        self.following_id == user_id
    }

    /// Move to a new status
    pub fn set_status(&mut self, status: FollowStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [FollowStatus::Pending, FollowStatus::Accepted, FollowStatus::Rejected] {
            assert_eq!(FollowStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(FollowStatus::parse("blocked"), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&FollowStatus::Rejected).unwrap();
        assert_eq!(json, "\"rejected\"");
    }

    #[test]
    fn test_is_target() {
        let edge = FollowEdge::new(Id::new(1), Id::new(10), Id::new(20), FollowStatus::Pending);
        assert!(edge.is_target(Id::new(20)));
        assert!(!edge.is_target(Id::new(10)));
    }

    #[test]
    fn test_set_status() {
        let mut edge = FollowEdge::new(Id::new(1), Id::new(10), Id::new(20), FollowStatus::Pending);
        assert!(edge.is_pending());
        edge.set_status(FollowStatus::Accepted);
        assert!(edge.is_accepted());
        assert!(edge.updated_at >= edge.created_at);
    }
}
