//! Friend request entity - the handshake that precedes a friendship

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Id;

/// Friend request status. Accepted is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
}

impl FriendRequestStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            _ => None,
        }
    }
}

impl fmt::Display for FriendRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-friendship feature switches chosen by the receiver on confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub chat_enabled: Option<bool>,
    pub video_enabled: Option<bool>,
    pub feed_enabled: Option<bool>,
}

/// Directional friend request from sender to receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: Id,
    pub sender_id: Id,
    pub receiver_id: Id,
    pub status: FriendRequestStatus,
    #[serde(flatten)]
    pub capabilities: Capabilities,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FriendRequest {
    /// Create a new pending request
    pub fn new(id: Id, sender_id: Id, receiver_id: Id) -> Self {
        let now = Utc::now();
        Self {
            id,
            sender_id,
            receiver_id,
            status: FriendRequestStatus::Pending,
            capabilities: Capabilities::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == FriendRequestStatus::Pending
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == FriendRequestStatus::Accepted
    }

    /// Whether the request connects the two users, in either direction
    pub fn connects(&self, a: Id, b: Id) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }

    /// Mark accepted and record the receiver's capability choices
    pub fn accept(&mut self, capabilities: Capabilities) {
        self.status = FriendRequestStatus::Accepted;
        self.capabilities = capabilities;
        self.updated_at = Utc::now();
    }
}
