//! Friendship - derived from the two directions of the friends association

use std::collections::HashSet;

use crate::entities::UserSummary;
use crate::value_objects::Id;

/// A user's two friends-association sets as loaded from storage.
///
/// `friends` holds rows where the user is the owner, `friend_of` the rows
/// where the user is the member. A confirmed friendship normally appears in
/// both, so the friend list is their union by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendLists {
    pub friends: Vec<UserSummary>,
    pub friend_of: Vec<UserSummary>,
}

impl FriendLists {
    pub fn new(friends: Vec<UserSummary>, friend_of: Vec<UserSummary>) -> Self {
        Self { friends, friend_of }
    }

    /// Deduplicated union, `friends` entries first
    pub fn merged(&self) -> Vec<UserSummary> {
        let mut seen: HashSet<Id> = HashSet::with_capacity(self.friends.len());
        self.friends
            .iter()
            .chain(self.friend_of.iter())
            .filter(|user| seen.insert(user.id))
            .cloned()
            .collect()
    }

    /// Number of distinct friends across both directions
    pub fn count(&self) -> usize {
        self.friends
            .iter()
            .chain(self.friend_of.iter())
            .map(|user| user.id)
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64) -> UserSummary {
        UserSummary {
            id: Id::new(id),
            username: format!("user{id}"),
            profile_picture: None,
            user_code: None,
        }
    }

    #[test]
    fn test_symmetric_rows_count_once() {
        let lists = FriendLists::new(vec![summary(2)], vec![summary(2)]);
        assert_eq!(lists.count(), 1);
        assert_eq!(lists.merged(), vec![summary(2)]);
    }

    #[test]
    fn test_one_sided_rows_are_counted() {
        let lists = FriendLists::new(vec![summary(2), summary(3)], vec![summary(4), summary(3)]);
        assert_eq!(lists.count(), 3);
        let ids: Vec<i64> = lists.merged().iter().map(|u| u.id.into_inner()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(FriendLists::default().count(), 0);
        assert!(FriendLists::default().merged().is_empty());
    }
}
