//! In-memory implementation of every repository trait
//!
//! `MemoryStore` keeps the whole graph behind one mutex and enforces the same
//! constraints as the PostgreSQL schema: unique user columns, one edge per
//! ordered pair, one outstanding friend request per ordered pair, no self
//! edges and existing users on both ends. Each trait method holds the lock
//! for its whole body, so `confirm_friendship` is atomic here as well.
//! Used by the service tests and for running without a database.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use social_core::entities::{
    Capabilities, FollowEdge, FollowStatus, FriendLists, FriendRequest, User, UserSummary,
};
use social_core::error::DomainError;
use social_core::traits::{
    FollowRepository, FollowWithUser, FriendRequestRepository, FriendRequestWithSender,
    FriendshipRepository, NewUser, RepoResult, UserRepository,
};
use social_core::value_objects::Id;

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<Id, User>,
    follows: BTreeMap<Id, FollowEdge>,
    requests: BTreeMap<Id, FriendRequest>,
    /// (owner, member) rows of the friends association
    friends: BTreeSet<(Id, Id)>,
    last_user_id: i64,
    last_follow_id: i64,
    last_request_id: i64,
}

impl State {
    fn user(&self, id: Id) -> RepoResult<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))
    }

    fn edge_id(&self, follower_id: Id, following_id: Id) -> Option<Id> {
        self.follows
            .values()
            .find(|e| e.follower_id == follower_id && e.following_id == following_id)
            .map(|e| e.id)
    }

    fn insert_edge(
        &mut self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge> {
        if follower_id == following_id {
            return Err(DomainError::SelfFollow);
        }
        self.user(follower_id)?;
        self.user(following_id)?;

        self.last_follow_id += 1;
        let edge = FollowEdge::new(Id::new(self.last_follow_id), follower_id, following_id, status);
        self.follows.insert(edge.id, edge.clone());
        Ok(edge)
    }

    fn upsert_edge(
        &mut self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge> {
        match self.edge_id(follower_id, following_id) {
            Some(id) => {
                let edge = self
                    .follows
                    .get_mut(&id)
                    .ok_or(DomainError::FollowNotFound(id))?;
                edge.set_status(status);
                Ok(edge.clone())
            }
            None => self.insert_edge(follower_id, following_id, status),
        }
    }

    fn joined(&self, edge: &FollowEdge, other: Id) -> RepoResult<FollowWithUser> {
        Ok(FollowWithUser {
            edge: edge.clone(),
            user: self.user(other)?.summary(),
        })
    }

    fn summaries<I>(&self, ids: I) -> RepoResult<Vec<UserSummary>>
    where
        I: Iterator<Item = Id>,
    {
        ids.map(|id| self.user(id).map(User::summary)).collect()
    }
}

/// Thread-safe in-memory social graph
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).cloned())
    }

    async fn find_by_code(&self, user_code: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .values()
            .find(|u| u.user_code == user_code)
            .cloned())
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut state = self.state.lock();
        let taken = state.users.values().any(|u| {
            u.username == user.username || u.user_code == user.user_code || u.email == user.email
        });
        if taken {
            return Err(DomainError::ValidationError(
                "Username, user code or email already taken".to_string(),
            ));
        }

        state.last_user_id += 1;
        let mut created = User::new(
            Id::new(state.last_user_id),
            user.username.clone(),
            user.user_code.clone(),
            user.email.clone(),
        );
        created.profile_picture = user.profile_picture.clone();
        state.users.insert(created.id, created.clone());

        debug!(user_id = %created.id, "User stored");
        Ok(created)
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<FollowEdge>> {
        Ok(self.state.lock().follows.get(&id).cloned())
    }

    async fn find_by_pair(
        &self,
        follower_id: Id,
        following_id: Id,
    ) -> RepoResult<Option<FollowEdge>> {
        let state = self.state.lock();
        Ok(state
            .edge_id(follower_id, following_id)
            .and_then(|id| state.follows.get(&id).cloned()))
    }

    async fn create(
        &self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge> {
        let mut state = self.state.lock();
        if state.edge_id(follower_id, following_id).is_some() {
            return Err(DomainError::RequestAlreadyPending);
        }
        state.insert_edge(follower_id, following_id, status)
    }

    async fn transition_status(
        &self,
        id: Id,
        from: FollowStatus,
        to: FollowStatus,
    ) -> RepoResult<Option<FollowEdge>> {
        let mut state = self.state.lock();
        Ok(state
            .follows
            .get_mut(&id)
            .filter(|edge| edge.status == from)
            .map(|edge| {
                edge.set_status(to);
                edge.clone()
            }))
    }

    async fn upsert(
        &self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge> {
        self.state.lock().upsert_edge(follower_id, following_id, status)
    }

    async fn delete_by_pair(&self, follower_id: Id, following_id: Id) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(match state.edge_id(follower_id, following_id) {
            Some(id) => state.follows.remove(&id).is_some(),
            None => false,
        })
    }

    async fn find_incoming(
        &self,
        user_id: Id,
        status: FollowStatus,
    ) -> RepoResult<Vec<FollowWithUser>> {
        let state = self.state.lock();
        state
            .follows
            .values()
            .filter(|e| e.following_id == user_id && e.status == status)
            .map(|e| state.joined(e, e.follower_id))
            .collect()
    }

    async fn find_outgoing(
        &self,
        user_id: Id,
        status: FollowStatus,
    ) -> RepoResult<Vec<FollowWithUser>> {
        let state = self.state.lock();
        state
            .follows
            .values()
            .filter(|e| e.follower_id == user_id && e.status == status)
            .map(|e| state.joined(e, e.following_id))
            .collect()
    }
}

#[async_trait]
impl FriendRequestRepository for MemoryStore {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<FriendRequest>> {
        Ok(self.state.lock().requests.get(&id).cloned())
    }

    async fn find_outstanding(
        &self,
        sender_id: Id,
        receiver_id: Id,
    ) -> RepoResult<Option<FriendRequest>> {
        let state = self.state.lock();
        Ok(state
            .requests
            .values()
            .find(|r| r.sender_id == sender_id && r.receiver_id == receiver_id)
            .cloned())
    }

    async fn accepted_between(&self, user_a: Id, user_b: Id) -> RepoResult<bool> {
        let state = self.state.lock();
        Ok(state
            .requests
            .values()
            .any(|r| r.is_accepted() && r.connects(user_a, user_b)))
    }

    async fn create(&self, sender_id: Id, receiver_id: Id) -> RepoResult<FriendRequest> {
        let mut state = self.state.lock();
        if sender_id == receiver_id {
            return Err(DomainError::ValidationError(
                "Cannot send a friend request to yourself".to_string(),
            ));
        }
        state.user(sender_id)?;
        state.user(receiver_id)?;

        let outstanding = state
            .requests
            .values()
            .any(|r| r.sender_id == sender_id && r.receiver_id == receiver_id);
        if outstanding {
            return Err(DomainError::DuplicateRequest);
        }

        state.last_request_id += 1;
        let request = FriendRequest::new(Id::new(state.last_request_id), sender_id, receiver_id);
        state.requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_pending_for_receiver(
        &self,
        receiver_id: Id,
    ) -> RepoResult<Vec<FriendRequestWithSender>> {
        let state = self.state.lock();
        state
            .requests
            .values()
            .filter(|r| r.receiver_id == receiver_id && r.is_pending())
            .map(|r| {
                Ok(FriendRequestWithSender {
                    request: r.clone(),
                    sender: state.user(r.sender_id)?.sender_summary(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl FriendshipRepository for MemoryStore {
    async fn find_friend_lists(&self, user_id: Id) -> RepoResult<FriendLists> {
        let state = self.state.lock();
        let friends = state.summaries(
            state
                .friends
                .iter()
                .filter(|(owner, _)| *owner == user_id)
                .map(|(_, member)| *member),
        )?;
        let friend_of = state.summaries(
            state
                .friends
                .iter()
                .filter(|(_, member)| *member == user_id)
                .map(|(owner, _)| *owner),
        )?;
        Ok(FriendLists::new(friends, friend_of))
    }

    #[instrument(skip(self))]
    async fn confirm_friendship(
        &self,
        request_id: Id,
        receiver_id: Id,
        capabilities: Capabilities,
    ) -> RepoResult<FriendRequest> {
        let mut state = self.state.lock();

        let current = state
            .requests
            .get(&request_id)
            .ok_or(DomainError::RequestNotFound(request_id))?;
        if current.receiver_id != receiver_id {
            return Err(DomainError::Unauthorized);
        }
        if !current.is_pending() {
            return Err(DomainError::RequestNotPending);
        }
        let sender_id = current.sender_id;

        // Edges first: they are the only step that can fail, and nothing is written yet
        state.upsert_edge(sender_id, receiver_id, FollowStatus::Accepted)?;
        state.upsert_edge(receiver_id, sender_id, FollowStatus::Accepted)?;
        state.friends.insert((sender_id, receiver_id));
        state.friends.insert((receiver_id, sender_id));

        let request = state
            .requests
            .get_mut(&request_id)
            .ok_or(DomainError::RequestNotFound(request_id))?;
        request.accept(capabilities);

        debug!(%request_id, %sender_id, %receiver_id, "Friendship committed");
        Ok(request.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            user_code: format!("{name}-code"),
            email: format!("{name}@example.com"),
            password_hash: "hash".to_string(),
            profile_picture: None,
        }
    }

    async fn seeded() -> (MemoryStore, User, User) {
        let store = MemoryStore::new();
        let alice = UserRepository::create(&store, &new_user("alice")).await.unwrap();
        let bob = UserRepository::create(&store, &new_user("bob")).await.unwrap();
        (store, alice, bob)
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_store_is_send_sync() {
        assert_send_sync::<MemoryStore>();
    }

    #[tokio::test]
    async fn test_user_uniqueness() {
        let (store, _, _) = seeded().await;
        let err = UserRepository::create(&store, &new_user("alice")).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));

        let found = store.find_by_code("bob-code").await.unwrap().unwrap();
        assert_eq!(found.username, "bob");
    }

    #[tokio::test]
    async fn test_one_edge_per_pair() {
        let (store, alice, bob) = seeded().await;
        FollowRepository::create(&store, alice.id, bob.id, FollowStatus::Pending)
            .await
            .unwrap();
        let err = FollowRepository::create(&store, alice.id, bob.id, FollowStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RequestAlreadyPending));
    }

    #[tokio::test]
    async fn test_edge_requires_users() {
        let (store, alice, _) = seeded().await;
        let err = FollowRepository::create(&store, alice.id, Id::new(99), FollowStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_upsert_keeps_edge_id() {
        let (store, alice, bob) = seeded().await;
        let first = store.upsert(alice.id, bob.id, FollowStatus::Rejected).await.unwrap();
        let second = store.upsert(alice.id, bob.id, FollowStatus::Pending).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.status, FollowStatus::Pending);
    }

    #[tokio::test]
    async fn test_duplicate_friend_request() {
        let (store, alice, bob) = seeded().await;
        FriendRequestRepository::create(&store, alice.id, bob.id).await.unwrap();
        let err = FriendRequestRepository::create(&store, alice.id, bob.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRequest));

        // The opposite direction is a separate pair
        FriendRequestRepository::create(&store, bob.id, alice.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_confirm_is_all_or_nothing() {
        let (store, alice, bob) = seeded().await;
        let request = FriendRequestRepository::create(&store, alice.id, bob.id).await.unwrap();

        let err = store
            .confirm_friendship(request.id, alice.id, Capabilities::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));
        assert!(store.find_by_pair(alice.id, bob.id).await.unwrap().is_none());
        assert_eq!(store.find_friend_lists(bob.id).await.unwrap().count(), 0);

        let caps = Capabilities {
            chat_enabled: Some(true),
            video_enabled: None,
            feed_enabled: Some(false),
        };
        let accepted = store.confirm_friendship(request.id, bob.id, caps).await.unwrap();
        assert!(accepted.is_accepted());
        assert_eq!(accepted.capabilities, caps);

        let lists = store.find_friend_lists(bob.id).await.unwrap();
        assert_eq!(lists.friends.len(), 1);
        assert_eq!(lists.friend_of.len(), 1);
        assert_eq!(lists.count(), 1);
        assert!(store.accepted_between(bob.id, alice.id).await.unwrap());

        let err = store
            .confirm_friendship(request.id, bob.id, caps)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RequestNotPending));
    }

    #[tokio::test]
    async fn test_pending_requests_carry_sender_without_code() {
        let (store, alice, bob) = seeded().await;
        FriendRequestRepository::create(&store, alice.id, bob.id).await.unwrap();

        let pending = store.find_pending_for_receiver(bob.id).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].sender.username, "alice");
        assert!(pending[0].sender.user_code.is_none());
    }
}
