use crate::{RegistryError, RegistryResult};
use roster_types::{NewUser, User, UserId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// State guarded by the registry lock.
#[derive(Debug)]
struct Inner {
    /// Keyed by id. Ids only ever grow, so key order is creation order.
    users: BTreeMap<UserId, User>,
    /// Always greater than every id issued so far.
    next_id: UserId,
}

/// The in-memory owner of all user records.
#[derive(Debug)]
pub struct UserRegistry {
    inner: RwLock<Inner>,
}

impl UserRegistry {
    /// Creates an empty registry whose first issued id is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: UserId::FIRST,
            }),
        }
    }

    /// Registers a new user and returns the stored record.
    ///
    /// Never fails. No validation is applied to the name or email.
    pub async fn create(&self, request: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id.next();

        let user = User::from_request(id, request);
        inner.users.insert(id, user.clone());
        info!(user_id = %id, total = inner.users.len(), "User created");
        user
    }

    /// Returns every user in creation order.
    pub async fn list_all(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        inner.users.values().cloned().collect()
    }

    /// Looks up a single user.
    pub async fn get_by_id(&self, id: UserId) -> RegistryResult<User> {
        let inner = self.inner.read().await;
        match inner.users.get(&id) {
            Some(user) => Ok(user.clone()),
            None => {
                debug!(user_id = %id, "User lookup missed");
                Err(RegistryError::NotFound(id))
            }
        }
    }

    /// Returns, in creation order, every user whose name contains
    /// `needle` ignoring case.
    pub async fn filter_by_name(&self, needle: &str) -> Vec<User> {
        let inner = self.inner.read().await;
        let matches: Vec<User> = inner
            .users
            .values()
            .filter(|u| u.name_contains(needle))
            .cloned()
            .collect();
        debug!(needle, matched = matches.len(), "Filtered users by name");
        matches
    }

    /// Removes a user. State is untouched when the id is unknown.
    pub async fn delete_by_id(&self, id: UserId) -> RegistryResult<()> {
        let mut inner = self.inner.write().await;
        match inner.users.remove(&id) {
            Some(_) => {
                info!(user_id = %id, total = inner.users.len(), "User deleted");
                Ok(())
            }
            None => {
                debug!(user_id = %id, "Delete of unknown user");
                Err(RegistryError::NotFound(id))
            }
        }
    }

    /// Number of users currently registered.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether no users are currently registered.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
