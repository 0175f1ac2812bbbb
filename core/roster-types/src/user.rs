use crate::UserId;

/// A user record held by the registry.
///
/// Records are immutable once created; the registry only ever inserts
/// and removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Builds a record from a freshly issued id and the client's request.
    pub fn from_request(id: UserId, request: NewUser) -> Self {
        Self {
            id,
            name: request.name,
            email: request.email,
        }
    }

    /// Case-insensitive substring match against the user's name.
    ///
    /// An empty needle matches every name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// What a client supplies to create a user. Carries no id: ids are always
/// issued by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
