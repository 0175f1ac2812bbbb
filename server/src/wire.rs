//! JSON representation of users, version 1.
//!
//! Kept apart from the domain types so the wire format can evolve
//! without touching the registry.

use roster_types::{NewUser, User};
use serde::{Deserialize, Serialize};

/// A stored user as sent to clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserBody {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Request body for creating a user.
///
/// Any `id` sent by the client is ignored. Absent or `null` fields become
/// empty strings; nothing is validated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateUserBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateUserBody> for NewUser {
    fn from(body: CreateUserBody) -> Self {
        NewUser::new(body.name.unwrap_or_default(), body.email.unwrap_or_default())
    }
}

/// Query string of the name filter route.
#[derive(Deserialize, Debug)]
pub struct NameFilter {
    pub name: String,
}
