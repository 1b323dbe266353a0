//! User record and the display form of a user reference.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ann")]
    pub first_name: String,
    #[schema(example = "Petrova")]
    pub last_name: String,
    #[schema(example = 34)]
    pub age: i32,
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[schema(example = "customer")]
    pub role: String,
    #[schema(example = "+7 900 123 45 67")]
    pub phone: String,
}

/// A reference to a user as shown to clients.
///
/// Resolves to the user's first name when the referenced user exists and
/// falls back to the stored id when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum UserRef {
    Name(String),
    Id(i32),
}

impl UserRef {
    /// Build the display value for reference `id` given the lookup result.
    pub fn resolve(id: i32, user: Option<&User>) -> Self {
        match user {
            Some(user) => UserRef::Name(user.first_name.clone()),
            None => UserRef::Id(id),
        }
    }
}
