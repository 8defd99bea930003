//! The user record returned by the directory API.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user record whose email address cannot yield a domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed record: user {id} has email '{email}' without '@'")]
pub struct MalformedRecordError {
    pub id: u32,
    pub email: String,
}

/// A user as served by `{base_url}/users` and `{base_url}/users/{id}`.
///
/// Immutable once constructed. Equality and hashing consider only
/// [`User::id`]: two records with the same id are the same user even if
/// their other fields disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: u32,
    name: String,
    email: String,
    #[serde(alias = "active")]
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_active,
            created_at,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name. Sorting compares this byte-wise, so case matters.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The part of the email after the first `@`.
    ///
    /// Fails instead of guessing when the address has no `@` at all.
    pub fn email_domain(&self) -> Result<&str, MalformedRecordError> {
        self.email
            .split_once('@')
            .map(|(_, domain)| domain)
            .ok_or_else(|| MalformedRecordError {
                id: self.id,
                email: self.email.clone(),
            })
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
