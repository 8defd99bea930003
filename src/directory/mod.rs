//! User directory: fetch, filter, sort and group user records.
//!
//! Every operation issues exactly one request through the injected
//! [`Transport`]. The `fetch_*` operations are lenient: a missing record,
//! a non-200 status and a failed exchange all come back as absence (or an
//! empty list). The `lookup_*` operations keep the three apart.

pub mod transform;

use std::sync::Arc;

use crate::models::{MalformedRecordError, User};
use crate::transport::{self, Lookup, Transport};

pub use transform::{DomainGroups, active_sorted_by_name, group_by_email_domain};

/// Client for the `/users` resource of a directory API.
pub struct UserDirectory {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl UserDirectory {
    /// Create a directory rooted at `base_url`. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single user record.
    pub fn user_url(&self, id: u32) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    /// URL of the user collection.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Look up one user, keeping not-found and transport failure apart.
    pub async fn lookup_by_id(&self, id: u32) -> Lookup<User> {
        let url = self.user_url(id);
        Lookup::from_exchange(transport::fetch_as::<User>(self.transport.as_ref(), &url).await)
    }

    /// Fetch one user, or `None`.
    ///
    /// `None` covers a non-200 status, a 200 without a body, and a failed
    /// exchange; the last is logged as a warning before being dropped.
    pub async fn fetch_by_id(&self, id: u32) -> Option<User> {
        let lookup = self.lookup_by_id(id).await;
        if let Lookup::TransportFailed(ref e) = lookup {
            tracing::warn!(user_id = id, "failed to fetch user: {e}");
        }
        lookup.into_option()
    }

    /// Fetch the whole collection, unfiltered.
    pub async fn lookup_users(&self) -> Lookup<Vec<User>> {
        let url = self.users_url();
        Lookup::from_exchange(
            transport::fetch_as::<Vec<User>>(self.transport.as_ref(), &url).await,
        )
    }

    /// Fetch active users sorted by name, keeping failures visible.
    pub async fn lookup_active_users(&self) -> Lookup<Vec<User>> {
        self.lookup_users().await.map(active_sorted_by_name)
    }

    /// Fetch active users sorted by name.
    ///
    /// Returns an empty list when the collection is unavailable for any
    /// reason, which callers cannot tell apart from a directory with no
    /// active users.
    pub async fn fetch_active_users(&self) -> Vec<User> {
        let lookup = self.lookup_active_users().await;
        if let Lookup::TransportFailed(ref e) = lookup {
            tracing::warn!("failed to fetch users: {e}");
        }
        lookup.into_option().unwrap_or_default()
    }

    /// Group active users by email domain.
    ///
    /// Within each group users keep the name order produced by
    /// [`fetch_active_users`](Self::fetch_active_users). Fails on the
    /// first user whose email has no `@`.
    pub async fn group_by_email_domain(&self) -> Result<DomainGroups, MalformedRecordError> {
        group_by_email_domain(self.fetch_active_users().await)
    }
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
