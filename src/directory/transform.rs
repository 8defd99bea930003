//! Pure transforms applied to fetched user lists.

use indexmap::IndexMap;

use crate::models::{MalformedRecordError, User};

/// Users grouped by email domain, keyed in first-seen order.
pub type DomainGroups = IndexMap<String, Vec<User>>;

/// Keep active users and order them by display name.
///
/// Names compare byte-wise (so `"Zed"` sorts before `"adam"`). The sort
/// is stable: users with equal names keep their input order.
pub fn active_sorted_by_name(users: Vec<User>) -> Vec<User> {
    let mut active: Vec<User> = users.into_iter().filter(User::is_active).collect();
    active.sort_by(|a, b| a.name().cmp(b.name()));
    active
}

/// Partition users by the domain of their email address.
///
/// Each group keeps the relative order of its users from `users`. The
/// first user whose email has no `@` aborts the whole grouping.
pub fn group_by_email_domain(
    users: impl IntoIterator<Item = User>,
) -> Result<DomainGroups, MalformedRecordError> {
    users
        .into_iter()
        .try_fold(DomainGroups::new(), |mut groups, user| {
            let domain = user.email_domain()?.to_string();
            groups.entry(domain).or_default().push(user);
            Ok(groups)
        })
}
