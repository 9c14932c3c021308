use super::error::{StoreError, StoreResult};
use super::user::User;
use tracing::{debug, info};

/// In-memory, insertion-ordered collection of user records.
///
/// Names act as the lookup key but are not unique: lookups return the first
/// match while `remove` drops every record carrying the name.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Validate and append a record. The store is left untouched on error.
    pub fn add(&mut self, user: User) -> StoreResult<()> {
        if let Err(err) = user.validate() {
            debug!(name = user.name(), age = user.age(), %err, "rejected user");
            return Err(err);
        }

        info!(name = user.name(), age = user.age(), "added user");
        self.users.push(user);
        Ok(())
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// First record whose name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name() == name)
    }

    /// Remove every record named `name`, returning how many were dropped.
    pub fn remove(&mut self, name: &str) -> StoreResult<usize> {
        if self.find(name).is_none() {
            debug!(name, "remove target not found");
            return Err(StoreError::NotFound(name.to_string()));
        }

        let before = self.users.len();
        self.users.retain(|user| user.name() != name);
        let removed = before - self.users.len();

        info!(name, removed, "removed users");
        Ok(removed)
    }

    /// Overwrite the first record named `name` with `replacement`.
    ///
    /// The replacement is stored as given; only `add` validates.
    pub fn edit(&mut self, name: &str, replacement: User) -> StoreResult<()> {
        let Some(user) = self.users.iter_mut().find(|user| user.name() == name) else {
            debug!(name, "edit target not found");
            return Err(StoreError::NotFound(name.to_string()));
        };

        info!(
            from = name,
            to = replacement.name(),
            age = replacement.age(),
            "edited user"
        );
        *user = replacement;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
