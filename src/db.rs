use crate::models::CredentialRecord;
use std::collections::HashMap;

/// Bcrypt (cost 10) hash of `password123` for the built-in `admin` account.
pub const ADMIN_PASSWORD_HASH: &str =
    "$2b$10$.H5PgAgweAL0/7C4kFk38.2MfY5kanR8ApPSRvs7I5QtbKrSHtbDu";

/// Read-only lookup of accounts by username.
pub trait CredentialRegistry: Send + Sync {
    fn lookup(&self, username: &str) -> Option<CredentialRecord>;
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryRegistry {
    users: HashMap<String, CredentialRecord>,
}

impl InMemoryRegistry {
    pub fn new(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Self { users }
    }

    /// The static single-account registry the server starts with.
    pub fn with_default_admin() -> Self {
        Self::new([CredentialRecord::new("admin", ADMIN_PASSWORD_HASH, "admin")])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialRegistry for InMemoryRegistry {
    fn lookup(&self, username: &str) -> Option<CredentialRecord> {
        self.users.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_match() {
        let registry = InMemoryRegistry::with_default_admin();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert!(InMemoryRegistry::default().is_empty());

        let admin = registry.lookup("admin").expect("admin is registered");
        assert_eq!(admin.role, "admin");
        assert!(admin.password_hash.starts_with("$2b$10$"));

        assert!(registry.lookup("Admin").is_none());
        assert!(registry.lookup("nosuch").is_none());
    }

    #[test]
    fn later_record_replaces_duplicate_username() {
        let registry = InMemoryRegistry::new([
            CredentialRecord::new("alice", "hash-1", "user"),
            CredentialRecord::new("alice", "hash-2", "admin"),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("alice").map(|r| r.role), Some("admin".into()));
    }
}
