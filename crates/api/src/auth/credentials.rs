//! The fixed, in-memory credential list.
//!
//! Credentials are defined once at process start and are immutable for the
//! process lifetime; there is no persistence or registration. The store is
//! injected through [`AppState`](crate::state::AppState) rather than held as
//! a global so the login path can be tested in isolation.

use minaret_core::types::DbId;

use crate::auth::password::hash_password;

/// Administrator role name.
pub const ROLE_ADMIN: &str = "admin";

/// Regular user role name.
pub const ROLE_USER: &str = "user";

/// A single static credential entry.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: DbId,
    pub email: String,
    /// Argon2id PHC hash. Never serialized into responses.
    pub password_hash: String,
    pub role: String,
    pub name: String,
}

/// Immutable, process-wide credential list.
#[derive(Debug)]
pub struct CredentialStore {
    entries: Vec<Credential>,
}

impl CredentialStore {
    /// Build a store from an explicit credential list.
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// Build the default credential list, hashing the seed passwords with
    /// Argon2id at construction.
    ///
    /// # Panics
    ///
    /// Panics if password hashing fails; the store is built once at startup
    /// and misconfiguration should fail fast.
    pub fn bootstrap() -> Self {
        let seeds: &[(DbId, &str, &str, &str, &str)] = &[
            (
                1,
                "admin@islamicprayertools.com",
                "Admin123!",
                ROLE_ADMIN,
                "Administrator",
            ),
            (
                2,
                "user@islamicprayertools.com",
                "User123!",
                ROLE_USER,
                "Standard User",
            ),
        ];

        let entries = seeds
            .iter()
            .map(|(id, email, password, role, name)| Credential {
                id: *id,
                email: email.to_string(),
                password_hash: hash_password(password)
                    .unwrap_or_else(|e| panic!("Failed to hash seed password: {e}")),
                role: role.to_string(),
                name: name.to_string(),
            })
            .collect();

        Self { entries }
    }

    /// Look up a credential by exact email equality.
    pub fn find_by_email(&self, email: &str) -> Option<&Credential> {
        self.entries.iter().find(|c| c.email == email)
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn test_bootstrap_seeds_admin_and_user() {
        let store = CredentialStore::bootstrap();
        assert_eq!(store.len(), 2);

        let admin = store
            .find_by_email("admin@islamicprayertools.com")
            .expect("admin seed should exist");
        assert_eq!(admin.role, ROLE_ADMIN);
        assert!(
            verify_password("Admin123!", &admin.password_hash)
                .expect("verify should succeed"),
            "seed password must verify against the stored hash"
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let store = CredentialStore::bootstrap();
        assert!(store.find_by_email("ADMIN@islamicprayertools.com").is_none());
        assert!(store.find_by_email("admin@islamicprayertools.co").is_none());
    }
}
