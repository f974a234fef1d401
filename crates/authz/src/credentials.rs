use std::collections::HashMap;

/// A login identity. Passwords are plaintext seed data.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Read-only source of login identities.
///
/// Password comparison lives behind [`CredentialStore::authenticate`] so a
/// hashed scheme can replace it without touching callers.
pub trait CredentialStore: Send + Sync {
    /// Look up a user by username.
    fn lookup(&self, username: &str) -> Option<User>;

    /// Return the user when `password` matches the stored credential.
    fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        self.lookup(username).filter(|user| user.password == password)
    }
}

/// In-memory credential table keyed by username.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    users: HashMap<String, User>,
}

impl StaticCredentialStore {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.username.clone(), user))
                .collect(),
        }
    }

    /// The three demo accounts the service ships with.
    pub fn seeded() -> Self {
        Self::new([
            seed("1", "admin", "password123"),
            seed("2", "user1", "securepass"),
            seed("3", "john_doe", "mypassword"),
        ])
    }
}

fn seed(id: &str, username: &str, password: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    }
}

impl CredentialStore for StaticCredentialStore {
    fn lookup(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}
