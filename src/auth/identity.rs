use std::collections::HashMap;
use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("USER"),
            Self::Admin => f.write_str("ADMIN"),
        }
    }
}

/// A verified caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

/// Username and password as presented by the client.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Source of identities. The gate only ever asks this one question.
pub trait IdentityProvider: Send + Sync {
    /// Returns the identity if the credentials are valid.
    fn verify(&self, credentials: &Credentials) -> Option<Identity>;
}

/// An account definition, before hashing.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

/// The two built-in accounts.
pub fn default_accounts() -> Vec<Account> {
    vec![
        Account::new("user", "123", Role::User),
        Account::new("admin", "456", Role::Admin),
    ]
}

#[derive(Debug)]
struct StoredAccount {
    /// PHC string: algorithm, parameters, salt, and hash.
    password_hash: String,
    role: Role,
}

/// Fixed, in-memory account set. Passwords are hashed with Argon2id at construction.
#[derive(Debug)]
pub struct StaticIdentityProvider {
    accounts: HashMap<String, StoredAccount>,
}

impl StaticIdentityProvider {
    /// Builds the provider with Argon2's default parameters.
    pub fn new(accounts: Vec<Account>) -> Result<Self, argon2::password_hash::Error> {
        Self::with_hasher(accounts, &Argon2::default())
    }

    /// Builds the provider hashing with `hasher`. Verification reads the
    /// parameters back from each stored hash.
    pub fn with_hasher(
        accounts: Vec<Account>,
        hasher: &Argon2<'_>,
    ) -> Result<Self, argon2::password_hash::Error> {
        let mut stored = HashMap::with_capacity(accounts.len());
        for account in accounts {
            let salt = SaltString::generate(&mut OsRng);
            let password_hash = hasher
                .hash_password(account.password.as_bytes(), &salt)?
                .to_string();
            stored.insert(
                account.username,
                StoredAccount {
                    password_hash,
                    role: account.role,
                },
            );
        }
        Ok(Self { accounts: stored })
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn verify(&self, credentials: &Credentials) -> Option<Identity> {
        let Some(account) = self.accounts.get(&credentials.username) else {
            debug!(username = %credentials.username, "Unknown user");
            return None;
        };

        let parsed = PasswordHash::new(&account.password_hash).ok()?;
        Argon2::default()
            .verify_password(credentials.password.expose_secret().as_bytes(), &parsed)
            .ok()?;

        Some(Identity {
            username: credentials.username.clone(),
            role: account.role,
        })
    }
}
