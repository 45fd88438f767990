//! Password hashing with Argon2id.
//!
//! The `PasswordHasher` trait is the seam used by the roster engine, login and
//! startup. `Argon2Hasher` is the production implementation; tests construct it
//! with small parameters to stay fast.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::credential::CredentialError;

/// Turns plaintext passwords into storable hashes and checks them later.
pub trait PasswordHasher: Send + Sync {
    /// Hashes `plaintext` into a self-describing string safe to persist.
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Returns whether `plaintext` matches `hash`. Malformed hashes never match.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Argon2id hasher producing PHC strings.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Creates a hasher with the Argon2 crate defaults (19 MiB, 2 iterations, 1 lane).
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Creates a hasher with custom cost parameters.
    ///
    /// # Arguments
    /// - `memory_kib` - Memory cost in KiB
    /// - `iterations` - Number of iterations
    /// - `parallelism` - Degree of parallelism
    ///
    /// # Returns
    /// - `Ok(Argon2Hasher)` - Hasher using the given parameters
    /// - `Err(CredentialError::HashingFailed)` - Parameters rejected by Argon2
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, CredentialError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| CredentialError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}
