use crate::{
    domain::{
        error::DomainError,
        models::{cost::Cost, credential::HashedPassword},
        services::password_service::PasswordHasher,
    },
    infrastructure::{bcrypt_password_hasher::BcryptPasswordHasher, config::HasherConfig},
};

/// Async front for a [`PasswordHasher`].
///
/// Every call is moved onto tokio's blocking pool so the expensive hash never
/// runs on a scheduler thread. Calls are independent; nothing is shared between them.
#[derive(Clone)]
pub struct PasswordUsecase<P: PasswordHasher> {
    password_hasher: P,
    config: HasherConfig,
}

impl<P: PasswordHasher> PasswordUsecase<P> {
    pub fn new(password_hasher: P, config: HasherConfig) -> Self {
        Self {
            password_hasher,
            config,
        }
    }

    /// Hash `password`, using the configured cost when `cost` is `None`.
    ///
    /// An out-of-range cost is rejected before anything is dispatched.
    pub async fn hash_password(
        &self,
        password: &str,
        cost: Option<u32>,
    ) -> Result<HashedPassword, DomainError> {
        let cost = match cost {
            Some(cost) => Cost::new(cost)?,
            None => self.config.cost,
        };

        let hasher = self.password_hasher.clone();
        let password = password.to_owned();

        tracing::debug!(%cost, "dispatching password hash");
        tokio::task::spawn_blocking(move || hasher.hash(&password, cost))
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "password hash worker failed");
                DomainError::WorkerFailed(e.to_string())
            })?
    }

    /// Check `password` against a stored hash. Never fails: any problem reads as a mismatch.
    pub async fn verify_password(&self, password: &str, hashed_password: &HashedPassword) -> bool {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();
        let hashed_password = hashed_password.clone();

        tracing::debug!("dispatching password verification");
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hashed_password))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "password verification worker failed");
                false
            })
    }
}

impl Default for PasswordUsecase<BcryptPasswordHasher> {
    fn default() -> Self {
        Self::new(BcryptPasswordHasher::new(), HasherConfig::default())
    }
}

/// Hash `password` with bcrypt at the given cost and return the encoded hash.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    PasswordUsecase::<BcryptPasswordHasher>::default()
        .hash_password(password, Some(cost))
        .await
        .map(HashedPassword::into_inner)
}

/// Verify `password` against an encoded bcrypt hash. Malformed hashes yield `false`.
pub async fn verify_password(password: &str, hash: &str) -> bool {
    PasswordUsecase::<BcryptPasswordHasher>::default()
        .verify_password(password, &HashedPassword::from(hash))
        .await
}
