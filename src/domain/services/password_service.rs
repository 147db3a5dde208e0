use crate::domain::{
    error::DomainError,
    models::{cost::Cost, credential::HashedPassword},
};

/// Service for hashing and verifying passwords
///
/// Both operations are blocking and CPU bound. Async callers go through
/// [`PasswordUsecase`](crate::usecase::password_usecase::PasswordUsecase),
/// which moves the hasher onto a worker thread.
pub trait PasswordHasher: Clone + Send + Sync + 'static {
    /// Hash a plain text password with a fresh salt
    fn hash(&self, plain_password: &str, cost: Cost) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a hashed password
    ///
    /// A malformed or unrecognised hash is reported as `false`, same as a wrong password.
    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool;
}
