use std::borrow::Cow;

use sha2::{Digest, Sha256};

use crate::domain::{
    error::DomainError,
    models::{cost::Cost, credential::HashedPassword},
    services::password_service::PasswordHasher,
};

/// bcrypt only reads the first 72 bytes of its input.
pub const BCRYPT_MAX_INPUT: usize = 72;

#[derive(Clone)]
pub struct BcryptPasswordHasher;

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// UTF-8 bytes of the password, condensed to a SHA-256 digest when bcrypt would truncate them.
fn normalize(plain_password: &str) -> Cow<'_, [u8]> {
    let bytes = plain_password.as_bytes();
    if bytes.len() > BCRYPT_MAX_INPUT {
        Cow::Owned(Sha256::digest(bytes).to_vec())
    } else {
        Cow::Borrowed(bytes)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain_password: &str, cost: Cost) -> Result<HashedPassword, DomainError> {
        let hash = bcrypt::hash(normalize(plain_password), cost.get()).map_err(|e| match e {
            bcrypt::BcryptError::CostNotAllowed(c) => DomainError::InvalidCost(c),
            other => DomainError::Hashing(other.to_string()),
        })?;

        Ok(HashedPassword::new(hash))
    }

    fn verify(&self, plain_password: &str, hashed_password: &HashedPassword) -> bool {
        match bcrypt::verify(normalize(plain_password), hashed_password.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(error = %e, "stored password hash could not be checked");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new()
    }

    #[fixture]
    fn cost() -> Cost {
        Cost::new(4).unwrap()
    }

    #[rstest]
    #[case("secure_password_123")]
    #[case("")]
    #[case("パスワード")]
    #[case("a".repeat(72))]
    #[case("a".repeat(200))]
    fn test_hash_and_verify(hasher: BcryptPasswordHasher, cost: Cost, #[case] password: String) {
        let hashed = hasher.hash(&password, cost).unwrap();

        assert!(hasher.verify(&password, &hashed));
        assert!(!hasher.verify("wrong_password", &hashed));
    }

    #[rstest]
    fn test_known_scenario(hasher: BcryptPasswordHasher) {
        let hashed = hasher.hash("Tr0ub4dor&3", Cost::new(10).unwrap()).unwrap();

        assert!(hasher.verify("Tr0ub4dor&3", &hashed));
        assert!(!hasher.verify("tr0ub4dor&3", &hashed));
    }

    #[rstest]
    fn test_fresh_salt_per_hash(hasher: BcryptPasswordHasher, cost: Cost) {
        let first = hasher.hash("same_password", cost).unwrap();
        let second = hasher.hash("same_password", cost).unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first));
        assert!(hasher.verify("same_password", &second));
    }

    #[rstest]
    fn test_hash_embeds_cost(hasher: BcryptPasswordHasher, cost: Cost) {
        let hashed = hasher.hash("secure_password_123", cost).unwrap();
        assert!(hashed.as_str().starts_with("$2b$04$"));
    }

    #[rstest]
    fn test_long_passwords_are_not_truncated(hasher: BcryptPasswordHasher, cost: Cost) {
        // identical first 72 bytes, different tails
        let prefix = "x".repeat(BCRYPT_MAX_INPUT);
        let original = format!("{prefix}tail-one");
        let other = format!("{prefix}tail-two");

        let hashed = hasher.hash(&original, cost).unwrap();

        assert!(hasher.verify(&original, &hashed));
        assert!(!hasher.verify(&other, &hashed));
        assert!(!hasher.verify(&prefix, &hashed));
    }

    #[rstest]
    fn test_multibyte_length_counts_bytes(hasher: BcryptPasswordHasher, cost: Cost) {
        // 25 chars, 75 bytes
        let password = "あ".repeat(25);
        assert!(password.len() > BCRYPT_MAX_INPUT);
        assert_eq!(normalize(&password).len(), 32);

        let hashed = hasher.hash(&password, cost).unwrap();
        assert!(hasher.verify(&password, &hashed));
    }

    #[test]
    fn test_normalize_boundary() {
        let at_limit = "a".repeat(BCRYPT_MAX_INPUT);
        let over_limit = "a".repeat(BCRYPT_MAX_INPUT + 1);

        assert_eq!(normalize(&at_limit).as_ref(), at_limit.as_bytes());
        assert_eq!(
            normalize(&over_limit).as_ref(),
            Sha256::digest(over_limit.as_bytes()).as_slice()
        );
    }

    #[rstest]
    #[case("not-a-valid-hash-format")]
    #[case("")]
    #[case("$2b$04$tooshort")]
    #[case("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA")]
    fn test_malformed_hash_is_false(hasher: BcryptPasswordHasher, #[case] stored: &str) {
        assert!(!hasher.verify("secure_password_123", &HashedPassword::from(stored)));
    }
}
