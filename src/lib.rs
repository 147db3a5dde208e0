pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use domain::{
    error::DomainError,
    models::{cost::Cost, credential::HashedPassword},
    services::password_service::PasswordHasher,
};
pub use infrastructure::{bcrypt_password_hasher::BcryptPasswordHasher, config::HasherConfig};
pub use usecase::password_usecase::{PasswordUsecase, hash_password, verify_password};
