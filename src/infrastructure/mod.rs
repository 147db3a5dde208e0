pub mod bcrypt_password_hasher;
pub mod config;
