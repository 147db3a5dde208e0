pub mod password_usecase;
