pub mod cost;
pub mod credential;
