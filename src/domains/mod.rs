pub mod user;
pub mod verify;
