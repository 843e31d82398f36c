pub mod rules;
pub mod verify;
