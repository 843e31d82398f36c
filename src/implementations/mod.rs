pub mod checks;
pub mod decode;
pub mod locator;
pub mod verifier;
