pub mod verification_engine;

pub use verification_engine::VerificationEngine;
