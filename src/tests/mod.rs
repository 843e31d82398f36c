pub mod fixtures;
pub mod checks_tests;
pub mod locator_tests;
