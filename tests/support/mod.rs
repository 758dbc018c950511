// tests/support/mod.rs
// Shared builders and stub ports for the integration test binaries. Some
// symbols go unused in individual test crates; allow the resulting
// dead_code warnings at the module level.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
