// src/application/ports/mod.rs
pub mod moderation;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ApprovalPolicyPort = dyn moderation::ApprovalPolicy;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
