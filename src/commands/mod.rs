pub mod config;
pub mod hash;
pub mod plan;
pub mod policy;
