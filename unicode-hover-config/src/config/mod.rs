//! Preview configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `Config` struct and its `Default` impl
//! - [`config_methods`]: builder helpers, validation, and font preference access
//! - [`persistence`]: `impl Config` methods for load/save and path resolution

pub mod config_methods;
pub mod config_struct;
pub mod persistence;

pub use config_struct::Config;
