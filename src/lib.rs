//! add-host - keep an application-owned block of entries in the system hosts file.

pub mod block;
pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod platform;
