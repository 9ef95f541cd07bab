pub mod config;
pub mod guard;
pub mod permission;
pub mod validate;
