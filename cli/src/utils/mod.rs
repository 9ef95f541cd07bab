pub mod env_paths;
pub mod user_file;
