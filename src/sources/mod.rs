pub mod client;
pub mod json_file;

pub use client::ProfileSource;
pub use json_file::JsonFileSource;

#[cfg(test)]
pub use client::MockProfileSource;
