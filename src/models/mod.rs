pub mod tier;
pub mod rating;
pub mod profile;
pub mod error;

pub use tier::*;
pub use rating::*;
pub use profile::*;
pub use error::*;
