pub mod settings;

pub use settings::{AppSettings, DisplaySettings, Environment, OutputFormat, Settings, SourceSettings, TuiSettings};
