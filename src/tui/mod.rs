pub mod app;
pub mod ui;
pub mod event;

pub use app::App;
pub use event::{Event, EventHandler};
