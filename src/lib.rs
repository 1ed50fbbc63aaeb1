#[cfg(feature = "ui")]
pub mod app;
pub mod clock;
pub mod console;
pub mod controls;
pub mod runtime;
pub mod ticker;
pub mod timer;
