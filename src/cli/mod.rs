pub mod actions;
pub mod globals;
pub mod telemetry;
pub mod terminal;

pub mod commands;
pub mod dispatch;

mod start;
pub use self::start::start;
