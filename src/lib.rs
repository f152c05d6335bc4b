//! Shared FormDeck library exports that keep the settings core independent
//! of the terminal shell.

pub mod bio;
pub mod catalog;
pub mod controller;
pub mod form;
pub mod image;
pub mod logging;
pub mod section;
pub mod timezone;

pub use controller::{Notice, SettingsController, TransientFlags};
pub use logging::{init_logging, log_file_path};
