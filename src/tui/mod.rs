//! Terminal User Interface module
//!
//! A setup form for the six accounts, then a dashboard with live
//! allocations, balance checks and confirmed transfers.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod views;

pub mod widgets;

pub mod dialogs;

pub mod layout;

pub use app::App;
pub use terminal::run_tui;
