//! A terminal counter: one integer in a store, two buttons that move it.

pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
