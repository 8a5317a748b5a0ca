//! Terminal counter with clamped increments, stepped ±10 adjustments and a
//! circular progress indicator whose color tracks the value band.

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod shutdown;
pub mod ui;
