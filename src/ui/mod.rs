//! Terminal presentation layer for the counter.

pub mod animation;
pub mod app;
pub mod controls;
pub mod counter;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod ring;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
