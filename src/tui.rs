//! Ratatui front end: the interactive side of a [`crate::session::Session`].

pub mod app;
pub mod controller;
mod ui;
