//! Drafter - a chat-style TUI for composing document-generation requests.
//!
//! The core is a preset-driven command/form interaction model: slash-command
//! detection, palette filtering, dynamic forms from a declarative preset
//! schema, and an append-only transcript. The binary entry point is in
//! main.rs.

pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod form;
pub mod input;
pub mod message;
pub mod picker;
pub mod theme;
pub mod ui;
