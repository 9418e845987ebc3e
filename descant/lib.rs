//! Keystroke-driven autocompletion for structured configuration buffers.
//!
//! On every qualifying edit the engine extracts the word being typed at the
//! caret, filters a fixed vocabulary of game-object names plus the live set
//! of user-defined variables against it, and drives a single suggestion
//! overlay: show, update in place, reposition, or tear down. Syntactic
//! context from the highlighter gates what is offered (nothing while typing
//! a mapping key, no vocabulary inside strings).
//!
//! The text widget, highlighter, and variable registry are collaborators
//! behind traits; see [`core::EditArea`] and [`core::variables::VariableSource`].

pub mod config;
pub mod core;
pub mod handlers;
pub mod ui;
