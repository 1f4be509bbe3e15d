//! tocbar: table-of-contents sidebars for documents.
//!
//! Headings picked by a [`selector::Selector`] are numbered, given anchor identifiers and
//! collected into columns of links inside a panel. A small state machine in [`visibility`]
//! shows the panel while the pointer hovers its trigger and hides it again on leave.
//!
//! The builder and the controller are written against the [`tree::DocumentTree`] capability,
//! which [`dom::Document`] implements. HTML and Markdown files are parsed into documents with
//! tree-sitter by the [`formats`] module and written back out by [`render`].
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod dom;
pub mod formats;
pub mod ids;
pub mod input;
pub mod render;
pub mod selector;
pub mod toc;
pub mod tree;
pub mod ui;
pub mod visibility;
