//! Named HTML wrappers over `vellum-dom`, plus document-assembly helpers.
//!
//! The [`tags`] and [`attrs`] catalogs are thin generated wrappers: each
//! function just calls the core constructor with a fixed name, so a page
//! reads as `div(vec![class("card"), text("hi")])` instead of string
//! literals everywhere.

pub mod attrs;
pub mod document;
pub mod nav;
pub mod tags;

pub use document::{Document, document};
pub use nav::nav_link;
