//! Core Types
//!
//! Host-independent document handling.

pub mod document;

pub use document::Document;
