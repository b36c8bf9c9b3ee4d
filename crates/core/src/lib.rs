//! Domain primitives for the E&S Decorations site and back-office.
//!
//! This crate has no I/O: it holds shared types, the domain error, the
//! per-entity validation rules, and the static marketing content rendered
//! by the public pages.

pub mod admin;
pub mod error;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod inquiry;
pub mod job;
pub mod latest_work;
pub mod pagination;
pub mod site;
pub mod types;
pub mod validation;
