//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching the
//! database row. Create/update inputs are the validated drafts from
//! `esdeco_core`, so the repositories bind exactly what the core accepted.

pub mod admin;
pub mod dashboard;
pub mod event;
pub mod faq;
pub mod gallery;
pub mod inquiry;
pub mod job;
pub mod latest_work;
