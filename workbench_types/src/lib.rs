//! # Workbench Types
//!
//! This crate defines the data model shared by every workbench service.
//!
//! ## Philosophy
//!
//! - **Normalized**: Projects own their tabs; selection lives elsewhere, as ids
//! - **Opaque ids**: Identifiers are strings, never positions
//! - **Wire-stable**: Serialized field names match the persisted blob layout
//!
//! ## Key Types
//!
//! - [`Project`]: A named, ordered collection of tabs
//! - [`Tab`]: A code file, note, or HTML preview
//! - [`TabDraft`]: A tab before it has an id
//! - [`ProjectId`] / [`TabId`]: Opaque unique identifiers

pub mod draft;
pub mod ids;
pub mod model;

pub use draft::{starter_for_file_name, TabDraft};
pub use ids::{ProjectId, TabId};
pub use model::{Project, Tab, TabKind};
