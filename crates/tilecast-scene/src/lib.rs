//! Godot text-scene document model.
//!
//! This crate provides the building blocks for Godot 3 `.tscn` documents:
//! typed values, resource headings, key/value records, and the two
//! independent 1-based resource-id counters the format binds references by.
//!
//! A [`SceneDocument`] is append-only. Producers push headings, records,
//! comments, and blank separators in emission order; resource ids are
//! allocated at the moment a heading is emitted and are never renumbered.
//! The final [`SceneDocument::render`] pass prepends the `gd_scene`
//! descriptor whose `load_steps` count is derived from the counters.
//!
//! # Example
//!
//! ```
//! use tilecast_scene::{SceneDocument, Value};
//!
//! let mut doc = SceneDocument::new();
//! let id = doc.alloc_ext_id();
//! doc.push_heading("ext_resource", vec![
//!     ("path", Value::str("res://tiles.png")),
//!     ("type", Value::str("Texture")),
//!     ("id", Value::Int(id.into())),
//! ]);
//! doc.push_blank();
//!
//! let rendered = doc.render();
//! assert!(rendered.starts_with("[gd_scene load_steps=2 format=2]"));
//! ```

pub mod document;
pub mod value;

pub use document::{SceneDocument, FORMAT_VERSION};
pub use value::Value;
