//! Runtime section types for procedural meshes.
//!
//! This crate provides the data model for one *section* of a procedural
//! mesh — the subset of geometry that shares a single material:
//!
//! - [`SectionVertex`] - A flat, fixed-layout vertex record
//! - [`Tangent`] - Tangent-space X direction with a handedness flip flag
//! - [`Aabb`] - Axis-aligned bounding box over vertex positions
//! - [`MeshSection`] - Vertex/index buffers with bounds-tracked mutation
//!
//! # Layer 0 Crate
//!
//! This crate has **zero engine dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Offline mesh pipelines
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f32`, matching
//! the on-disk representation used by `mesh-section-io`.
//!
//! # Example
//!
//! ```
//! use mesh_section::{MeshSection, SectionVertex, Point3, Vector3};
//!
//! let mut section = MeshSection::new();
//! section.add_vertex(SectionVertex::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::new(0.0, 0.0, 1.0),
//!     0,
//! ));
//! section.add_vertex(SectionVertex::new(
//!     Point3::new(2.0, 1.0, 0.0),
//!     Vector3::new(0.0, 0.0, 1.0),
//!     0,
//! ));
//! section.add_triangle(0, 1, 0);
//!
//! assert_eq!(section.vertex_count(), 2);
//! assert_eq!(section.bounds.max.x, 2.0);
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod section;
mod tangent;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use section::MeshSection;
pub use tangent::Tangent;
pub use vertex::SectionVertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
