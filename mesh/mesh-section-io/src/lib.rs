//! Binary serialization for procedural mesh sections.
//!
//! This crate provides two codecs for [`mesh_section::MeshSection`]:
//!
//! - **Structured** ([`write_section`] / [`read_section`]) - Explicit
//!   per-field little-endian encoding over `std::io` streams. Portable
//!   across platforms; the decoder rebuilds the bounding box from the
//!   decoded vertex positions.
//! - **Raw** ([`encode_section_raw`] / [`decode_section_raw`]) - Bulk
//!   memory-block copies of the vertex and index buffers. Fast, but only
//!   valid between builds that share the in-memory record layout; the
//!   decoder trusts the encoded bounding box verbatim.
//!
//! The two encodings are **not** interchangeable: pick one per artifact
//! and stick with it.
//!
//! Both decoders validate declared counts against the available input and
//! return [`IoError::Truncated`] or [`IoError::CorruptStream`] rather
//! than misreading a damaged stream.
//!
//! # Example
//!
//! ```
//! use mesh_section::{MeshSection, SectionVertex};
//! use mesh_section_io::{read_section, write_section};
//!
//! let mut section = MeshSection::new();
//! section.add_vertex(SectionVertex::from_raw(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0));
//! section.add_vertex(SectionVertex::from_raw(2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1));
//! section.add_triangle(0, 1, 0);
//!
//! let mut bytes = Vec::new();
//! write_section(&section, &mut bytes).unwrap();
//!
//! let decoded = read_section(&mut bytes.as_slice()).unwrap();
//! assert_eq!(decoded.vertices, section.vertices);
//! assert_eq!(decoded.indices, section.indices);
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

mod error;
mod raw;
mod stream;

pub use error::{IoError, IoResult};
pub use raw::{decode_section_raw, encode_section_raw};
pub use stream::{read_section, write_section};
