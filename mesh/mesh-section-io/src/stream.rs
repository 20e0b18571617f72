//! Structured (portable) section codec.
//!
//! Emits every field individually in little-endian byte order, so the
//! encoding is stable across platforms and independent of struct layout.
//!
//! # Format
//!
//! ```text
//! INT32        – Vertex count
//! REAL32[6]    – Bounds: min x/y/z, then max x/y/z
//! foreach vertex
//!     REAL32[3] – Position
//!     REAL32[3] – Normal
//!     INT32     – Material slot
//! end
//! INT32        – Index count
//! INT32[n]     – Index values
//! ```
//!
//! The decoder rebuilds the bounding box from the decoded vertex
//! positions; the six header floats are consumed for stream position only.
//! The raw codec makes the opposite choice.

use std::io::{Read, Write};

use mesh_section::{MeshSection, SectionVertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Write a section in the structured, portable encoding.
///
/// # Errors
///
/// Returns [`IoError::SectionTooLarge`] when a buffer length does not fit
/// the wire format's 32-bit counts, or [`IoError::Io`] if the writer
/// fails.
///
/// # Example
///
/// ```
/// use mesh_section::{MeshSection, SectionVertex};
/// use mesh_section_io::{read_section, write_section};
///
/// let mut section = MeshSection::new();
/// section.add_vertex(SectionVertex::from_raw(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0));
///
/// let mut bytes = Vec::new();
/// write_section(&section, &mut bytes).unwrap();
///
/// let decoded = read_section(&mut bytes.as_slice()).unwrap();
/// assert_eq!(decoded.vertices, section.vertices);
/// ```
pub fn write_section<W: Write>(section: &MeshSection, writer: &mut W) -> IoResult<()> {
    let vertex_count = wire_count(section.vertices.len())?;
    writer.write_all(&vertex_count.to_le_bytes())?;

    // Bounds header: min corner first, then max. Structured decoders
    // discard these, but the raw codec trusts them verbatim.
    let (min, max) = (section.bounds.min, section.bounds.max);
    for value in [min.x, min.y, min.z, max.x, max.y, max.z] {
        writer.write_all(&value.to_le_bytes())?;
    }

    for vertex in &section.vertices {
        writer.write_all(&vertex.position_x.to_le_bytes())?;
        writer.write_all(&vertex.position_y.to_le_bytes())?;
        writer.write_all(&vertex.position_z.to_le_bytes())?;

        writer.write_all(&vertex.normal_x.to_le_bytes())?;
        writer.write_all(&vertex.normal_y.to_le_bytes())?;
        writer.write_all(&vertex.normal_z.to_le_bytes())?;

        writer.write_all(&vertex.material.to_le_bytes())?;
    }

    let index_count = wire_count(section.indices.len())?;
    writer.write_all(&index_count.to_le_bytes())?;
    for index in &section.indices {
        writer.write_all(&index.to_le_bytes())?;
    }

    Ok(())
}

/// Read a section written by [`write_section`].
///
/// The bounding box is rebuilt by routing every decoded vertex through
/// [`MeshSection::add_vertex`], so a round trip always yields the
/// tightest box over the vertex data regardless of what the header
/// claimed.
///
/// # Errors
///
/// - [`IoError::Truncated`] if the stream ends inside a declared region
/// - [`IoError::CorruptStream`] if a count is negative
/// - [`IoError::Io`] on reader failure
pub fn read_section<R: Read>(reader: &mut R) -> IoResult<MeshSection> {
    let vertex_count = read_count(reader, "vertex count")?;

    // Header bounds: advance past six floats, then discard.
    for context in ["min x", "min y", "min z", "max x", "max y", "max z"] {
        read_f32(reader, context)?;
    }

    let mut section = MeshSection::with_capacity(vertex_count, 0);
    for _ in 0..vertex_count {
        let vertex = read_vertex(reader)?;
        section.add_vertex(vertex);
    }

    let index_count = read_count(reader, "index count")?;
    section.indices.reserve(index_count);
    for _ in 0..index_count {
        section.add_index(read_u32(reader, "index value")?);
    }

    debug!(
        "decoded section: {} vertices, {} indices",
        section.vertex_count(),
        section.index_count()
    );

    Ok(section)
}

/// Convert a buffer length to a wire-format count.
fn wire_count(len: usize) -> IoResult<i32> {
    i32::try_from(len).map_err(|_| IoError::SectionTooLarge { len })
}

/// Convert a decoded wire count back to a buffer length.
fn read_count<R: Read>(reader: &mut R, context: &'static str) -> IoResult<usize> {
    let raw = read_i32(reader, context)?;
    usize::try_from(raw).map_err(|_| IoError::corrupt(format!("negative {context}: {raw}")))
}

fn read_vertex<R: Read>(reader: &mut R) -> IoResult<SectionVertex> {
    Ok(SectionVertex {
        position_x: read_f32(reader, "vertex position")?,
        position_y: read_f32(reader, "vertex position")?,
        position_z: read_f32(reader, "vertex position")?,
        normal_x: read_f32(reader, "vertex normal")?,
        normal_y: read_f32(reader, "vertex normal")?,
        normal_z: read_f32(reader, "vertex normal")?,
        material: read_i32(reader, "vertex material")?,
    })
}

fn read_bytes4<R: Read>(reader: &mut R, context: &'static str) -> IoResult<[u8; 4]> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IoError::Truncated { context }
        } else {
            IoError::Io(e)
        }
    })?;
    Ok(buf)
}

fn read_i32<R: Read>(reader: &mut R, context: &'static str) -> IoResult<i32> {
    Ok(i32::from_le_bytes(read_bytes4(reader, context)?))
}

fn read_u32<R: Read>(reader: &mut R, context: &'static str) -> IoResult<u32> {
    Ok(u32::from_le_bytes(read_bytes4(reader, context)?))
}

fn read_f32<R: Read>(reader: &mut R, context: &'static str) -> IoResult<f32> {
    Ok(f32::from_le_bytes(read_bytes4(reader, context)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use mesh_section::{Aabb, Point3};

    fn two_vertex_section() -> MeshSection {
        let mut section = MeshSection::new();
        section.add_vertex(SectionVertex::from_raw(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0));
        section.add_vertex(SectionVertex::from_raw(2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1));
        section.add_triangle(0, 1, 0);
        section
    }

    #[test]
    fn byte_layout_matches_format() {
        let section = two_vertex_section();
        let mut bytes = Vec::new();
        write_section(&section, &mut bytes).unwrap();

        // count + 6 bounds floats + 2 * 7 vertex fields + count + 3 indices
        assert_eq!(bytes.len(), 4 + 24 + 2 * 28 + 4 + 12);

        assert_eq!(i32::from_le_bytes(bytes[0..4].try_into().unwrap()), 2);

        // min (0,0,0), then max (2,0,0)
        let header: Vec<f32> = bytes[4..28]
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes(c.try_into().unwrap()))
            .collect();
        assert_eq!(header, [0.0, 0.0, 0.0, 2.0, 0.0, 0.0]);

        // Second vertex record: position x = 2.0, material = 1.
        assert_eq!(f32::from_le_bytes(bytes[56..60].try_into().unwrap()), 2.0);
        assert_eq!(i32::from_le_bytes(bytes[80..84].try_into().unwrap()), 1);

        // Index count, then the three index values.
        assert_eq!(i32::from_le_bytes(bytes[84..88].try_into().unwrap()), 3);
        let indices: Vec<u32> = bytes[88..100]
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
            .collect();
        assert_eq!(indices, [0, 1, 0]);
    }

    #[test]
    fn roundtrip_preserves_everything() {
        let section = two_vertex_section();
        let mut bytes = Vec::new();
        write_section(&section, &mut bytes).unwrap();

        let decoded = read_section(&mut bytes.as_slice()).unwrap();
        assert_eq!(decoded.vertices, section.vertices);
        assert_eq!(decoded.indices, section.indices);
        assert_eq!(decoded.bounds, section.bounds);
    }

    #[test]
    fn decoder_recomputes_bounds_from_vertices() {
        let mut section = two_vertex_section();
        // Widen the box beyond its points. The structured decoder rebuilds
        // the box from vertex data, so the widening does not survive.
        section.bounds = Aabb::new(
            Point3::new(-100.0, -100.0, -100.0),
            Point3::new(100.0, 100.0, 100.0),
        );

        let mut bytes = Vec::new();
        write_section(&section, &mut bytes).unwrap();
        let decoded = read_section(&mut bytes.as_slice()).unwrap();

        let positions: Vec<Point3<f32>> = decoded.vertices.iter().map(|v| v.position()).collect();
        assert_eq!(decoded.bounds, Aabb::from_points(positions.iter()));
        assert_ne!(decoded.bounds, section.bounds);
    }

    #[test]
    fn empty_section_roundtrips() {
        let section = MeshSection::new();
        let mut bytes = Vec::new();
        write_section(&section, &mut bytes).unwrap();

        let decoded = read_section(&mut bytes.as_slice()).unwrap();
        assert!(decoded.is_empty());
        assert!(decoded.bounds.is_empty());
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let section = two_vertex_section();
        let mut bytes = Vec::new();
        write_section(&section, &mut bytes).unwrap();

        // Cut the stream in the middle of the second vertex record.
        let result = read_section(&mut &bytes[..60]);
        assert!(matches!(result, Err(IoError::Truncated { .. })));
    }

    #[test]
    fn negative_vertex_count_is_corrupt() {
        let bytes = (-1i32).to_le_bytes();
        let result = read_section(&mut &bytes[..]);
        assert!(matches!(result, Err(IoError::CorruptStream { .. })));
    }

    #[test]
    fn negative_index_count_is_corrupt() {
        let mut section = MeshSection::new();
        section.add_vertex(SectionVertex::from_raw(1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0));

        let mut bytes = Vec::new();
        write_section(&section, &mut bytes).unwrap();

        // Overwrite the index count with -5.
        let count_offset = bytes.len() - 4;
        bytes[count_offset..].copy_from_slice(&(-5i32).to_le_bytes());

        let result = read_section(&mut bytes.as_slice());
        assert!(matches!(result, Err(IoError::CorruptStream { .. })));
    }
}
