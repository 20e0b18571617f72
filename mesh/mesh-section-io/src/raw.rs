//! Raw (fast-path) section codec.
//!
//! Bulk-copies the vertex and index buffers as native memory blocks
//! instead of per-field streams: one slice copy per block, no per-field
//! marshaling. The encoding is byte-exact only between builds that agree
//! on the [`SectionVertex`] layout and byte order — use it for
//! same-platform round trips (a save file reloaded in place), never as a
//! cross-platform wire format. [`crate::write_section`] is the portable
//! codec.
//!
//! Unlike the structured codec, the decoder trusts the encoded bounding
//! box verbatim instead of rebuilding it from vertex data.

use bytemuck::Pod;
use mesh_section::{Aabb, MeshSection, Point3, SectionVertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Append the raw encoding of `section` to `out`.
///
/// # Errors
///
/// Returns [`IoError::SectionTooLarge`] when a buffer length does not fit
/// the format's 32-bit counts.
///
/// # Example
///
/// ```
/// use mesh_section::{MeshSection, SectionVertex};
/// use mesh_section_io::{decode_section_raw, encode_section_raw};
///
/// let mut section = MeshSection::new();
/// section.add_vertex(SectionVertex::from_raw(1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0));
///
/// let mut bytes = Vec::new();
/// encode_section_raw(&section, &mut bytes).unwrap();
///
/// let decoded = decode_section_raw(&bytes).unwrap();
/// assert_eq!(decoded.vertices, section.vertices);
/// assert_eq!(decoded.bounds, section.bounds);
/// ```
pub fn encode_section_raw(section: &MeshSection, out: &mut Vec<u8>) -> IoResult<()> {
    let vertex_count = wire_count(section.vertices.len())?;
    out.extend_from_slice(&vertex_count.to_ne_bytes());

    let (min, max) = (section.bounds.min, section.bounds.max);
    for value in [min.x, min.y, min.z, max.x, max.y, max.z] {
        out.extend_from_slice(&value.to_ne_bytes());
    }

    out.extend_from_slice(bytemuck::cast_slice(&section.vertices));

    let index_count = wire_count(section.indices.len())?;
    out.extend_from_slice(&index_count.to_ne_bytes());
    out.extend_from_slice(bytemuck::cast_slice(&section.indices));

    Ok(())
}

/// Decode a section produced by [`encode_section_raw`].
///
/// Every declared count is validated against the remaining input before
/// any allocation or copy, so a corrupt or truncated buffer yields an
/// error instead of an oversized allocation. Trailing bytes after the
/// section are ignored.
///
/// The bounding box is assigned directly from the header — no recompute
/// from vertex data, no corner reordering. A box that was wider than its
/// points at encode time comes back byte-identical.
///
/// # Errors
///
/// - [`IoError::Truncated`] if the buffer ends inside a declared region
/// - [`IoError::CorruptStream`] if a count is negative or a block size
///   overflows
pub fn decode_section_raw(bytes: &[u8]) -> IoResult<MeshSection> {
    let mut cursor = RawCursor::new(bytes);

    let vertex_count = cursor.read_count("vertex count")?;
    let min = cursor.read_point3("bounds min")?;
    let max = cursor.read_point3("bounds max")?;

    let vertices = cursor.read_pod_block::<SectionVertex>(vertex_count, "vertex block")?;

    let index_count = cursor.read_count("index count")?;
    let indices = cursor.read_pod_block::<u32>(index_count, "index block")?;

    debug!("decoded raw section: {vertex_count} vertices, {index_count} indices");

    // The encoded box is authoritative here.
    Ok(MeshSection {
        vertices,
        indices,
        bounds: Aabb { min, max },
    })
}

/// Convert a buffer length to a wire-format count.
fn wire_count(len: usize) -> IoResult<i32> {
    i32::try_from(len).map_err(|_| IoError::SectionTooLarge { len })
}

/// Bounds-checked cursor over the input buffer.
struct RawCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> RawCursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Take `len` bytes from the current position.
    fn take(&mut self, len: usize, context: &'static str) -> IoResult<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or_else(|| IoError::corrupt(format!("{context} length overflows")))?;
        let block = self
            .bytes
            .get(self.offset..end)
            .ok_or(IoError::Truncated { context })?;
        self.offset = end;
        Ok(block)
    }

    fn read_i32(&mut self, context: &'static str) -> IoResult<i32> {
        let block = self.take(4, context)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(block);
        Ok(i32::from_ne_bytes(buf))
    }

    fn read_f32(&mut self, context: &'static str) -> IoResult<f32> {
        let block = self.take(4, context)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(block);
        Ok(f32::from_ne_bytes(buf))
    }

    fn read_count(&mut self, context: &'static str) -> IoResult<usize> {
        let raw = self.read_i32(context)?;
        usize::try_from(raw).map_err(|_| IoError::corrupt(format!("negative {context}: {raw}")))
    }

    fn read_point3(&mut self, context: &'static str) -> IoResult<Point3<f32>> {
        let x = self.read_f32(context)?;
        let y = self.read_f32(context)?;
        let z = self.read_f32(context)?;
        Ok(Point3::new(x, y, z))
    }

    /// Bulk-copy `count` POD records out of the buffer.
    ///
    /// The block length is validated (with overflow-checked arithmetic)
    /// before the destination is allocated, then filled with a single
    /// slice copy.
    fn read_pod_block<T: Pod>(&mut self, count: usize, context: &'static str) -> IoResult<Vec<T>> {
        let byte_len = count
            .checked_mul(std::mem::size_of::<T>())
            .ok_or_else(|| IoError::corrupt(format!("{context} size overflows")))?;
        let block = self.take(byte_len, context)?;

        let mut items = vec![T::zeroed(); count];
        bytemuck::cast_slice_mut::<T, u8>(&mut items).copy_from_slice(block);
        Ok(items)
    }
}
