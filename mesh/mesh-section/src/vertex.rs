//! Flat vertex record for mesh sections.

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertex of a mesh section.
///
/// Fields are flat scalars in a fixed order, so the in-memory layout is
/// identical to the serialized field order: 28 bytes, no padding. This is
/// what makes the raw bulk-copy codec in `mesh-section-io` possible.
///
/// Vertices have no identity beyond their buffer position; equality is
/// field-for-field.
///
/// # Memory Layout
///
/// Total size: 28 bytes (6 x f32 + 1 x i32)
///
/// # Example
///
/// ```
/// use mesh_section::SectionVertex;
///
/// let v = SectionVertex::from_raw(1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0);
/// assert_eq!(v.position_y, 2.0);
/// assert_eq!(std::mem::size_of::<SectionVertex>(), 28);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionVertex {
    /// Position X component.
    pub position_x: f32,
    /// Position Y component.
    pub position_y: f32,
    /// Position Z component.
    pub position_z: f32,

    /// Normal X component.
    pub normal_x: f32,
    /// Normal Y component.
    pub normal_y: f32,
    /// Normal Z component.
    pub normal_z: f32,

    /// Material slot this vertex belongs to, for sections that mix
    /// materials before splitting.
    pub material: i32,
}

impl SectionVertex {
    /// Create a vertex from a position, normal, and material slot.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_section::{SectionVertex, Point3, Vector3};
    ///
    /// let v = SectionVertex::new(
    ///     Point3::new(1.0, 2.0, 3.0),
    ///     Vector3::new(0.0, 0.0, 1.0),
    ///     2,
    /// );
    /// assert_eq!(v.position_x, 1.0);
    /// assert_eq!(v.material, 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, material: i32) -> Self {
        Self {
            position_x: position.x,
            position_y: position.y,
            position_z: position.z,
            normal_x: normal.x,
            normal_y: normal.y,
            normal_z: normal.z,
            material,
        }
    }

    /// Create a vertex from raw scalar components.
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn from_raw(
        position_x: f32,
        position_y: f32,
        position_z: f32,
        normal_x: f32,
        normal_y: f32,
        normal_z: f32,
        material: i32,
    ) -> Self {
        Self {
            position_x,
            position_y,
            position_z,
            normal_x,
            normal_y,
            normal_z,
            material,
        }
    }

    /// Get the position as a point.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.position_x, self.position_y, self.position_z)
    }

    /// Get the normal as a vector.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vector3<f32> {
        Vector3::new(self.normal_x, self.normal_y, self.normal_z)
    }
}
