//! Vertex tangent record.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tangent-space X direction for a vertex, with a handedness flip flag.
///
/// The bitangent (tangent Y) is not stored. Consumers derive it as the
/// cross product of the vertex normal and `direction`, negating the result
/// when `flip_bitangent` is set. This type only carries the inputs to that
/// computation.
///
/// # Example
///
/// ```
/// use mesh_section::Tangent;
///
/// let tangent = Tangent::default();
/// assert_eq!(tangent.direction.x, 1.0);
/// assert!(!tangent.flip_bitangent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tangent {
    /// Direction of the X tangent for this vertex.
    pub direction: Vector3<f32>,

    /// Whether to flip the derived bitangent.
    pub flip_bitangent: bool,
}

impl Tangent {
    /// Create a tangent from a direction and flip flag.
    #[inline]
    #[must_use]
    pub const fn new(direction: Vector3<f32>, flip_bitangent: bool) -> Self {
        Self {
            direction,
            flip_bitangent,
        }
    }

    /// Create a tangent from raw components, without a flip.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_section::Tangent;
    ///
    /// let tangent = Tangent::from_coords(0.0, 1.0, 0.0);
    /// assert_eq!(tangent.direction.y, 1.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vector3::new is not const in nalgebra
    pub fn from_coords(x: f32, y: f32, z: f32) -> Self {
        Self::new(Vector3::new(x, y, z), false)
    }
}

impl Default for Tangent {
    /// Unit X direction, no flip.
    fn default() -> Self {
        Self::from_coords(1.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unit_x_without_flip() {
        let tangent = Tangent::default();
        assert!((tangent.direction.x - 1.0).abs() < f32::EPSILON);
        assert!(tangent.direction.y.abs() < f32::EPSILON);
        assert!(tangent.direction.z.abs() < f32::EPSILON);
        assert!(!tangent.flip_bitangent);
    }

    #[test]
    fn new_preserves_flip() {
        let tangent = Tangent::new(Vector3::new(0.0, 0.0, 1.0), true);
        assert!(tangent.flip_bitangent);
    }
}
