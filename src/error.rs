//! # Geometry Errors
//!
//! Error types for mesh validation and upload.
//!
//! Shape generation itself never fails: every generator is total over its
//! inputs. Errors only arise at the boundaries, when signed user input is
//! turned into split counts, when a mesh is checked before upload, or when an
//! empty mesh is handed to the GPU.

use thiserror::Error;

/// Errors that can occur around mesh generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A split count coming from signed input was negative
    #[error("Negative split count for {axis}: {value}")]
    NegativeSplitCount { axis: &'static str, value: i64 },

    /// A split count coming from signed input does not fit the generators' `u32`
    #[error("Split count for {axis} too large: {value} (max {max})", max = u32::MAX)]
    SplitCountTooLarge { axis: &'static str, value: i64 },

    /// A per-vertex attribute array is not index-aligned with the positions
    #[error("Attribute '{attribute}' has {found} entries, expected {expected}")]
    MismatchedAttributes {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },

    /// A triangle references a vertex that does not exist
    #[error("Triangle {triangle} references vertex {index} (vertex count: {vertex_count})")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// The mesh has no geometry to upload
    #[error("Mesh is empty")]
    EmptyMesh,
}

/// Converts a signed split count into the unsigned count the generators take.
///
/// Values outside `0..=u32::MAX` are rejected rather than clamped, so a typo
/// on the command line never silently produces a different mesh.
///
/// # Example
///
/// ```rust
/// use parametric_shapes::error::{split_count, GeometryError};
///
/// assert_eq!(split_count("longitude", 4), Ok(4));
/// assert!(matches!(
///     split_count("longitude", -1),
///     Err(GeometryError::NegativeSplitCount { .. })
/// ));
/// assert!(matches!(
///     split_count("longitude", 1 << 40),
///     Err(GeometryError::SplitCountTooLarge { .. })
/// ));
/// ```
pub fn split_count(axis: &'static str, value: i64) -> Result<u32, GeometryError> {
    if value < 0 {
        return Err(GeometryError::NegativeSplitCount { axis, value });
    }
    u32::try_from(value).map_err(|_| GeometryError::SplitCountTooLarge { axis, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_count_accepts_zero() {
        assert_eq!(split_count("u", 0), Ok(0));
    }

    #[test]
    fn test_split_count_rejects_negative() {
        let err = split_count("v", -3).unwrap_err();
        assert_eq!(
            err,
            GeometryError::NegativeSplitCount {
                axis: "v",
                value: -3
            }
        );
        assert_eq!(err.to_string(), "Negative split count for v: -3");
    }

    #[test]
    fn test_split_count_rejects_values_above_u32() {
        assert_eq!(split_count("u", u32::MAX as i64), Ok(u32::MAX));

        let too_large = u32::MAX as i64 + 1;
        let err = split_count("u", too_large).unwrap_err();
        assert_eq!(
            err,
            GeometryError::SplitCountTooLarge {
                axis: "u",
                value: too_large
            }
        );
        assert_eq!(
            err.to_string(),
            "Split count for u too large: 4294967296 (max 4294967295)"
        );
        assert!(split_count("u", i64::MAX).is_err());
    }
}
