//! Result types for decimation operations.

// Triangle counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::TriangleSoup;

/// Result of mesh decimation.
#[derive(Debug, Clone, Default)]
pub struct DecimationResult {
    /// Whether decimation completed (including the no-op case).
    pub success: bool,

    /// The decimated mesh, owned by the caller.
    pub mesh: Option<TriangleSoup>,

    /// Number of triangles in original mesh.
    pub original_triangles: usize,

    /// Number of triangles in decimated mesh.
    pub final_triangles: usize,

    /// `(original - final) / original * 100`.
    pub reduction_percent: f64,

    /// Failure message.
    pub error: Option<String>,
}

impl DecimationResult {
    /// Wrap a verbatim copy of a mesh that needed no decimation.
    #[must_use]
    pub fn unchanged(mesh: &TriangleSoup) -> Self {
        let count = mesh.triangle_count();
        Self {
            success: true,
            mesh: Some(mesh.clone()),
            original_triangles: count,
            final_triangles: count,
            reduction_percent: 0.0,
            error: None,
        }
    }

    /// Wrap a decimated mesh.
    #[must_use]
    pub fn decimated(original_triangles: usize, mesh: TriangleSoup) -> Self {
        let final_triangles = mesh.triangle_count();
        let reduction_percent = if original_triangles == 0 {
            0.0
        } else {
            original_triangles.saturating_sub(final_triangles) as f64 / original_triangles as f64
                * 100.0
        };
        Self {
            success: true,
            mesh: Some(mesh),
            original_triangles,
            final_triangles,
            reduction_percent,
            error: None,
        }
    }

    /// Report a failure.
    #[must_use]
    pub fn failed(original_triangles: usize, message: String) -> Self {
        Self {
            success: false,
            original_triangles,
            final_triangles: original_triangles,
            error: Some(message),
            ..Default::default()
        }
    }

    /// Get the reduction ratio (final / original).
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_triangles == 0 {
            1.0
        } else {
            self.final_triangles as f64 / self.original_triangles as f64
        }
    }

    /// Check if any triangle was removed.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.success && self.final_triangles < self.original_triangles
    }
}

impl std::fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "Decimation failed: {error}");
        }
        write!(
            f,
            "Decimation: {} → {} triangles ({:.1}% reduction)",
            self.original_triangles, self.final_triangles, self.reduction_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup_with(triangles: usize) -> TriangleSoup {
        TriangleSoup::from_positions(vec![0.0; triangles * TriangleSoup::FLOATS_PER_TRIANGLE])
    }

    #[test]
    fn test_reduction_ratio() {
        let result = DecimationResult::decimated(1000, soup_with(500));

        assert!((result.reduction_ratio() - 0.5).abs() < 0.001);
        assert!((result.reduction_percent - 50.0).abs() < 0.1);
    }

    #[test]
    fn test_was_decimated() {
        let result = DecimationResult::unchanged(&soup_with(10));
        assert!(!result.was_decimated());
        assert!(result.success);
        assert!(result.reduction_percent.abs() < f64::EPSILON);

        let result2 = DecimationResult::decimated(10, soup_with(4));
        assert!(result2.was_decimated());

        let result3 = DecimationResult::failed(10, "boom".to_string());
        assert!(!result3.was_decimated());
        assert!(result3.mesh.is_none());
    }

    #[test]
    fn test_display() {
        let result = DecimationResult::decimated(1000, soup_with(500));

        let display = format!("{result}");
        assert!(display.contains("1000"));
        assert!(display.contains("500"));
        assert!(display.contains("50.0%"));

        let failed = DecimationResult::failed(3, "Mesh bounds have zero extent".to_string());
        assert_eq!(
            failed.to_string(),
            "Decimation failed: Mesh bounds have zero extent"
        );
    }
}
