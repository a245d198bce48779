//! Staged mesh preparation: analyze, repair, decimate.
//!
//! Stages run strictly in order on the calling thread. Each stage works on a
//! copy of the current mesh, so the caller's input is never mutated. A
//! failing stage is reported in its result and the pipeline continues with
//! the mesh it had before that stage.

use std::fmt;

use mesh_decimate::{DecimationResult, decimate};
use mesh_repair::{
    AnalysisParams, AnalysisResult, RepairParams, RepairResult, analyze_with_params,
    repair_with_analysis,
};
use mesh_types::{AccelerationBuilder, DEFAULT_TRIANGLE_BUDGET, TriangleSoup};
use tracing::{info, warn};

/// A pipeline stage, as reported to progress observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Manifold and degeneracy analysis.
    Analyzing,
    /// Degenerate-triangle removal.
    Repairing,
    /// Vertex-clustering simplification.
    Decimating,
    /// All requested stages have finished.
    Complete,
}

impl PipelineStage {
    /// Lower-case stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analyzing => "analyzing",
            Self::Repairing => "repairing",
            Self::Decimating => "decimating",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which optional stages to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Repair when analysis finds the mesh is not manifold. Default: true
    pub auto_repair: bool,
    /// Decimate when the mesh exceeds `target_triangles`. Default: true
    pub decimate: bool,
    /// Decimation target. Default: [`DEFAULT_TRIANGLE_BUDGET`]
    pub target_triangles: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            auto_repair: true,
            decimate: true,
            target_triangles: DEFAULT_TRIANGLE_BUDGET,
        }
    }
}

impl PipelineOptions {
    /// Only analyze; never repair or decimate.
    #[must_use]
    pub fn analysis_only() -> Self {
        Self {
            auto_repair: false,
            decimate: false,
            ..Default::default()
        }
    }

    /// Enable or disable automatic repair.
    #[must_use]
    pub const fn with_auto_repair(mut self, enabled: bool) -> Self {
        self.auto_repair = enabled;
        self
    }

    /// Enable or disable decimation.
    #[must_use]
    pub const fn with_decimate(mut self, enabled: bool) -> Self {
        self.decimate = enabled;
        self
    }

    /// Set the decimation target.
    #[must_use]
    pub const fn with_target_triangles(mut self, target: usize) -> Self {
        self.target_triangles = target;
        self
    }
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Analysis of the input mesh.
    pub analysis: AnalysisResult,
    /// Repair outcome, if the stage ran.
    pub repair: Option<RepairResult>,
    /// Decimation outcome, if the stage ran.
    pub decimation: Option<DecimationResult>,
    /// Mesh after every successful stage.
    pub final_mesh: TriangleSoup,
}

impl PipelineResult {
    /// Whether any stage ran and failed.
    #[must_use]
    pub fn had_failures(&self) -> bool {
        self.repair.as_ref().is_some_and(|r| !r.success)
            || self.decimation.as_ref().is_some_and(|d| !d.success)
    }
}

impl fmt::Display for PipelineResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.analysis)?;
        if let Some(repair) = &self.repair {
            writeln!(f, "{repair}")?;
        }
        if let Some(decimation) = &self.decimation {
            writeln!(f, "{decimation}")?;
        }
        write!(f, "Final mesh: {} triangles", self.final_mesh.triangle_count())
    }
}

type ProgressObserver<'a> = Box<dyn FnMut(PipelineStage, u8, &str) + 'a>;

/// Fluent builder for a pipeline run.
///
/// # Example
///
/// ```
/// use mesh::pipeline::{MeshPipeline, PipelineOptions, PipelineStage};
/// use mesh::types::{TriangleSoup, unit_cube};
///
/// let cube = TriangleSoup::from_indexed(&unit_cube());
/// let mut stages = Vec::new();
///
/// let result = MeshPipeline::new(PipelineOptions::default())
///     .on_progress(|stage, percent, _message| stages.push((stage, percent)))
///     .run(&cube);
///
/// assert!(result.analysis.is_manifold);
/// assert!(result.repair.is_none());
/// assert_eq!(stages.last(), Some(&(PipelineStage::Complete, 100)));
/// ```
pub struct MeshPipeline<'a> {
    options: PipelineOptions,
    analysis_params: Option<AnalysisParams>,
    repair_params: RepairParams,
    acceleration: Option<&'a dyn AccelerationBuilder>,
    progress: Option<ProgressObserver<'a>>,
}

impl<'a> MeshPipeline<'a> {
    /// Create a pipeline with the given stage options.
    #[must_use]
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            analysis_params: None,
            repair_params: RepairParams::default(),
            acceleration: None,
            progress: None,
        }
    }

    /// Override analysis parameters.
    ///
    /// By default the analysis budget follows `target_triangles`.
    #[must_use]
    pub fn analysis_params(mut self, params: AnalysisParams) -> Self {
        self.analysis_params = Some(params);
        self
    }

    /// Override repair parameters.
    #[must_use]
    pub fn repair_params(mut self, params: RepairParams) -> Self {
        self.repair_params = params;
        self
    }

    /// Rebuild an acceleration structure after each stage that replaces the mesh.
    #[must_use]
    pub fn acceleration(mut self, builder: &'a dyn AccelerationBuilder) -> Self {
        self.acceleration = Some(builder);
        self
    }

    /// Observe progress as `(stage, percent, message)`.
    ///
    /// Each executed stage reports 0 when it starts and 100 when it ends,
    /// followed by a single `Complete` at 100. Skipped stages report
    /// nothing.
    #[must_use]
    pub fn on_progress(mut self, observer: impl FnMut(PipelineStage, u8, &str) + 'a) -> Self {
        self.progress = Some(Box::new(observer));
        self
    }

    /// Run the pipeline on `mesh`.
    ///
    /// Repair runs when enabled and the analysis reports a non-manifold
    /// mesh. Decimation runs when enabled and the current mesh exceeds the
    /// target. Stage failures never abort the run.
    pub fn run(mut self, mesh: &TriangleSoup) -> PipelineResult {
        let options = self.options;
        info!(
            triangles = mesh.triangle_count(),
            auto_repair = options.auto_repair,
            decimate = options.decimate,
            target = options.target_triangles,
            "Starting mesh pipeline"
        );

        // Analysis
        self.report(PipelineStage::Analyzing, 0, "Analyzing mesh");
        let analysis_params = self.analysis_params.clone().unwrap_or_else(|| {
            AnalysisParams::default().with_triangle_budget(options.target_triangles)
        });
        let analysis = analyze_with_params(mesh, &analysis_params);
        let summary = if analysis.issues.is_empty() {
            format!("Analyzed {} triangles, no issues", analysis.triangle_count)
        } else {
            format!(
                "Analyzed {} triangles, {} {}",
                analysis.triangle_count,
                analysis.issues.len(),
                if analysis.issues.len() == 1 { "issue" } else { "issues" }
            )
        };
        self.report(PipelineStage::Analyzing, 100, &summary);

        let mut current = mesh.clone();

        // Repair
        let repair = if options.auto_repair && !analysis.is_manifold {
            self.report(PipelineStage::Repairing, 0, "Repairing mesh");
            // The analysis can only vouch for the threshold it was run with
            let same_threshold = analysis_params.degenerate_epsilon.to_bits()
                == self.repair_params.degenerate_epsilon.to_bits();
            let prior = same_threshold.then_some(&analysis);
            let result = repair_with_analysis(&current, prior, &self.repair_params);
            match &result.mesh {
                Some(repaired) if result.success => {
                    current = repaired.clone();
                    self.rebuild_acceleration(&current, PipelineStage::Repairing);
                }
                _ => warn!(
                    error = result.error.as_deref().unwrap_or("unknown"),
                    "Repair failed, continuing with unrepaired mesh"
                ),
            }
            self.report(PipelineStage::Repairing, 100, &result.to_string());
            Some(result)
        } else {
            None
        };

        // Decimation
        let decimation = if options.decimate && current.triangle_count() > options.target_triangles
        {
            let message = format!("Decimating to {} triangles", options.target_triangles);
            self.report(PipelineStage::Decimating, 0, &message);
            let result = decimate(&current, options.target_triangles);
            match &result.mesh {
                Some(decimated) if result.success => {
                    current = decimated.clone();
                    self.rebuild_acceleration(&current, PipelineStage::Decimating);
                }
                _ => warn!(
                    error = result.error.as_deref().unwrap_or("unknown"),
                    "Decimation failed, continuing with previous mesh"
                ),
            }
            self.report(PipelineStage::Decimating, 100, &result.to_string());
            Some(result)
        } else {
            None
        };

        self.report(PipelineStage::Complete, 100, "Mesh processing complete");

        let result = PipelineResult {
            analysis,
            repair,
            decimation,
            final_mesh: current,
        };
        info!(
            final_triangles = result.final_mesh.triangle_count(),
            failures = result.had_failures(),
            "Mesh pipeline complete"
        );
        result
    }

    fn report(&mut self, stage: PipelineStage, percent: u8, message: &str) {
        if let Some(observer) = self.progress.as_mut() {
            observer(stage, percent, message);
        }
    }

    fn rebuild_acceleration(&self, mesh: &TriangleSoup, stage: PipelineStage) {
        if let Some(builder) = self.acceleration {
            if let Err(err) = builder.rebuild(mesh) {
                warn!(%stage, error = %err, "Acceleration rebuild failed, ignoring");
            }
        }
    }
}

/// Run analysis, optional repair and optional decimation on `mesh`.
///
/// `on_progress` receives `(stage, percent, message)` at fixed milestones.
///
/// # Example
///
/// ```
/// use mesh::pipeline::{PipelineOptions, run_pipeline};
/// use mesh::types::{TriangleSoup, unit_cube};
///
/// let cube = TriangleSoup::from_indexed(&unit_cube());
/// let result = run_pipeline(&cube, &PipelineOptions::default(), |_, _, _| {});
///
/// assert_eq!(result.final_mesh, cube);
/// assert!(result.decimation.is_none());
/// ```
pub fn run_pipeline(
    mesh: &TriangleSoup,
    options: &PipelineOptions,
    on_progress: impl FnMut(PipelineStage, u8, &str),
) -> PipelineResult {
    MeshPipeline::new(*options).on_progress(on_progress).run(mesh)
}
