//! Plot and solve actions.
//!
//! Each action resolves a function by name, produces its data, and returns
//! a fresh [`PlotFrame`]. Nothing is retained between actions.
//!
//! ```
//! use stepscan_core::workflow::{solve_action, ScanSettings};
//!
//! let outcome = solve_action("e^x - 2", &ScanSettings::default()).unwrap();
//! assert!((outcome.scan.root.unwrap() - 2.0_f64.ln()).abs() < 0.1);
//! assert_eq!(outcome.frame.series.len(), 3);
//! ```

use crate::math::catalog::{Evaluator, FunctionCatalog};
use crate::math::sampling::SampleGenerator;
use crate::math::solvers::{LinearScanSolver, ScanConfig, ScanResult};
use crate::plot::{PlotDataAssembler, PlotFrame, Renderer};
use crate::types::{SamplePoint, ScanError, StepscanError};
use std::fmt;
use thiserror::Error;

/// Largest number of samples a single sweep may take.
///
/// Checked by [`ScanSettings::problems`]; the scanner and generator
/// themselves accept any finite step.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Numeric parameters shared by both actions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanSettings {
    /// Scan start
    pub start: f64,
    /// Scan step
    pub step: f64,
    /// Scan range
    pub range: f64,
    /// Lower end of the displayed curve, also the x-axis minimum
    pub display_min: f64,
    /// Upper end of the displayed curve, also the x-axis maximum
    pub display_max: f64,
    /// Spacing of the displayed curve
    pub display_step: f64,
    /// y-axis minimum
    pub y_min: f64,
    /// y-axis maximum
    pub y_max: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 0.1,
            range: 10.0,
            display_min: -10.0,
            display_max: 10.0,
            display_step: 0.1,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl ScanSettings {
    /// Every parameter violation, empty when the settings are usable.
    pub fn problems(&self) -> Vec<ScanError> {
        let mut problems = Vec::new();

        let named = [
            ("start", self.start),
            ("step", self.step),
            ("range", self.range),
            ("display_min", self.display_min),
            ("display_max", self.display_max),
            ("display_step", self.display_step),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                problems.push(ScanError::NonFiniteParameter { name });
            }
        }
        if !problems.is_empty() {
            return problems;
        }

        if self.step <= 0.0 {
            problems.push(ScanError::InvalidStep { step: self.step });
        }
        if self.display_step <= 0.0 {
            problems.push(ScanError::InvalidStep {
                step: self.display_step,
            });
        }
        if self.range < 0.0 {
            problems.push(ScanError::InvalidRange { range: self.range });
        }
        if self.display_min > self.display_max {
            problems.push(ScanError::InvalidDomain {
                lo: self.display_min,
                hi: self.display_max,
            });
        }
        if self.y_min > self.y_max {
            problems.push(ScanError::InvalidDomain {
                lo: self.y_min,
                hi: self.y_max,
            });
        }

        if self.step > 0.0 && self.range >= 0.0 {
            check_sample_count(self.range / self.step, &mut problems);
        }
        if self.display_step > 0.0 && self.display_min <= self.display_max {
            check_sample_count(
                (self.display_max - self.display_min) / self.display_step,
                &mut problems,
            );
        }

        problems
    }

    /// Scanner configuration derived from these settings.
    pub fn scan_config(&self) -> ScanConfig<f64> {
        ScanConfig {
            start: self.start,
            step: self.step,
            range: self.range,
        }
    }

    fn assembler(&self) -> PlotDataAssembler {
        PlotDataAssembler::new(self.display_min, self.display_max, self.y_min, self.y_max)
    }

    fn curve(&self, f: Evaluator) -> Result<Vec<SamplePoint<f64>>, ScanError> {
        SampleGenerator::generate(
            f.as_fn(),
            self.display_min,
            self.display_max,
            self.display_step,
        )
    }
}

fn check_sample_count(samples: f64, problems: &mut Vec<ScanError>) {
    if samples > MAX_SAMPLES as f64 {
        problems.push(ScanError::TooManySamples {
            samples,
            limit: MAX_SAMPLES,
        });
    }
}

/// The two user-triggered actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// Draw the function curve
    Plot,
    /// Scan for a root and draw curve, trail and solution
    Solve,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Plot => write!(f, "plot"),
            Action::Solve => write!(f, "solve"),
        }
    }
}

/// Result of a solve action.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// Raw scan output
    pub scan: ScanResult<f64>,
    /// Frame for the renderer
    pub frame: PlotFrame,
}

/// Error from [`run_action`]: either the action or the renderer failed.
#[derive(Error, Debug)]
pub enum RunError<E>
where
    E: std::error::Error + 'static,
{
    /// Resolving or computing failed
    #[error(transparent)]
    Action(#[from] StepscanError),

    /// The renderer rejected the frame
    #[error("Render failed: {0}")]
    Render(#[source] E),
}

/// Plot the curve of the named function.
///
/// # Errors
///
/// * `StepscanError::Catalog` - `name` is not in the catalog
/// * `StepscanError::Scan` - display parameters are invalid
pub fn plot_action(name: &str, settings: &ScanSettings) -> Result<PlotFrame, StepscanError> {
    let f = FunctionCatalog::resolve(name)?;
    let curve = settings.curve(f)?;
    Ok(settings.assembler().curve_only(&curve, f))
}

/// Scan the named function for a root and assemble the full frame.
///
/// # Errors
///
/// * `StepscanError::Catalog` - `name` is not in the catalog
/// * `StepscanError::Scan` - scan or display parameters are invalid
pub fn solve_action(name: &str, settings: &ScanSettings) -> Result<SolveOutcome, StepscanError> {
    let f = FunctionCatalog::resolve(name)?;
    let curve = settings.curve(f)?;
    let scan = LinearScanSolver::new(settings.scan_config()).scan_with_config(f.as_fn())?;
    let frame = settings
        .assembler()
        .assemble(&curve, &scan.trail, scan.root, f);

    Ok(SolveOutcome { scan, frame })
}

/// Run one action and hand its frame to `renderer` exactly once.
///
/// Returns the scan result for [`Action::Solve`], `None` for a plot.
pub fn run_action<R>(
    action: Action,
    name: &str,
    settings: &ScanSettings,
    mut renderer: R,
) -> Result<Option<ScanResult<f64>>, RunError<R::Error>>
where
    R: Renderer,
    R::Error: std::error::Error + 'static,
{
    let (frame, scan) = match action {
        Action::Plot => (plot_action(name, settings)?, None),
        Action::Solve => {
            let outcome = solve_action(name, settings)?;
            (outcome.frame, Some(outcome.scan))
        }
    };

    renderer.render(&frame).map_err(RunError::Render)?;
    Ok(scan)
}
