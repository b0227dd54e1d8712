//! Command-line interface for generating density drawables from one image

use crate::generation::pipeline::{PipelineConfig, run};
use crate::generation::{GenerationReport, NoopObserver, Outcome};
use crate::io::configuration::{DENSITY_IDENTIFIERS, default_output_root};
use crate::io::error::{DrawableError, Result};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "drawablegen")]
#[command(
    author,
    version,
    about = "Generate Android density drawables from a single xxxhdpi image"
)]
/// Command-line arguments for the drawable generator
pub struct Cli {
    /// Source image (png, jpg, jpeg, bmp, gif or webp), authored at xxxhdpi
    #[arg(value_name = "IMAGE")]
    pub input: PathBuf,

    /// Comma-separated densities to generate
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values = DENSITY_IDENTIFIERS
    )]
    pub densities: Vec<String>,

    /// Output directory [default: generated_drawables next to the executable,
    /// cleared before every run]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress and the success summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Log each step of the run
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Requested densities with blank and repeated entries removed
    pub fn selected_densities(&self) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        for density in self.densities.iter().map(|density| density.trim()) {
            if !density.is_empty() && !selected.iter().any(|kept| kept == density) {
                selected.push(density.to_string());
            }
        }
        selected
    }

    /// Output root to write to, falling back to `default_root`
    pub fn output_root(&self, default_root: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_root.to_path_buf())
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one generation from parsed arguments and reports the outcome
pub struct DrawableGenerator {
    cli: Cli,
    default_output_root: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl DrawableGenerator {
    /// Create a generator whose default output root sits beside the executable
    pub fn new(cli: Cli) -> Self {
        Self::with_default_output_root(cli, default_output_root())
    }

    /// Create a generator with an explicit default output root
    pub fn with_default_output_root(cli: Cli, default_output_root: impl Into<PathBuf>) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            default_output_root: default_output_root.into(),
            progress_manager,
        }
    }

    /// Pipeline inputs derived from the arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.cli.input.clone(),
            densities: self.cli.selected_densities(),
            output_root: self.cli.output_root(&self.default_output_root),
            default_output_root: self.default_output_root.clone(),
        }
    }

    /// Generate all requested densities and print the outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid, the source image cannot be
    /// decoded, the default output root cannot be cleared, or every requested
    /// density failed
    pub fn process(&mut self) -> Result<GenerationReport> {
        let config = self.pipeline_config();

        let report = if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(config.densities.len());
            let result = run(&config, pm);
            pm.finish();
            result?
        } else {
            run(&config, &mut NoopObserver)?
        };

        self.print_outcome(&report, &config.output_root);

        if report.outcome() == Outcome::Failure {
            return Err(DrawableError::NothingGenerated {
                failed: report.failures().len(),
            });
        }

        Ok(report)
    }

    // Allow print for the user-facing run summary
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn print_outcome(&self, report: &GenerationReport, output_root: &Path) {
        let lines = summary_lines(report, output_root);
        match report.outcome() {
            Outcome::Success => {
                if !self.cli.quiet {
                    for line in lines {
                        println!("{line}");
                    }
                }
            }
            Outcome::PartialSuccess | Outcome::Failure => {
                for line in lines {
                    eprintln!("{line}");
                }
            }
        }
    }
}

/// User-facing description of a finished run, one entry per line
pub fn summary_lines(report: &GenerationReport, output_root: &Path) -> Vec<String> {
    if report.outcome() == Outcome::Success {
        return vec![format!(
            "Generated {} images successfully in '{}'.",
            report.success_count(),
            output_root.display()
        )];
    }

    let mut lines = vec![format!(
        "Generated {} images, but encountered errors:",
        report.success_count()
    )];
    lines.extend(report.failures().iter().map(|failure| {
        format!(
            "Error generating {}: {}",
            failure.density,
            failure.message()
        )
    }));
    lines
}
