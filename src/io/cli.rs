//! Command-line interface for batch decomposition of tile record files

use crate::algorithm::driver::{
    Decomposition, DecompositionConfig, Shape, TargetCardinality, decompose,
};
use crate::algorithm::selection::AreaOrdering;
use crate::io::configuration::{
    DEFAULT_MAX_CLUSTER_SIZE, INPUT_EXTENSIONS, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::records::{read_shapes_from_path, write_decompositions_to_path};
use crate::io::wkt::GridCoordinate;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Tie policy for rectangles of equal area during bounded selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
    /// Keep the order rectangles have within their grouping
    #[default]
    Stable,
    /// Order by lower-left corner, then upper-right corner
    Position,
}

impl From<TieBreak> for AreaOrdering {
    fn from(tie_break: TieBreak) -> Self {
        match tie_break {
            TieBreak::Stable => Self::Descending,
            TieBreak::Position => Self::DescendingThenPosition,
        }
    }
}

#[derive(Parser)]
#[command(name = "rectile")]
#[command(
    author,
    version,
    about = "Decompose contiguous tile clusters into minimal sets of merged rectangles"
)]
/// Command-line arguments for the decomposition tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input record file or directory of record files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output CSV path (single input file only; defaults to <input>_tiled.csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Desired number of rectangles per shape (default: the minimal number)
    #[arg(short, long, value_name = "COUNT")]
    pub tiles: Option<usize>,

    /// Largest shape, in tiles, that is decomposed
    #[arg(short, long, default_value_t = DEFAULT_MAX_CLUSTER_SIZE)]
    pub max_cluster: usize,

    /// Ordering of equal-area rectangles during bounded selection
    #[arg(long, value_enum, default_value_t = TieBreak::Stable)]
    pub tie_break: TieBreak,

    /// Decompose shapes one at a time instead of in parallel
    #[arg(short = 'S', long)]
    pub sequential: bool,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Requested rectangle count
    ///
    /// # Errors
    ///
    /// Returns an error if a count of zero was requested.
    pub fn target_cardinality(&self) -> Result<TargetCardinality> {
        match self.tiles {
            Some(0) => Err(invalid_parameter(
                "tiles",
                &0,
                &"at least one rectangle must be requested",
            )),
            tiles => Ok(TargetCardinality::from_option(tiles)),
        }
    }

    /// Decomposition settings derived from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target count or cluster limit is invalid.
    pub fn decomposition_config(&self) -> Result<DecompositionConfig> {
        if self.max_cluster == 0 {
            return Err(invalid_parameter(
                "max-cluster",
                &self.max_cluster,
                &"must allow at least one tile",
            ));
        }

        Ok(DecompositionConfig {
            target: self.target_cardinality()?,
            max_cluster_size: self.max_cluster,
            area_ordering: self.tie_break.into(),
        })
    }
}

/// Install the logger, honouring `RUST_LOG` when set
///
/// Defaults to `info`, or `warn` when quiet. Repeated calls are harmless.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

/// Totals over a processing run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Input files processed
    pub files: usize,
    /// Shapes read
    pub shapes: usize,
    /// Shapes decomposed successfully
    pub decomposed: usize,
    /// Shapes skipped as non-contiguous or too large
    pub skipped: usize,
    /// Output rows written
    pub rows: usize,
}

/// Orchestrates batch processing of tile record files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, reading, or writing fails.
    /// Shapes that are non-contiguous or too large are skipped, not errors.
    pub fn process(&mut self) -> Result<BatchSummary> {
        let config = self.cli.decomposition_config()?;
        let files = self.collect_files()?;
        let mut summary = BatchSummary::default();

        if files.is_empty() {
            return Ok(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, (input, output)) in files.iter().enumerate() {
            let file_summary = self.process_file(input, output, index, &config)?;
            summary.files += 1;
            summary.shapes += file_summary.shapes;
            summary.decomposed += file_summary.decomposed;
            summary.skipped += file_summary.skipped;
            summary.rows += file_summary.rows;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(summary)
    }

    /// Pair every input file with its output path
    fn collect_files(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        let target = &self.cli.target;

        if target.is_file() {
            let output = self
                .cli
                .output
                .clone()
                .unwrap_or_else(|| Self::get_output_path(target));
            if self.should_process_file(target, &output) {
                Ok(vec![(target.clone(), output)])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if let Some(ref output) = self.cli.output {
                return Err(invalid_parameter(
                    "output",
                    &output.display(),
                    &"an explicit output requires a single input file",
                ));
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "list directory")? {
                let path = entry.with_path(target, "list directory")?.path();
                if Self::is_input_file(&path) {
                    let output = Self::get_output_path(&path);
                    if self.should_process_file(&path, &output) {
                        files.push((path, output));
                    }
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a record file or directory",
            ))
        }
    }

    fn is_input_file(path: &Path) -> bool {
        let has_input_extension = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|extension| INPUT_EXTENSIONS.contains(&extension));
        let is_previous_output = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        path.is_file() && has_input_extension && !is_previous_output
    }

    fn should_process_file(&self, input_path: &Path, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }
        log::info!("Skipping: {} (output exists)", input_path.display());
        false
    }

    fn process_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        index: usize,
        config: &DecompositionConfig,
    ) -> Result<BatchSummary> {
        let start_time = Instant::now();
        log::info!("Input file: {}", input_path.display());
        log::info!("Output file: {}", output_path.display());

        let shapes = read_shapes_from_path(input_path)?;
        let progress = self.progress_manager.as_ref();
        if let Some(pm) = progress {
            pm.start_file(index, input_path, shapes.len());
        }

        let decompose_one = |shape: &Shape<GridCoordinate>| {
            log::debug!("Shape {} with {} tiles", shape.id, shape.len());
            let outcome = decompose(shape, config);
            if let Some(pm) = progress {
                pm.shape_finished(index);
            }
            outcome
        };

        let outcomes: Vec<Result<Decomposition<GridCoordinate>>> = if self.cli.sequential {
            shapes.iter().map(decompose_one).collect()
        } else {
            shapes.par_iter().map(decompose_one).collect()
        };

        let mut decompositions = Vec::with_capacity(outcomes.len());
        let mut skipped = 0;
        for outcome in outcomes {
            match outcome {
                Ok(decomposition) => decompositions.push(decomposition),
                Err(error) if error.is_shape_local() => {
                    log::warn!("{error}");
                    skipped += 1;
                }
                Err(error) => return Err(error),
            }
        }

        let rows = write_decompositions_to_path(output_path, &decompositions)?;
        log::info!(
            "{}: {} shapes decomposed, {} skipped, {} rows written",
            input_path.display(),
            decompositions.len(),
            skipped,
            rows
        );

        if let Some(pm) = progress {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(BatchSummary {
            files: 1,
            shapes: shapes.len(),
            decomposed: decompositions.len(),
            skipped,
            rows,
        })
    }

    /// Output path derived from an input path, e.g. `shapes.txt` -> `shapes_tiled.csv`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
