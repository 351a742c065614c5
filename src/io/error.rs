//! Error types and context management for decomposition runs

use std::fmt;
use std::path::PathBuf;

/// Main error type for all decomposition operations
#[derive(Debug)]
pub enum TilingError {
    /// Tile geometry text could not be turned into a rectangle
    InvalidGeometry {
        /// Input line of the offending record (0 when unknown)
        line: usize,
        /// The geometry text as read
        text: String,
        /// Explanation of what is wrong with it
        reason: String,
    },

    /// Input records don't meet format requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Shape tiles do not form one edge-connected cluster
    ///
    /// The shape is skipped; no partial decomposition is produced.
    NonContiguousShape {
        /// Identifier of the rejected shape
        shape_id: String,
        /// Number of tiles in the shape
        tiles: usize,
        /// Number of separate connected pieces found
        components: usize,
    },

    /// Shape has more tiles than the configured enumeration limit
    ClusterTooLarge {
        /// Identifier of the rejected shape
        shape_id: String,
        /// Number of tiles in the shape
        tiles: usize,
        /// Largest tile count that is decomposed
        limit: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Reading or writing delimited records failed
    Csv {
        /// Path of the file being processed
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TilingError {
    /// Test whether the error disqualifies only a single shape
    ///
    /// Such errors are reported and the run continues with the next shape.
    pub const fn is_shape_local(&self) -> bool {
        matches!(
            self,
            Self::NonContiguousShape { .. } | Self::ClusterTooLarge { .. }
        )
    }
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { line, text, reason } => {
                write!(f, "Invalid geometry on line {line} '{text}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::NonContiguousShape {
                shape_id,
                tiles,
                components,
            } => {
                write!(
                    f,
                    "Shape {shape_id} with {tiles} tiles is not contiguous ({components} separate pieces)"
                )
            }
            Self::ClusterTooLarge {
                shape_id,
                tiles,
                limit,
            } => {
                write!(
                    f,
                    "Shape {shape_id} has {tiles} tiles, more than the limit of {limit}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Csv { path, source } => {
                write!(f, "Record error in '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for decomposition results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File being processed
    pub path: Option<PathBuf>,
    /// Input line being processed
    pub line: Option<usize>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with file and record information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add the file path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<TilingError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                TilingError::InvalidGeometry { line, .. } => {
                    if let Some(context_line) = context.line {
                        *line = context_line;
                    }
                }
                TilingError::Csv { path, .. } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                }
                TilingError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<csv::Error> for TilingError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid geometry error with an unknown line
pub fn invalid_geometry(text: &str, reason: &impl ToString) -> TilingError {
    TilingError::InvalidGeometry {
        line: 0,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}
