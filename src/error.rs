use thiserror::Error;

/// The only failure the engines recognise: nothing to draw on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("no window or document available")]
    NoDocument,
    #[error("canvas #{0} not found")]
    CanvasMissing(&'static str),
    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("2D context unavailable on #{id}: {reason}")]
    NoContext { id: &'static str, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} range {start}..{end} is empty")]
    EmptyRange {
        field: &'static str,
        start: f32,
        end: f32,
    },
    #[error("glyph token table is empty")]
    EmptyTokenTable,
}

/// Why an engine did not start. Reported once, never escalated.
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("browser call failed: {0}")]
    Browser(String),
}
