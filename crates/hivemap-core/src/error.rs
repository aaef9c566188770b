use thiserror::Error;

/// Contract violations in the geospatial engine.
///
/// Every variant is an invalid argument from the caller. An empty result
/// set is never an error — these only fire on malformed coordinates or a
/// nonsensical radius, so misuse surfaces instead of producing silently
/// wrong distances.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("search radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vendors file {path}: {source}")]
    VendorsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vendors file: {0}")]
    VendorsFileParse(#[from] serde_yaml::Error),

    #[error("vendors file validation failed: {0}")]
    Validation(String),
}
