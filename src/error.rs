//! Error types for cue-synth.
//!
//! Every failure carries an [`ErrorCode`] so callers can tell configuration
//! problems (rejected before any file is touched) from I/O problems.

use std::fmt;

/// Broad classification of an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid parameters or configuration. Raised before synthesis.
    Configuration,
    /// Filesystem or container-format failure.
    Io,
}

/// Error codes for rendering failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Sample rate is zero.
    InvalidSampleRate,

    /// Duration is non-finite, non-positive, or yields no usable frame count.
    InvalidDuration,

    /// Render configuration is malformed.
    /// Trigger: bad file name, duplicate output, unparsable JSON.
    InvalidConfig,

    /// Creating, writing or finalizing the WAV file failed.
    WavWriteFailed,

    /// Reading a WAV file back from disk failed.
    WavReadFailed,

    /// Bytes do not form a PCM WAV header.
    InvalidWav,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::WavReadFailed => "WAV_READ_FAILED",
            ErrorCode::InvalidWav => "INVALID_WAV",
        }
    }

    /// Returns the kind of failure this code belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::InvalidSampleRate
            | ErrorCode::InvalidDuration
            | ErrorCode::InvalidConfig => ErrorKind::Configuration,
            ErrorCode::WavWriteFailed | ErrorCode::WavReadFailed | ErrorCode::InvalidWav => {
                ErrorKind::Io
            }
        }
    }

    /// Returns the pipeline step that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "configuration",
            ErrorCode::InvalidSampleRate | ErrorCode::InvalidDuration => "synthesis",
            ErrorCode::WavWriteFailed => "write",
            ErrorCode::WavReadFailed | ErrorCode::InvalidWav => "read",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "Sample rate must be a positive number of Hz",
            ErrorCode::InvalidDuration => {
                "Duration must be finite, positive and long enough to hold one frame"
            }
            ErrorCode::InvalidConfig => "Render configuration is invalid",
            ErrorCode::WavWriteFailed => "Failed to write WAV file",
            ErrorCode::WavReadFailed => "Failed to read WAV file",
            ErrorCode::InvalidWav => "Data is not a 16-bit PCM WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "Use a standard rate such as 44100 or 48000",
            ErrorCode::InvalidDuration => {
                "Specify a duration in seconds greater than one sample period (e.g., 0.08)"
            }
            ErrorCode::InvalidConfig => {
                "Give every sound a plain, unique file name and check the JSON syntax"
            }
            ErrorCode::WavWriteFailed => {
                "Check that the output directory exists, is writable and has free space"
            }
            ErrorCode::WavReadFailed => "Check that the file exists and is readable",
            ErrorCode::InvalidWav => "Regenerate the file; it may be truncated or corrupt",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for rendering operations.
#[derive(Debug)]
pub struct SynthError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SynthError {
    /// Creates a new SynthError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SynthError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(sample_rate: u32) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!("Invalid sample rate: {} Hz (must be > 0)", sample_rate),
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration_sec: f64, reason: &str) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("Invalid duration: {} seconds ({})", duration_sec, reason),
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfig, reason)
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(
        path: impl fmt::Display,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::WavWriteFailed,
            format!("Failed to write {}: {}", path, source),
            source,
        )
    }

    /// Creates a WAV_READ_FAILED error.
    pub fn wav_read_failed(
        path: impl fmt::Display,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::WavReadFailed,
            format!("Failed to read {}: {}", path, source),
            source,
        )
    }

    /// Creates an INVALID_WAV error.
    pub fn invalid_wav(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidWav, reason)
    }
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {}. Recovery: {}",
            self.code,
            self.code.stage(),
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SynthError.
pub type Result<T> = std::result::Result<T, SynthError>;
