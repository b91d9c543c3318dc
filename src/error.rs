// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Video(VideoError),
    Clipboard(String),
}

/// Reasons a video catalog is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog holds no entries.
    Empty,

    /// Two entries share the same id.
    DuplicateId(u32),

    /// An entry's outcome is not a die face (1 to 6).
    OutcomeOutOfRange { id: u32, outcome: i64 },

    /// The catalog file could not be parsed.
    Malformed(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Empty => "error-catalog-empty",
            CatalogError::DuplicateId(_) => "error-catalog-duplicate-id",
            CatalogError::OutcomeOutOfRange { .. } => "error-catalog-outcome-range",
            CatalogError::Malformed(_) => "error-catalog-malformed",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Catalog contains no videos"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate video id: {}", id),
            CatalogError::OutcomeOutOfRange { id, outcome } => {
                write!(f, "Video {} has outcome {} outside 1-6", id, outcome)
            }
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog: {}", msg),
        }
    }
}

/// Specific error types for video playback issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    /// File format is not supported (e.g., unknown extension)
    UnsupportedFormat,

    /// Video codec is not supported by the system's FFmpeg
    UnsupportedCodec(String),

    /// File appears corrupted or has invalid data
    CorruptedFile,

    /// File exists but contains no video stream
    NoVideoStream,

    /// Decoding failed during playback
    DecodingFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),

    /// The decoder thread is gone
    TransportClosed,

    /// Generic error with raw message
    Other(String),
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::UnsupportedFormat => "error-load-video-unsupported-format",
            VideoError::UnsupportedCodec(_) => "error-load-video-unsupported-codec",
            VideoError::CorruptedFile => "error-load-video-corrupted",
            VideoError::NoVideoStream => "error-load-video-no-video-stream",
            VideoError::DecodingFailed(_) => "error-load-video-decoding-failed",
            VideoError::IoError(_) => "error-load-video-io",
            VideoError::TransportClosed => "error-load-video-transport-closed",
            VideoError::Other(_) => "error-load-video-general",
        }
    }

    /// Attempts to parse a raw error message into a specific VideoError type.
    /// This is used to categorize errors from FFmpeg/decoder.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec errors first, they might contain "not found"
        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return VideoError::UnsupportedCodec(codec);
            } else if msg_lower.contains("not found") || msg_lower.contains("unsupported") {
                return VideoError::DecodingFailed(msg.to_string());
            }
        }

        if msg_lower.contains("no such file")
            || (msg_lower.contains("not found") && !msg_lower.contains("decoder"))
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return VideoError::IoError(msg.to_string());
        }

        if msg_lower.contains("no video stream")
            || msg_lower.contains("no video track")
            || msg_lower.contains("invalid data found")
        {
            return VideoError::NoVideoStream;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return VideoError::CorruptedFile;
        }

        if msg_lower.contains("packet")
            || msg_lower.contains("scaling")
            || msg_lower.contains("seek")
            || msg_lower.contains("decode")
            || msg_lower.contains("unsupported")
        {
            return VideoError::DecodingFailed(msg.to_string());
        }

        VideoError::Other(msg.to_string())
    }

    /// Tries to extract a codec name from an error message.
    fn extract_codec_name(msg: &str) -> Option<String> {
        // "codec 'xyz' not found", "decoder xyz not found"
        let codecs = ["h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2"];
        for codec in codecs {
            if msg.contains(codec) {
                return Some(codec.to_uppercase());
            }
        }
        None
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::UnsupportedFormat => write!(f, "Unsupported video format"),
            VideoError::UnsupportedCodec(codec) => {
                write!(f, "Unsupported video codec: {}", codec)
            }
            VideoError::CorruptedFile => write!(f, "Video file is corrupted"),
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            VideoError::IoError(msg) => write!(f, "I/O error: {}", msg),
            VideoError::TransportClosed => write!(f, "Video decoder is not running"),
            VideoError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
