// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A navigation or zoom target pointed past the last slide group.
    SlideOutOfRange { slide: usize, slide_count: usize },

    /// No animation strategy is registered under the requested name.
    UnsupportedAnimation(String),

    Io(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::SlideOutOfRange { .. } => "error-slide-out-of-range",
            Error::UnsupportedAnimation(_) => "error-unsupported-animation",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SlideOutOfRange { slide, slide_count } => {
                write!(f, "Slide {} out of range (slide count {})", slide, slide_count)
            }
            Error::UnsupportedAnimation(kind) => {
                write!(f, "Animation of type {} is not supported", kind)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_out_of_range() {
        let err = Error::SlideOutOfRange {
            slide: 3,
            slide_count: 3,
        };
        assert_eq!(format!("{}", err), "Slide 3 out of range (slide count 3)");
    }

    #[test]
    fn display_formats_unsupported_animation() {
        let err = Error::UnsupportedAnimation("wobble".to_string());
        assert_eq!(format!("{}", err), "Animation of type wobble is not supported");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn i18n_keys_are_distinct_per_variant() {
        assert_eq!(
            Error::SlideOutOfRange {
                slide: 0,
                slide_count: 0
            }
            .i18n_key(),
            "error-slide-out-of-range"
        );
        assert_eq!(
            Error::UnsupportedAnimation(String::new()).i18n_key(),
            "error-unsupported-animation"
        );
    }
}
