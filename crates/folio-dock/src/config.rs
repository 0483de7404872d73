#![forbid(unsafe_code)]

//! Tunable dock parameters.
//!
//! Every field defaults to the values the portfolio dock ships with, so
//! `DockConfig::default()` is the canonical behavior. With the `config`
//! feature the whole struct loads from TOML or JSON; missing fields keep
//! their defaults.
//!
//! ```toml
//! [tracker]
//! home_id = "hero"
//! near_top_px = 100.0
//!
//! [magnification]
//! reach_px = 150.0
//! primary_max_width = 80.0
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::nav::HOME_SECTION_ID;

/// Top-level dock configuration.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DockConfig {
    pub tracker: TrackerConfig,
    pub magnification: MagnificationConfig,
    pub spring: SpringConfig,
    pub frame: FrameConfig,
}

/// Section-tracker heuristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TrackerConfig {
    /// Section id forced active near the top of the page.
    pub home_id: String,
    /// Scroll offsets below this force the home section.
    pub near_top_px: f64,
    /// The activation line sits `viewport_height / threshold_divisor` below
    /// the scroll offset.
    pub threshold_divisor: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            home_id: HOME_SECTION_ID.to_owned(),
            near_top_px: 100.0,
            threshold_divisor: 3.0,
        }
    }
}

/// Width profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct MagnificationConfig {
    /// Pointer distance at which magnification falls back to `min_width`.
    pub reach_px: f64,
    pub min_width: f64,
    /// Width of a nav icon directly under the pointer.
    pub primary_max_width: f64,
    /// Width of an action button directly under the pointer.
    pub secondary_max_width: f64,
}

impl Default for MagnificationConfig {
    fn default() -> Self {
        Self {
            reach_px: 150.0,
            min_width: 40.0,
            primary_max_width: 80.0,
            secondary_max_width: 60.0,
        }
    }
}

/// Per-icon spring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 0.1,
            stiffness: 150.0,
            damping: 12.0,
        }
    }
}

/// Frame stepping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FrameConfig {
    /// Upper bound on a single frame delta, in milliseconds.
    pub max_frame_dt_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_dt_ms: 64,
        }
    }
}

impl FrameConfig {
    #[must_use]
    pub fn max_frame_dt(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.max_frame_dt_ms)
    }
}

impl DockConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, DockConfigError> {
        let config: Self = toml::from_str(s).map_err(DockConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DockConfigError> {
        let content = read_config(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, DockConfigError> {
        let config: Self = serde_json::from_str(s).map_err(DockConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DockConfigError> {
        let content = read_config(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check all parameters. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.tracker.home_id.is_empty() {
            errors.push("tracker.home_id must not be empty".into());
        }
        if !self.tracker.near_top_px.is_finite() || self.tracker.near_top_px < 0.0 {
            errors.push(format!(
                "tracker.near_top_px must be finite and >= 0, got {}",
                self.tracker.near_top_px
            ));
        }
        let divisor = self.tracker.threshold_divisor;
        if !(divisor.is_finite() && divisor >= 1.0) {
            errors.push(format!(
                "tracker.threshold_divisor must be finite and >= 1, got {divisor}"
            ));
        }

        let m = &self.magnification;
        if !(m.reach_px.is_finite() && m.reach_px > 0.0) {
            errors.push(format!("magnification.reach_px must be > 0, got {}", m.reach_px));
        }
        if !(m.min_width.is_finite() && m.min_width > 0.0) {
            errors.push(format!("magnification.min_width must be > 0, got {}", m.min_width));
        }
        for (name, max) in [
            ("primary_max_width", m.primary_max_width),
            ("secondary_max_width", m.secondary_max_width),
        ] {
            if !max.is_finite() || max < m.min_width {
                errors.push(format!(
                    "magnification.{name} must be finite and >= min_width ({}), got {max}",
                    m.min_width
                ));
            }
        }

        let s = &self.spring;
        if !(s.mass.is_finite() && s.mass > 0.0) {
            errors.push(format!("spring.mass must be > 0, got {}", s.mass));
        }
        if !(s.stiffness.is_finite() && s.stiffness > 0.0) {
            errors.push(format!("spring.stiffness must be > 0, got {}", s.stiffness));
        }
        if !(s.damping.is_finite() && s.damping >= 0.0) {
            errors.push(format!("spring.damping must be >= 0, got {}", s.damping));
        }

        if self.frame.max_frame_dt_ms == 0 {
            errors.push("frame.max_frame_dt_ms must be > 0".into());
        }

        errors
    }

    /// Return `self` if valid, otherwise the validation errors.
    pub fn validated(self) -> Result<Self, DockConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(DockConfigError::Invalid(errors))
        }
    }
}

#[cfg(feature = "config")]
fn read_config(path: &Path) -> Result<String, DockConfigError> {
    std::fs::read_to_string(path).map_err(|source| DockConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Why a [`DockConfig`] could not be produced.
#[derive(Debug)]
pub enum DockConfigError {
    /// The config file could not be read.
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// The document parsed but some fields are out of range, one message
    /// per field.
    Invalid(Vec<String>),
}

impl DockConfigError {
    /// Field messages for [`DockConfigError::Invalid`]; empty otherwise.
    #[must_use]
    pub fn problems(&self) -> &[String] {
        match self {
            Self::Invalid(problems) => problems,
            _ => &[],
        }
    }
}

impl std::fmt::Display for DockConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read dock config {}: {source}", path.display())
            }
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "dock config is not valid TOML: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "dock config is not valid JSON: {e}"),
            Self::Invalid(problems) => {
                write!(f, "dock config rejected: {}", problems.join("; "))
            }
        }
    }
}

impl std::error::Error for DockConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DockConfig::default();
        assert!(config.validate().is_empty(), "{:?}", config.validate());
        assert_eq!(config.tracker.home_id, "hero");
        assert_eq!(config.tracker.threshold_divisor, 3.0);
        assert!((config.magnification.primary_max_width - 80.0).abs() < f64::EPSILON);
        assert!((config.magnification.secondary_max_width - 60.0).abs() < f64::EPSILON);
        assert!((config.spring.mass - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.frame.max_frame_dt().as_millis(), 64);
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = DockConfig::default();
        config.tracker.threshold_divisor = 0.5;
        config.magnification.min_width = 100.0;
        config.spring.stiffness = -1.0;
        config.frame.max_frame_dt_ms = 0;
        let errors = config.validate();
        assert_eq!(errors.len(), 5, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("threshold_divisor")));
        assert!(errors.iter().any(|e| e.contains("primary_max_width")));
        assert!(errors.iter().any(|e| e.contains("secondary_max_width")));
        assert!(errors.iter().any(|e| e.contains("spring.stiffness")));
    }

    #[test]
    fn validated_wraps_errors() {
        let mut config = DockConfig::default();
        config.tracker.home_id.clear();
        let err = config.validated().unwrap_err();
        assert_eq!(err.problems(), ["tracker.home_id must not be empty".to_owned()]);
        assert!(err.to_string().starts_with("dock config rejected: tracker.home_id"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let config = DockConfig::from_toml_str(
            r#"
            [tracker]
            near_top_px = 50.0

            [magnification]
            primary_max_width = 96.0
            "#,
        )
        .unwrap();
        assert!((config.tracker.near_top_px - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.tracker.home_id, "hero");
        assert!((config.magnification.primary_max_width - 96.0).abs() < f64::EPSILON);
        assert!((config.magnification.min_width - 40.0).abs() < f64::EPSILON);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_round_trip_and_rejects_invalid() {
        let json = r#"{"spring": {"mass": 0.2}}"#;
        let config = DockConfig::from_json_str(json).unwrap();
        assert!((config.spring.mass - 0.2).abs() < f64::EPSILON);
        assert!((config.spring.damping - 12.0).abs() < f64::EPSILON);

        let bad = r#"{"spring": {"mass": 0.0}}"#;
        assert!(matches!(
            DockConfig::from_json_str(bad),
            Err(DockConfigError::Invalid(_))
        ));
        assert!(matches!(
            DockConfig::from_json_str("{"),
            Err(DockConfigError::Json(_))
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn loads_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[frame]\nmax_frame_dt_ms = 32").unwrap();
        let config = DockConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.frame.max_frame_dt_ms, 32);

        let missing_path = file.path().with_extension("missing");
        let err = DockConfig::from_toml_file(&missing_path).unwrap_err();
        assert!(matches!(&err, DockConfigError::Read { path, .. } if *path == missing_path));
        assert!(err.to_string().starts_with("cannot read dock config"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.problems().is_empty());
    }
}
