//! Policy configuration file support.
//!
//! The scheduling and group-capacity rules are driven by four numeric
//! parameters read once at startup from a TOML file. Failure to load the
//! file is fatal: no mutation service can be constructed without a
//! `Policy`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ServiceError, ServiceResult};

/// Immutable numeric policy, shared by the group and scheduling services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Minimum number of students a group may be created with.
    pub min_students: usize,
    /// Maximum number of students a group may hold.
    pub max_students: usize,
    /// Exact length of a single class session, in minutes.
    pub session_minutes: i64,
    /// Maximum total session minutes per teacher (and per group) on one
    /// calendar day.
    pub daily_cap_minutes: i64,
}

/// Policy configuration as read from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub group: GroupSettings,
    #[serde(default)]
    pub classes: ClassSettings,
}

/// Group size bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSettings {
    #[serde(default = "default_min_students")]
    pub min_students: usize,
    #[serde(default = "default_max_students")]
    pub max_students: usize,
}

/// Class session length and daily workload cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSettings {
    #[serde(default = "default_session_minutes")]
    pub session_minutes: i64,
    #[serde(default = "default_daily_cap_minutes")]
    pub daily_cap_minutes: i64,
}

fn default_min_students() -> usize {
    1
}

fn default_max_students() -> usize {
    30
}

fn default_session_minutes() -> i64 {
    90
}

fn default_daily_cap_minutes() -> i64 {
    450
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            min_students: default_min_students(),
            max_students: default_max_students(),
        }
    }
}

impl Default for ClassSettings {
    fn default() -> Self {
        Self {
            session_minutes: default_session_minutes(),
            daily_cap_minutes: default_daily_cap_minutes(),
        }
    }
}

impl PolicyConfig {
    /// Load policy configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ServiceError::Configuration(format!("failed to read policy file: {e}"))
        })?;

        let config: PolicyConfig = toml::from_str(&content).map_err(|e| {
            ServiceError::Configuration(format!("failed to parse policy file: {e}"))
        })?;

        config.check()?;
        Ok(config)
    }

    /// Load policy configuration from the default location.
    ///
    /// Searches for `policy.toml` in the current directory, then the
    /// parent directory.
    pub fn from_default_location() -> ServiceResult<Self> {
        let search_paths = vec![
            PathBuf::from("policy.toml"),
            PathBuf::from("../policy.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ServiceError::Configuration(
            "no policy.toml found in standard locations".to_string(),
        ))
    }

    /// Reject bounds that no request could ever satisfy.
    fn check(&self) -> ServiceResult<()> {
        if self.group.min_students == 0 || self.group.min_students > self.group.max_students {
            return Err(ServiceError::Configuration(format!(
                "invalid group size bounds [{}, {}]",
                self.group.min_students, self.group.max_students
            )));
        }
        if self.classes.session_minutes <= 0 {
            return Err(ServiceError::Configuration(format!(
                "session length must be positive, got {}",
                self.classes.session_minutes
            )));
        }
        if self.classes.daily_cap_minutes < self.classes.session_minutes {
            return Err(ServiceError::Configuration(format!(
                "daily cap {} shorter than one session of {}",
                self.classes.daily_cap_minutes, self.classes.session_minutes
            )));
        }
        Ok(())
    }

    pub fn policy(&self) -> Policy {
        Policy {
            min_students: self.group.min_students,
            max_students: self.group.max_students,
            session_minutes: self.classes.session_minutes,
            daily_cap_minutes: self.classes.daily_cap_minutes,
        }
    }
}
