use std::{fs, io, path::Path};

use liftlab_domain as domain;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, json::from_object};

/// Settings as stored in a JSON file.
///
/// Missing fields take their default value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub analysis_window_days: u32,
    pub push_pull_ratio: f64,
    pub upper_lower_ratio: f64,
    pub dominant_muscle_percentage: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(domain::Settings::default())
    }
}

impl From<domain::Settings> for Settings {
    fn from(value: domain::Settings) -> Self {
        Self {
            analysis_window_days: value.analysis_window_days,
            push_pull_ratio: value.push_pull_ratio,
            upper_lower_ratio: value.upper_lower_ratio,
            dominant_muscle_percentage: value.dominant_muscle_percentage,
        }
    }
}

impl From<Settings> for domain::Settings {
    fn from(value: Settings) -> Self {
        Self {
            analysis_window_days: value.analysis_window_days,
            push_pull_ratio: value.push_pull_ratio,
            upper_lower_ratio: value.upper_lower_ratio,
            dominant_muscle_percentage: value.dominant_muscle_percentage,
        }
    }
}

pub fn parse_settings(json: &str) -> Result<domain::Settings, Error> {
    Ok(from_object::<Settings>(json)?.into())
}

/// Reads the settings file at `path`, or returns the default settings if the
/// file does not exist.
pub fn read_settings(path: &Path) -> Result<domain::Settings, Error> {
    match fs::read_to_string(path) {
        Ok(json) => parse_settings(&json),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no settings file at {}", path.display());
            Ok(domain::Settings::default())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn write_settings(path: &Path, settings: domain::Settings) -> Result<(), Error> {
    fs::write(
        path,
        serde_json::to_string_pretty(&Settings::from(settings))?,
    )?;
    Ok(())
}
