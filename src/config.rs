//! Dashboard configuration.
//!
//! The two source variants (sub-daily epoch-second files versus day-serial
//! files with a baseline comparison) are expressed as one configuration
//! shape rather than duplicated code paths: variable names, the timestamp
//! encoding, and the optional baseline block all live here.
//!
//! The baseline overlap window bounds are literal constants describing the
//! period over which the two instruments are considered comparable. They are
//! domain knowledge, not derived from the data, which is why they are
//! configuration rather than logic.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Timestamp encoding used by the primary series' time variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEncoding {
    /// Unix epoch seconds, decoded to a date-time.
    EpochSeconds,
    /// 1-based day count from 1970-01-01, truncated to day granularity.
    DaySerial,
}

/// Where data files live and how they are recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory scanned for data files.
    pub data_dir: PathBuf,
    /// File extension (without dot) selecting catalog entries.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "nc".to_string()
}

/// Primary (locally measured) series source description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimarySeriesConfig {
    /// Series name used as column label and chart legend entry.
    pub label: String,
    /// Name of the timestamp variable inside each data file.
    pub time_variable: String,
    /// Name of the measurement variable inside each data file.
    pub value_variable: String,
    pub time_encoding: TimeEncoding,
}

/// Reference baseline series source description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Series name used as column label and chart legend entry.
    pub label: String,
    /// Plain-text table with year/month/day/value columns.
    pub path: PathBuf,
    /// First day (inclusive) of the instrument-comparability window.
    pub overlap_start: NaiveDate,
    /// Last day (inclusive) of the instrument-comparability window.
    pub overlap_end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub catalog: CatalogConfig,
    pub primary: PrimarySeriesConfig,
    /// Absent for the single-series variant without a comparison chart.
    #[serde(default)]
    pub baseline: Option<BaselineConfig>,
}

fn default_title() -> String {
    "Carbon Dioxide Dry Column-Averaged Mixing Ratios".to_string()
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: DashboardConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            catalog: CatalogConfig {
                data_dir: PathBuf::from("data"),
                extension: default_extension(),
            },
            primary: PrimarySeriesConfig {
                label: "karlsruhe".to_string(),
                time_variable: "time".to_string(),
                value_variable: "xco2".to_string(),
                time_encoding: TimeEncoding::EpochSeconds,
            },
            baseline: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.catalog.extension, "nc");
        assert_eq!(config.primary.value_variable, "xco2");
        assert_eq!(config.primary.time_encoding, TimeEncoding::EpochSeconds);
        assert!(config.baseline.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            title = "XCO2 View"

            [catalog]
            data_dir = "data"
            extension = "nc"

            [primary]
            label = "karlsruhe"
            time_variable = "date"
            value_variable = "xco2_daily"
            time_encoding = "day_serial"

            [baseline]
            label = "global"
            path = "data/co2_daily_global.txt"
            overlap_start = "2010-04-18"
            overlap_end = "2020-11-29"
        "#;

        let config: DashboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.primary.time_encoding, TimeEncoding::DaySerial);

        let baseline = config.baseline.unwrap();
        assert_eq!(baseline.label, "global");
        assert_eq!(
            baseline.overlap_start,
            NaiveDate::from_ymd_opt(2010, 4, 18).unwrap()
        );
        assert_eq!(
            baseline.overlap_end,
            NaiveDate::from_ymd_opt(2020, 11, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml_str = r#"
            [catalog]
            data_dir = "data"

            [primary]
            label = "local"
            time_variable = "time"
            value_variable = "xco2"
            time_encoding = "epoch_seconds"
        "#;

        let config: DashboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.extension, "nc");
        assert!(config.baseline.is_none());
        assert_eq!(config.title, default_title());
    }
}
