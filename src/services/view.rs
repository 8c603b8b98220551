//! Dashboard view derivation.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::chart::compose_interactive_chart;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::io::{load_primary_series, open_source, series_day_bounds, ArraySource};
use crate::parsing::parse_baseline_file;
use crate::transform::{
    filter_date_range, filter_time_range, join_baseline, resample_daily, to_long_form,
};

/// User-controlled inputs of one render cycle.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub file_id: String,
    /// Inclusive range start; defaults to the series' first day.
    pub start: Option<NaiveDate>,
    /// Inclusive range end; defaults to the series' last day.
    pub end: Option<NaiveDate>,
    pub show_primary: bool,
    pub show_baseline: bool,
}

/// One fully derived render: chart specification plus range metadata.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub file_id: String,
    /// First and last day of the unfiltered table, bounding the range slider.
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    /// Number of (timestamp, series, value) points on the chart. Zero means
    /// an empty chart, not an error.
    pub points_plotted: usize,
    pub chart: serde_json::Value,
    /// Non-fatal problems, e.g. a baseline that failed to load.
    pub warnings: Vec<String>,
}

/// One raw-table row of the loaded primary series.
#[derive(Debug, Clone, Serialize)]
pub struct RawPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// Outcome of the memoized baseline load.
struct BaselineState {
    frame: Option<DataFrame>,
    warning: Option<String>,
}

/// The session-scoped dashboard pipeline.
///
/// Loaded primary frames are cached per file identifier, unbounded: the file
/// set is small and treated as immutable for the session, so toggling
/// unrelated controls never re-reads a file. The baseline is loaded at most
/// once; a failed load degrades to a primary-only view with a warning
/// instead of aborting the render.
pub struct DashboardService {
    config: DashboardConfig,
    catalog: Catalog,
    primary_cache: RwLock<HashMap<String, Arc<DataFrame>>>,
    baseline: OnceCell<BaselineState>,
}

impl DashboardService {
    pub fn new(config: DashboardConfig) -> Self {
        let catalog = Catalog::scan(&config.catalog);
        Self {
            config,
            catalog,
            primary_cache: RwLock::new(HashMap::new()),
            baseline: OnceCell::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load the primary series for `file_id` from an explicit source and
    /// cache it under that id. Tests and demos use this with a
    /// [`crate::io::MemorySource`]; file selection in the server goes
    /// through [`DashboardService::view`] directly.
    pub fn load_from_source(&self, file_id: &str, source: &dyn ArraySource) -> Result<()> {
        let frame = load_primary_series(source, &self.config.primary)?;
        self.primary_cache
            .write()
            .insert(file_id.to_string(), Arc::new(frame));
        Ok(())
    }

    /// Derive the view for one render cycle.
    pub fn view(&self, request: &ViewRequest) -> Result<DashboardView> {
        let primary = self.primary_frame(&request.file_id)?;
        let mut warnings = Vec::new();

        // Variant with a configured baseline: daily means joined over the
        // comparability window. Without one, the raw sub-daily series is
        // charted directly.
        let (table, index_col) = match &self.config.baseline {
            Some(baseline_cfg) => {
                let daily = resample_daily(&primary, &self.config.primary.label)?;
                let state = self.baseline_state();
                if let Some(warning) = &state.warning {
                    warnings.push(warning.clone());
                }
                let table = match &state.frame {
                    Some(baseline) => join_baseline(
                        &daily,
                        baseline,
                        baseline_cfg.overlap_start,
                        baseline_cfg.overlap_end,
                    )?,
                    None => daily,
                };
                (table, "date")
            }
            None => ((*primary).clone(), "time"),
        };

        let bounds = series_day_bounds(&table, index_col)?;
        let filtered = match bounds {
            Some((first, last)) => {
                let start = request.start.unwrap_or(first);
                let end = request.end.unwrap_or(last);
                match index_col {
                    "date" => filter_date_range(&table, start, end)?,
                    _ => filter_time_range(&table, start, end)?,
                }
            }
            None => table,
        };

        let visible = self.visible_series(request);
        let rows = to_long_form(&filtered, index_col, &visible)?;
        let chart = compose_interactive_chart(&rows, &self.config.title);

        Ok(DashboardView {
            file_id: request.file_id.clone(),
            first_day: bounds.map(|(first, _)| first),
            last_day: bounds.map(|(_, last)| last),
            points_plotted: rows.len(),
            chart,
            warnings,
        })
    }

    /// Raw (timestamp, value) rows of the loaded primary series, for the
    /// data-table toggle. Missing samples are omitted.
    pub fn raw_points(&self, file_id: &str, limit: Option<usize>) -> Result<Vec<RawPoint>> {
        let primary = self.primary_frame(file_id)?;
        let label = vec![self.config.primary.label.clone()];
        let rows = to_long_form(&primary, "time", &label)?;

        let points = rows.into_iter().map(|row| RawPoint {
            timestamp: row.timestamp,
            value: row.value,
        });
        Ok(match limit {
            Some(limit) => points.take(limit).collect(),
            None => points.collect(),
        })
    }

    fn visible_series(&self, request: &ViewRequest) -> Vec<String> {
        let mut visible = Vec::new();
        if request.show_primary {
            visible.push(self.config.primary.label.clone());
        }
        if request.show_baseline {
            if let Some(baseline) = &self.config.baseline {
                visible.push(baseline.label.clone());
            }
        }
        visible
    }

    fn primary_frame(&self, file_id: &str) -> Result<Arc<DataFrame>> {
        if let Some(frame) = self.primary_cache.read().get(file_id) {
            return Ok(Arc::clone(frame));
        }

        let path = self.catalog.resolve(file_id).ok_or_else(|| {
            DashboardError::access(format!("unknown data file '{file_id}'"))
        })?;
        let source = open_source(&path)?;
        let frame = Arc::new(load_primary_series(source.as_ref(), &self.config.primary)?);

        self.primary_cache
            .write()
            .insert(file_id.to_string(), Arc::clone(&frame));
        Ok(frame)
    }

    fn baseline_state(&self) -> &BaselineState {
        self.baseline.get_or_init(|| {
            let Some(baseline_cfg) = &self.config.baseline else {
                return BaselineState {
                    frame: None,
                    warning: None,
                };
            };
            match parse_baseline_file(&baseline_cfg.path, &baseline_cfg.label) {
                Ok(frame) => {
                    tracing::info!(
                        rows = frame.height(),
                        path = %baseline_cfg.path.display(),
                        "loaded baseline series"
                    );
                    BaselineState {
                        frame: Some(frame),
                        warning: None,
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "baseline unavailable, showing primary series only");
                    BaselineState {
                        frame: None,
                        warning: Some(format!("baseline unavailable: {err}")),
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaselineConfig, CatalogConfig, PrimarySeriesConfig, TimeEncoding};
    use crate::io::MemorySource;
    use std::io::Write;
    use std::path::PathBuf;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn variant_a_config() -> DashboardConfig {
        DashboardConfig {
            title: "XCO2 View".to_string(),
            catalog: CatalogConfig {
                data_dir: PathBuf::from("/nonexistent/data"),
                extension: "nc".to_string(),
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

    fn epoch_source() -> MemorySource {
        // Two samples on 2021-06-15, one on 2021-06-16.
        MemorySource::new()
            .with_variable(
                "time",
                vec![1_623_744_000.0, 1_623_751_200.0, 1_623_837_600.0],
            )
            .with_variable("xco2", vec![410.2, 410.6, 411.0])
    }

    fn request(file_id: &str) -> ViewRequest {
        ViewRequest {
            file_id: file_id.to_string(),
            start: None,
            end: None,
            show_primary: true,
            show_baseline: true,
        }
    }

    #[test]
    fn test_unknown_file_is_data_access_error() {
        let service = DashboardService::new(variant_a_config());
        let err = service.view(&request("nope.nc")).unwrap_err();
        assert!(matches!(err, DashboardError::DataAccess(_)));
    }

    #[test]
    fn test_variant_a_charts_raw_series() {
        let service = DashboardService::new(variant_a_config());
        service.load_from_source("site.nc", &epoch_source()).unwrap();

        let view = service.view(&request("site.nc")).unwrap();
        assert_eq!(view.points_plotted, 3);
        assert_eq!(view.first_day, Some(day("2021-06-15")));
        assert_eq!(view.last_day, Some(day("2021-06-16")));
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_cached_series_served_without_catalog() {
        let service = DashboardService::new(variant_a_config());
        service.load_from_source("site.nc", &epoch_source()).unwrap();

        // The catalog has no such file; only the cache can satisfy this,
        // so repeated views never re-read the source.
        assert!(service.catalog().is_empty());
        assert!(service.view(&request("site.nc")).is_ok());
        assert!(service.view(&request("site.nc")).is_ok());
    }

    #[test]
    fn test_missing_baseline_degrades_with_warning() {
        let mut config = variant_a_config();
        config.primary.time_encoding = TimeEncoding::DaySerial;
        config.primary.time_variable = "date".to_string();
        config.baseline = Some(BaselineConfig {
            label: "global".to_string(),
            path: PathBuf::from("/nonexistent/baseline.txt"),
            overlap_start: day("2010-04-18"),
            overlap_end: day("2020-11-29"),
        });
        let service = DashboardService::new(config);

        let source = MemorySource::new()
            .with_variable("date", vec![14_718.0, 14_719.0])
            .with_variable("xco2", vec![389.5, 390.1]);
        service.load_from_source("site.nc", &source).unwrap();

        let view = service.view(&request("site.nc")).unwrap();
        // Primary still renders; the baseline failure is a warning.
        assert_eq!(view.points_plotted, 2);
        assert_eq!(view.warnings.len(), 1);
        assert!(view.warnings[0].contains("baseline unavailable"));
    }

    #[test]
    fn test_baseline_join_and_toggles() {
        let mut baseline_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(baseline_file, "# year month day decimal value").unwrap();
        writeln!(baseline_file, "2010 4 18 2010.29 390.5").unwrap();
        writeln!(baseline_file, "2010 4 19 2010.30 -999.99").unwrap();

        let mut config = variant_a_config();
        config.primary.time_encoding = TimeEncoding::DaySerial;
        config.primary.time_variable = "date".to_string();
        config.baseline = Some(BaselineConfig {
            label: "global".to_string(),
            path: baseline_file.path().to_path_buf(),
            overlap_start: day("2010-04-18"),
            overlap_end: day("2020-11-29"),
        });
        let service = DashboardService::new(config);

        // Serials 14718/14719 = 2010-04-18/19.
        let source = MemorySource::new()
            .with_variable("date", vec![14_718.0, 14_719.0])
            .with_variable("xco2", vec![389.5, 390.1]);
        service.load_from_source("site.nc", &source).unwrap();

        // Both toggles: primary on both days, baseline only where valid.
        let view = service.view(&request("site.nc")).unwrap();
        assert_eq!(view.points_plotted, 3);

        // Baseline toggled off removes its rows.
        let mut req = request("site.nc");
        req.show_baseline = false;
        assert_eq!(service.view(&req).unwrap().points_plotted, 2);

        // Both toggled off yields an empty chart, not an error.
        req.show_primary = false;
        assert_eq!(service.view(&req).unwrap().points_plotted, 0);
    }

    #[test]
    fn test_range_filter_applies_to_view() {
        let service = DashboardService::new(variant_a_config());
        service.load_from_source("site.nc", &epoch_source()).unwrap();

        let mut req = request("site.nc");
        req.start = Some(day("2021-06-16"));
        let view = service.view(&req).unwrap();
        assert_eq!(view.points_plotted, 1);
    }

    #[test]
    fn test_raw_points_respect_limit() {
        let service = DashboardService::new(variant_a_config());
        service.load_from_source("site.nc", &epoch_source()).unwrap();

        assert_eq!(service.raw_points("site.nc", None).unwrap().len(), 3);
        assert_eq!(service.raw_points("site.nc", Some(2)).unwrap().len(), 2);
    }
}
