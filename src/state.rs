use std::path::Path;

use anyhow::{Context, Result};

use crate::data::filter::{FilterParams, filter};
use crate::data::loader;
use crate::data::model::HousingTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None before the first load and after a failed one).
    pub dataset: Option<HousingTable>,

    /// Where `dataset` came from (URL or path), for the top bar.
    pub source: Option<String>,

    /// Current widget values.
    pub params: FilterParams,

    /// `filter(dataset, params)`, recomputed whenever `params` changes.
    pub visible: HousingTable,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            params: FilterParams {
                min_rooms: 0.0,
                max_crime: 0.0,
                river: None,
            },
            visible: HousingTable::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the widgets to their defaults.
    pub fn set_dataset(&mut self, dataset: HousingTable, source: String) {
        self.params = FilterParams::initial(&dataset);
        self.visible = filter(&dataset, &self.params);
        self.dataset = Some(dataset);
        self.source = Some(source);
        self.status_message = None;
    }

    /// Replace the widget values; refilters only when something changed.
    pub fn set_params(&mut self, params: FilterParams) {
        if params != self.params {
            self.params = params;
            self.refilter();
        }
    }

    /// Recompute `visible` from the loaded snapshot.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible = filter(ds, &self.params);
            log::debug!("{:?} → {} of {} rows", self.params, self.visible.len(), ds.len());
        }
    }

    /// Fetch the dataset from `url`, replacing whatever is loaded.
    pub fn load_url(&mut self, url: &str) {
        let result = loader::fetch_dataset(url).with_context(|| format!("loading dataset from {url}"));
        self.finish_load(result, url.to_string());
    }

    /// Parse a local copy of the dataset, replacing whatever is loaded.
    pub fn load_path(&mut self, path: &Path) {
        let source = path.display().to_string();
        let result = loader::load_file(path).with_context(|| format!("loading dataset from {source}"));
        self.finish_load(result, source);
    }

    /// A failed load leaves no dataset behind: there is no partial table and
    /// no fallback to the previous one.
    fn finish_load(&mut self, result: Result<HousingTable>, source: String) {
        match result {
            Ok(dataset) => {
                log::info!("Loaded {} housing records from {source}", dataset.len());
                self.set_dataset(dataset, source);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.dataset = None;
                self.source = None;
                self.visible = HousingTable::default();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
