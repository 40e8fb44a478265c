//! Dashboard shared state and request payloads.

use std::sync::Arc;

use handlebars::Handlebars;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::initialization::init_client;
use crate::scanner::SiteReport;
use crate::storage::HistoryStore;

use super::templates::init_templates;

/// Shared state for the dashboard handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub(crate) store: HistoryStore,
    pub(crate) client: reqwest::Client,
    pub(crate) templates: Arc<Handlebars<'static>>,
    /// Most recent successful scan, source of the PDF download
    pub(crate) last_report: Arc<Mutex<Option<SiteReport>>>,
    pub(crate) history_limit: u32,
}

impl DashboardState {
    /// Builds the HTTP client, history store handle and templates from `config`.
    ///
    /// Does not touch the database; call [`HistoryStore::init`] before serving.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            store: HistoryStore::new(&config.db_path),
            client: init_client(config)?,
            templates: Arc::new(init_templates()?),
            last_report: Arc::new(Mutex::new(None)),
            history_limit: config.history_limit,
        })
    }

    /// The history store behind this dashboard.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }
}

/// Body of `POST /scan`.
#[derive(Debug, Deserialize)]
pub(crate) struct ScanForm {
    #[serde(default)]
    pub url: String,
}

/// Query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IndexParams {
    #[serde(default)]
    pub cleared: bool,
}
