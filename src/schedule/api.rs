use super::{dto::EventResponse, model::Event};
use crate::config::model::SourceConfig;
use lazy_static::lazy_static;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use tracing::{error, info, warn};

const BUNDLED_EVENTS: &str = include_str!("../../data/events.json");

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

/// Read-only source of the festival's events, in no particular order
pub trait EventStore {
    fn get_events(&self) -> impl Future<Output = Result<Vec<Event>, APIError>> + Send;
}

#[derive(Debug)]
pub enum APIError {
    RequestFailed(reqwest::Error),
    InvalidResponse(serde_json::Error),
}

/// Events bundled with the binary
#[derive(Debug, Clone, Default)]
pub struct StaticEventStore {
    excluded_titles: Vec<String>,
}

impl StaticEventStore {
    pub fn new(excluded_titles: Vec<String>) -> Self {
        Self { excluded_titles }
    }
}

impl EventStore for StaticEventStore {
    #[tracing::instrument(skip(self))]
    async fn get_events(&self) -> Result<Vec<Event>, APIError> {
        let events = parse_events(BUNDLED_EVENTS, &self.excluded_titles)?;

        info!("Loaded {} bundled events", events.len());

        Ok(events)
    }
}

/// Events served as a JSON array over HTTP.
///
/// A single attempt is made; callers decide what a failure means.
#[derive(Debug, Clone)]
pub struct RemoteEventStore {
    url: String,
    excluded_titles: Vec<String>,
}

impl RemoteEventStore {
    pub fn new(url: String, excluded_titles: Vec<String>) -> Self {
        Self {
            url,
            excluded_titles,
        }
    }
}

impl EventStore for RemoteEventStore {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn get_events(&self) -> Result<Vec<Event>, APIError> {
        info!("Getting all events");

        let json_response = REST_CLIENT
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(APIError::RequestFailed)?
            .text()
            .await
            .map_err(APIError::RequestFailed)?;

        let events = parse_events(&json_response, &self.excluded_titles)?;

        info!("Got {} events", events.len());

        Ok(events)
    }
}

/// Either of the stores, picked from config
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    Static(StaticEventStore),
    Remote(RemoteEventStore),
}

impl From<&SourceConfig> for ConfiguredStore {
    fn from(config: &SourceConfig) -> Self {
        match config {
            SourceConfig::Static { excluded_titles } => {
                ConfiguredStore::Static(StaticEventStore::new(excluded_titles.clone()))
            }
            SourceConfig::Remote {
                url,
                excluded_titles,
            } => ConfiguredStore::Remote(RemoteEventStore::new(
                url.to_string(),
                excluded_titles.clone(),
            )),
        }
    }
}

impl EventStore for ConfiguredStore {
    async fn get_events(&self) -> Result<Vec<Event>, APIError> {
        match self {
            ConfiguredStore::Static(store) => store.get_events().await,
            ConfiguredStore::Remote(store) => store.get_events().await,
        }
    }
}

/// Reads a JSON array of events, skipping records that can't be read
pub fn parse_events(json: &str, excluded_titles: &[String]) -> Result<Vec<Event>, APIError> {
    let records = serde_json::from_str::<Vec<Value>>(json).map_err(|e| {
        error!("Response parse failed: {:?}", e);
        APIError::InvalidResponse(e)
    })?;

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match EventResponse::deserialize(record) {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(index, "Skipping unreadable event record: {}", e);
                None
            }
        })
        .filter(|response| !excluded_titles.contains(&response.title))
        .map(|response| response.to_model())
        .collect())
}
