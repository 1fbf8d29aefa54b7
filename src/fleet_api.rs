//! HTTP adapter for the fleet service.

use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::model::{Route, Truck};
use crate::traits::FleetStore;

#[derive(Debug, Clone)]
pub struct FleetApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FleetApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Fleet store backed by the service's `/trucks` and `/routes` endpoints.
#[derive(Debug, Clone)]
pub struct FleetApiClient {
    config: FleetApiConfig,
    client: reqwest::blocking::Client,
}

impl FleetApiClient {
    pub fn new(config: FleetApiConfig) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<T>()?)
    }
}

impl FleetStore for FleetApiClient {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        self.get_json("trucks")
    }

    fn route(&self, route_id: &str) -> Result<Option<Route>, StoreError> {
        // The service only lists routes.
        let routes: Vec<Route> = self.get_json("routes")?;
        Ok(routes.into_iter().find(|route| route.id == route_id))
    }
}
