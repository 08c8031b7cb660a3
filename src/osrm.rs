//! OSRM HTTP adapter for driving routes.

use serde::Deserialize;

use crate::coordinate::Coordinate;
use crate::error::ProviderError;
use crate::route::Route;
use crate::traits::RouteProvider;

/// Where the routing service lives and how long a route request may take.
///
/// Loads from partial JSON; missing fields keep the local-server defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    /// Scheme, host and port, without a trailing slash.
    pub base_url: String,
    /// Routing profile baked into the dataset, e.g. `car` or `truck`.
    pub profile: String,
    /// Whole-request timeout, connect included.
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmRouteClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmRouteClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, origin: Coordinate, destination: Coordinate) -> String {
        // OSRM takes lng,lat pairs.
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=polyline",
            self.config.base_url,
            self.config.profile,
            origin.lng(),
            origin.lat(),
            destination.lng(),
            destination.lat()
        )
    }
}

impl RouteProvider for OsrmRouteClient {
    fn get_route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, ProviderError> {
        let url = self.route_url(origin, destination);
        tracing::debug!(%url, "requesting OSRM route");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        route_from_response(body)
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: String,
    distance: f64,
    duration: f64,
}

fn route_from_response(body: OsrmRouteResponse) -> Result<Route, ProviderError> {
    if body.code != "Ok" {
        return Err(ProviderError::NoRoute(
            body.message.unwrap_or(body.code),
        ));
    }

    let first = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NoRoute("response contained no routes".to_string()))?;

    let route = Route::from_polyline(&first.geometry)?.with_summary(first.distance, first.duration);
    tracing::debug!(points = route.points().len(), "decoded OSRM route geometry");
    Ok(route)
}
