use carlot_common::{decode_car_response, ApiConfig, CarRecord, LoadError};
use tracing::{debug, info};

/// Resolve where the API lives: the build-time origin if one was given,
/// otherwise the origin the page was served from.
pub fn resolve_api_config() -> ApiConfig {
    let configured = ApiConfig::from_build_env();
    if configured.api_root() != "/api" {
        return configured;
    }
    match web_sys_x::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => ApiConfig::new(&origin),
        None => configured,
    }
}

/// Fetch one car. One request, no retries; the envelope is checked by
/// `decode_car_response`.
pub async fn fetch_car(config: &ApiConfig, car_id: &str) -> Result<CarRecord, LoadError> {
    let url = config.car_url(car_id);
    info!("Loading car {car_id}");
    debug!("GET {url}");

    let resp = reqwest::get(&url)
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    let status = resp.status().as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    decode_car_response(status, &body)
}
