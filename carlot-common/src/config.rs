/// Where the listings API lives.
///
/// The origin comes from `CARLOT_API_URL` at build time; unset or empty means
/// the API is served from the same origin as the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    api_root: String,
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CARLOT_API_URL").unwrap_or_default())
    }

    /// `origin` is the server origin without the `/api` suffix.
    pub fn new(origin: &str) -> Self {
        let origin = origin.trim().trim_end_matches('/');
        Self {
            api_root: format!("{origin}/api"),
        }
    }

    /// e.g. `https://cars.example.com/api`, or `/api` when same-origin
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// `GET` target for one car; the id is percent-encoded as a path segment
    pub fn car_url(&self, car_id: &str) -> String {
        format!("{}/cars/{}", self.api_root, urlencoding::encode(car_id))
    }
}
