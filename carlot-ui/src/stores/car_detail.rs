//! Car detail state store

use carlot_common::{CarRecord, LoadError};
use dioxus::prelude::*;

/// State for the car detail page
#[derive(Clone, Debug, PartialEq, Store)]
pub struct CarDetailState {
    /// The car being viewed; only set by a load that succeeded
    pub car: Option<CarRecord>,
    /// Whether a load is in flight
    pub loading: bool,
    /// Message to show when loading failed
    pub error: Option<String>,
}

impl Default for CarDetailState {
    fn default() -> Self {
        Self {
            car: None,
            loading: true,
            error: None,
        }
    }
}

/// What the page should render
#[derive(Clone, Debug, PartialEq)]
pub enum CarDetailStatus {
    Loading,
    Failed(String),
    Loaded(CarRecord),
}

/// Shown when there is neither a car nor an error message
pub const CAR_NOT_FOUND: &str = "Car not found";

impl CarDetailState {
    pub fn status(&self) -> CarDetailStatus {
        if self.loading {
            return CarDetailStatus::Loading;
        }
        match (&self.error, &self.car) {
            (Some(message), _) => CarDetailStatus::Failed(message.clone()),
            (None, Some(car)) => CarDetailStatus::Loaded(car.clone()),
            (None, None) => CarDetailStatus::Failed(CAR_NOT_FOUND.to_string()),
        }
    }

    /// Clear the previous car and mark a new load as running
    pub fn begin_load(&mut self) {
        self.car = None;
        self.error = None;
        self.loading = true;
    }

    /// Record the outcome of a load; a failure never keeps a car around
    pub fn finish_load(&mut self, result: Result<CarRecord, LoadError>) {
        self.loading = false;
        match result {
            Ok(car) => {
                self.car = Some(car);
                self.error = None;
            }
            Err(e) => {
                self.car = None;
                self.error = Some(e.message());
            }
        }
    }

    /// Nothing to load (empty route id)
    pub fn not_found(&mut self) {
        self.car = None;
        self.error = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city() -> CarRecord {
        CarRecord {
            brand: "Honda".into(),
            model: "City".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_loading() {
        assert_eq!(CarDetailState::default().status(), CarDetailStatus::Loading);
    }

    #[test]
    fn test_loaded() {
        let mut state = CarDetailState::default();
        state.finish_load(Ok(city()));
        assert_eq!(state.status(), CarDetailStatus::Loaded(city()));
    }

    #[test]
    fn test_server_message_is_shown() {
        let mut state = CarDetailState::default();
        state.finish_load(Ok(city()));
        state.begin_load();
        state.finish_load(Err(LoadError::Rejected {
            status: 404,
            message: Some("Not found".to_string()),
        }));
        assert_eq!(state.status(), CarDetailStatus::Failed("Not found".to_string()));
        assert_eq!(state.car, None);
    }

    #[test]
    fn test_network_failure_is_generic() {
        let mut state = CarDetailState::default();
        state.finish_load(Err(LoadError::Network("offline".to_string())));
        assert_eq!(
            state.status(),
            CarDetailStatus::Failed("Failed to load car".to_string())
        );
    }

    #[test]
    fn test_not_found() {
        let mut state = CarDetailState::default();
        state.not_found();
        assert_eq!(
            state.status(),
            CarDetailStatus::Failed(CAR_NOT_FOUND.to_string())
        );
    }
}
