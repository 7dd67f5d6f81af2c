use crate::config::Config;
use crate::store::Storage;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub config: Config,
}

impl FromRef<AppState> for Storage {
    fn from_ref(state: &AppState) -> Self {
        state.storage.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
