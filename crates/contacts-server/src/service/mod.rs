//! Application state and dependency injection.

mod config;

use contacts_postgres::PgClient;

pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::{Error as ServiceError, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Creates the database client and applies pending migrations.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres().await?,
        };

        Ok(service_state)
    }

    /// Creates application state around an existing database client.
    ///
    /// No migrations are applied.
    pub fn from_client(pg_client: PgClient) -> Self {
        Self { pg_client }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
