//! External current conditions service.
//! See [Port].

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    condition::ConditionsResponse,
    proxy::{self, ServiceProxy},
};

/// Name of the CMS service which resolves a user's current weather
/// conditions.
pub const SERVICE_NAME: &str = "WeatherYahooService";

/// Service action which fetches conditions for the requesting user.
const ACTION_GET_USER_CURRENT_CONDITIONS: &str = "getUserCurrentConditions";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConditionsPayload<'a> {
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_location: Option<&'a str>,
}

/// Trait used to allow mocking the current conditions service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Port: Send + Sync {
    /// Obtain the current weather conditions for the user. The service falls
    /// back to `default_location` when the user has no location of their own
    /// configured.
    async fn get_user_current_conditions<'a>(
        &self,
        default_location: Option<&'a str>,
    ) -> Result<ConditionsResponse, proxy::Error>;
}

/// Concrete implementation of [Port].
pub struct Gateway {
    proxy: ServiceProxy,
}

impl Gateway {
    /// Construct a new [Gateway].
    #[must_use]
    pub fn new(proxy: ServiceProxy) -> Self {
        Self { proxy }
    }
}

#[async_trait]
impl Port for Gateway {
    async fn get_user_current_conditions<'a>(
        &self,
        default_location: Option<&'a str>,
    ) -> Result<ConditionsResponse, proxy::Error> {
        self.proxy
            .service_request(
                SERVICE_NAME,
                &ConditionsPayload {
                    action: ACTION_GET_USER_CURRENT_CONDITIONS,
                    default_location,
                },
                true, // Read-only mode
            )
            .await
    }
}
