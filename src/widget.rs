//! Widget containers and their initialization.
//! See [`initialize()`].

use crate::{conditions_service::Port, render};

/// Lifecycle state of one widget container. Both end states are terminal:
/// there are no refresh or polling transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// No fetch has been dispatched yet.
    Uninitialized,
    /// A fetch has been dispatched and its result is pending.
    Fetching,
    /// Conditions were fetched and the container content was replaced.
    Rendered,
    /// The fetch failed; the diagnostic was logged and the container content
    /// was left untouched.
    ErrorLogged,
}

/// One current-conditions widget instance: a location configuration value
/// read once at construction, plus the rendered content slot the host page
/// displays.
#[derive(Debug)]
pub struct Container {
    default_location: Option<String>,
    content: Option<String>,
    state: WidgetState,
}

impl Container {
    /// Construct a container with its `default_location` configuration
    /// value (which may be absent).
    #[must_use]
    pub fn new(default_location: Option<String>) -> Self {
        Self {
            default_location,
            content: None,
            state: WidgetState::Uninitialized,
        }
    }

    /// The configured fallback location, if any.
    #[must_use]
    pub fn default_location(&self) -> Option<&str> {
        self.default_location.as_deref()
    }

    /// The content currently displayed in this container.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Current lifecycle state of this container.
    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    fn replace_content(&mut self, html: String) {
        self.content = Some(html);
    }
}

/// Initialize `container`: fetch the user's current conditions through
/// `service` and replace the container content with the rendered fragment.
///
/// A failed fetch is terminal for this initialization: the diagnostic is
/// logged and the container content is left unmodified. No retries, and no
/// error propagates to the caller.
#[tracing::instrument(skip(container, service))]
pub async fn initialize(container: &mut Container, service: &dyn Port) {
    container.state = WidgetState::Fetching;

    let response = match service
        .get_user_current_conditions(container.default_location())
        .await
    {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("{:?}", error);
            container.state = WidgetState::ErrorLogged;
            return;
        }
    };

    if !response.success {
        tracing::error!("{}", response.message.unwrap_or_default());
        container.state = WidgetState::ErrorLogged;
        return;
    }

    let condition = match response.condition {
        Some(condition) => condition,
        None => {
            tracing::error!("Service reported success without a condition");
            container.state = WidgetState::ErrorLogged;
            return;
        }
    };

    match render::render_current_conditions(&condition) {
        Ok(html) => {
            container.replace_content(html);
            container.state = WidgetState::Rendered;
            tracing::debug!("Rendered current conditions for code {}", condition.code);
        }
        Err(error) => {
            tracing::error!("{:?}", error);
            container.state = WidgetState::ErrorLogged;
        }
    }
}

/// Initialize every container in `containers` against `service`.
///
/// This is the explicit-list replacement for a document-wide scan: the host
/// integration layer supplies the containers present on the page. Fetches
/// are dispatched concurrently with no ordering between containers, while
/// each container's own fetch strictly precedes its render.
pub async fn initialize_all(containers: &mut [Container], service: &dyn Port) {
    futures::future::join_all(
        containers
            .iter_mut()
            .map(|container| initialize(container, service)),
    )
    .await;
}
