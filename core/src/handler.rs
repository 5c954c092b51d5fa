//! The fetch-on-click handler: wires a trigger element to one outbound GET.

use std::sync::Arc;

use log::debug;

use crate::client::FetchClient;
use crate::config::RequestConfig;
use crate::credentials::CredentialStore;
use crate::dom::ElementLocator;
use crate::error::RegisterError;
use crate::http::HttpTransport;
use crate::outcome::OutcomeLogger;

/// Binds a trigger element to a single outbound GET.
///
/// Each activation is an independent round trip: build the request, execute
/// it on the transport, convert the resolution into exactly one outcome,
/// hand it to the logger. No retry, no deduplication, no memory of prior
/// invocations. Activations that overlap in time each spawn their own
/// request.
pub struct FetchOnClick {
    client: FetchClient,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    logger: Arc<dyn OutcomeLogger>,
}

impl FetchOnClick {
    pub fn new(
        config: RequestConfig,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
        logger: Arc<dyn OutcomeLogger>,
    ) -> Self {
        Self {
            client: FetchClient::new(config),
            transport,
            credentials,
            logger,
        }
    }

    /// Attach a listener to the element identified by `element_id`.
    ///
    /// Fails before any listener is attached if the locator has no element
    /// with that id. Registering the same pair twice attaches two
    /// independent listeners; each click then fires both.
    pub fn register(
        &self,
        locator: &dyn ElementLocator,
        element_id: &str,
    ) -> Result<(), RegisterError> {
        let element = locator
            .find(element_id)
            .ok_or_else(|| RegisterError::ElementNotFound {
                id: element_id.to_string(),
            })?;

        let client = self.client.clone();
        let transport = Arc::clone(&self.transport);
        let credentials = Arc::clone(&self.credentials);
        let logger = Arc::clone(&self.logger);
        element.add_listener(move || {
            fetch_and_log(&client, transport.as_ref(), credentials.as_ref(), logger.as_ref());
        });
        Ok(())
    }
}

/// One complete trigger body: request, round trip, outcome, log line.
fn fetch_and_log(
    client: &FetchClient,
    transport: &dyn HttpTransport,
    credentials: &dyn CredentialStore,
    logger: &dyn OutcomeLogger,
) {
    let request = client.build_request(credentials);
    debug!("GET {}", request.url);
    let outcome = match transport.execute(&request) {
        Ok(response) => client.outcome_from_response(response),
        Err(error) => client.outcome_from_error(error),
    };
    logger.log(&outcome);
}
