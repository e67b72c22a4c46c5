use crate::api::ApiClient;
use crate::interactive::domain::models::{ApiRequest, ApiResponse};
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

/// Runs backend calls on the tokio runtime and reports each outcome on a channel.
///
/// Every request becomes its own task. Nothing is cancelled, queued or
/// deduplicated, so responses arrive in completion order.
pub struct ApiService {
    client: ApiClient,
    runtime: Handle,
    responses: Sender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: ApiClient, runtime: Handle, responses: Sender<ApiResponse>) -> Self {
        Self {
            client,
            runtime,
            responses,
        }
    }

    pub fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let responses = self.responses.clone();

        self.runtime.spawn(async move {
            let response = match request {
                ApiRequest::LoadCatalog { id } => {
                    let result = client
                        .list_roles(true)
                        .await
                        .map(|roles| roles.items)
                        .map_err(|e| {
                            tracing::warn!(id, error = %e, "failed to load role catalog");
                            e.to_string()
                        });
                    ApiResponse::Catalog { id, result }
                }
                ApiRequest::Generate { id, request } => {
                    let result = client.generate_inventory(&request).await.map_err(|e| {
                        tracing::warn!(id, error = %e, "inventory generation failed");
                        e.to_string()
                    });
                    ApiResponse::Generation { id, result }
                }
            };

            // The receiver is gone once the UI has exited
            let _ = responses.send(response);
        });
    }
}
