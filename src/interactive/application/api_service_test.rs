#[cfg(test)]
mod tests {
    use super::super::api_service::ApiService;
    use crate::api::{ApiClient, GenerationRequest, Style};
    use crate::interactive::domain::models::{ApiRequest, ApiResponse};
    use std::sync::mpsc;
    use std::time::Duration;

    fn unreachable_service() -> (tokio::runtime::Runtime, ApiService, mpsc::Receiver<ApiResponse>) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        // Port 9 (discard) on localhost is expected to refuse connections
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let (tx, rx) = mpsc::channel();
        let service = ApiService::new(client, runtime.handle().clone(), tx);
        (runtime, service, rx)
    }

    #[test]
    fn test_catalog_failure_is_reported() {
        let (_runtime, service, rx) = unreachable_service();
        service.dispatch(ApiRequest::LoadCatalog { id: 7 });

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            ApiResponse::Catalog { id, result } => {
                assert_eq!(id, 7);
                assert!(result.is_err());
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[test]
    fn test_generation_failure_is_reported() {
        let (_runtime, service, rx) = unreachable_service();
        service.dispatch(ApiRequest::Generate {
            id: 3,
            request: GenerationRequest {
                host: "localhost".to_string(),
                style: Style::Group,
                ignore: vec![],
            },
        });

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            ApiResponse::Generation { id, result } => {
                assert_eq!(id, 3);
                assert!(result.is_err());
            }
            other => panic!("unexpected response {other:?}"),
        }
    }
}
