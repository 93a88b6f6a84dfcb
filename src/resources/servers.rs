use crate::api::messages::{Server, SERVERS_KEY};
use crate::api::traits::{ApiRequest, Transport};
use crate::resources::{backends::backend_path, decode_entity, decode_list, encode_entity};
use crate::types::errors::ApiError;
use std::collections::HashMap;

pub fn servers_path(backend_id: &str) -> String {
    format!("{}/servers", backend_path(backend_id))
}

pub fn server_path(backend_id: &str, server_id: &str) -> String {
    format!("{}/servers/{}", backend_path(backend_id), server_id)
}

/// Lists the servers of one backend.
pub async fn list_servers<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend_id: &str,
    headers: &HashMap<String, String>,
) -> Result<Vec<Server>, ApiError> {
    let request = ApiRequest::get(servers_path(backend_id)).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_list(&payload, SERVERS_KEY)
}

pub async fn get_server_by_id<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend_id: &str,
    server_id: &str,
    headers: &HashMap<String, String>,
) -> Result<Server, ApiError> {
    let request = ApiRequest::get(server_path(backend_id, server_id)).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_entity(&payload)
}

pub async fn upsert_server<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend_id: &str,
    server: &Server,
    headers: &HashMap<String, String>,
) -> Result<Server, ApiError> {
    let body = encode_entity(server)?;
    let request = ApiRequest::post(servers_path(backend_id), body).with_headers(headers);
    let payload = transport.execute(endpoint, request).await?;
    decode_entity(&payload)
}

pub async fn delete_server_by_id<T: Transport + ?Sized>(
    transport: &T,
    endpoint: &str,
    backend_id: &str,
    server_id: &str,
    headers: &HashMap<String, String>,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(server_path(backend_id, server_id)).with_headers(headers);
    transport.execute(endpoint, request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use hyper::Method;

    const ENDPOINT: &str = "vulcand:8182";

    #[tokio::test]
    async fn test_list_servers_uses_backend_path() {
        let mock = MockTransport::new();
        mock.when_called(
            "/v2/backends/b1/servers",
            r#"{"Servers":[{"Id":"s1","URL":"http://10.0.0.1:80"},{"Id":"s2","URL":"http://10.0.0.2:80"}]}"#,
        );

        let servers = list_servers(&mock, ENDPOINT, "b1", &HashMap::new())
            .await
            .unwrap();

        assert_eq!(
            servers,
            vec![
                Server::new("s1", "http://10.0.0.1:80"),
                Server::new("s2", "http://10.0.0.2:80"),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_servers_missing_key_is_empty() {
        let mock = MockTransport::new();
        mock.when_called("/v2/backends/b1/servers", r#"{"Backends":[]}"#);

        let servers = list_servers(&mock, ENDPOINT, "b1", &HashMap::new())
            .await
            .unwrap();

        assert!(servers.is_empty());
    }

    #[tokio::test]
    async fn test_get_server_by_id() {
        let mock = MockTransport::new();
        mock.when_called_json("/v2/backends/b1/servers/s1", Server::new("s1", "http://a:1"));

        let server = get_server_by_id(&mock, ENDPOINT, "b1", "s1", &HashMap::new())
            .await
            .unwrap();

        assert_eq!(server.url, "http://a:1");
    }

    #[tokio::test]
    async fn test_upsert_server_posts_to_backend_servers() {
        let mock = MockTransport::new();
        let server = Server::new("s1", "http://10.0.0.1:80");
        mock.when_called_json("/v2/backends/b1/servers", &server);

        let upserted = upsert_server(&mock, ENDPOINT, "b1", &server, &HashMap::new())
            .await
            .unwrap();

        assert_eq!(upserted, server);
        let recorded = &mock.requests_to("/v2/backends/b1/servers")[0];
        assert_eq!(recorded.method, Method::POST);
        assert_eq!(
            recorded.body.as_deref(),
            Some(r#"{"Id":"s1","URL":"http://10.0.0.1:80"}"#)
        );
    }

    #[tokio::test]
    async fn test_upsert_server_empty_response_is_decode_error() {
        let mock = MockTransport::new();

        let result = upsert_server(
            &mock,
            ENDPOINT,
            "b1",
            &Server::new("s1", "http://a:1"),
            &HashMap::new(),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_delete_server_by_id() {
        let mock = MockTransport::new();

        delete_server_by_id(&mock, ENDPOINT, "b1", "s1", &HashMap::new())
            .await
            .unwrap();

        let recorded = &mock.requests_to("/v2/backends/b1/servers/s1")[0];
        assert_eq!(recorded.method, Method::DELETE);
    }
}
