use serde::{Deserialize, Serialize};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use resthub_registry::{
    EndpointDescriptor, EndpointRegistry, EndpointTarget, RegistryDescriptor, RegistrySetup,
    RequestDefaults,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
struct User {
    id: u64,
    name: String,
}

#[tokio::test]
async fn registered_endpoint_serves_requests() {
    let server = MockServer::start().await;

    let user = User {
        id: 123,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users/123"))
        .and(header("X-Api-Key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&server)
        .await;

    let uri = server.uri();
    let expected = user.clone();

    let result = tokio::task::spawn_blocking(move || {
        let mut registry = EndpointRegistry::new();
        registry
            .register_endpoint(
                "api",
                uri.as_str(),
                Some(RequestDefaults::new().with_header("X-Api-Key", "secret")),
            )
            .unwrap();

        registry
            .get_endpoint("api")
            .unwrap()
            .find_one::<User>("users", "123")
            .unwrap()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(result, expected);
}

#[tokio::test]
async fn default_endpoint_serves_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .mount(&server)
        .await;

    let uri = server.uri();

    let result = tokio::task::spawn_blocking(move || {
        let mut registry = EndpointRegistry::new();
        registry
            .register_endpoint("api", uri.as_str(), None)
            .unwrap()
            .set_default_endpoint("api");

        registry
            .default_endpoint()
            .unwrap()
            .find::<serde_json::Value>("status")
            .unwrap()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(result["status"], "ok");
}

#[tokio::test]
async fn descriptor_configured_registry_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pong": true
        })))
        .mount(&server)
        .await;

    let uri = server.uri();

    let result = tokio::task::spawn_blocking(move || {
        let json = format!(
            r#"{{
                "defaultBaseUrl": "{uri}",
                "endpoints": [
                    {{"name": "api", "default": true}},
                    {{"name": "external", "endpoint": "https://external.example.com"}}
                ]
            }}"#
        );
        let descriptor = RegistryDescriptor::from_json(&json).unwrap();

        let mut registry = EndpointRegistry::new();
        registry.configure(descriptor).unwrap();

        // "api" picked up the default base URL, "external" kept its own
        assert_eq!(
            registry
                .get_endpoint("external")
                .unwrap()
                .base_url()
                .unwrap()
                .as_str(),
            "https://external.example.com/"
        );

        registry
            .default_endpoint()
            .unwrap()
            .find::<serde_json::Value>("ping")
            .unwrap()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(result["pong"], true);
}

#[tokio::test]
async fn callback_configured_endpoint_sends_its_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/whoami"))
        .and(header("Authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": "alice"
        })))
        .mount(&server)
        .await;

    let uri = server.uri();

    let result = tokio::task::spawn_blocking(move || {
        let mut registry = EndpointRegistry::new();
        registry
            .register_endpoint(
                "api",
                EndpointTarget::configure(move |config| {
                    config
                        .with_base_url(&uri)
                        .with_default_header("Authorization", "Bearer token")
                }),
                None,
            )
            .unwrap();

        registry
            .get_endpoint("api")
            .unwrap()
            .find::<serde_json::Value>("whoami")
            .unwrap()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(result["user"], "alice");
}

#[tokio::test]
async fn setup_installs_a_working_registry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "healthy": true
        })))
        .mount(&server)
        .await;

    let uri = server.uri();

    let result = tokio::task::spawn_blocking(move || {
        let setup = RegistrySetup::new().customize(move |registry| {
            registry.configure(
                RegistryDescriptor::new()
                    .with_endpoint(EndpointDescriptor::new("api").with_url(&uri).as_default()),
            )?;
            Ok(())
        });

        let registry = setup.install().unwrap();
        registry
            .default_endpoint()
            .unwrap()
            .find::<serde_json::Value>("health")
            .unwrap()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(result["healthy"], true);
}
