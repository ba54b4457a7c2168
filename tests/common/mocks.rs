use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string, header, method, path, query_param},
};

/// A 422 response in the expected envelope, one detail entry per field.
pub fn validation_error(fields: &[&str]) -> ResponseTemplate {
    let details: Vec<Value> = fields
        .iter()
        .map(|field| {
            json!({
                "field": field,
                "message": format!("{} is invalid", field),
                "type": "value_error",
            })
        })
        .collect();

    ResponseTemplate::new(422).set_body_json(json!({
        "error": {
            "code": 422,
            "message": "Validation Error",
            "details": details,
        }
    }))
}

/// The shape a framework emits when no custom handler is installed.
pub fn framework_default_error(loc: &[&str]) -> ResponseTemplate {
    ResponseTemplate::new(422).set_body_json(json!({
        "detail": [{"loc": loc, "msg": "invalid", "type": "value_error"}]
    }))
}

/// Mounts every endpoint the suites touch, answering the way a conforming
/// API does.
pub async fn mount_conforming_api(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "API is running"})),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/test"))
        .and(header("content-type", "application/json"))
        .and(body_string("invalid json"))
        .respond_with(validation_error(&["body"]))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/test-model"))
        .and(body_json(json!({"name": "Jonas", "age": "x"})))
        .respond_with(validation_error(&["age"]))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/test-model"))
        .and(body_json(json!({"age": 30})))
        .respond_with(validation_error(&["name"]))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/test-model"))
        .and(body_json(json!({"name": "Jonas", "age": 30, "items": [{}]})))
        .respond_with(validation_error(&["items.0.name"]))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/test-model"))
        .and(body_json(json!({"age": "not_a_number"})))
        .respond_with(validation_error(&["name", "age"]))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/123"))
        .and(query_param("limit", "abc"))
        .respond_with(validation_error(&["query.limit"]))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/not_an_int"))
        .respond_with(validation_error(&["path.user_id", "query.limit"]))
        .mount(server)
        .await;
}

/// Overrides one JSON request body on `endpoint` ahead of the conforming mocks.
pub async fn override_json_body(
    server: &MockServer,
    endpoint: &str,
    body: Value,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_json(body))
        .respond_with(response)
        .with_priority(1)
        .mount(server)
        .await;
}

/// Overrides one endpoint ahead of the conforming mocks.
pub async fn override_endpoint(
    server: &MockServer,
    http_method: &str,
    endpoint: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(response)
        .with_priority(1)
        .mount(server)
        .await;
}
