use std::sync::{Arc, Mutex};

use ai_llm_service::{
    AiLlmError, ChatModel, LlmModelConfig, LlmProvider, OpenAiService,
    error_handler::{ProviderError, ProviderErrorKind},
};
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, Uri, header},
    routing::post,
};
use serde_json::{Value, json};

/// What the stub deployment received: `api-key` header, query string, JSON body.
type Received = Arc<Mutex<Vec<(Option<String>, Option<String>, Value)>>>;

/// Serves one canned reply on the Azure chat-completions route.
async fn spawn_deployment(
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
) -> (String, Received) {
    let received: Received = Arc::default();
    let log = received.clone();

    let app = Router::new().route(
        "/openai/deployments/{deployment}/chat/completions",
        post(move |headers: HeaderMap, uri: Uri, Json(req): Json<Value>| {
            let log = log.clone();
            async move {
                let api_key = headers
                    .get("api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                log.lock()
                    .unwrap()
                    .push((api_key, uri.query().map(str::to_string), req));
                (status, [(header::CONTENT_TYPE, content_type)], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), received)
}

fn service(endpoint: &str) -> OpenAiService {
    OpenAiService::new(LlmModelConfig {
        provider: LlmProvider::AzureOpenAI,
        model: "dep".into(),
        endpoint: endpoint.into(),
        api_key: Some("secret".into()),
        api_version: Some("2023-05-15".into()),
        max_tokens: Some(300),
        temperature: None,
        timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn returns_model_text_verbatim() {
    let (endpoint, received) = spawn_deployment(
        StatusCode::OK,
        "application/json",
        r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#,
    )
    .await;

    let reply = service(&endpoint).chat("be brief", "hi").await.unwrap();
    assert_eq!(reply, "hello");

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (api_key, query, body) = &received[0];
    assert_eq!(api_key.as_deref(), Some("secret"));
    assert_eq!(query.as_deref(), Some("api-version=2023-05-15"));
    assert_eq!(
        *body,
        json!({
            "model": "dep",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hi"}
            ],
            "max_tokens": 300
        })
    );
}

#[tokio::test]
async fn non_success_status_is_reported_with_body_snippet() {
    let (endpoint, _) =
        spawn_deployment(StatusCode::TOO_MANY_REQUESTS, "text/plain", "rate limited").await;

    let err = service(&endpoint).generate("hi", None).await.unwrap_err();
    match &err {
        AiLlmError::Provider(ProviderError {
            provider: LlmProvider::AzureOpenAI,
            kind: ProviderErrorKind::HttpStatus(http),
        }) => {
            assert_eq!(http.status.as_u16(), 429);
            assert_eq!(http.snippet, "rate limited");
            assert!(http.url.ends_with("/openai/deployments/dep/chat/completions?api-version=2023-05-15"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("[AI LLM Service] AzureOpenAI: HTTP 429"));
}

#[tokio::test]
async fn unparsable_body_is_a_decode_error() {
    let (endpoint, _) = spawn_deployment(StatusCode::OK, "text/plain", "<html>oops</html>").await;

    let err = service(&endpoint).generate("hi", None).await.unwrap_err();
    assert!(matches!(
        err,
        AiLlmError::Provider(ProviderError {
            kind: ProviderErrorKind::Decode(_),
            ..
        })
    ));
}

#[tokio::test]
async fn missing_content_is_empty_choices() {
    let (endpoint, _) =
        spawn_deployment(StatusCode::OK, "application/json", r#"{"choices":[]}"#).await;

    let err = service(&endpoint).generate("hi", None).await.unwrap_err();
    assert!(matches!(
        err,
        AiLlmError::Provider(ProviderError {
            kind: ProviderErrorKind::EmptyChoices,
            ..
        })
    ));
}
