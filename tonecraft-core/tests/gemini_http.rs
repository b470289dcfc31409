use serde_json::json;
use tonecraft_core::config::{ApiConfig, ModelId};
use tonecraft_core::gemini::{Client, ClientConfig, ClientError, GenerateContentRequest};
use tonecraft_core::llm::{GeminiProvider, LLMRequest};
use tonecraft_core::{GenerationSettings, LLMError, LLMProvider, RewriteError, Rewriter, Tone};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FLASH_LITE_PATH: &str = "/models/gemini-2.5-flash-lite:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    let api = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    GeminiProvider::from_config("test-key".to_string(), ModelId::Gemini25FlashLite, &api).unwrap()
}

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 80,
            "candidatesTokenCount": 12,
            "totalTokenCount": 92
        }
    })
}

#[tokio::test]
async fn sends_key_header_and_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(FLASH_LITE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 120 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hi there!")))
        .expect(1)
        .mount(&server)
        .await;

    let rewriter = Rewriter::new(
        Box::new(provider_for(&server)),
        ModelId::Gemini25FlashLite,
        GenerationSettings::default(),
    );
    let rewrite = rewriter.rewrite("hey", Tone::Friendly).await.unwrap();
    assert_eq!(rewrite.text, "Hi there!");

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let config = &body["generationConfig"];
    assert!((config["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    assert!((config["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains(Tone::Friendly.instruction()));
    assert!(prompt.ends_with("hey"));
}

#[tokio::test]
async fn returns_text_without_trimming() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(FLASH_LITE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_body("Could you help, please?\n")),
        )
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .generate(LLMRequest::from_prompt("gemini-2.5-flash-lite", "prompt"))
        .await
        .unwrap();
    assert_eq!(response.content.as_deref(), Some("Could you help, please?\n"));
    assert_eq!(response.usage.map(|u| u.total_tokens), Some(92));
}

#[tokio::test]
async fn quota_failure_is_a_rate_limit_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string(
            r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED","message":"Quota exceeded"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let rewriter = Rewriter::new(
        Box::new(provider_for(&server)),
        ModelId::Gemini25FlashLite,
        GenerationSettings::default(),
    );
    let err = rewriter.rewrite("send it", Tone::Polite).await.unwrap_err();
    match err {
        RewriteError::Provider(LLMError::RateLimit(message)) => {
            assert!(message.contains("Quota exceeded"), "{message}");
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_key_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate(LLMRequest::from_prompt("gemini-2.5-flash-lite", "prompt"))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::Authentication(_)), "{err:?}");
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("The model is overloaded."))
        .mount(&server)
        .await;

    let client = Client::with_config(
        "test-key".to_string(),
        "gemini-2.5-flash-lite".to_string(),
        ClientConfig::default().with_base_url(server.uri()),
    )
    .unwrap();
    let err = client
        .generate(&GenerateContentRequest::from_prompt("prompt"))
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "The model is overloaded.");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate(LLMRequest::from_prompt("gemini-2.5-flash-lite", "prompt"))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::Provider(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let api = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout_secs: 2,
        ..ApiConfig::default()
    };
    let provider =
        GeminiProvider::from_config("test-key".to_string(), ModelId::Gemini25FlashLite, &api)
            .unwrap();

    let err = provider
        .generate(LLMRequest::from_prompt("gemini-2.5-flash-lite", "prompt"))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::Network(_)), "{err:?}");
}

#[tokio::test]
async fn candidates_without_text_become_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let rewriter = Rewriter::new(
        Box::new(provider_for(&server)),
        ModelId::Gemini25FlashLite,
        GenerationSettings::default(),
    );
    let err = rewriter.rewrite("send it", Tone::Polite).await.unwrap_err();
    assert_eq!(err, RewriteError::EmptyResponse);
}

/// Accept one request and answer 503 with a body shorter than its
/// Content-Length, then close the connection.
async fn serve_truncated_error_response(listener: tokio::net::TcpListener) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let (mut socket, _) = listener.accept().await.unwrap();
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&request);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if request.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    socket
        .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\npartial")
        .await
        .unwrap();
    socket.shutdown().await.unwrap();
}

#[tokio::test]
async fn unreadable_error_body_is_described_instead_of_dropped() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(serve_truncated_error_response(listener));

    let client = Client::with_config(
        "test-key".to_string(),
        "gemini-2.5-flash-lite".to_string(),
        ClientConfig::default().with_base_url(base_url),
    )
    .unwrap();
    let err = client
        .generate(&GenerateContentRequest::from_prompt("prompt"))
        .await
        .unwrap_err();
    server.await.unwrap();

    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert!(
                body.starts_with("<failed to read response body:"),
                "{body}"
            );
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
