use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use flowchart_core::{GenerationError, GenerationService, SessionStore};
use flowchart_llm::{CompletionClient, CompletionError, PromptPayload, Role};

/// Stub completion client that records every payload it receives
struct StubClient {
    reply: Option<String>,
    seen: Mutex<Vec<PromptPayload>>,
}

impl StubClient {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn payloads(&self) -> Vec<PromptPayload> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, payload: &PromptPayload) -> Result<String, CompletionError> {
        self.seen.lock().unwrap().push(payload.clone());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(CompletionError::Api("HTTP 503: upstream unavailable".to_string())),
        }
    }

    fn model(&self) -> &str {
        "stub"
    }
}

fn service_with(client: Arc<StubClient>) -> (GenerationService, Arc<SessionStore>) {
    let sessions = Arc::new(SessionStore::new());
    let service = GenerationService::new(client, Arc::clone(&sessions));
    (service, sessions)
}

#[tokio::test]
async fn end_to_end_onboarding_request() {
    let client = StubClient::replying("```mermaid\ngraph TD;\nA-->B\n```");
    let (service, sessions) = service_with(Arc::clone(&client));

    let diagram = service
        .generate("employee onboarding process", None)
        .await
        .unwrap();

    assert_eq!(diagram, "graph TD;\nA-->B");

    let payloads = client.payloads();
    assert_eq!(payloads.len(), 1);
    assert!(payloads[0].render().contains("employee onboarding process"));
    assert!(sessions.is_empty().await);
    assert_eq!(service.model(), "stub");
}

#[tokio::test]
async fn failing_client_yields_error_and_no_history() {
    let client = StubClient::failing();
    let (service, sessions) = service_with(client);

    let result = service.generate("order processing", Some("s1")).await;

    match result {
        Err(GenerationError::Upstream(CompletionError::Api(message))) => {
            assert!(message.contains("503"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
    assert!(sessions.history("s1").await.is_empty());
}

#[tokio::test]
async fn session_history_records_calls_in_order() {
    let client = StubClient::replying("```mermaid\ngraph TD;\nX-->Y\n```");
    let (service, sessions) = service_with(Arc::clone(&client));

    service.generate("first request", Some("s1")).await.unwrap();
    service.generate("second request", Some("s1")).await.unwrap();

    let history = sessions.history("s1").await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].request, "first request");
    assert_eq!(history[1].request, "second request");
    assert_eq!(history[1].output, "graph TD;\nX-->Y");

    // The second call replays the first exchange before the new request.
    let second = &client.payloads()[1];
    let messages = second.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "first request");
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, "graph TD;\nX-->Y");
    assert_eq!(messages[3].content, "second request");
}

#[tokio::test]
async fn sessions_are_isolated() {
    let client = StubClient::replying("graph TD;");
    let (service, sessions) = service_with(client);

    service.generate("a", Some("s1")).await.unwrap();
    service.generate("b", Some("s2")).await.unwrap();
    service.generate("c", None).await.unwrap();

    assert_eq!(sessions.history("s1").await.len(), 1);
    assert_eq!(sessions.history("s2").await.len(), 1);
    assert_eq!(sessions.len().await, 2);
}

#[tokio::test]
async fn empty_input_is_accepted() {
    let client = StubClient::replying("```mermaid\n```");
    let (service, _sessions) = service_with(Arc::clone(&client));

    let diagram = service.generate("", None).await.unwrap();

    assert_eq!(diagram, "");
    assert_eq!(client.payloads().len(), 1);
}
