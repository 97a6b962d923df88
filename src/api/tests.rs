//! API Client Tests
//!
//! Exercise the client against a scripted transport and recording hooks.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::api::{
        ApiClient, ApiError, ClientHooks, HttpMethod, HttpRequest, HttpResponse, Transport, TransportError,
    };
    use crate::config::AppConfig;
    use crate::models::{Credentials, Registration, Todo};
    use crate::notice::{Notice, NoticeLevel};

    const TOKEN: &str = "mock-token";

    /// Replays canned responses and records every request
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        sent: RefCell<Vec<HttpRequest>>,
        offline: Cell<bool>,
    }

    impl ScriptedTransport {
        fn replying(status: u16, body: &str) -> Self {
            let transport = Self::default();
            transport.push(status, body);
            transport
        }

        fn failing(offline: bool) -> Self {
            let transport = Self::default();
            transport
                .responses
                .borrow_mut()
                .push_back(Err(TransportError::Network("Failed to fetch".to_string())));
            transport.offline.set(offline);
            transport
        }

        fn push(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
        }
    }

    #[async_trait(?Send)]
    impl<'a> Transport for &'a ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
        }

        fn is_online(&self) -> bool {
            !self.offline.get()
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        notices: RefCell<Vec<Notice>>,
        expirations: Cell<usize>,
    }

    impl<'a> ClientHooks for &'a RecordingHooks {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn session_expired(&self) {
            self.expirations.set(self.expirations.get() + 1);
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            api_url: "https://api.test/".to_string(),
            ..AppConfig::default()
        }
    }

    fn client<'a>(
        transport: &'a ScriptedTransport,
        hooks: &'a RecordingHooks,
    ) -> ApiClient<&'a ScriptedTransport, &'a RecordingHooks> {
        ApiClient::new(&config(), transport, hooks)
    }

    fn sample_todo() -> Todo {
        Todo {
            id: "1".to_string(),
            title: "Test Todo".to_string(),
            description: "Description".to_string(),
            status: false,
            due_date: Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    const TODO_JSON: &str = r#"{"id":"1","title":"Test Todo","description":"Description","status":false,"dueDate":"2023-10-01","updatedAt":"2023-09-01"}"#;

    #[tokio::test]
    async fn test_configured_auth_scheme_prefixes_token() {
        let transport = ScriptedTransport::replying(200, "[]");
        let hooks = RecordingHooks::default();
        let config = AppConfig {
            auth_scheme: "Bearer".to_string(),
            ..config()
        };

        ApiClient::new(&config, &transport, &hooks).list_todos("jwt.abc").await.unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].header("Authorization"), Some("Bearer jwt.abc"));
    }

    #[tokio::test]
    async fn test_list_todos_sends_token() {
        let transport = ScriptedTransport::replying(200, &format!("[{}]", TODO_JSON));
        let hooks = RecordingHooks::default();

        let todos = client(&transport, &hooks).list_todos(TOKEN).await.unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test Todo");
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url, "https://api.test/todos");
        assert_eq!(sent[0].header("authorization"), Some(TOKEN));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        // reads are silent on success
        assert!(hooks.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_list_todos_accepts_wrapped_body() {
        let transport = ScriptedTransport::replying(200, &format!(r#"{{"todos":[{}]}}"#, TODO_JSON));
        let hooks = RecordingHooks::default();

        let todos = client(&transport, &hooks).list_todos(TOKEN).await.unwrap();
        assert_eq!(todos.len(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_expires_session_once() {
        let transport = ScriptedTransport::replying(401, r#"{"message":"jwt expired"}"#);
        let hooks = RecordingHooks::default();

        let result = client(&transport, &hooks).list_todos(TOKEN).await;

        assert_eq!(result, Err(ApiError::SessionExpired));
        assert_eq!(hooks.expirations.get(), 1);
        let notices = hooks.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Session expired!");
    }

    #[tokio::test]
    async fn test_unauthorized_on_every_todo_call() {
        let transport = ScriptedTransport::default();
        for _ in 0..5 {
            transport.push(401, "");
        }
        let hooks = RecordingHooks::default();
        let api = client(&transport, &hooks);
        let todo = sample_todo();

        assert!(api.create_todo(TOKEN, &todo.draft()).await.is_err());
        assert!(api.get_todo(TOKEN, "1").await.is_err());
        assert!(api.update_todo(TOKEN, "1", &todo).await.is_err());
        assert!(api.complete_todo(TOKEN, "1", &todo).await.is_err());
        assert!(api.delete_todo(TOKEN, "1").await.is_err());

        // one expiry per 401 response
        assert_eq!(hooks.expirations.get(), 5);
    }

    #[tokio::test]
    async fn test_delete_sends_id_and_token_once() {
        let transport = ScriptedTransport::replying(200, "");
        let hooks = RecordingHooks::default();

        client(&transport, &hooks).delete_todo(TOKEN, "1").await.unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].url, "https://api.test/todos/1");
        assert_eq!(sent[0].header("Authorization"), Some(TOKEN));
        let notices = hooks.notices.borrow();
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].title, "Todo deleted successfully!");
    }

    #[tokio::test]
    async fn test_delete_not_found_notifies() {
        let transport = ScriptedTransport::replying(404, "");
        let hooks = RecordingHooks::default();

        let result = client(&transport, &hooks).delete_todo(TOKEN, "missing").await;

        assert_eq!(result, Err(ApiError::NotFound));
        assert_eq!(hooks.expirations.get(), 0);
        assert_eq!(
            hooks.notices.borrow()[0].description,
            "Todo not found or not authorized. Please try again!"
        );
    }

    #[tokio::test]
    async fn test_todo_id_is_path_encoded() {
        let transport = ScriptedTransport::replying(200, TODO_JSON);
        let hooks = RecordingHooks::default();

        client(&transport, &hooks).get_todo(TOKEN, "a/b c").await.unwrap();

        assert_eq!(transport.sent.borrow()[0].url, "https://api.test/todos/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_create_duplicate_title() {
        let transport = ScriptedTransport::replying(409, r#"{"message":"exists"}"#);
        let hooks = RecordingHooks::default();
        let draft = sample_todo().draft();

        let result = client(&transport, &hooks).create_todo(TOKEN, &draft).await;

        assert_eq!(result, Err(ApiError::Duplicate));
        assert_eq!(hooks.notices.borrow()[0].title, "Duplicate Todo");

        let sent = transport.sent.borrow();
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Test Todo");
        assert_eq!(body["dueDate"], "2023-10-01T00:00:00Z");
        assert_eq!(body["description"], "Description");
        assert!(body.get("status").is_none());
    }

    #[tokio::test]
    async fn test_complete_forces_status() {
        let completed = TODO_JSON.replace(r#""status":false"#, r#""status":true"#);
        let transport = ScriptedTransport::replying(200, &completed);
        let hooks = RecordingHooks::default();

        let todo = client(&transport, &hooks)
            .complete_todo(TOKEN, "1", &sample_todo())
            .await
            .unwrap();

        assert!(todo.status);
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], true);
        assert_eq!(hooks.notices.borrow()[0].title, "Todo completed successfully!");
    }

    #[tokio::test]
    async fn test_update_keeps_given_status() {
        let transport = ScriptedTransport::replying(200, TODO_JSON);
        let hooks = RecordingHooks::default();
        let mut todo = sample_todo();
        todo.title = "Renamed".to_string();

        client(&transport, &hooks).update_todo(TOKEN, "1", &todo).await.unwrap();

        let sent = transport.sent.borrow();
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Renamed");
        assert_eq!(body["status"], false);
        assert_eq!(hooks.notices.borrow()[0].title, "Todo updated successfully!");
    }

    #[tokio::test]
    async fn test_offline_failure() {
        let transport = ScriptedTransport::failing(true);
        let hooks = RecordingHooks::default();

        let result = client(&transport, &hooks).list_todos(TOKEN).await;

        assert_eq!(result, Err(ApiError::Offline));
        assert_eq!(hooks.notices.borrow()[0].title, "Network error!");
    }

    #[tokio::test]
    async fn test_online_network_failure_is_generic() {
        let transport = ScriptedTransport::failing(false);
        let hooks = RecordingHooks::default();

        let result = client(&transport, &hooks).get_todo(TOKEN, "1").await;

        assert!(matches!(result, Err(ApiError::Failed(_))));
        assert_eq!(hooks.notices.borrow()[0].title, "Failed to fetch todo");
        assert_eq!(hooks.expirations.get(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_generic_failure() {
        let transport = ScriptedTransport::replying(200, "<html>oops</html>");
        let hooks = RecordingHooks::default();

        let result = client(&transport, &hooks).list_todos(TOKEN).await;

        assert!(matches!(result, Err(ApiError::Failed(_))));
        let notices = hooks.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Failed to fetch todos");
    }

    #[tokio::test]
    async fn test_login_posts_credentials_without_token() {
        let transport = ScriptedTransport::replying(
            200,
            r#"{"uuid":"u1","username":"ann","email":"ann@example.com","token":"t0k"}"#,
        );
        let hooks = RecordingHooks::default();
        let credentials = Credentials {
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
        };

        let user = client(&transport, &hooks).login(&credentials).await.unwrap();

        assert_eq!(user.token, "t0k");
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].url, "https://api.test/users/login");
        assert_eq!(sent[0].header("Authorization"), None);
        assert!(hooks.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_login_rejected_does_not_expire_session() {
        let transport = ScriptedTransport::replying(401, "");
        let hooks = RecordingHooks::default();
        let credentials = Credentials {
            email: "ann@example.com".to_string(),
            password: "wrong-pass".to_string(),
        };

        let result = client(&transport, &hooks).login(&credentials).await;

        assert_eq!(result, Err(ApiError::Forbidden));
        assert_eq!(hooks.expirations.get(), 0);
        assert_eq!(hooks.notices.borrow()[0].title, "Username or Password is not correct!");
    }

    #[tokio::test]
    async fn test_register_conflict() {
        let transport = ScriptedTransport::replying(409, "");
        let hooks = RecordingHooks::default();
        let registration = Registration {
            username: "ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret1".to_string(),
        };

        let result = client(&transport, &hooks).register(&registration).await;

        assert_eq!(result, Err(ApiError::Duplicate));
        assert_eq!(transport.sent.borrow()[0].url, "https://api.test/users/register");
        assert_eq!(hooks.notices.borrow()[0].title, "Account already exists!");
    }
}
