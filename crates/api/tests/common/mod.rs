#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use villa_core::repository::{DynRepository, Repository, RepositoryError};
use villa_core::roles::Role;
use villa_core::villa_number::{VillaNumber, VillaNumberFilter};
use villa_db::repositories::MemoryRepository;

use villa_api::auth::jwt::JwtConfig;
use villa_api::config::ServerConfig;
use villa_api::router::build_app_router;
use villa_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        strict_conflict_status: false,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

pub fn admin_token() -> String {
    test_config().jwt.issue(1, Role::Admin).unwrap()
}

pub fn customer_token() -> String {
    test_config().jwt.issue(2, Role::Customer).unwrap()
}

// ---------------------------------------------------------------------------
// Repository doubles
// ---------------------------------------------------------------------------

/// In-memory repository that counts every call made through the port.
#[derive(Default)]
pub struct CountingRepository {
    inner: MemoryRepository<VillaNumber>,
    calls: AtomicUsize,
    stale_reads: bool,
}

impl CountingRepository {
    /// A repository whose `get` always misses, as if every lookup raced a
    /// concurrent insert. Duplicates can then only be caught by `create`.
    pub fn with_stale_reads() -> Self {
        Self {
            stale_reads: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of persisted rows, without counting as a call.
    pub async fn stored(&self) -> usize {
        self.inner.len().await
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Repository<VillaNumber> for CountingRepository {
    async fn get_all(&self) -> Result<Vec<VillaNumber>, RepositoryError> {
        self.record();
        self.inner.get_all().await
    }

    async fn get(
        &self,
        filter: &VillaNumberFilter,
    ) -> Result<Option<VillaNumber>, RepositoryError> {
        self.record();
        if self.stale_reads {
            return Ok(None);
        }
        self.inner.get(filter).await
    }

    async fn create(&self, entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        self.record();
        self.inner.create(entity).await
    }

    async fn update(&self, entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        self.record();
        self.inner.update(entity).await
    }

    async fn remove(&self, entity: &VillaNumber) -> Result<(), RepositoryError> {
        self.record();
        self.inner.remove(entity).await
    }

    fn backend(&self) -> &'static str {
        self.inner.backend()
    }
}

/// Repository whose every operation fails with a storage error.
pub struct FailingRepository;

impl FailingRepository {
    pub const MESSAGE: &'static str = "disk on fire";

    fn fail<T>() -> Result<T, RepositoryError> {
        Err(RepositoryError::Storage(Self::MESSAGE.to_string()))
    }
}

#[async_trait]
impl Repository<VillaNumber> for FailingRepository {
    async fn get_all(&self) -> Result<Vec<VillaNumber>, RepositoryError> {
        Self::fail()
    }

    async fn get(&self, _filter: &VillaNumberFilter) -> Result<Option<VillaNumber>, RepositoryError> {
        Self::fail()
    }

    async fn create(&self, _entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        Self::fail()
    }

    async fn update(&self, _entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        Self::fail()
    }

    async fn remove(&self, _entity: &VillaNumber) -> Result<(), RepositoryError> {
        Self::fail()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Self::fail()
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

/// Repository whose listing panics mid-request.
pub struct PanickingRepository;

#[async_trait]
impl Repository<VillaNumber> for PanickingRepository {
    async fn get_all(&self) -> Result<Vec<VillaNumber>, RepositoryError> {
        panic!("villa index corrupted");
    }

    async fn get(&self, _filter: &VillaNumberFilter) -> Result<Option<VillaNumber>, RepositoryError> {
        Ok(None)
    }

    async fn create(&self, entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        Ok(entity.clone())
    }

    async fn update(&self, entity: &VillaNumber) -> Result<VillaNumber, RepositoryError> {
        Ok(entity.clone())
    }

    async fn remove(&self, _entity: &VillaNumber) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "panicking"
    }
}

// ---------------------------------------------------------------------------
// Test application
// ---------------------------------------------------------------------------

/// The full router (same middleware stack as production) plus a handle on
/// the counting repository behind it.
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<CountingRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_repo(CountingRepository::default(), config)
    }

    pub fn with_repo(repo: CountingRepository, config: ServerConfig) -> Self {
        let repo = Arc::new(repo);
        let router = build_router(repo.clone(), config);
        Self { router, repo }
    }

    /// Router backed by an arbitrary repository. `repo` is a fresh, unused
    /// counter in that case.
    pub fn with_backend(villa_numbers: DynRepository<VillaNumber>) -> Self {
        Self {
            router: build_router(villa_numbers, test_config()),
            repo: Arc::default(),
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.request(Method::DELETE, uri, token, None).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> Response {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> Response {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Response {
        let content_type = body.as_ref().map(|_| "application/json");
        let raw = body.map(|json| json.to_string()).unwrap_or_default();
        send(&self.router, method, uri, token, content_type, raw).await
    }

    /// Send a request with an arbitrary body and optional content type.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        content_type: Option<&str>,
        body: &str,
    ) -> Response {
        send(&self.router, method, uri, token, content_type, body.to_string()).await
    }

    /// Create a villa number as admin and return the parsed envelope.
    pub async fn create(&self, number: i32, details: Option<&str>) -> serde_json::Value {
        let response = self
            .post_json(
                "/api/v1/villanumbers",
                Some(&admin_token()),
                serde_json::json!({ "number": number, "specialDetails": details }),
            )
            .await;
        body_json(response).await
    }
}

pub fn build_router(villa_numbers: DynRepository<VillaNumber>, config: ServerConfig) -> Router {
    let state = AppState {
        villa_numbers,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: String,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    router
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
