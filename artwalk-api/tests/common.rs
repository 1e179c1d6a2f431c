#![allow(dead_code)]

use std::sync::Arc;

use artwalk_api::{app, AppState, AuthConfig};
use artwalk_core::repository::{BookingRepository, CapacityOutcome, RepositoryError};
use artwalk_core::{BookingRules, BookingService};
use artwalk_shared::Booking;
use artwalk_store::InMemoryBookingRepository;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "test-password";
pub const JWT_SECRET: &str = "test-secret";

/// Repository whose every call fails, for exercising 500 paths.
pub struct BrokenRepository;

#[async_trait]
impl BookingRepository for BrokenRepository {
    async fn tickets_sold(&self, _label: &str) -> Result<i64, RepositoryError> {
        Err("database is down".into())
    }

    async fn insert(&self, _booking: &Booking) -> Result<(), RepositoryError> {
        Err("database is down".into())
    }

    async fn insert_within_capacity(
        &self,
        _booking: &Booking,
        _label: &str,
        _max_tickets: i64,
    ) -> Result<CapacityOutcome, RepositoryError> {
        Err("database is down".into())
    }

    async fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        Err("database is down".into())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, RepositoryError> {
        Err("database is down".into())
    }
}

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repo(Arc::new(InMemoryBookingRepository::new()), true)
    }

    pub fn with_repo(repo: Arc<dyn BookingRepository>, expose_error_details: bool) -> Self {
        let state = AppState {
            bookings: BookingService::new(repo, BookingRules::default()),
            auth: AuthConfig {
                admin_password: ADMIN_PASSWORD.to_string(),
                secret: JWT_SECRET.to_string(),
                expiration: 600,
            },
            expose_error_details,
        };
        Self { router: app(state) }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn sign_up(&self, selected_date: &str, quantity: i64) -> Response {
        self.post_json(
            "/api/signup",
            json!({
                "selectedDate": selected_date,
                "fullName": "Test Guest",
                "email": "guest@example.com",
                "ticketQuantity": quantity,
                "newsletter": false
            }),
        )
        .await
    }

    pub async fn admin_token(&self) -> String {
        let res = self
            .post_json("/api/admin/login", json!({ "password": ADMIN_PASSWORD }))
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        parse_body(res).await["token"].as_str().unwrap().to_string()
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
