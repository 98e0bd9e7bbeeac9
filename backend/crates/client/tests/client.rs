//! Client against a stub API served on an ephemeral port

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use client::{
    AuthorModel, BookstoreClient, ClientError, LoginModel, MemoryTokenStore, RegistrationModel,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TOKEN: &str = "stub-token";
const PASSWORD: &str = "correct horse";

#[derive(Clone, Default)]
struct Stub {
    hits: Arc<AtomicUsize>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn frank() -> Value {
    json!({ "id": 1, "firstName": "Frank", "lastName": "Herbert", "bio": null, "books": [] })
}

async fn list_authors(State(stub): State<Stub>) -> Json<Value> {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    Json(json!([frank()]))
}

async fn create_author(State(stub): State<Stub>, headers: HeaderMap) -> StatusCode {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    if authorized(&headers) {
        StatusCode::CREATED
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn get_author(State(stub): State<Stub>, Path(id): Path<i32>) -> impl IntoResponse {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    if id == 1 {
        Json(frank()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn update_author(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> StatusCode {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    if body["id"] != id {
        return StatusCode::BAD_REQUEST;
    }
    StatusCode::NO_CONTENT
}

async fn delete_author(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> StatusCode {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    match (authorized(&headers), id) {
        (false, _) => StatusCode::UNAUTHORIZED,
        (true, 1) => StatusCode::NO_CONTENT,
        (true, _) => StatusCode::NOT_FOUND,
    }
}

async fn list_books() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn register(Json(body): Json<Value>) -> StatusCode {
    if body["emailAddress"] == "taken@bookstore.com" {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == PASSWORD {
        Json(json!({ "token": TOKEN })).into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn serve(stub: Stub) -> String {
    let app = Router::new()
        .route("/api/authors", get(list_authors).post(create_author))
        .route(
            "/api/authors/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        .route("/api/books", get(list_books))
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client() -> (BookstoreClient<MemoryTokenStore>, Stub) {
    let stub = Stub::default();
    let base = serve(stub.clone()).await;
    (BookstoreClient::new(base, MemoryTokenStore::new()).unwrap(), stub)
}

fn login_model(password: &str) -> LoginModel {
    LoginModel {
        email_address: "admin@bookstore.com".into(),
        password: password.into(),
    }
}

fn dune_author() -> AuthorModel {
    AuthorModel {
        first_name: "Frank".into(),
        last_name: "Herbert".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_reads() {
    let (client, _) = client().await;
    let url = client.endpoints.authors();

    let all = client.authors.get_all(&url).await.unwrap().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].last_name, "Herbert");

    let one = client.authors.get(&url, 1).await.unwrap().unwrap();
    assert_eq!(one.id, 1);

    assert!(client.authors.get(&url, 2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_non_ok_collection_is_none() {
    let (client, _) = client().await;
    let books = client.books.get_all(&client.endpoints.books()).await.unwrap();
    assert!(books.is_none());
}

#[tokio::test]
async fn test_writes_need_login() {
    let (client, _) = client().await;
    let url = client.endpoints.authors();

    assert!(!client.authors.create(&url, &dune_author()).await.unwrap());

    assert!(client.auth.log_in(&login_model(PASSWORD)).await.unwrap());
    assert_eq!(client.auth.token().await.unwrap().as_deref(), Some(TOKEN));

    assert!(client.authors.create(&url, &dune_author()).await.unwrap());

    let mut author = dune_author();
    author.id = 1;
    assert!(client.authors.update(&url, 1, &author).await.unwrap());
    assert!(client.authors.delete(&url, 1).await.unwrap());
    assert!(!client.authors.delete(&url, 2).await.unwrap());

    client.auth.log_out().await.unwrap();
    assert!(!client.authors.delete(&url, 1).await.unwrap());
}

#[tokio::test]
async fn test_delete_below_one_never_sends() {
    let (client, stub) = client().await;
    let url = client.endpoints.authors();

    assert!(!client.authors.delete(&url, 0).await.unwrap());
    assert!(!client.authors.delete(&url, -3).await.unwrap());
    assert_eq!(stub.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_login_stores_nothing() {
    let (client, _) = client().await;
    assert!(!client.auth.log_in(&login_model("wrong password")).await.unwrap());
    assert_eq!(client.auth.token().await.unwrap(), None);
}

#[tokio::test]
async fn test_register() {
    let (client, _) = client().await;
    let model = RegistrationModel {
        email_address: "reader@bookstore.com".into(),
        username: None,
        password: PASSWORD.into(),
        confirmation_password: PASSWORD.into(),
    };
    assert!(client.auth.register(&model).await.unwrap());

    let taken = RegistrationModel {
        email_address: "taken@bookstore.com".into(),
        ..model.clone()
    };
    assert!(!client.auth.register(&taken).await.unwrap());

    let mismatched = RegistrationModel {
        confirmation_password: "something else".into(),
        ..model
    };
    assert!(matches!(
        client.auth.register(&mismatched).await,
        Err(ClientError::Validation(_))
    ));
}
