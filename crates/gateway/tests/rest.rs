use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use api_types::expense::{ExpenseInsert, ExpenseRow, ExpenseUpdate};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDate, Utc};
use engine::{Costs, Expense, ExpensePatch, FilterCriteria, Money, RateLine, YesNo};
use gateway::{ExpenseGateway, GatewayError, RestConfig, RestGateway};
use serde_json::json;

const API_KEY: &str = "test-key";

/// Minimal PostgREST stand-in for the `despesas` table.
#[derive(Clone, Default)]
struct FakeBackend {
    rows: Arc<Mutex<Vec<ExpenseRow>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    next_id: Arc<Mutex<u32>>,
}

impl FakeBackend {
    fn last_query(&self) -> HashMap<String, String> {
        self.queries.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

fn unauthorized(headers: &HeaderMap) -> Option<Response> {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    if apikey == Some(API_KEY) && bearer == Some("Bearer test-key") {
        return None;
    }
    Some(
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid API key" })),
        )
            .into_response(),
    )
}

fn row_matches(row: &ExpenseRow, query: &HashMap<String, String>) -> bool {
    let columns = [
        ("id", &row.id),
        ("estado", &row.estado),
        ("cidade", &row.cidade),
        ("instituto_pesquisa", &row.instituto_pesquisa),
        ("esta_registrado", &row.esta_registrado),
    ];
    columns.iter().all(|(column, value)| {
        query
            .get(*column)
            .is_none_or(|wanted| wanted.strip_prefix("eq.") == Some(value.as_str()))
    })
}

async fn list(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    backend.queries.lock().unwrap().push(query.clone());
    let rows: Vec<ExpenseRow> = backend
        .rows
        .lock()
        .unwrap()
        .iter()
        .filter(|row| row_matches(row, &query))
        .cloned()
        .collect();
    Json(rows).into_response()
}

async fn insert(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Json(body): Json<ExpenseInsert>,
) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    if body.cidade == "boom" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if body.estado == "ZZ" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "new row violates check constraint \"estado\"" })),
        )
            .into_response();
    }
    if headers.get("prefer").and_then(|v| v.to_str().ok()) != Some("return=representation") {
        return StatusCode::CREATED.into_response();
    }

    let id = {
        let mut next = backend.next_id.lock().unwrap();
        *next += 1;
        format!("row-{next}")
    };
    let mut value = serde_json::to_value(&body).unwrap();
    value["id"] = json!(id);
    let mut row: ExpenseRow = serde_json::from_value(value).unwrap();
    row.criado_em = Some(Utc::now());
    row.atualizado_em = row.criado_em;
    backend.rows.lock().unwrap().insert(0, row.clone());
    (StatusCode::CREATED, Json(vec![row])).into_response()
}

async fn update(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<ExpenseUpdate>,
) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    let changes = serde_json::to_value(&body).unwrap();
    let mut rows = backend.rows.lock().unwrap();
    let mut updated = Vec::new();
    for row in rows.iter_mut().filter(|row| row_matches(row, &query)) {
        let mut value = serde_json::to_value(&*row).unwrap();
        for (column, change) in changes.as_object().unwrap() {
            value[column] = change.clone();
        }
        *row = serde_json::from_value(value).unwrap();
        row.atualizado_em = Some(Utc::now());
        updated.push(row.clone());
    }
    Json(updated).into_response()
}

async fn remove(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    let mut rows = backend.rows.lock().unwrap();
    let (removed, kept): (Vec<_>, Vec<_>) = rows.drain(..).partition(|row| row_matches(row, &query));
    *rows = kept;
    Json(removed).into_response()
}

async fn spawn_backend() -> (FakeBackend, SocketAddr) {
    let backend = FakeBackend::default();
    let app = Router::new()
        .route(
            "/rest/v1/despesas",
            get(list).post(insert).patch(update).delete(remove),
        )
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (backend, addr)
}

fn gateway_for(addr: SocketAddr, api_key: &str) -> RestGateway {
    RestGateway::new(&RestConfig::new(format!("http://{addr}"), api_key)).unwrap()
}

fn draft(state: &str, city: &str, registered: YesNo) -> Expense {
    let mut expense = Expense {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        state: state.to_string(),
        city: city.to_string(),
        institute: "Piauí Vox".to_string(),
        registered,
        registration_number: registered.is_yes().then(|| "BR-00001/2024".to_string()),
        researcher_count: 1,
        researcher_names: vec!["João Silva".to_string()],
        closed_value: Money::new(500_000),
        costs: Costs {
            questionnaire: RateLine::new(1.5, Money::new(1_000)),
            car_diem: RateLine::new(2.0, Money::new(15_000)),
            meal_diem: RateLine::new(3.0, Money::new(8_000)),
            lodging: Money::new(30_000),
            fuel: Money::new(20_000),
            system: Money::new(10_000),
            moto_taxi: Money::new(5_000),
            statistician: Money::new(40_000),
            other: Money::new(7_500),
        },
        ..Expense::default()
    };
    expense.refresh_totals();
    expense
}

#[tokio::test]
async fn create_returns_the_stored_record() {
    let (backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    let original = draft("PI", "Teresina", YesNo::Yes);
    let stored = gateway.create(&original).await.unwrap();

    assert_eq!(stored.id.as_deref(), Some("row-1"));
    assert!(stored.created_at.is_some());
    assert_eq!(stored.total_expense, Money::new(158_500));
    assert_eq!(stored.profit, Money::new(341_500));
    assert_eq!(
        Expense {
            id: None,
            created_at: None,
            updated_at: None,
            ..stored
        },
        original
    );
    assert_eq!(backend.rows.lock().unwrap()[0].total_despesas, 1585.0);
}

#[tokio::test]
async fn listing_is_ordered_newest_first() {
    let (backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    gateway.create(&draft("PI", "Teresina", YesNo::Yes)).await.unwrap();
    gateway.create(&draft("MA", "São Luís", YesNo::No)).await.unwrap();

    let all = gateway.get_all().await.unwrap();
    let ids: Vec<_> = all.iter().filter_map(|e| e.id.as_deref()).collect();
    assert_eq!(ids, ["row-2", "row-1"]);

    let query = backend.last_query();
    assert_eq!(query.get("select").map(String::as_str), Some("*"));
    assert_eq!(query.get("order").map(String::as_str), Some("criado_em.desc"));
}

#[tokio::test]
async fn filters_become_eq_parameters() {
    let (backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    gateway.create(&draft("PI", "Teresina", YesNo::Yes)).await.unwrap();
    gateway.create(&draft("PI", "Parnaíba", YesNo::No)).await.unwrap();
    gateway.create(&draft("MA", "São Luís", YesNo::No)).await.unwrap();

    let criteria = FilterCriteria::from_selectors("PI", "all", "all", "nao");
    let found = gateway.get_with_filters(&criteria).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].city, "Parnaíba");

    let query = backend.last_query();
    assert_eq!(query.get("estado").map(String::as_str), Some("eq.PI"));
    assert_eq!(query.get("esta_registrado").map(String::as_str), Some("eq.nao"));
    assert!(!query.contains_key("cidade"));
    assert!(!query.contains_key("instituto_pesquisa"));

    let everything = gateway
        .get_with_filters(&FilterCriteria::default())
        .await
        .unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn get_by_id_distinguishes_missing_records() {
    let (_backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    let stored = gateway.create(&draft("PI", "Teresina", YesNo::Yes)).await.unwrap();
    let id = stored.id.clone().unwrap();

    assert_eq!(gateway.get_by_id(&id).await.unwrap(), Some(stored));
    assert_eq!(gateway.get_by_id("row-99").await.unwrap(), None);
}

#[tokio::test]
async fn update_sends_only_changed_columns() {
    let (backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    let stored = gateway.create(&draft("PI", "Teresina", YesNo::Yes)).await.unwrap();
    let id = stored.id.clone().unwrap();

    let patch = ExpensePatch {
        city: Some("Parnaíba".to_string()),
        registration_number: Some(String::new()),
        registered: Some(YesNo::No),
        ..ExpensePatch::default()
    };
    let updated = gateway.update(&id, &patch).await.unwrap();
    assert_eq!(updated.city, "Parnaíba");
    assert_eq!(updated.registered, YesNo::No);
    assert_eq!(updated.registration_number, None);
    assert_eq!(updated.costs, stored.costs);
    assert_eq!(backend.rows.lock().unwrap()[0].cidade, "Parnaíba");

    assert!(matches!(
        gateway.update("row-99", &patch).await,
        Err(GatewayError::NotFound(id)) if id == "row-99"
    ));
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let (backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    let first = gateway.create(&draft("PI", "Teresina", YesNo::Yes)).await.unwrap();
    gateway.create(&draft("MA", "São Luís", YesNo::No)).await.unwrap();

    gateway.delete(first.id.as_deref().unwrap()).await.unwrap();
    assert_eq!(backend.rows.lock().unwrap().len(), 1);
    assert!(matches!(
        gateway.delete("row-1").await,
        Err(GatewayError::NotFound(_))
    ));
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let (_backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    let err = gateway
        .create(&draft("ZZ", "Teresina", YesNo::Yes))
        .await
        .unwrap_err();
    match err {
        GatewayError::Server { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "new row violates check constraint \"estado\"");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn bodiless_errors_fall_back_to_status() {
    let (_backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, API_KEY);

    let err = gateway
        .create(&draft("PI", "boom", YesNo::Yes))
        .await
        .unwrap_err();
    assert!(err.is_transient());
    assert_eq!(
        err.to_string(),
        "500 Internal Server Error: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn wrong_key_is_rejected() {
    let (_backend, addr) = spawn_backend().await;
    let gateway = gateway_for(addr, "other-key");

    let err = gateway.get_all().await.unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Server { status, ref message }
            if status.as_u16() == 401 && message == "Invalid API key"
    ));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = gateway_for(addr, API_KEY);
    let err = gateway.get_all().await.unwrap_err();
    assert!(matches!(err, GatewayError::Network(_)));
    assert!(err.is_transient());
}
