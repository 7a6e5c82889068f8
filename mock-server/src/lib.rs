//! In-memory stand-in for the admin backend.
//!
//! Implements enough of the wire contract (login, bills, announcements,
//! phones, version uploads) to drive the client core over real HTTP. Every
//! JSON response uses the `{code, msg, data}` envelope.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Key the version endpoints accept unless configured otherwise.
pub const DEFAULT_VERSION_KEY: &str = "c18c6b5d-ad89-4e9e-9e45-211832";

pub const ADMIN_ACCOUNT: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            code: 200,
            msg: "success".to_string(),
            data: Some(data),
        })
    }

    fn fail(code: i32, msg: &str) -> Json<Self> {
        Json(Self {
            code,
            msg: msg.to_string(),
            data: None,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishAnnouncement {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub status: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub phone_id: i64,
    pub phone: String,
    pub project_id: Option<i64>,
    pub region_id: Option<i64>,
    pub status: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneInput {
    pub phone_id: Option<i64>,
    pub phone: Option<String>,
    pub project_id: Option<i64>,
    pub region_id: Option<i64>,
    pub status: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneBatch {
    pub action: String,
    pub phone_ids: Vec<i64>,
}

#[derive(Deserialize)]
pub struct Login {
    pub account: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub identifier: String,
    pub received: u64,
    pub chunks: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
}

pub struct AppState {
    version_key: String,
    next_id: AtomicI64,
    announcements: RwLock<BTreeMap<i64, Announcement>>,
    phones: RwLock<BTreeMap<i64, Phone>>,
    uploads: RwLock<HashMap<String, UploadRecord>>,
}

pub type Db = Arc<AppState>;

pub fn app() -> Router {
    app_with_version_key(DEFAULT_VERSION_KEY)
}

pub fn app_with_version_key(version_key: &str) -> Router {
    let db: Db = Arc::new(AppState {
        version_key: version_key.to_string(),
        next_id: AtomicI64::new(1),
        announcements: RwLock::new(BTreeMap::new()),
        phones: RwLock::new(BTreeMap::new()),
        uploads: RwLock::new(HashMap::new()),
    });
    Router::new()
        .route("/adminWeb/account/login", post(login))
        .route("/bill/user_bill", get(user_bill))
        .route("/announcement", get(list_announcements).delete(delete_announcement))
        .route("/announcement/publishOrUpdate", post(publish_announcement))
        .route("/phone", get(list_phones).post(add_phone).delete(delete_phone))
        .route("/phone/batch", post(batch_phones))
        .route("/phone/{phone_id}", put(update_phone))
        .route("/api/version/upload", post(upload_small))
        .route("/api/version/chunk-upload", post(upload_chunk))
        .route("/api/version/upload-progress/{identifier}", get(upload_progress))
        .route("/api/version/cancel-upload/{identifier}", delete(cancel_upload))
        .route("/api/version/list", get(version_list))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn next_id(db: &Db) -> i64 {
    db.next_id.fetch_add(1, Ordering::Relaxed)
}

fn page_params(params: &HashMap<String, String>) -> (usize, usize) {
    let number = |key: &str, default: usize| {
        params
            .get(key)
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    };
    (number("page", 1), number("pageSize", 10))
}

fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    Page {
        records: items
            .iter()
            .skip(page.saturating_sub(1).saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        total: items.len() as u64,
    }
}

async fn login(Json(input): Json<Login>) -> Json<Envelope<serde_json::Value>> {
    if input.account == ADMIN_ACCOUNT && input.password == ADMIN_PASSWORD {
        Envelope::ok(serde_json::json!({ "token": Uuid::new_v4().to_string() }))
    } else {
        Envelope::fail(401, "账号或密码错误")
    }
}

/// Echoes the paging it was asked for so callers can see their query.
async fn user_bill(Query(params): Query<HashMap<String, String>>) -> Json<Envelope<serde_json::Value>> {
    let (page, page_size) = page_params(&params);
    Envelope::ok(serde_json::json!({
        "records": [],
        "total": 0,
        "page": page,
        "pageSize": page_size,
    }))
}

async fn list_announcements(State(db): State<Db>) -> Json<Envelope<Vec<Announcement>>> {
    let announcements = db.announcements.read().await;
    Envelope::ok(announcements.values().cloned().collect())
}

async fn publish_announcement(
    State(db): State<Db>,
    Json(input): Json<PublishAnnouncement>,
) -> Json<Envelope<Announcement>> {
    let mut announcements = db.announcements.write().await;
    let id = match input.id {
        Some(id) if announcements.contains_key(&id) => id,
        Some(_) => return Envelope::fail(404, "公告不存在"),
        None => next_id(&db),
    };
    let announcement = Announcement {
        id,
        title: input.title,
        content: input.content,
        status: input.status.unwrap_or(1),
    };
    announcements.insert(id, announcement.clone());
    Envelope::ok(announcement)
}

async fn delete_announcement(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<()>>, StatusCode> {
    let id: i64 = params
        .get("id")
        .and_then(|v| v.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let mut announcements = db.announcements.write().await;
    match announcements.remove(&id) {
        Some(_) => Ok(Envelope::ok(())),
        None => Ok(Envelope::fail(404, "公告不存在")),
    }
}

async fn list_phones(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Envelope<Page<Phone>>> {
    let (page, page_size) = page_params(&params);
    let region = params.get("regionId").and_then(|v| v.parse::<i64>().ok());
    let phones = db.phones.read().await;
    let matching: Vec<Phone> = phones
        .values()
        .filter(|p| region.is_none() || p.region_id == region)
        .cloned()
        .collect();
    Envelope::ok(paginate(&matching, page, page_size))
}

async fn add_phone(State(db): State<Db>, Json(input): Json<PhoneInput>) -> Result<Json<Envelope<Phone>>, StatusCode> {
    let number = input.phone.ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let phone = Phone {
        phone_id: next_id(&db),
        phone: number,
        project_id: input.project_id,
        region_id: input.region_id,
        status: input.status.unwrap_or(1),
    };
    db.phones.write().await.insert(phone.phone_id, phone.clone());
    Ok(Envelope::ok(phone))
}

async fn update_phone(
    State(db): State<Db>,
    Path(phone_id): Path<i64>,
    Json(input): Json<PhoneInput>,
) -> Result<Json<Envelope<Phone>>, StatusCode> {
    if input.phone_id.is_some_and(|id| id != phone_id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut phones = db.phones.write().await;
    let phone = phones.get_mut(&phone_id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(number) = input.phone {
        phone.phone = number;
    }
    if input.project_id.is_some() {
        phone.project_id = input.project_id;
    }
    if input.region_id.is_some() {
        phone.region_id = input.region_id;
    }
    if let Some(status) = input.status {
        phone.status = status;
    }
    Ok(Envelope::ok(phone.clone()))
}

async fn delete_phone(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<()>>, StatusCode> {
    let phone_id: i64 = params
        .get("phoneId")
        .and_then(|v| v.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    db.phones
        .write()
        .await
        .remove(&phone_id)
        .map(|_| Envelope::ok(()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn batch_phones(State(db): State<Db>, Json(input): Json<PhoneBatch>) -> Result<Json<Envelope<u64>>, StatusCode> {
    let mut phones = db.phones.write().await;
    let mut affected = 0;
    for id in &input.phone_ids {
        let hit = match input.action.as_str() {
            "delete" => phones.remove(id).is_some(),
            "enable" | "disable" => match phones.get_mut(id) {
                Some(phone) => {
                    phone.status = if input.action == "enable" { 1 } else { 0 };
                    true
                }
                None => false,
            },
            _ => return Err(StatusCode::BAD_REQUEST),
        };
        if hit {
            affected += 1;
        }
    }
    Ok(Envelope::ok(affected))
}

fn authorize(db: &Db, headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(key) if key == db.version_key => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Drains a multipart body, returning the `identifier` text field (if any)
/// and the number of payload bytes across all parts.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(Option<String>, u64), StatusCode> {
    let mut multipart = multipart.map_err(|_| StatusCode::UNSUPPORTED_MEDIA_TYPE)?;
    let mut identifier = None;
    let mut received = 0u64;
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        let is_identifier = field.name() == Some("identifier") && field.file_name().is_none();
        let data = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        received += data.len() as u64;
        if is_identifier {
            let value = String::from_utf8(data.to_vec()).map_err(|_| StatusCode::BAD_REQUEST)?;
            identifier = Some(value);
        }
    }
    Ok((identifier, received))
}

async fn upload_small(
    State(db): State<Db>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Envelope<UploadRecord>>, StatusCode> {
    authorize(&db, &headers)?;
    let (_, received) = read_upload(multipart).await?;
    let record = UploadRecord {
        identifier: Uuid::new_v4().to_string(),
        received,
        chunks: 1,
    };
    tracing::info!(identifier = %record.identifier, bytes = record.received, "single upload");
    Ok(Envelope::ok(record))
}

async fn upload_chunk(
    State(db): State<Db>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Envelope<UploadRecord>>, StatusCode> {
    authorize(&db, &headers)?;
    let (identifier, received) = read_upload(multipart).await?;
    let identifier = identifier.unwrap_or_else(|| Uuid::new_v4().to_string());
    let mut uploads = db.uploads.write().await;
    let record = uploads
        .entry(identifier.clone())
        .or_insert_with(|| UploadRecord {
            identifier,
            received: 0,
            chunks: 0,
        });
    record.received += received;
    record.chunks += 1;
    tracing::info!(identifier = %record.identifier, chunks = record.chunks, "chunk received");
    Ok(Envelope::ok(record.clone()))
}

async fn upload_progress(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(identifier): Path<String>,
) -> Result<Json<Envelope<UploadRecord>>, StatusCode> {
    authorize(&db, &headers)?;
    let uploads = db.uploads.read().await;
    uploads
        .get(&identifier)
        .cloned()
        .map(Envelope::ok)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn cancel_upload(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(identifier): Path<String>,
) -> Result<Json<Envelope<()>>, StatusCode> {
    authorize(&db, &headers)?;
    db.uploads
        .write()
        .await
        .remove(&identifier)
        .map(|_| Envelope::ok(()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn version_list(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<serde_json::Value>>, StatusCode> {
    authorize(&db, &headers)?;
    let page: u64 = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let size: u64 = params.get("size").and_then(|v| v.parse().ok()).unwrap_or(10);
    Ok(Envelope::ok(serde_json::json!({
        "records": [],
        "total": 0,
        "page": page,
        "size": size,
    })))
}
