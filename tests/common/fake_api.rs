use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::time::Duration;

use abd_admin::traits::{Headers, HttpClient, HttpError, Response};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Map, Value};

use super::FAKE_BASE;

#[derive(Default)]
struct Store {
    tables: HashMap<String, BTreeMap<i64, Map<String, Value>>>,
    next_id: i64,
    fail_next: Option<u16>,
    /// Delay for list requests of a given page.
    page_delays: HashMap<u32, Duration>,
    log: Vec<(String, String)>,
}

/// In-memory admin API keyed by resource path.
#[derive(Default)]
pub struct FakeAdminApi {
    store: Mutex<Store>,
}

impl FakeAdminApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row and return its id.
    pub fn seed(&self, resource: &str, row: Value) -> i64 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        let mut object = row.as_object().cloned().unwrap_or_default();
        object.insert("id".to_string(), json!(id));
        store
            .tables
            .entry(resource.to_string())
            .or_default()
            .insert(id, object);
        id
    }

    pub fn row(&self, resource: &str, id: i64) -> Option<Value> {
        let store = self.store.lock().unwrap();
        store
            .tables
            .get(resource)
            .and_then(|t| t.get(&id))
            .map(|o| Value::Object(o.clone()))
    }

    pub fn count(&self, resource: &str) -> usize {
        let store = self.store.lock().unwrap();
        store.tables.get(resource).map_or(0, BTreeMap::len)
    }

    /// Answer the next request with `status` and no change.
    pub fn fail_next(&self, status: u16) {
        self.store.lock().unwrap().fail_next = Some(status);
    }

    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.store.lock().unwrap().page_delays.insert(page, delay);
    }

    /// `(method, url)` of every request so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.store.lock().unwrap().log.clone()
    }

    pub fn writes(&self) -> usize {
        self.requests().iter().filter(|(m, _)| m != "GET").count()
    }

    async fn handle(&self, method: &str, url: &str, body: Option<&str>) -> Result<Response, HttpError> {
        let (path, query) = url
            .strip_prefix(FAKE_BASE)
            .ok_or_else(|| HttpError::InvalidUrl(url.to_string()))
            .map(|rest| match rest.split_once('?') {
                Some((path, query)) => (path.to_string(), parse_query(query)),
                None => (rest.to_string(), HashMap::new()),
            })?;
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        let delay = {
            let mut store = self.store.lock().unwrap();
            store.log.push((method.to_string(), url.to_string()));
            if let Some(status) = store.fail_next.take() {
                return Ok(Response::json_body(status, &json!({"detail": "Injected failure"})));
            }
            query
                .get("page")
                .and_then(|p| p.parse::<u32>().ok())
                .and_then(|p| store.page_delays.get(&p).copied())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut store = self.store.lock().unwrap();
        let resource = segments[0].to_string();
        let id = segments.get(1).and_then(|s| s.parse::<i64>().ok());

        let response = match (method, id) {
            ("GET", None) => list(store.tables.entry(resource).or_default(), &query),
            ("GET", Some(id)) => match store.tables.get(&resource).and_then(|t| t.get(&id)) {
                Some(row) => Response::json_body(200, &Value::Object(row.clone())),
                None => not_found(),
            },
            ("POST", None) => {
                store.next_id += 1;
                let id = store.next_id;
                let mut object = parse_body(body);
                object.insert("id".to_string(), json!(id));
                store.tables.entry(resource).or_default().insert(id, object.clone());
                Response::json_body(201, &Value::Object(object))
            }
            ("PUT", Some(id)) => match store.tables.get_mut(&resource).and_then(|t| t.get_mut(&id)) {
                Some(row) => {
                    for (key, value) in parse_body(body) {
                        row.insert(key, value);
                    }
                    Response::json_body(200, &Value::Object(row.clone()))
                }
                None => not_found(),
            },
            ("DELETE", Some(id)) => match store.tables.get_mut(&resource).and_then(|t| t.remove(&id)) {
                Some(_) => Response::new(204, Bytes::new()),
                None => not_found(),
            },
            _ => Response::json_body(405, &json!({"detail": "Method Not Allowed"})),
        };
        Ok(response)
    }
}

fn list(table: &BTreeMap<i64, Map<String, Value>>, query: &HashMap<String, String>) -> Response {
    let page: u64 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let size: u64 = query.get("size").and_then(|s| s.parse().ok()).unwrap_or(50);

    let matching: Vec<&Map<String, Value>> = table
        .values()
        .filter(|row| {
            query
                .iter()
                .filter(|(key, _)| key.as_str() != "page" && key.as_str() != "size")
                .all(|(key, wanted)| match row.get(key) {
                    Some(Value::String(s)) => s == wanted,
                    Some(other) => other.to_string() == *wanted,
                    None => false,
                })
        })
        .collect();

    let total = matching.len() as u64;
    let items: Vec<Value> = matching
        .into_iter()
        .skip(((page.max(1) - 1) * size) as usize)
        .take(size as usize)
        .map(|row| Value::Object(row.clone()))
        .collect();

    Response::json_body(
        200,
        &json!({
            "items": items,
            "total": total,
            "page": page,
            "size": size,
            "pages": total.div_ceil(size),
        }),
    )
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            let decode = |s: &str| urlencoding::decode(s).map(|c| c.into_owned()).unwrap_or_default();
            (decode(k), decode(v))
        })
        .collect()
}

fn parse_body(body: Option<&str>) -> Map<String, Value> {
    body.and_then(|b| serde_json::from_str::<Value>(b).ok())
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default()
}

fn not_found() -> Response {
    Response::json_body(404, &json!({"detail": "Not Found"}))
}

#[async_trait]
impl HttpClient for FakeAdminApi {
    async fn get(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, None).await
    }

    async fn post(&self, url: &str, body: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, Some(body)).await
    }

    async fn put(&self, url: &str, body: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("PUT", url, Some(body)).await
    }

    async fn delete(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.handle("DELETE", url, None).await
    }
}
