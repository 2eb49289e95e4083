//! Shared fakes for controller tests
//!
//! - `MemoryClient`: in-memory resource that slices its records into pages
//! - `GatedClient`: hands every list request to the test, which decides when
//!   and with what each one resolves

#![allow(dead_code)]

use async_trait::async_trait;
use equus_client::{ClientError, ListQuery, Page, RecordId, ResourceClient, Result};
use equus_console::LocalFilter;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

#[derive(Clone, Debug, PartialEq)]
pub struct Horse {
    pub id: RecordId,
    pub name: String,
}

pub fn horse(id: RecordId, name: &str) -> Horse {
    Horse {
        id,
        name: name.to_string(),
    }
}

/// `count` horses named "Horse 1" to "Horse {count}"
pub fn herd(count: usize) -> Vec<Horse> {
    (1..=count as RecordId)
        .map(|id| horse(id, &format!("Horse {}", id)))
        .collect()
}

/// One page of a herd of `total` horses
pub fn herd_page(number: u32, size: u32, total: usize) -> Page<Horse> {
    Page::from_all(herd(total), number, size)
}

pub fn name_filter() -> LocalFilter<Horse> {
    LocalFilter::new().field("name", |h: &Horse| Some(h.name.as_str()))
}

// ============== MemoryClient ==============

#[derive(Default)]
pub struct MemoryClient {
    records: Mutex<Vec<Horse>>,
    queries: Mutex<Vec<ListQuery>>,
    failures: Mutex<Vec<ClientError>>,
}

impl MemoryClient {
    pub fn new(records: Vec<Horse>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: ClientError) {
        self.failures.lock().push(error);
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().clone()
    }

    pub fn last_query(&self) -> Option<ListQuery> {
        self.queries.lock().last().cloned()
    }

    pub fn list_calls(&self) -> usize {
        self.queries.lock().len()
    }

    fn take_failure(&self) -> Result<()> {
        match self.failures.lock().pop() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceClient for MemoryClient {
    type Entity = Horse;
    type Create = String;
    type Update = String;

    fn resource_name(&self) -> &str {
        "horse"
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Horse>> {
        self.queries.lock().push(query.clone());
        self.take_failure()?;
        let records = self.records.lock().clone();
        Ok(Page::from_all(records, query.page, query.size))
    }

    async fn get(&self, id: RecordId) -> Result<Horse> {
        self.take_failure()?;
        self.records
            .lock()
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| ClientError::request(None, "Registro no encontrado"))
    }

    async fn create(&self, name: &String) -> Result<Horse> {
        self.take_failure()?;
        let mut records = self.records.lock();
        let id = records.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        let created = horse(id, name);
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: RecordId, name: &String) -> Result<Horse> {
        self.take_failure()?;
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| ClientError::request(None, "Registro no encontrado"))?;
        record.name = name.clone();
        Ok(record.clone())
    }

    async fn remove(&self, id: RecordId) -> Result<bool> {
        self.take_failure()?;
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|h| h.id != id);
        Ok(records.len() < before)
    }
}

// ============== GatedClient ==============

pub type Reply = oneshot::Sender<Result<Page<Horse>>>;

pub struct GatedClient {
    requests: mpsc::UnboundedSender<(ListQuery, Reply)>,
}

impl GatedClient {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(ListQuery, Reply)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { requests: tx }, rx)
    }
}

fn unsupported() -> ClientError {
    ClientError::request(None, "unsupported")
}

#[async_trait]
impl ResourceClient for GatedClient {
    type Entity = Horse;
    type Create = String;
    type Update = String;

    async fn list(&self, query: &ListQuery) -> Result<Page<Horse>> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send((query.clone(), tx))
            .map_err(|_| unsupported())?;
        rx.await.unwrap_or_else(|_| Err(unsupported()))
    }

    async fn get(&self, _id: RecordId) -> Result<Horse> {
        Err(unsupported())
    }

    async fn create(&self, _name: &String) -> Result<Horse> {
        Err(unsupported())
    }

    async fn update(&self, _id: RecordId, _name: &String) -> Result<Horse> {
        Err(unsupported())
    }

    async fn remove(&self, _id: RecordId) -> Result<bool> {
        Err(unsupported())
    }
}
