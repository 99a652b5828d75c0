//! Session test helpers
//!
//! A people store that records updates, and builders for a scripted app.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use people_manager_console::backend::{AppConfig, CoreService, PaginationMode};
use people_manager_console::{App, MemoryConsole};
use people_manager_provider::{
    InMemoryPeopleRepository, PaginationParams, PeopleRepository, Person, PersonPatch,
    ProviderError, ReadOnlyPeopleRepository, Result,
};
use tokio::sync::RwLock;

/// In-memory store that records updates and can be told to fail
pub struct RecordingRepository {
    inner: InMemoryPeopleRepository,
    updates: RwLock<Vec<(String, PersonPatch)>>,
    /// When set, `update_person` returns this error
    update_error: RwLock<Option<ProviderError>>,
    /// When set, every read returns this error
    read_error: RwLock<Option<ProviderError>>,
}

impl RecordingRepository {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            inner: InMemoryPeopleRepository::new(people),
            updates: RwLock::new(Vec::new()),
            update_error: RwLock::new(None),
            read_error: RwLock::new(None),
        }
    }

    pub async fn set_update_error(&self, err: Option<ProviderError>) {
        *self.update_error.write().await = err;
    }

    pub async fn set_read_error(&self, err: Option<ProviderError>) {
        *self.read_error.write().await = err;
    }

    pub async fn updates(&self) -> Vec<(String, PersonPatch)> {
        self.updates.read().await.clone()
    }

    async fn check_read(&self) -> Result<()> {
        match self.read_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ReadOnlyPeopleRepository for RecordingRepository {
    fn id(&self) -> &'static str {
        "recording"
    }

    async fn list_people(&self, params: &PaginationParams) -> Result<Vec<Person>> {
        self.check_read().await?;
        self.inner.list_people(params).await
    }

    async fn count_people(&self, search_query: Option<&str>) -> Result<u32> {
        self.check_read().await?;
        self.inner.count_people(search_query).await
    }

    async fn get_person(&self, user_name: &str) -> Result<Option<Person>> {
        self.check_read().await?;
        self.inner.get_person(user_name).await
    }

    async fn search_people(
        &self,
        search_query: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Person>> {
        self.check_read().await?;
        self.inner.search_people(search_query, params).await
    }
}

#[async_trait]
impl PeopleRepository for RecordingRepository {
    async fn update_person(&self, user_name: &str, patch: &PersonPatch) -> Result<Person> {
        self.updates
            .write()
            .await
            .push((user_name.to_string(), patch.clone()));
        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }
        self.inner.update_person(user_name, patch).await
    }
}

/// `user{n}` with first name `First user{n}` and last name `Last user{n}`
pub fn test_person(user_name: &str) -> Person {
    let mut person = Person::new(user_name);
    person.first_name = Some(format!("First {user_name}"));
    person.last_name = Some(format!("Last {user_name}"));
    person
}

/// `user1` ..= `user{count}`
pub fn test_people(count: usize) -> Vec<Person> {
    (1..=count).map(|i| test_person(&format!("user{i}"))).collect()
}

pub fn config(page_size: u32, pagination_mode: PaginationMode) -> AppConfig {
    AppConfig {
        page_size,
        pagination_mode,
        ..AppConfig::default()
    }
}

pub fn app(
    repository: Arc<RecordingRepository>,
    config: &AppConfig,
    console: MemoryConsole,
) -> App<MemoryConsole> {
    let core = CoreService::new(repository);
    App::new(console, core.people(), config)
}
