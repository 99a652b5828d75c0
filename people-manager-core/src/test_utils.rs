//! Test helpers
//!
//! Mock repository and factory functions for service tests.

use std::sync::Arc;

use async_trait::async_trait;
use people_manager_provider::{
    InMemoryPeopleRepository, PaginationParams, PeopleRepository, Person, PersonPatch,
    ProviderError, ReadOnlyPeopleRepository, Result,
};
use tokio::sync::RwLock;

use crate::services::{PeopleService, ServiceContext};

// ===== MockPeopleRepository =====

/// In-memory store that records update calls and can be told to fail them
pub struct MockPeopleRepository {
    inner: InMemoryPeopleRepository,
    update_calls: RwLock<Vec<(String, PersonPatch)>>,
    last_params: RwLock<Option<PaginationParams>>,
    /// When set, `update_person` returns this error
    update_error: RwLock<Option<ProviderError>>,
}

impl MockPeopleRepository {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            inner: InMemoryPeopleRepository::new(people),
            update_calls: RwLock::new(Vec::new()),
            last_params: RwLock::new(None),
            update_error: RwLock::new(None),
        }
    }

    pub async fn set_update_error(&self, err: Option<ProviderError>) {
        *self.update_error.write().await = err;
    }

    pub async fn update_calls(&self) -> Vec<(String, PersonPatch)> {
        self.update_calls.read().await.clone()
    }

    pub async fn last_params(&self) -> Option<PaginationParams> {
        *self.last_params.read().await
    }
}

#[async_trait]
impl ReadOnlyPeopleRepository for MockPeopleRepository {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_people(&self, params: &PaginationParams) -> Result<Vec<Person>> {
        *self.last_params.write().await = Some(*params);
        self.inner.list_people(params).await
    }

    async fn count_people(&self, search_query: Option<&str>) -> Result<u32> {
        self.inner.count_people(search_query).await
    }

    async fn get_person(&self, user_name: &str) -> Result<Option<Person>> {
        self.inner.get_person(user_name).await
    }

    async fn search_people(
        &self,
        search_query: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Person>> {
        *self.last_params.write().await = Some(*params);
        self.inner.search_people(search_query, params).await
    }
}

#[async_trait]
impl PeopleRepository for MockPeopleRepository {
    async fn update_person(&self, user_name: &str, patch: &PersonPatch) -> Result<Person> {
        self.update_calls
            .write()
            .await
            .push((user_name.to_string(), patch.clone()));
        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }
        // Scalars only, like a 204 from the service
        self.inner.update_person(user_name, patch).await.map(|stored| Person {
            user_name: stored.user_name,
            first_name: stored.first_name,
            last_name: stored.last_name,
            middle_name: stored.middle_name,
            age: stored.age,
            ..Person::default()
        })
    }
}

// ===== Factories =====

pub fn create_test_people_service(
    people: Vec<Person>,
) -> (PeopleService, Arc<MockPeopleRepository>) {
    let repo = Arc::new(MockPeopleRepository::new(people));
    let ctx = Arc::new(ServiceContext::new(repo.clone()));
    (PeopleService::new(ctx), repo)
}

pub fn test_person(user_name: &str) -> Person {
    Person {
        first_name: Some(format!("First {user_name}")),
        last_name: Some(format!("Last {user_name}")),
        ..Person::new(user_name)
    }
}

/// `user1` ..= `user{count}`
pub fn test_people(count: usize) -> Vec<Person> {
    (1..=count).map(|i| test_person(&format!("user{i}"))).collect()
}
