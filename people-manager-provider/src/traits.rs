use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PaginationParams, Person, PersonPatch};

/// Read access to the people collection.
#[async_trait]
pub trait ReadOnlyPeopleRepository: Send + Sync {
    /// Data source identifier (for logging)
    fn id(&self) -> &'static str;

    /// One page of people, ordered as the service returns them
    async fn list_people(&self, params: &PaginationParams) -> Result<Vec<Person>>;

    /// Number of people, optionally restricted to those matching `search_query`
    async fn count_people(&self, search_query: Option<&str>) -> Result<u32>;

    /// Person by user name; `Ok(None)` when the service has no such person
    async fn get_person(&self, user_name: &str) -> Result<Option<Person>>;

    /// One page of people whose names contain `search_query`
    async fn search_people(
        &self,
        search_query: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Person>>;
}

/// Read and write access to the people collection.
#[async_trait]
pub trait PeopleRepository: ReadOnlyPeopleRepository {
    /// Write the scalar properties of `patch` to the person stored under `user_name`
    ///
    /// Returns the person as stored after the update.
    async fn update_person(&self, user_name: &str, patch: &PersonPatch) -> Result<Person>;
}
