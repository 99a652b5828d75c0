//! In-process people store
//!
//! Behaves like the OData repository (paging, `contains` search over the
//! name properties, 404-style lookups) without a network. Used for offline
//! sessions and as the backing store in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::traits::{PeopleRepository, ReadOnlyPeopleRepository};
use crate::types::{PaginationParams, Person, PersonPatch};

#[derive(Default)]
pub struct InMemoryPeopleRepository {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPeopleRepository {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
        }
    }
}

/// Case-sensitive substring match, like OData `contains`
fn matches(person: &Person, query: &str) -> bool {
    person.user_name.contains(query)
        || person
            .first_name
            .as_deref()
            .is_some_and(|name| name.contains(query))
        || person
            .last_name
            .as_deref()
            .is_some_and(|name| name.contains(query))
}

fn page_of<'a>(
    people: impl Iterator<Item = &'a Person>,
    params: &PaginationParams,
) -> Vec<Person> {
    let skip = usize::try_from(params.skip()).unwrap_or(usize::MAX);
    people
        .skip(skip)
        .take(usize::try_from(params.page_size).unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[async_trait]
impl ReadOnlyPeopleRepository for InMemoryPeopleRepository {
    fn id(&self) -> &'static str {
        "memory"
    }

    async fn list_people(&self, params: &PaginationParams) -> Result<Vec<Person>> {
        let people = self.people.read().await;
        Ok(page_of(people.iter(), params))
    }

    async fn count_people(&self, search_query: Option<&str>) -> Result<u32> {
        let people = self.people.read().await;
        let count = match search_query {
            Some(query) => people.iter().filter(|p| matches(p, query)).count(),
            None => people.len(),
        };
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn get_person(&self, user_name: &str) -> Result<Option<Person>> {
        let people = self.people.read().await;
        Ok(people.iter().find(|p| p.user_name == user_name).cloned())
    }

    async fn search_people(
        &self,
        search_query: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Person>> {
        let people = self.people.read().await;
        Ok(page_of(
            people.iter().filter(|p| matches(p, search_query)),
            params,
        ))
    }
}

#[async_trait]
impl PeopleRepository for InMemoryPeopleRepository {
    async fn update_person(&self, user_name: &str, patch: &PersonPatch) -> Result<Person> {
        let mut people = self.people.write().await;
        let person = people
            .iter_mut()
            .find(|p| p.user_name == user_name)
            .ok_or_else(|| ProviderError::NotFound {
                resource: format!("people('{user_name}')"),
            })?;

        person.user_name.clone_from(&patch.user_name);
        person.first_name.clone_from(&patch.first_name);
        person.last_name.clone_from(&patch.last_name);
        person.middle_name.clone_from(&patch.middle_name);
        person.age = patch.age;

        Ok(person.clone())
    }
}
