//! `PeopleRepository` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::query::ODataQuery;
use crate::traits::{PeopleRepository, ReadOnlyPeopleRepository};
use crate::types::{PaginationParams, Person, PersonPatch};

use super::{LIST_PROPERTIES, ODataPeopleRepository, PEOPLE_SEGMENT};

#[async_trait]
impl ReadOnlyPeopleRepository for ODataPeopleRepository {
    fn id(&self) -> &'static str {
        "odata"
    }

    async fn list_people(&self, params: &PaginationParams) -> Result<Vec<Person>> {
        let path = ODataQuery::new(PEOPLE_SEGMENT)
            .with_select(&LIST_PROPERTIES)
            .with_pagination(params)
            .build();
        self.get_collection(&path).await
    }

    async fn count_people(&self, search_query: Option<&str>) -> Result<u32> {
        if let Some(query) = search_query {
            // No $count on filtered sets: fetch the matching keys and count them
            let path = ODataQuery::new(PEOPLE_SEGMENT)
                .with_filter_contains(query, &LIST_PROPERTIES)
                .with_select(&["UserName"])
                .build();
            let matches: Vec<Person> = self.get_collection(&path).await?;
            return Ok(u32::try_from(matches.len()).unwrap_or(u32::MAX));
        }

        let path = ODataQuery::new(PEOPLE_SEGMENT).with_count().build();
        let text = self.get_text(&path).await?;
        Ok(text.trim().parse().unwrap_or_else(|_| {
            log::warn!("[odata] Unparsable count '{text}', treating as 0");
            0
        }))
    }

    async fn get_person(&self, user_name: &str) -> Result<Option<Person>> {
        let path = ODataQuery::new(PEOPLE_SEGMENT).with_key(user_name).build();
        self.get_entity(&path).await
    }

    async fn search_people(
        &self,
        search_query: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Person>> {
        let path = ODataQuery::new(PEOPLE_SEGMENT)
            .with_select(&LIST_PROPERTIES)
            .with_pagination(params)
            .with_filter_contains(search_query, &LIST_PROPERTIES)
            .build();
        self.get_collection(&path).await
    }
}

#[async_trait]
impl PeopleRepository for ODataPeopleRepository {
    async fn update_person(&self, user_name: &str, patch: &PersonPatch) -> Result<Person> {
        let path = ODataQuery::new(PEOPLE_SEGMENT).with_key(user_name).build();
        log::info!("[odata] Updating person '{user_name}'");

        match self.patch(&path, patch).await? {
            Some(body) => HttpUtils::parse_json(&body),
            // 204: the service accepted the values as sent
            None => Ok(Person {
                user_name: patch.user_name.clone(),
                first_name: patch.first_name.clone(),
                last_name: patch.last_name.clone(),
                middle_name: patch.middle_name.clone(),
                age: patch.age,
                ..Person::default()
            }),
        }
    }
}
