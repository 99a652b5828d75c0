//! People browsing and editing service

use std::sync::Arc;

use people_manager_provider::{
    PaginatedResponse, PaginationParams, Person, PersonPatch, ProviderError,
};

use crate::error::{CoreError, CoreResult};
use crate::fields::{FieldKind, FieldValue, PersonField};
use crate::services::ServiceContext;

/// Largest page the service will request
pub const MAX_PAGE_SIZE: u32 = 100;

/// People browsing and editing service
pub struct PeopleService {
    ctx: Arc<ServiceContext>,
}

impl PeopleService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// One page of people together with the total count
    pub async fn get_people(
        &self,
        page: u32,
        page_size: u32,
    ) -> CoreResult<PaginatedResponse<Person>> {
        let params = PaginationParams::new(page, page_size).validated(MAX_PAGE_SIZE);
        let repo = &self.ctx.people_repository;

        let items = repo
            .list_people(&params)
            .await
            .map_err(|e| self.ctx.handle_provider_error("list people", e))?;
        let total_count = repo
            .count_people(None)
            .await
            .map_err(|e| self.ctx.handle_provider_error("count people", e))?;

        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.page_size,
            total_count,
        ))
    }

    /// One page of people matching `query` together with the matching count
    pub async fn search_people(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> CoreResult<PaginatedResponse<Person>> {
        let params = PaginationParams::new(page, page_size).validated(MAX_PAGE_SIZE);
        let repo = &self.ctx.people_repository;

        let items = repo
            .search_people(query, &params)
            .await
            .map_err(|e| self.ctx.handle_provider_error("search people", e))?;
        let total_count = repo
            .count_people(Some(query))
            .await
            .map_err(|e| self.ctx.handle_provider_error("count matches", e))?;

        log::debug!("Search '{query}' matched {total_count} people");

        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.page_size,
            total_count,
        ))
    }

    /// Full record for `username`; [`CoreError::PersonNotFound`] when absent
    pub async fn get_person_by_username(&self, username: &str) -> CoreResult<Person> {
        self.ctx
            .people_repository
            .get_person(username)
            .await
            .map_err(|e| self.ctx.handle_provider_error("get person", e))?
            .ok_or_else(|| CoreError::PersonNotFound(username.to_string()))
    }

    /// Set `field` to `value` on a copy of `person` and store it.
    ///
    /// The record is stored under its original user name even when the
    /// edited field is `UserName`. `person` itself is never modified.
    pub async fn update_person(
        &self,
        person: &Person,
        field: &PersonField,
        value: FieldValue,
    ) -> CoreResult<Person> {
        if field.kind() == FieldKind::Unsupported {
            return Err(CoreError::UnsupportedField(field.name().to_string()));
        }

        let mut updated = person.clone();
        field.set(&mut updated, value)?;

        log::info!("Updating {} of '{}'", field.name(), person.user_name);

        let stored = self
            .ctx
            .people_repository
            .update_person(&person.user_name, &PersonPatch::from(&updated))
            .await
            .map_err(|e| match e {
                ProviderError::InvalidParameter { detail, .. } => {
                    log::warn!("Update of {} rejected: {detail}", field.name());
                    CoreError::ValidationError(detail)
                }
                ProviderError::NotFound { .. } => {
                    CoreError::PersonNotFound(person.user_name.clone())
                }
                other => self.ctx.handle_provider_error("update person", other),
            })?;

        Ok(merge_stored(stored, updated))
    }
}

/// Prefer what the service returned; keep local values it left out
fn merge_stored(stored: Person, local: Person) -> Person {
    Person {
        user_name: stored.user_name,
        first_name: stored.first_name.or(local.first_name),
        last_name: stored.last_name.or(local.last_name),
        middle_name: stored.middle_name.or(local.middle_name),
        gender: stored.gender.or(local.gender),
        age: stored.age.or(local.age),
        emails: stored.emails.or(local.emails),
        address_info: stored.address_info.or(local.address_info),
        home_address: stored.home_address.or(local.home_address),
        favorite_feature: stored.favorite_feature.or(local.favorite_feature),
        features: stored.features.or(local.features),
        friends: stored.friends.or(local.friends),
        best_friend: stored.best_friend.or(local.best_friend),
        trips: stored.trips.or(local.trips),
    }
}
