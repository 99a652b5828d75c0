//! People Manager Core Library
//!
//! Business logic shared by People Manager front ends:
//! - People service (paged listing, search, lookup, field updates)
//! - The person field table that drives generic field editing
//!
//! The data source is injected as a [`PeopleRepository`] trait object, so the
//! same services run against the OData service or an in-memory store.

pub mod error;
pub mod fields;
pub mod services;

#[cfg(test)]
mod test_utils;

pub use error::{CoreError, CoreResult};
pub use fields::{FieldKind, FieldValue, PERSON_FIELDS, PersonField, find_field};
pub use services::{PeopleService, ServiceContext};

// Re-export the data types front ends need
pub use people_manager_provider::{
    PaginatedResponse, PaginationParams, PeopleRepository, Person, ProviderError,
};
