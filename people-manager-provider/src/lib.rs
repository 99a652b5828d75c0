//! # people-manager-provider
//!
//! Data access for People Manager: a people repository abstraction with an
//! OData v4 implementation (TripPin-compatible) and an in-memory one.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for HTTPS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use people_manager_provider::{
//!     DEFAULT_SERVICE_URL, HttpClientOptions, ODataPeopleRepository, PaginationParams,
//!     ReadOnlyPeopleRepository,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = ODataPeopleRepository::new(&HttpClientOptions::new(DEFAULT_SERVICE_URL))?;
//!
//!     let total = repo.count_people(None).await?;
//!     let people = repo.list_people(&PaginationParams::new(1, 10)).await?;
//!     println!("{} of {total}", people.len());
//!     for person in &people {
//!         println!("{} ({})", person.full_name(), person.user_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError).
//! Transient failures (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff before they surface. A missing person is
//! `Ok(None)` from [`ReadOnlyPeopleRepository::get_person`], not an error.

mod error;
mod http_client;
mod providers;
mod query;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use http_client::{
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, HttpClientOptions, HttpMethod, HttpRequest,
    HttpResponse, HttpTransport, ReqwestTransport,
};

pub use providers::{DEFAULT_SERVICE_URL, InMemoryPeopleRepository, ODataPeopleRepository};

pub use query::ODataQuery;

pub use traits::{PeopleRepository, ReadOnlyPeopleRepository};

pub use types::{
    City, DEFAULT_PAGE_SIZE, Feature, Location, PaginatedResponse, PaginationParams, Person,
    PersonGender, PersonPatch, Trip,
};
