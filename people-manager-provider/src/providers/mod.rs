//! People repository implementations

mod memory;
mod odata;

pub use memory::InMemoryPeopleRepository;
pub use odata::{DEFAULT_SERVICE_URL, ODataPeopleRepository};
