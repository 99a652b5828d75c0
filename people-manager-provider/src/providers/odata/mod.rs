//! OData people repository (TripPin-compatible services)

mod error;
mod http;
mod provider;
mod types;

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::{HttpClientOptions, HttpTransport, ReqwestTransport};

/// Public TripPin sample service
pub const DEFAULT_SERVICE_URL: &str =
    "http://services.odata.org/TripPinRESTierService/(S(ibiqexd5sgywtjtvpesut30t))";

/// Entity set holding the people
pub(crate) const PEOPLE_SEGMENT: &str = "people";
/// Properties fetched for list and search pages
pub(crate) const LIST_PROPERTIES: [&str; 3] = ["UserName", "FirstName", "LastName"];

/// People repository talking OData v4 over HTTP
pub struct ODataPeopleRepository {
    pub(crate) transport: Arc<dyn HttpTransport>,
}

impl ODataPeopleRepository {
    /// Repository over a `reqwest` transport for `options.base_url`
    pub fn new(options: &HttpClientOptions) -> Result<Self> {
        let transport = ReqwestTransport::new(options)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}
