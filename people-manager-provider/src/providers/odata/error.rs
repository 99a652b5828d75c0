//! Status code to [`ProviderError`] mapping

use crate::error::ProviderError;
use crate::http_client::{HttpResponse, HttpUtils};
use crate::utils::excerpt::body_excerpt;

use super::ODataPeopleRepository;
use super::types::ODataErrorResponse;

impl ODataPeopleRepository {
    /// Turn a non-success response into an error.
    ///
    /// `resource` is the request path, reported by `NotFound`.
    pub(crate) fn map_status(response: &HttpResponse, resource: &str) -> ProviderError {
        let parsed: Option<ODataErrorResponse> = HttpUtils::parse_json(&response.body).ok();
        let message = parsed
            .as_ref()
            .and_then(|e| e.error.message.clone())
            .unwrap_or_else(|| body_excerpt(&response.body));

        match response.status {
            400 => ProviderError::InvalidParameter {
                param: parsed
                    .and_then(|e| e.error.target)
                    .unwrap_or_else(|| "body".to_string()),
                detail: message,
            },
            404 => ProviderError::NotFound {
                resource: resource.to_string(),
            },
            status => ProviderError::Unknown {
                status: Some(status),
                raw_message: message,
            },
        }
    }
}
