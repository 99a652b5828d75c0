//! OData request helpers

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpRequest, HttpResponse, HttpUtils};

use super::ODataPeopleRepository;
use super::types::ODataCollection;

impl ODataPeopleRepository {
    /// GET a collection and unwrap its `value` array
    pub(crate) async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self.send_checked(HttpRequest::get(path)).await?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let collection: ODataCollection<T> = HttpUtils::parse_json(&response.body)?;
        Ok(collection.value)
    }

    /// GET a single entity; `Ok(None)` on 404
    pub(crate) async fn get_entity<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self.transport.send(&HttpRequest::get(path)).await?;
        if response.status == 404 {
            log::debug!("[odata] {path} does not exist");
            return Ok(None);
        }
        if !response.is_success() {
            return Err(Self::map_status(&response, path));
        }
        HttpUtils::parse_json(&response.body).map(Some)
    }

    /// GET a plain-text body (`$count` responses)
    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.send_checked(HttpRequest::get(path)).await?;
        Ok(response.body)
    }

    /// PATCH a JSON body; the response body is `None` for `204 No Content`
    pub(crate) async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Option<String>> {
        let body_json =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                detail: e.to_string(),
            })?;
        log::debug!("[odata] PATCH body: {body_json}");

        let response = self.send_checked(HttpRequest::patch(path, body_json)).await?;
        if response.status == 204 || response.body.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(response.body))
        }
    }

    async fn send_checked(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.transport.send(&request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let err = Self::map_status(&response, &request.path);
            if err.is_expected() {
                log::warn!(
                    "[odata] {} {} failed: {err}",
                    request.method.as_str(),
                    request.path
                );
            } else {
                log::error!(
                    "[odata] {} {} failed: {err}",
                    request.method.as_str(),
                    request.path
                );
            }
            Err(err)
        }
    }
}
