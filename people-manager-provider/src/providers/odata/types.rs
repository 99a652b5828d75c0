//! OData wire envelopes

use serde::Deserialize;

/// Collection payload: `{"@odata.context": "...", "value": [...]}`
#[derive(Debug, Deserialize)]
pub struct ODataCollection<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

/// Error payload: `{"error": {"code": "...", "message": "..."}}`
#[derive(Debug, Deserialize)]
pub struct ODataErrorResponse {
    pub error: ODataErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ODataErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Property the service complained about, when it says so
    #[serde(default)]
    pub target: Option<String>,
}
