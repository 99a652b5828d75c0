//! Shared helpers for the live service tests

#![allow(dead_code)]

use std::env;

use people_manager_provider::{HttpClientOptions, ODataPeopleRepository};

/// Environment variable naming the service root to test against
pub const LIVE_URL_VAR: &str = "PEOPLE_MANAGER_LIVE_URL";

/// Return early when the live service is not configured
#[macro_export]
macro_rules! skip_if_no_service {
    () => {
        if std::env::var($crate::common::LIVE_URL_VAR).is_err() {
            eprintln!(
                "skipping: {} is not set",
                $crate::common::LIVE_URL_VAR
            );
            return;
        }
    };
}

pub fn live_repository() -> ODataPeopleRepository {
    let url = env::var(LIVE_URL_VAR).unwrap_or_default();
    ODataPeopleRepository::new(&HttpClientOptions::new(url))
        .expect("failed to build HTTP client")
}
