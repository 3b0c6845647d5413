//! Custom assertion macros
//!
//! Provides assertion macros with more descriptive failure output.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a response redirects to `$location`
#[macro_export]
macro_rules! assert_redirect {
    ($response:expr, $location:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status(),
            axum::http::StatusCode::SEE_OTHER,
            "Expected redirect, got {}",
            response.status()
        );
        assert_eq!(
            response.headers()[axum::http::header::LOCATION],
            $location,
            "Redirect went to the wrong location"
        );
    }};
}
