//! # JSONPlaceholder load test
//!
//! A [Goose](https://docs.rs/goose/) load test that generates synthetic GET
//! traffic against the public [JSONPlaceholder](https://jsonplaceholder.typicode.com)
//! API, for throughput and latency measurement.
//!
//! Each simulated user repeatedly picks one of five equally weighted
//! [`EndpointTask`](./task_set/struct.EndpointTask.html)s at random, issues a
//! single GET for it, then sleeps a random 1 to 2 seconds before the next
//! iteration. Everything else (spawning users, hatch rate, run time,
//! statistics and reports) is Goose's job.
//!
//! ## Running
//!
//! ```bash
//! $ cargo run --release -- --users 10 --hatch-rate 2 --run-time 5m
//! ```
//!
//! Any Goose option is accepted. Use `--host` to point the same load test at
//! a different server, for example a local mirror of the API:
//!
//! ```bash
//! $ cargo run --release -- --host http://localhost:3000 -u 50 -r 10 -t 1m -v
//! ```
//!
//! ## Embedding
//!
//! The scenario can also be registered on a `GooseAttack` built elsewhere:
//!
//! ```rust,no_run
//! use goose::prelude::*;
//! use jsonplaceholder_loadtest::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GooseError> {
//!     let task_set = TaskSet::default();
//!     run(GooseAttack::initialize()?, &task_set).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## License
//!
//! Copyright 2026 The jsonplaceholder-loadtest Authors
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! you may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//! http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

#[macro_use]
extern crate log;

pub mod client;
pub mod pacing;
pub mod prelude;
pub mod scenario;
pub mod task_set;

use std::fmt;

/// The origin every [`EndpointTask`](./task_set/struct.EndpointTask.html) path is resolved against.
pub const BASE_HOST: &str = "https://jsonplaceholder.typicode.com";

/// An enumeration of all errors building a load test can return.
#[derive(Debug)]
pub enum LoadTestError {
    /// Failed to parse a hostname.
    InvalidHost {
        /// The invalid hostname that caused this error.
        host: String,
        /// An optional explanation of the error.
        detail: String,
        /// Wraps a [`url::ParseError`](https://docs.rs/url/*/url/enum.ParseError.html).
        parse_error: url::ParseError,
    },
    /// Invalid wait time specified.
    InvalidWaitTime {
        // The specified lower bound, in seconds.
        low: f64,
        // The specified upper bound, in seconds.
        high: f64,
        /// An optional explanation of the error.
        detail: String,
    },
}
/// Implement a helper to provide a text description of all possible types of errors.
impl LoadTestError {
    fn describe(&self) -> &str {
        match *self {
            LoadTestError::InvalidHost { .. } => "failed to parse hostname",
            LoadTestError::InvalidWaitTime { .. } => "invalid wait_time specified",
        }
    }
}

/// Implement format trait to allow displaying errors.
impl fmt::Display for LoadTestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoadTestError::InvalidHost {
                ref host,
                ref parse_error,
                ..
            } => write!(
                f,
                "LoadTestError: {} {:?} ({})",
                self.describe(),
                host,
                parse_error
            ),
            LoadTestError::InvalidWaitTime {
                low,
                high,
                ref detail,
            } => write!(
                f,
                "LoadTestError: {} [{}, {}]: {}",
                self.describe(),
                low,
                high,
                detail
            ),
        }
    }
}

// Define the lower level source of this error, if any.
impl std::error::Error for LoadTestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            LoadTestError::InvalidHost {
                ref parse_error, ..
            } => Some(parse_error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn base_host_is_a_valid_origin() {
        let url = url::Url::parse(BASE_HOST).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("jsonplaceholder.typicode.com"));
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn invalid_host_exposes_parse_error() {
        let error = LoadTestError::InvalidHost {
            host: "not a host".to_string(),
            detail: "".to_string(),
            parse_error: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("failed to parse hostname"));
    }

    #[test]
    fn invalid_wait_time_has_no_source() {
        let error = LoadTestError::InvalidWaitTime {
            low: 2.0,
            high: 1.0,
            detail: "low must be less than high".to_string(),
        };
        assert!(error.source().is_none());
        assert_eq!(
            error.to_string(),
            "LoadTestError: invalid wait_time specified [2, 1]: low must be less than high"
        );
    }
}
