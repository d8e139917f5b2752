//! Re-exports everything needed to run or embed the load test.
//!
//! ```rust
//! use jsonplaceholder_loadtest::prelude::*;
//! ```

pub use crate::client::{HttpClient, RequestFailure, RequestSample};
pub use crate::pacing::PacingPolicy;
pub use crate::scenario::{json_api_iteration, json_api_scenario, run};
pub use crate::task_set::{EndpointTask, TaskSet, JSON_API_TASKS};
pub use crate::{LoadTestError, BASE_HOST};
