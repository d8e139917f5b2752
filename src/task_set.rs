//! The fixed set of endpoints each simulated user exercises.
//!
//! - [`EndpointTask`](./struct.EndpointTask.html) one named GET against one path.
//! - [`TaskSet`](./struct.TaskSet.html) the five endpoint tasks, the base host
//!   they are resolved against and the pacing between iterations.
//!
//! ## Selecting and executing tasks
//!
//! All tasks carry the same weight. Every selection is an independent uniform
//! draw, so the same task may be picked several times in a row:
//!
//! ```rust
//!     use jsonplaceholder_loadtest::task_set::{TaskSet, JSON_API_TASKS};
//!
//!     let task_set = TaskSet::default();
//!     let task = task_set.select_next_task();
//!     assert!(JSON_API_TASKS.contains(task));
//!     assert!(task_set.url_for(task).starts_with("https://jsonplaceholder.typicode.com/"));
//! ```
//!
//! Executing a task issues exactly one GET through an
//! [`HttpClient`](../client/trait.HttpClient.html) and hands back whatever the
//! client returned; responses are neither inspected nor retried here.

use rand::Rng;
use url::Url;

use crate::client::{HttpClient, RequestFailure, RequestSample};
use crate::pacing::PacingPolicy;
use crate::{LoadTestError, BASE_HOST};

/// One named GET request against a path relative to the base host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointTask {
    pub name: &'static str,
    pub path: &'static str,
}

/// The endpoints exercised by every simulated user, all equally weighted.
pub const JSON_API_TASKS: &[EndpointTask] = &[
    EndpointTask {
        name: "get_posts",
        path: "/posts",
    },
    EndpointTask {
        name: "get_comments",
        path: "/posts/1/comments",
    },
    EndpointTask {
        name: "get_photos",
        path: "/photos",
    },
    EndpointTask {
        name: "get_todos",
        path: "/todos",
    },
    EndpointTask {
        name: "get_users",
        path: "/users",
    },
];

/// The endpoint tasks of one simulated user, with the host they target and
/// the pause between them.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskSet {
    base_host: Url,
    tasks: &'static [EndpointTask],
    pacing: PacingPolicy,
}
impl TaskSet {
    /// Build a task set targeting `base_host`, with the default pacing policy.
    pub fn new(base_host: Url) -> Self {
        TaskSet {
            base_host,
            tasks: JSON_API_TASKS,
            pacing: PacingPolicy::default(),
        }
    }

    /// Build a task set targeting the host parsed from `host`.
    pub fn parse(host: &str) -> Result<Self, LoadTestError> {
        let base_host = Url::parse(host).map_err(|parse_error| LoadTestError::InvalidHost {
            host: host.to_string(),
            detail: "base host must be an absolute URL such as https://example.com".to_string(),
            parse_error,
        })?;
        Ok(TaskSet::new(base_host))
    }

    /// Replace the pacing policy.
    pub fn with_pacing(mut self, pacing: PacingPolicy) -> Self {
        self.pacing = pacing;
        self
    }

    /// The origin every task path is appended to.
    pub fn base_host(&self) -> &Url {
        &self.base_host
    }

    /// The endpoint tasks, all equally weighted.
    pub fn tasks(&self) -> &'static [EndpointTask] {
        self.tasks
    }

    /// The pause between iterations.
    pub fn pacing(&self) -> &PacingPolicy {
        &self.pacing
    }

    /// Pick the next task uniformly at random from the thread-local random source.
    pub fn select_next_task(&self) -> &'static EndpointTask {
        self.select_next_task_with(&mut rand::rng())
    }

    /// Pick the next task uniformly at random from the provided random source.
    pub fn select_next_task_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static EndpointTask {
        let tasks = self.tasks;
        &tasks[rng.random_range(0..tasks.len())]
    }

    /// The full URL requested for `task`: the base host followed by the task path.
    pub fn url_for(&self, task: &EndpointTask) -> String {
        format!(
            "{}{}",
            self.base_host.as_str().trim_end_matches('/'),
            task.path
        )
    }

    /// Issue exactly one GET for `task` and return the client's result unchanged.
    pub async fn execute<C: HttpClient + ?Sized>(
        &self,
        task: &EndpointTask,
        client: &mut C,
    ) -> Result<RequestSample, RequestFailure> {
        let url = self.url_for(task);
        debug!("{}: GET {}", task.name, url);
        client.get(&url, task.path).await
    }

    /// Draw the pause before the next iteration, in seconds.
    pub fn next_wait_duration(&self) -> f64 {
        self.pacing.next_wait_duration()
    }
}

impl Default for TaskSet {
    fn default() -> Self {
        // BASE_HOST is a constant, known to parse.
        TaskSet::parse(BASE_HOST).unwrap_or_else(|error| unreachable!("{}", error))
    }
}
