//! The HTTP client capability a [`TaskSet`](../task_set/struct.TaskSet.html) executes against.
//!
//! Under load the client is the [`GooseUser`] itself: requests go through Goose so
//! that timing, status codes and failures land in Goose's metrics. In tests any
//! other implementation of [`HttpClient`] can stand in, for example one recording
//! the requested URLs.

use async_trait::async_trait;
use goose::goose::{GooseUser, TransactionError};
use goose::metrics::GooseRequestMetric;
use std::fmt;
use std::time::{Duration, Instant};

/// The outcome of a successful request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSample {
    /// The full URL that was requested.
    pub url: String,
    /// The HTTP status code returned by the server.
    pub status: u16,
    /// Time from sending the request until the body was received.
    pub elapsed: Duration,
}

/// Issues GET requests on behalf of one simulated user.
#[async_trait]
pub trait HttpClient: Send {
    /// Request `url` once, recording it under `name`.
    ///
    /// A 2xx response is a [`RequestSample`]; any other response, and any
    /// failure to complete the request, is a [`RequestFailure`].
    async fn get(&mut self, url: &str, name: &str) -> Result<RequestSample, RequestFailure>;
}

#[async_trait]
impl HttpClient for GooseUser {
    async fn get(&mut self, url: &str, name: &str) -> Result<RequestSample, RequestFailure> {
        let started = Instant::now();
        let goose = self
            .get_named(url, name)
            .await
            .map_err(RequestFailure::Goose)?;
        let request = goose.request;

        let response = match goose.response {
            Ok(response) => response,
            Err(error) => {
                return Err(RequestFailure::transport(url, &error).with_request(request));
            }
        };
        let status = response.status();
        // Drain the body so the connection can be reused; its content is not inspected.
        if let Err(error) = response.bytes().await {
            return Err(RequestFailure::transport(url, &error).with_request(request));
        }

        if !status.is_success() {
            return Err(RequestFailure::Status {
                url: url.to_string(),
                status: status.as_u16(),
                request: Some(Box::new(request)),
            });
        }

        Ok(RequestSample {
            url: url.to_string(),
            status: status.as_u16(),
            elapsed: started.elapsed(),
        })
    }
}

/// An enumeration of all the ways a single request can fail.
///
/// When the request went through Goose, `Status` and `Transport` failures carry
/// the [`GooseRequestMetric`] Goose recorded, so the failure can be reported
/// back with `GooseUser::set_failure`.
#[derive(Debug)]
pub enum RequestFailure {
    /// The server responded with a status code outside of 2xx.
    Status {
        /// The full URL that was requested.
        url: String,
        /// The HTTP status code returned by the server.
        status: u16,
        /// The metric Goose recorded for this request, if any.
        request: Option<Box<GooseRequestMetric>>,
    },
    /// The request did not complete: connection refused, timeout, TLS failure, ...
    Transport {
        /// The full URL that was requested.
        url: String,
        /// The underlying error, as displayed by the HTTP client.
        detail: String,
        /// The metric Goose recorded for this request, if any.
        request: Option<Box<GooseRequestMetric>>,
    },
    /// Goose failed to build, send or record the request.
    Goose(Box<TransactionError>),
}
impl RequestFailure {
    /// A transport failure for `url`, described by `error`.
    pub fn transport(url: &str, error: &dyn std::error::Error) -> Self {
        RequestFailure::Transport {
            url: url.to_string(),
            detail: error.to_string(),
            request: None,
        }
    }

    /// Attach the metric Goose recorded for the failed request.
    pub fn with_request(self, metric: GooseRequestMetric) -> Self {
        match self {
            RequestFailure::Status { url, status, .. } => RequestFailure::Status {
                url,
                status,
                request: Some(Box::new(metric)),
            },
            RequestFailure::Transport { url, detail, .. } => RequestFailure::Transport {
                url,
                detail,
                request: Some(Box::new(metric)),
            },
            goose => goose,
        }
    }

    /// Take the metric Goose recorded for the failed request, if any.
    pub fn into_request_metric(self) -> Option<GooseRequestMetric> {
        match self {
            RequestFailure::Status { request, .. } | RequestFailure::Transport { request, .. } => {
                request.map(|request| *request)
            }
            RequestFailure::Goose(_) => None,
        }
    }

    fn describe(&self) -> &str {
        match *self {
            RequestFailure::Status { .. } => "unexpected response status",
            RequestFailure::Transport { .. } => "request failed",
            RequestFailure::Goose(_) => "goose transaction error",
        }
    }
}

/// Implement format trait to allow displaying errors.
impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RequestFailure::Status { ref url, status, .. } => {
                write!(f, "{}: GET {} returned {}", self.describe(), url, status)
            }
            RequestFailure::Transport {
                ref url,
                ref detail,
                ..
            } => write!(f, "{}: GET {} ({})", self.describe(), url, detail),
            RequestFailure::Goose(ref source) => write!(f, "{} ({})", self.describe(), source),
        }
    }
}

impl std::error::Error for RequestFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            RequestFailure::Goose(ref source) => Some(source.as_ref()),
            _ => None,
        }
    }
}
