//! Plugs the [`TaskSet`](../task_set/struct.TaskSet.html) into Goose.
//!
//! Goose drives everything: it launches `--users` users at `--hatch-rate`, runs
//! the `JsonApi` scenario's single transaction over and over, sleeps the pacing
//! range between runs and stops after `--run-time`. Each run of the transaction
//! is one iteration: select a task, execute it.
//!
//! Requests are named after the endpoint path, so Goose reports one line per
//! endpoint (`GET /posts`, `GET /posts/1/comments`, ...).

use goose::metrics::GooseMetrics;
use goose::prelude::*;

use crate::client::RequestFailure;
use crate::pacing::PacingPolicy;
use crate::task_set::TaskSet;

/// Name of the scenario registered with Goose.
pub const SCENARIO_NAME: &str = "JsonApi";
/// Name of the single transaction in the scenario.
pub const TRANSACTION_NAME: &str = "json_api";

/// Build the Goose scenario, pausing between iterations as `pacing` specifies.
pub fn json_api_scenario(pacing: &PacingPolicy) -> Result<Scenario, GooseError> {
    let scenario = scenario!(SCENARIO_NAME)
        .register_transaction(transaction!(json_api_iteration).set_name(TRANSACTION_NAME));

    if pacing.is_disabled() {
        return Ok(scenario);
    }
    let (min_wait, max_wait) = pacing.as_wait_time();
    scenario.set_wait_time(min_wait, max_wait)
}

/// One iteration of a simulated user: pick an endpoint at random and GET it.
///
/// The task set is resolved against the user's base URL, so `--host` redirects
/// the whole load test. A failed request is reported to Goose with
/// `set_failure`, failing the transaction; the user still moves on to its next
/// iteration.
pub async fn json_api_iteration(user: &mut GooseUser) -> TransactionResult {
    let task_set = TaskSet::new(user.base_url.clone());
    let task = task_set.select_next_task();

    match task_set.execute(task, user).await {
        Ok(sample) => {
            debug!(
                "{}: {} in {:?} from {}",
                task.name, sample.status, sample.elapsed, sample.url
            );
            Ok(())
        }
        Err(RequestFailure::Goose(error)) => Err(error),
        Err(failure) => {
            let tag = format!("{}: {}", task.name, failure);
            match failure.into_request_metric() {
                Some(mut request) => user.set_failure(&tag, &mut request, None, None),
                // Only clients other than GooseUser fail without a request metric.
                None => {
                    warn!("{}", tag);
                    Ok(())
                }
            }
        }
    }
}

/// Register the scenario on `goose_attack` and run the load test to completion.
///
/// The task set's base host becomes Goose's default host, used unless `--host`
/// is set.
pub async fn run(
    goose_attack: GooseAttack,
    task_set: &TaskSet,
) -> Result<GooseMetrics, GooseError> {
    goose_attack
        .register_scenario(json_api_scenario(task_set.pacing())?)
        .set_default(GooseDefault::Host, task_set.base_host().as_str())?
        .execute()
        .await
}
