//! Run the JSONPlaceholder load test from the command line.
//!
//! All options are Goose options, see `--help`. Without `--host` the load test
//! targets https://jsonplaceholder.typicode.com.

use goose::prelude::*;

use jsonplaceholder_loadtest::scenario;
use jsonplaceholder_loadtest::task_set::TaskSet;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    scenario::run(GooseAttack::initialize()?, &TaskSet::default()).await?;

    Ok(())
}
