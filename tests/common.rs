use gumdrop::Options;
use httpmock::MockServer;

use goose::config::GooseConfiguration;
use goose::metrics::GooseMetrics;
use goose::GooseAttack;

use jsonplaceholder_loadtest::scenario;
use jsonplaceholder_loadtest::task_set::TaskSet;

/// Goose options for a load test against `server`, adding whichever of
/// `--host`, `--users 1`, `--hatch-rate 1` and `--run-time 1` `custom` leaves out.
pub fn build_configuration(server: &MockServer, custom: Vec<&str>) -> GooseConfiguration {
    let server_url = server.base_url();
    let defaults = [
        ("--host", server_url.as_str()),
        ("--users", "1"),
        ("--hatch-rate", "1"),
        ("--run-time", "1"),
    ];

    let mut configuration: Vec<&str> = Vec::new();
    configuration.extend_from_slice(&custom);
    for (option, value) in defaults {
        if !configuration.contains(&option) {
            configuration.extend_from_slice(&[option, value]);
        }
    }

    GooseConfiguration::parse_args_default(&configuration)
        .expect("failed to parse options and generate a configuration")
}

/// Run the JsonApi scenario to completion, returning the GooseMetrics.
pub async fn run_load_test(
    configuration: GooseConfiguration,
    task_set: &TaskSet,
) -> GooseMetrics {
    let goose_attack = GooseAttack::initialize_with_config(configuration)
        .expect("failed to initialize load test");

    scenario::run(goose_attack, task_set)
        .await
        .expect("load test failed")
}
