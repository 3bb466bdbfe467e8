//! Scenario: the provisioning layer hands out fresh handles while the API
//! itself stays the same.
//!
//! Handle-based triggers redeploy on every churn; semantic triggers only
//! redeploy when the surface really changes.

use crate::common::*;

fn surface(run: u32, uri: &str) -> String {
    format!(
        r#"
name = "ItemsAPI"

[[resources]]
name = "Items"
path_part = "items"
handle = "res-{run}"

[[methods]]
name = "ItemsGet"
resource = "Items"
http_method = "GET"
handle = "get-{run}"

[methods.integration]
name = "ItemsGetIntegration"
uri = "{uri}"
handle = "int-{run}"
"#
    )
}

fn trigger(env: &TestEnv, source: &str) -> String {
    let manifest = env.project_path("api.toml");
    let result = env.run(&[
        "plan",
        "--json",
        "--source",
        source,
        "--surface",
        manifest.to_str().unwrap(),
    ]);
    assert!(result.success, "stderr: {}", result.stderr);
    result.json()["data"]["trigger"]["hex"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn scenario_handle_churn() {
    let env = TestEnv::new();

    env.write("api.toml", &surface(1, "arn:invoke"));
    let handles_1 = trigger(&env, "handles");
    let semantic_1 = trigger(&env, "semantic");

    env.write("api.toml", &surface(2, "arn:invoke"));
    let handles_2 = trigger(&env, "handles");
    let semantic_2 = trigger(&env, "semantic");

    assert_ne!(handles_1, handles_2);
    assert_eq!(semantic_1, semantic_2);

    env.write("api.toml", &surface(2, "arn:invoke:v2"));
    let semantic_3 = trigger(&env, "semantic");
    assert_ne!(semantic_2, semantic_3);
}

#[test]
fn scenario_source_from_config_file() {
    let env = TestEnv::new();
    env.write("apigw-trigger.toml", "[trigger]\nsource = \"semantic\"\n");
    env.write("api.toml", &surface(1, "arn:invoke"));
    let manifest = env.project_path("api.toml");

    let result = env.run(&["plan", "--json", "--surface", manifest.to_str().unwrap()]);
    assert_eq!(result.json()["data"]["source"], "semantic");
}
