//! Scenario: a surface evolves across three pipeline runs.
//!
//! 1. First run: nothing recorded, a deployment is created
//! 2. Second run: nothing changed, the deployment is kept
//! 3. Third run: an integration is re-pointed, the deployment is replaced

use crate::common::*;

const SURFACE_V1: &str = r#"
name = "PhoneNumberAPI"

[[resources]]
name = "PhoneNumbersResource"
path_part = "phonenumbers"
handle = "res-1"

[[resources]]
name = "PhoneNumberByIdResource"
parent = "PhoneNumbersResource"
path_part = "{id}"
handle = "res-2"

[[methods]]
name = "PhoneNumbersGet"
resource = "PhoneNumbersResource"
http_method = "GET"
handle = "get-1"

[methods.integration]
name = "PhoneNumbersGetIntegration"
uri = "arn:invoke:v1"
handle = "int-1"
"#;

fn plan(env: &TestEnv, previous: Option<&str>) -> (i32, serde_json::Value) {
    let manifest = env.project_path("api.toml");
    let mut args = vec![
        "plan",
        "--json",
        "--detailed-exitcode",
        "--surface",
        manifest.to_str().unwrap(),
    ];
    if let Some(previous) = previous {
        args.push("--previous");
        args.push(previous);
    }
    let result = env.run(&args);
    assert!(
        result.exit_code == 0 || result.exit_code == 2,
        "unexpected failure: {}",
        result.stderr
    );
    (result.exit_code, result.json())
}

#[test]
fn scenario_create_keep_replace() {
    let env = TestEnv::new();
    env.write("api.toml", SURFACE_V1);

    // Run 1
    let (code, first) = plan(&env, None);
    assert_eq!(code, 2);
    assert_eq!(first["data"]["decision"]["action"], "create");
    assert_eq!(first["data"]["decision"]["policy"], "create_before_destroy");
    let recorded = first["data"]["trigger"]["hex"].as_str().unwrap().to_string();
    assert_eq!(recorded, "abc2c30839afecc6419827dfa92f41265f4d7332");

    // Run 2
    let (code, second) = plan(&env, Some(&recorded));
    assert_eq!(code, 0);
    assert_eq!(second["data"]["decision"]["action"], "keep");

    // Run 3: the integration is recreated and gets a new handle
    env.write("api.toml", &SURFACE_V1.replace("int-1", "int-2"));
    let (code, third) = plan(&env, Some(&recorded));
    assert_eq!(code, 2);
    assert_eq!(third["data"]["decision"]["action"], "replace");
    assert_eq!(third["data"]["decision"]["previous"], recorded.as_str());
    assert_eq!(
        third["data"]["trigger"]["hex"],
        "dbf7a78b083b079ad9312d09b4999bbfed5d9f7a"
    );
}

#[test]
fn scenario_hash_and_plan_agree() {
    let env = TestEnv::new();
    env.write("api.toml", SURFACE_V1);

    let (_, planned) = plan(&env, None);
    let hashed = env.run(&["hash", "res-1", "res-2", "get-1", "int-1"]);

    assert_eq!(planned["data"]["trigger"]["hex"], hashed.trimmed_stdout());
}
