mod common;

use common::*;

#[test]
fn test_policy_assume_role_is_valid_json() {
    let env = TestEnv::new();
    let result = env.run(&["policy", "assume-role"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let doc: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(doc["Version"], "2012-10-17");
    assert_eq!(doc["Statement"][0]["Action"], "sts:AssumeRole");
    assert_eq!(
        doc["Statement"][0]["Principal"]["Service"],
        "lambda.amazonaws.com"
    );
}

#[test]
fn test_policy_api_lambda_resources() {
    let env = TestEnv::new();
    let result = env.run(&[
        "policy",
        "api-lambda",
        "--bucket",
        "phone-data",
        "--access-point-arn",
        "arn:aws:s3:eu-central-1:123:accesspoint/phone-data-sap",
        "--object-lambda-access-point-arn",
        "arn:aws:s3-object-lambda:eu-central-1:123:accesspoint/phone-data-lap",
        "--object-lambda-function-arn",
        "arn:aws:lambda:eu-central-1:123:function:Transform",
    ]);

    assert!(result.success, "stderr: {}", result.stderr);
    let doc: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let statements = doc["Statement"].as_array().unwrap();
    assert_eq!(statements.len(), 5);
    assert_eq!(statements[0]["Resource"], "arn:aws:s3:::phone-data");
    assert_eq!(statements[1]["Resource"], "arn:aws:s3:::phone-data/*");
    assert_eq!(
        statements[4]["Resource"],
        "arn:aws:s3:eu-central-1:123:accesspoint/phone-data-sap/*"
    );
}

#[test]
fn test_policy_api_lambda_missing_targets_fails() {
    let env = TestEnv::new();
    let result = env.run(&["policy", "api-lambda", "--bucket", "phone-data"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--access-point-arn"));
}

#[test]
fn test_policy_json_event() {
    let env = TestEnv::new();
    let result = env.run(&["policy", "assume-role", "--json"]);

    let event = result.json();
    assert_eq!(event["event"], "policy");
    assert_eq!(event["kind"], "assume-role");
    assert_eq!(event["data"]["Statement"][0]["Effect"], "Allow");
}
