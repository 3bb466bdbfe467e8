use anyhow::{Context, Result};

use apigw_trigger::domain::policies::{ApiLambdaPolicyTargets, PolicyDocument};
use apigw_trigger::presentation::{output, PolicyKind};

pub struct TargetArgs {
    pub bucket: Option<String>,
    pub access_point_arn: Option<String>,
    pub object_lambda_access_point_arn: Option<String>,
    pub object_lambda_function_arn: Option<String>,
}

impl TargetArgs {
    fn into_targets(self) -> Result<ApiLambdaPolicyTargets> {
        Ok(ApiLambdaPolicyTargets {
            bucket: self.bucket.context("--bucket is required")?,
            access_point_arn: self
                .access_point_arn
                .context("--access-point-arn is required")?,
            object_lambda_access_point_arn: self
                .object_lambda_access_point_arn
                .context("--object-lambda-access-point-arn is required")?,
            object_lambda_function_arn: self
                .object_lambda_function_arn
                .context("--object-lambda-function-arn is required")?,
        })
    }
}

pub fn cmd_policy(kind: PolicyKind, targets: TargetArgs, json: bool) -> Result<()> {
    let (name, document) = match kind {
        PolicyKind::AssumeRole => ("assume-role", PolicyDocument::lambda_assume_role()),
        PolicyKind::ApiLambda => (
            "api-lambda",
            PolicyDocument::api_lambda_inline(&targets.into_targets()?),
        ),
    };

    if json {
        output::emit(serde_json::json!({
            "event": "policy",
            "command": "policy",
            "kind": name,
            "data": document,
        }))?;
    } else {
        println!("{}", document.to_json_pretty()?);
    }
    Ok(())
}
