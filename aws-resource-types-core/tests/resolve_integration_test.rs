//! Integration tests resolving real-world ARNs against the embedded lookup table

use aws_resource_types_core::{parse, resolve, ParseError, ResolveError, ServiceTable};

fn table() -> ServiceTable {
    ServiceTable::embedded().expect("embedded lookup table should load")
}

#[test]
fn test_lambda_function() {
    let arn = "arn:aws:lambda:us-west-2:000000000000:function:my-function";
    let resolved = resolve(arn, &table()).unwrap();
    assert_eq!(resolved.type_name, "AWS::Lambda::Function");
    assert_eq!(resolved.resource_id, "my-function");
    assert_eq!(resolved.region, "us-west-2");
    assert_eq!(resolved.full_arn, arn);
}

#[test]
fn test_api_gateway_rest_api_and_resource() {
    let table = table();

    let rest_api = resolve(
        "arn:aws:apigateway:us-west-2:000000000000:/restapis/wymjfx3iie",
        &table,
    )
    .unwrap();
    assert_eq!(rest_api.type_name, "AWS::ApiGateway::RestApi");
    assert_eq!(rest_api.resource_id, "wymjfx3iie");

    let resource = resolve(
        "arn:aws:apigateway:us-west-2:000000000000:/restapis/wymjfx3iie/resource/123456",
        &table,
    )
    .unwrap();
    assert_eq!(resource.type_name, "AWS::ApiGateway::Resource");
    assert_eq!(resource.resource_id, "123456");
}

#[test]
fn test_implicit_type_services() {
    let table = table();

    let s3 = resolve("arn:aws:s3::000000000000:myBucket", &table).unwrap();
    assert_eq!(s3.type_name, "AWS::S3::Bucket");
    assert_eq!(s3.resource_id, "myBucket");
    assert_eq!(s3.region, "");

    let sqs = resolve("arn:aws:sqs:us-west-2:000000000000:myqueue", &table).unwrap();
    assert_eq!(sqs.type_name, "AWS::SQS::Queue");
    assert_eq!(sqs.resource_id, "myqueue");

    let sns = resolve("arn:aws:sns:us-west-2:000000000000:mytopic", &table).unwrap();
    assert_eq!(sns.type_name, "AWS::SNS::Topic");
    assert_eq!(sns.resource_id, "mytopic");
}

#[test]
fn test_ecs_task_definition_revision_is_dropped() {
    let arn = "arn:aws:ecs:us-west-2:000000000000:task-definition/wymjfx3iie:1";

    let parsed = parse(arn).unwrap();
    assert_eq!(parsed.resource_kind(), "task-definition");
    assert_eq!(parsed.resource_id(), "wymjfx3iie");

    let resolved = resolve(arn, &table()).unwrap();
    assert_eq!(resolved.type_name, "AWS::ECS::TaskDefinition");
    assert_eq!(resolved.resource_id, "wymjfx3iie");
    assert_eq!(resolved.full_arn, arn);
}

#[test]
fn test_invalid_prefix() {
    let result = resolve("not-an-arn:aws:lambda:us-west-2:0:function:f", &table());
    assert!(matches!(
        result,
        Err(ResolveError::Parse(ParseError::InvalidPrefix { .. }))
    ));
}

#[test]
fn test_resource_without_kind_separator() {
    let result = resolve(
        "arn:aws:ec2:us-east-1:000000000000:subnet-06676afb0ac48da5d",
        &table(),
    );
    assert!(matches!(
        result,
        Err(ResolveError::Parse(ParseError::InvalidResourceId { .. }))
    ));
}

#[test]
fn test_unsupported_service_and_resource() {
    let table = table();

    let result = resolve(
        "arn:aws:gamelift:us-east-1:000000000000:fleet/fleet-1234",
        &table,
    );
    assert!(matches!(
        result,
        Err(ResolveError::UnsupportedService { ref service }) if service == "gamelift"
    ));

    let result = resolve(
        "arn:aws:ec2:us-east-1:000000000000:image/ami-0123456789abcdef0",
        &table,
    );
    assert!(matches!(
        result,
        Err(ResolveError::UnsupportedResourceType { ref service, ref resource_kind })
            if service == "ec2" && resource_kind == "image"
    ));
}

#[test]
fn test_embedded_table_covers_common_arns() {
    let table = table();
    let cases = [
        (
            "arn:aws:dynamodb:us-east-1:000000000000:table/Orders",
            "AWS::DynamoDB::Table",
            "Orders",
        ),
        (
            "arn:aws:ec2:us-east-1:000000000000:security-group/sg-0123456789abcdef0",
            "AWS::EC2::SecurityGroup",
            "sg-0123456789abcdef0",
        ),
        (
            "arn:aws:iam::000000000000:role/MyRole",
            "AWS::IAM::Role",
            "MyRole",
        ),
        (
            "arn:aws:rds:us-east-1:000000000000:db:my-database",
            "AWS::RDS::DBInstance",
            "my-database",
        ),
        (
            "arn:aws:states:us-east-1:000000000000:stateMachine:Checkout",
            "AWS::StepFunctions::StateMachine",
            "Checkout",
        ),
        (
            "arn:aws:logs:us-east-1:000000000000:log-group:/aws/lambda/fn:*",
            "AWS::Logs::LogGroup",
            "/aws/lambda/fn",
        ),
        (
            "arn:aws:elasticfilesystem:us-east-1:000000000000:file-system/fs-12345678",
            "AWS::EFS::FileSystem",
            "fs-12345678",
        ),
        (
            "arn:aws:eks:us-west-2:000000000000:nodegroup/prod/workers/a1b2c3d4",
            "AWS::EKS::Nodegroup",
            "prod/workers/a1b2c3d4",
        ),
        (
            "arn:aws:elasticloadbalancing:us-east-1:000000000000:loadbalancer/app/web/50dc6c495c0c9188",
            "AWS::ElasticLoadBalancingV2::LoadBalancer",
            "app/web/50dc6c495c0c9188",
        ),
        (
            "arn:aws:events:us-east-1:000000000000:event-bus/default",
            "AWS::Events::EventBus",
            "default",
        ),
        (
            "arn:aws:sagemaker:us-east-1:000000000000:notebook-instance/research",
            "AWS::SageMaker::NotebookInstance",
            "research",
        ),
        (
            "arn:aws:secretsmanager:us-east-1:000000000000:secret:db-password-AbCdEf",
            "AWS::SecretsManager::Secret",
            "db-password-AbCdEf",
        ),
        (
            "arn:aws:kms:us-east-1:000000000000:key/1234abcd-12ab-34cd-56ef-1234567890ab",
            "AWS::KMS::Key",
            "1234abcd-12ab-34cd-56ef-1234567890ab",
        ),
        (
            "arn:aws:ecr:us-east-1:000000000000:repository/my-app",
            "AWS::ECR::Repository",
            "my-app",
        ),
        (
            "arn:aws:ssm:us-east-1:000000000000:parameter/app-config",
            "AWS::SSM::Parameter",
            "app-config",
        ),
    ];

    for (arn, type_name, resource_id) in cases {
        let resolved = resolve(arn, &table).unwrap_or_else(|e| panic!("{arn}: {e}"));
        assert_eq!(resolved.type_name, type_name, "type name for {}", arn);
        assert_eq!(resolved.resource_id, resource_id, "resource id for {}", arn);
        assert_eq!(resolved.full_arn, arn);
    }
}
