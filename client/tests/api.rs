use ipqs_client::endpoints::leaked::INCORRECT_REQUEST_PARAMETERS;
use ipqs_client::{
    ApiResponse, Config, EmailParams, IpqsClient, IpqsError, LeakedParams, LeakedType, ParamMap,
    PostbackParams, PostbackUpdateParams, ProxyDetectionParams, Request,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(mock_server: &MockServer) -> IpqsClient {
    IpqsClient::new().with_base_url(mock_server.uri())
}

#[tokio::test]
async fn test_email_get() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/json/email/secret/foo%40google\.com$"))
        .and(query_param("timeout", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "valid": true,
            "fraud_score": 25,
            "request_id": "r1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = Request::new(Config::json()).request_parameters(EmailParams {
        timeout: Some(7),
        ..EmailParams::new("foo@google.com")
    });
    let response = client(&mock_server)
        .email_validation("secret", request)
        .get_and_parse()
        .await
        .unwrap();

    assert_eq!(response.valid, Some(true));
    assert_eq!(response.fraud_score, Some(25.0));
}

#[tokio::test]
async fn test_email_post_with_key_param() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/json/email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&mock_server)
        .await;

    let request = Request::new(Config::json().pk_as_get_or_post_param(true))
        .request_parameters(EmailParams::new("foo@google.com"));
    let response = client(&mock_server)
        .email_validation("secret", request)
        .post()
        .await;
    assert!(response.is_success());

    let received = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"key\""));
    assert!(body.contains("secret"));
    assert!(body.contains("foo@google.com"));
}

#[tokio::test]
async fn test_proxy_detection_key_in_header() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/ip"))
        .and(header("IPQS-KEY", "secret"))
        .and(query_param("ip", "8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "proxy": false,
            "ISP": "Google"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = Request::new(Config::json().pk_as_header(true))
        .request_parameters(ProxyDetectionParams::new("8.8.8.8"));
    let response = client(&mock_server)
        .proxy_detection("secret", request)
        .get_and_parse()
        .await
        .unwrap();

    assert_eq!(response.proxy, Some(false));
    assert_eq!(response.isp.as_deref(), Some("Google"));
}

#[tokio::test]
async fn test_xml_export_is_wrapped() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/xml/account/secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<result><success>true</success></result>"))
        .mount(&mock_server)
        .await;

    let builder_client = client(&mock_server);
    let builder = builder_client.credit_usage("secret", Request::new(Config::xml()));

    assert_eq!(
        builder.get().await,
        ApiResponse::xml("<result><success>true</success></result>")
    );
    assert!(matches!(builder.get_and_parse().await, Err(IpqsError::UnexpectedXml)));
}

#[tokio::test]
async fn test_account_ignores_parameters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/account/secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "credits": 1000,
            "usage": 10
        })))
        .mount(&mock_server)
        .await;

    let mut params = ParamMap::new();
    params.insert("foo".to_string(), json!("bar"));
    let response = client(&mock_server)
        .credit_usage("secret", Request::new(Config::json()).request_parameters(params))
        .get_and_parse()
        .await
        .unwrap();
    assert_eq!(response.usage, Some(10));

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some(""));
}

#[tokio::test]
async fn test_leaked_lookup() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/leaked/username/secret/jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "found": true,
            "source": ["collection1"]
        })))
        .mount(&mock_server)
        .await;

    let request = Request::new(Config::json())
        .request_parameters(LeakedParams::new(LeakedType::Username, "jdoe"));
    let response = client(&mock_server)
        .leaked_report("secret", request)
        .get_and_parse()
        .await
        .unwrap();
    assert_eq!(response.found, Some(true));
}

#[tokio::test]
async fn test_leaked_rejects_pk_placement_without_calling_api() {
    let mock_server = MockServer::start().await;

    let request = Request::new(Config::json().pk_as_header(true))
        .request_parameters(LeakedParams::new(LeakedType::Email, "a@b.c"));
    let response = client(&mock_server)
        .leaked_report("secret", request)
        .get()
        .await;

    assert!(!response.is_success());
    let message = response.error_message().unwrap();
    assert!(!message.contains(INCORRECT_REQUEST_PARAMETERS));
    assert!(message.contains("pkAsHeader"));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_postback_sends_update_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/postback/secret/"))
        .and(query_param("request_id", "r1"))
        .and(query_param("update[ConversionDate]", "2022-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = Request::new(Config::json())
        .request_parameters(PostbackParams {
            request_id: Some("r1".to_string()),
            kind: None,
        })
        .update_parameters(PostbackUpdateParams {
            conversion_date: Some("2022-01-01".to_string()),
            ..PostbackUpdateParams::default()
        });
    let response = client(&mock_server)
        .postback("secret", request)
        .get()
        .await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_non_200_becomes_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let response = client(&mock_server)
        .credit_usage("secret", Request::new(Config::json()))
        .get()
        .await;

    assert_eq!(response, ApiResponse::failure("internal error"));
    assert!(matches!(
        response.parse::<serde_json::Value>(),
        Err(IpqsError::Api(message)) if message == "internal error"
    ));
}

#[tokio::test]
async fn test_invalid_json_becomes_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let response = client(&mock_server)
        .credit_usage("secret", Request::new(Config::json()))
        .get()
        .await;

    let message = response.error_message().unwrap();
    assert!(message.starts_with("Error: "));
}
