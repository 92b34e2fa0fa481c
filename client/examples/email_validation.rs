use ipqs_client::{ApiResponse, Config, EmailParams, IpqsClient, Request};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the client
    let client = IpqsClient::new();
    let private_key = std::env::var("IPQS_PRIVATE_KEY")?;
    let email = std::env::args().nth(1).unwrap_or_else(|| "noreply@example.com".to_string());

    println!("=== IPQS Email Validation ===\n");

    // Example 1: GET with the key in the path, typed response
    println!("1. GET, key in path:");
    let request = Request::new(Config::json()).request_parameters(EmailParams {
        fast: Some(true),
        ..EmailParams::new(&email)
    });
    let response = client
        .email_validation(&private_key, request)
        .get_and_parse()
        .await?;
    println!(
        "valid: {:?}, disposable: {:?}, fraud score: {:?}\n",
        response.valid, response.disposable, response.fraud_score
    );

    // Example 2: POST with the key in a header, raw XML export
    println!("2. POST, key in header, XML:");
    let request = Request::new(Config::xml().pk_as_header(true))
        .request_parameters(EmailParams::new(&email));
    match client.email_validation(&private_key, request).post().await {
        ApiResponse::Xml(xml) => println!("{}\n", xml.xml),
        other => println!("unexpected response: {other:?}\n"),
    }

    Ok(())
}
