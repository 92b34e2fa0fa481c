use ipqs_client::{Config, IpqsClient, LeakedParams, LeakedType, Request};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = IpqsClient::new();
    let private_key = std::env::var("IPQS_PRIVATE_KEY")?;

    let usage = client
        .credit_usage(&private_key, Request::new(Config::json()))
        .get_and_parse()
        .await?;
    println!(
        "credits: {:?}, used: {:?} (proxy {:?}, email {:?})",
        usage.credits, usage.usage, usage.proxy_usage, usage.email_usage
    );

    // Leaked lookups share the path-only key placement of the account endpoint
    let leaked = client
        .leaked_report(
            &private_key,
            Request::new(Config::json())
                .request_parameters(LeakedParams::new(LeakedType::Email, "noreply@example.com")),
        )
        .get()
        .await;
    println!("leaked: {}", serde_json::to_string_pretty(&leaked)?);

    Ok(())
}
