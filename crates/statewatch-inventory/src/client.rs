use aws_sdk_eks::Client;

/// Build an EKS client with a specific region. The inventory is inherently
/// regional — clusters are listed for the region the client was built for.
pub async fn build_client_with_region(region: &str) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
