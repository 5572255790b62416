use std::collections::HashSet;

use aws_sdk_eks::Client;

use crate::error::InventoryError;

/// List the names of every cluster currently running in the client's region,
/// following pagination tokens until the listing is exhausted.
///
/// An empty set is a valid result for a region with no clusters; failures
/// surface as an error rather than an empty set.
pub async fn list_cluster_names(client: &Client) -> Result<HashSet<String>, InventoryError> {
    let mut names = HashSet::new();
    let mut next_token: Option<String> = None;

    loop {
        let mut req = client.list_clusters();

        if let Some(token) = &next_token {
            req = req.next_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| InventoryError::ListClusters(e.into_service_error().to_string()))?;

        names.extend(resp.clusters().iter().cloned());

        match resp.next_token() {
            Some(token) => next_token = Some(token.to_string()),
            None => break,
        }
    }

    tracing::debug!(count = names.len(), "listed clusters");

    Ok(names)
}
