//! Print per-service deployment status.

use tracing::info;
use url::Url;

use marquee_dashboard::api::ApiClient;
use marquee_dashboard::view;

/// Fetch and log the deployment status table.
///
/// # Errors
///
/// Returns an error when the gateway is unreachable or answers with a body
/// that is not the expected JSON array.
pub async fn run(base_url: &Url) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(base_url);
    let services = client.deployment_status().await?;

    if services.is_empty() {
        info!("No deployment status reported by the gateway");
        return Ok(());
    }

    for service in &services {
        info!(
            service = %service.service,
            platform = %service.platform,
            environment = %service.environment,
            port = %service.port,
            status = %service.status,
            running = service.is_running(),
            last_checked = %service.last_checked,
            "Service status"
        );
    }

    let summary = view::deployment_summary(&services);
    info!(
        running = summary.running,
        total = summary.total,
        "Deployment summary"
    );

    Ok(())
}
