//! Seed demo data against the gateway.
//!
//! Same pass the dashboard runs at startup: skipped entirely when both the
//! users and movies collections are already populated, best-effort
//! otherwise.

use tracing::info;
use url::Url;

use marquee_dashboard::api::ApiClient;
use marquee_dashboard::seed::seed_demo_data;

/// Run the seeding pass.
///
/// # Errors
///
/// Never fails today - individual create failures are logged and skipped
/// inside the pass - but keeps the fallible signature of the other
/// commands.
pub async fn run(base_url: &Url) -> Result<(), Box<dyn std::error::Error>> {
    info!(gateway = %base_url, "Seeding demo data");

    let client = ApiClient::new(base_url);
    seed_demo_data(&client).await;

    Ok(())
}
