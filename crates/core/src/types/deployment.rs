//! Deployment status entry for the informational dashboard panel.

use serde::{Deserialize, Serialize};

/// Status string the gateway reports for a running service.
pub const STATUS_RUNNING: &str = "운영중";

/// One service's deployment state, as served by `GET /deployment-status`.
///
/// Purely presentational: the dashboard shows these rows verbatim and the
/// only interpreted field is `status`, where [`STATUS_RUNNING`] means the
/// service is up and anything else means stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub service: String,
    pub icon: String,
    pub platform: String,
    pub environment: String,
    #[serde(rename = "containerID", default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    pub port: String,
    pub last_checked: String,
    pub status: String,
}

impl DeploymentInfo {
    /// Whether the gateway reports this service as running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: &str) -> DeploymentInfo {
        DeploymentInfo {
            service: "booking-service".to_owned(),
            icon: "🎫".to_owned(),
            platform: "Docker Compose".to_owned(),
            environment: "local".to_owned(),
            container_id: None,
            port: "8083".to_owned(),
            last_checked: "2024-01-01 12:00:00".to_owned(),
            status: status.to_owned(),
        }
    }

    #[test]
    fn test_running_status_literal() {
        assert!(sample("운영중").is_running());
        assert!(!sample("중지됨").is_running());
        assert!(!sample("running").is_running());
    }

    #[test]
    fn test_container_id_wire_name() {
        let json = r#"{
            "service": "user-service",
            "icon": "👤",
            "platform": "Docker Compose",
            "environment": "local",
            "containerID": "abc123",
            "port": "8081",
            "lastChecked": "2024-01-01 12:00:00",
            "status": "운영중"
        }"#;
        let info: DeploymentInfo = serde_json::from_str(json).expect("deserialize");
        assert_eq!(info.container_id.as_deref(), Some("abc123"));
        assert_eq!(info.last_checked, "2024-01-01 12:00:00");
    }
}
