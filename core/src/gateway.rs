use std::sync::Arc;

/// An opaque snapshot of the gateway's deployed configuration.
///
/// The admission filter assumes nothing about the contents beyond equality:
/// two snapshots compare equal exactly when applying one after the other
/// would be a no-op. Accessor implementations that hold a structured config
/// can serialize it with [`GatewayConfig::from_json`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig(bytes::Bytes);

// === impl GatewayConfig ===

impl GatewayConfig {
    pub fn new(bytes: impl Into<bytes::Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Builds a snapshot from a serializable configuration.
    pub fn from_json<T: serde::Serialize>(config: &T) -> serde_json::Result<Self> {
        serde_json::to_vec(config).map(Self::new)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Reads the configuration the gateway is currently running.
///
/// Implementations talk to the remote management API; a failed read must be
/// surfaced as an error rather than a default config, since the caller treats
/// "could not fetch" and "nothing changed" very differently.
#[async_trait::async_trait]
pub trait FetchGatewayConfig {
    async fn fetch_gateway_config(&self) -> anyhow::Result<GatewayConfig>;
}

/// Holds the configuration snapshot most recently applied by the
/// reconciliation pipeline, if any.
pub trait ConfigCache {
    fn last_applied(&self) -> Option<Arc<GatewayConfig>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_byte_equality() {
        let a = GatewayConfig::from_json(&serde_json::json!({"listeners": ["http"]})).unwrap();
        let b = GatewayConfig::from_json(&serde_json::json!({"listeners": ["http"]})).unwrap();
        let c = GatewayConfig::from_json(&serde_json::json!({"listeners": ["https"]})).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn exposes_serialized_bytes() {
        let config = GatewayConfig::new(&b"frontend-ports: [80]"[..]);
        assert_eq!(config.as_bytes(), b"frontend-ports: [80]");
    }
}
