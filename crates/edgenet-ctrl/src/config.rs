use std::net::SocketAddr;

/// Engine configuration. Defaults suit a local deployment; `from_env` applies
/// environment overrides.
#[derive(Debug, Clone)]
pub struct CtrlConfig {
    pub http: HttpServerConfig,
    /// Key prefix under which the monitoring engine publishes pod health.
    /// The scan pattern is `<prefix><namespace>:*`.
    pub health_key_prefix: String,
    /// Health-report namespace scanned when a request does not name one.
    pub default_namespace: String,
}

impl Default for CtrlConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            health_key_prefix: "edgenet-mon-engine:pod:".into(),
            default_namespace: "scenario".into(),
        }
    }
}

impl CtrlConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(raw) = std::env::var("EDGENET_HTTP_BIND")
            && let Ok(bind) = raw.parse()
        {
            cfg.http.bind = bind;
        }
        cfg
    }
}

/// Configuration for the HTTP control surface.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub enabled: bool,
    pub bind: SocketAddr,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind: ([0, 0, 0, 0], 8291).into(),
        }
    }
}
