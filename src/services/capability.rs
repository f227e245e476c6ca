//! Admin capability gate
//!
//! A single shared admin identity: logging in with the configured password hands
//! out an opaque session marker, and a request is privileged iff it presents
//! exactly that marker. Markers never expire and are not signed; whoever holds
//! one holds admin rights until the process restarts (or forever, when
//! `auth.session_marker` is pinned in configuration).

use base64::Engine;
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::errors::{CallboardError, Result};

/// Session marker presented by a caller (cookie value), if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    marker: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { marker: None }
    }

    pub fn from_marker(marker: Option<String>) -> Self {
        Self {
            marker: marker.filter(|m| !m.is_empty()),
        }
    }

    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}

pub struct CapabilityGate {
    admin_password: String,
    session_marker: String,
    cookie_name: String,
}

impl CapabilityGate {
    pub fn new(config: &AuthConfig) -> Self {
        let session_marker = match config.session_marker.as_deref() {
            Some(marker) if !marker.is_empty() => marker.to_string(),
            _ => generate_session_marker(),
        };

        Self {
            admin_password: config.admin_password.clone(),
            session_marker,
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// Compare the submitted password with the configured secret and hand out the marker
    pub fn login(&self, password: &str) -> Result<String> {
        if !constant_time_eq(password, &self.admin_password) {
            warn!("CapabilityGate: login rejected - bad password");
            return Err(CallboardError::bad_credentials("Bad password"));
        }

        info!("CapabilityGate: admin login successful");
        Ok(self.session_marker.clone())
    }

    /// true iff the session carries exactly the expected marker
    pub fn authorize(&self, session: &Session) -> bool {
        session
            .marker()
            .is_some_and(|marker| constant_time_eq(marker, &self.session_marker))
    }

    /// `authorize` as a fallible guard for privileged operations
    pub fn require(&self, session: &Session, operation: &str) -> Result<()> {
        if self.authorize(session) {
            return Ok(());
        }

        warn!("CapabilityGate: {} rejected - missing or invalid session", operation);
        Err(CallboardError::forbidden("Unauthorized"))
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// 生成会话标记（32 bytes = 256 bits，Base64 编码）
fn generate_session_marker() -> String {
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
