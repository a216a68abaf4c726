use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Station status codes reported by the vendor Wi-Fi stack.
///
/// These values are a raw pass-through of the status enumeration used by
/// the underlying stack. Use `StationStatus::from(code)` to convert from
/// the numeric codes the stack reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationStatus {
    /// Interface is idle, no association in progress.
    Idle,
    /// The requested network is not visible.
    NoSsidAvailable,
    /// A network scan finished.
    ScanCompleted,
    /// Associated and authenticated.
    Connected,
    /// The association attempt was rejected.
    ConnectFailed,
    /// An established link was lost.
    ConnectionLost,
    /// Not associated to any network.
    Disconnected,
    /// Unknown status code not mapped to a specific variant.
    Other(u32),
}

impl StationStatus {
    /// Returns whether this status reports an associated link.
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl From<u32> for StationStatus {
    fn from(code: u32) -> Self {
        match code {
            0 => Self::Idle,
            1 => Self::NoSsidAvailable,
            2 => Self::ScanCompleted,
            3 => Self::Connected,
            4 => Self::ConnectFailed,
            5 => Self::ConnectionLost,
            6 => Self::Disconnected,
            v => Self::Other(v),
        }
    }
}

impl Display for StationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::NoSsidAvailable => write!(f, "no SSID available"),
            Self::ScanCompleted => write!(f, "scan completed"),
            Self::Connected => write!(f, "connected"),
            Self::ConnectFailed => write!(f, "connect failed"),
            Self::ConnectionLost => write!(f, "connection lost"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Other(v) => write!(f, "unknown status ({v})"),
        }
    }
}

/// Wireless interface operating role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiMode {
    /// Client role, joining an access point.
    Station,
    /// Access-point role, serving clients.
    AccessPoint,
    /// Concurrent station and access-point role.
    ApStation,
}

impl Display for WifiMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Station => write!(f, "station"),
            Self::AccessPoint => write!(f, "access point"),
            Self::ApStation => write!(f, "station+ap"),
        }
    }
}

/// Username/password credentials for EAP-PEAP style authentication.
///
/// The identity is programmed into both the outer EAP identity and the
/// inner username fields of the stack. An anonymous outer identity is
/// not supported.
pub struct EapCredentials {
    pub identity: String,
    pub password: String,
}

impl EapCredentials {
    /// Creates credentials from an identity and password.
    pub fn new(identity: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            password: password.into(),
        }
    }
}

/// Errors that can occur during association.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The stack did not report an associated state within the wait window.
    #[error("association timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_status_from_u32_all_variants() {
        assert_eq!(StationStatus::from(0), StationStatus::Idle);
        assert_eq!(StationStatus::from(1), StationStatus::NoSsidAvailable);
        assert_eq!(StationStatus::from(2), StationStatus::ScanCompleted);
        assert_eq!(StationStatus::from(3), StationStatus::Connected);
        assert_eq!(StationStatus::from(4), StationStatus::ConnectFailed);
        assert_eq!(StationStatus::from(5), StationStatus::ConnectionLost);
        assert_eq!(StationStatus::from(6), StationStatus::Disconnected);
        assert_eq!(StationStatus::from(255), StationStatus::Other(255));
        assert_eq!(StationStatus::from(999), StationStatus::Other(999));
    }

    #[test]
    fn station_status_display() {
        assert_eq!(format!("{}", StationStatus::Idle), "idle");
        assert_eq!(
            format!("{}", StationStatus::NoSsidAvailable),
            "no SSID available"
        );
        assert_eq!(format!("{}", StationStatus::Connected), "connected");
        assert_eq!(
            format!("{}", StationStatus::ConnectFailed),
            "connect failed"
        );
        assert_eq!(
            format!("{}", StationStatus::ConnectionLost),
            "connection lost"
        );
        assert_eq!(format!("{}", StationStatus::Disconnected), "disconnected");
        assert_eq!(
            format!("{}", StationStatus::Other(42)),
            "unknown status (42)"
        );
    }

    #[test]
    fn station_status_is_connected() {
        assert!(StationStatus::Connected.is_connected());
        assert!(!StationStatus::Idle.is_connected());
        assert!(!StationStatus::ConnectFailed.is_connected());
        assert!(!StationStatus::Disconnected.is_connected());
        assert!(!StationStatus::Other(3).is_connected());
    }

    #[test]
    fn wifi_mode_display() {
        assert_eq!(format!("{}", WifiMode::Station), "station");
        assert_eq!(format!("{}", WifiMode::AccessPoint), "access point");
        assert_eq!(format!("{}", WifiMode::ApStation), "station+ap");
    }

    #[test]
    fn eap_credentials_new() {
        let creds = EapCredentials::new("alice@corp.example", "hunter2");
        assert_eq!(creds.identity, "alice@corp.example");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn eap_credentials_allow_empty_fields() {
        let creds = EapCredentials::new("", "");
        assert!(creds.identity.is_empty());
        assert!(creds.password.is_empty());
    }

    #[test]
    fn connection_error_display() {
        assert_eq!(
            format!("{}", ConnectionError::Timeout),
            "association timeout"
        );
    }
}
