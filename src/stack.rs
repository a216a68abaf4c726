//! The vendor Wi-Fi stack abstraction.
//!
//! `WifiStack` names the capability surface this crate needs from an
//! underlying Wi-Fi stack: association teardown, interface mode,
//! enterprise credential programming, and status queries. Production
//! implementations wrap a vendor SDK; tests implement it with a scripted
//! double.
//!
//! Mutating calls carry the backend's own error type. The station treats
//! every such call as best-effort (failures are logged, never branched
//! on), so a backend may also use an infallible error type and always
//! return `Ok`.

use async_trait::async_trait;
use std::fmt::Display;
use std::net::Ipv4Addr;

use crate::models::{StationStatus, WifiMode};

/// Capability surface of the underlying vendor Wi-Fi stack.
#[async_trait]
pub trait WifiStack {
    /// Error type reported by the backend's own calls.
    type Error: Display;

    /// Tears down the current association. `force` also discards any
    /// in-flight attempt.
    async fn disconnect(&mut self, force: bool) -> Result<(), Self::Error>;

    /// Sets the interface operating role.
    async fn set_mode(&mut self, mode: WifiMode) -> Result<(), Self::Error>;

    /// Programs the outer EAP identity.
    async fn set_enterprise_identity(&mut self, identity: &[u8]) -> Result<(), Self::Error>;

    /// Programs the username used by the inner authentication.
    async fn set_enterprise_username(&mut self, username: &[u8]) -> Result<(), Self::Error>;

    /// Programs the password used by the inner authentication.
    async fn set_enterprise_password(&mut self, password: &[u8]) -> Result<(), Self::Error>;

    /// Switches the supplicant into enterprise (802.1X) mode.
    async fn enable_enterprise_auth(&mut self) -> Result<(), Self::Error>;

    /// Returns the supplicant to plain station operation.
    async fn disable_enterprise_auth(&mut self) -> Result<(), Self::Error>;

    /// Starts associating to `ssid`. The association itself is open;
    /// credentials reach the access point through the enterprise
    /// parameters programmed beforehand.
    async fn begin_association(&mut self, ssid: &str) -> Result<(), Self::Error>;

    /// Current station status as reported by the stack.
    async fn status(&self) -> StationStatus;

    /// Address assigned to the interface, unspecified when none is.
    async fn local_address(&self) -> Ipv4Addr;
}
