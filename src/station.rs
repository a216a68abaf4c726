//! High-level station facade.

use log::{debug, warn};
use std::net::Ipv4Addr;

use crate::Result;
use crate::association::associate;
use crate::models::{EapCredentials, StationStatus};
use crate::stack::WifiStack;

/// Handle for joining WPA2-Enterprise networks over a vendor Wi-Fi
/// stack.
///
/// A station owns the stack handle and the per-session flags. One
/// station manages one interface; `connect` borrows the station mutably
/// for the whole attempt, so only one association can be in flight at a
/// time.
pub struct EnterpriseStation<S> {
    stack: S,
    debug: bool,
    connected: bool,
}

impl<S: WifiStack> EnterpriseStation<S> {
    /// Creates a station over the given stack with debug logging off.
    pub fn new(stack: S) -> Self {
        Self::with_debug(stack, false)
    }

    /// Creates a station with an explicit debug-logging setting.
    pub fn with_debug(stack: S, debug: bool) -> Self {
        Self {
            stack,
            debug,
            connected: false,
        }
    }

    /// Connects to a WPA2-Enterprise network with the given credentials.
    ///
    /// Tears down any existing association, programs the enterprise
    /// parameters (the identity is also used as the inner username),
    /// starts an open association to `ssid`, and waits for the stack to
    /// report an associated state: one status check every 500 ms with a
    /// hard ceiling of 20 s. Dropping the returned future abandons the
    /// attempt.
    ///
    /// Credentials are passed to the stack as given; empty strings are
    /// not rejected here and the stack's behavior for them is inherited.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::Timeout` if the stack does not report an
    /// associated state within the window. Enterprise authentication is
    /// switched back off before returning so a later attempt starts
    /// clean. Stack-level call failures are not surfaced individually;
    /// they end in the same timeout.
    pub async fn connect(&mut self, ssid: &str, creds: &EapCredentials) -> Result<()> {
        match associate(&mut self.stack, ssid, creds, self.debug).await {
            Ok(()) => {
                self.connected = true;
                Ok(())
            }
            Err(e) => {
                self.connected = false;
                Err(e)
            }
        }
    }

    /// Disconnects from the network.
    ///
    /// Switches enterprise authentication off and tears the association
    /// down, both best-effort, then clears the cached connection flag.
    /// Safe to call when not connected.
    pub async fn disconnect(&mut self) {
        if self.debug {
            debug!("Disconnecting");
        }
        if let Err(e) = self.stack.disable_enterprise_auth().await {
            if self.debug {
                warn!("disable_enterprise_auth failed: {e}");
            }
        }
        if let Err(e) = self.stack.disconnect(true).await {
            if self.debug {
                warn!("disconnect failed: {e}");
            }
        }
        self.connected = false;
        if self.debug {
            debug!("Disconnected");
        }
    }

    /// Returns whether the stack currently reports an associated state.
    ///
    /// Queries the stack on every call rather than trusting the cached
    /// session flag, which can go stale if the link drops on its own.
    pub async fn is_connected(&self) -> bool {
        self.stack.status().await.is_connected()
    }

    /// Returns the cached outcome of the most recent `connect` or
    /// `disconnect` call.
    ///
    /// This is a snapshot, not a live query; see [`is_connected`] for
    /// the latter.
    ///
    /// [`is_connected`]: EnterpriseStation::is_connected
    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Returns the stack's raw station status.
    pub async fn status(&self) -> StationStatus {
        self.stack.status().await
    }

    /// Returns the address assigned to the interface, unspecified when
    /// none is.
    pub async fn local_address(&self) -> Ipv4Addr {
        self.stack.local_address().await
    }

    /// Enables or disables this station's debug logging. Logging only;
    /// connection state is unaffected.
    pub fn set_debug(&mut self, enable: bool) {
        self.debug = enable;
    }

    /// Returns whether debug logging is enabled.
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Returns a shared reference to the underlying stack.
    pub fn stack(&self) -> &S {
        &self.stack
    }

    /// Consumes the station and returns the stack handle.
    pub fn into_stack(self) -> S {
        self.stack
    }
}
