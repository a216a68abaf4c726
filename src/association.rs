//! The enterprise association flow.
//!
//! Sequences the underlying stack through one WPA2-Enterprise
//! connection attempt: teardown, settling delay, station mode,
//! credential programming, association, bounded wait.

use log::{debug, warn};
use std::fmt::Display;
use tokio::time::sleep;

use crate::Result;
use crate::constants::timeouts;
use crate::models::{EapCredentials, WifiMode};
use crate::stack::WifiStack;
use crate::state_wait::wait_for_association;

/// Drives one association attempt against the stack.
///
/// Every configuration call into the stack is best-effort: the stack's
/// own call failures are logged and otherwise ignored, and surface as
/// the status never reaching an associated state. On timeout, enterprise
/// authentication is switched back off so the next attempt starts from a
/// clean supplicant state.
pub(crate) async fn associate<S: WifiStack>(
    stack: &mut S,
    ssid: &str,
    creds: &EapCredentials,
    debug_enabled: bool,
) -> Result<()> {
    if debug_enabled {
        debug!("Starting WPA2-Enterprise association to '{ssid}'");
        debug!("EAP identity: {}", creds.identity);
    }

    // Tear down whatever association is still up and let the interface
    // settle before reconfiguring it.
    note_stack_call("disconnect", stack.disconnect(true).await, debug_enabled);
    sleep(timeouts::settle_delay()).await;

    note_stack_call(
        "set_mode",
        stack.set_mode(WifiMode::Station).await,
        debug_enabled,
    );

    // The identity doubles as the inner username; the stack takes them
    // as separate fields.
    note_stack_call(
        "set_enterprise_identity",
        stack.set_enterprise_identity(creds.identity.as_bytes()).await,
        debug_enabled,
    );
    note_stack_call(
        "set_enterprise_username",
        stack.set_enterprise_username(creds.identity.as_bytes()).await,
        debug_enabled,
    );
    note_stack_call(
        "set_enterprise_password",
        stack.set_enterprise_password(creds.password.as_bytes()).await,
        debug_enabled,
    );
    note_stack_call(
        "enable_enterprise_auth",
        stack.enable_enterprise_auth().await,
        debug_enabled,
    );

    note_stack_call(
        "begin_association",
        stack.begin_association(ssid).await,
        debug_enabled,
    );

    match wait_for_association(&*stack, debug_enabled).await {
        Ok(()) => {
            if debug_enabled {
                debug!("Connected to '{ssid}' as '{}'", creds.identity);
                debug!("Assigned address: {}", stack.local_address().await);
            }
            Ok(())
        }
        Err(e) => {
            if debug_enabled {
                let status = stack.status().await;
                warn!("Association to '{ssid}' failed, status: {status}");
            }
            note_stack_call(
                "disable_enterprise_auth",
                stack.disable_enterprise_auth().await,
                debug_enabled,
            );
            Err(e)
        }
    }
}

/// Logs the outcome of a best-effort stack call without propagating it.
fn note_stack_call<E: Display>(
    op: &str,
    result: std::result::Result<(), E>,
    debug_enabled: bool,
) {
    if !debug_enabled {
        return;
    }
    match result {
        Ok(()) => debug!("{op} ok"),
        Err(e) => warn!("{op} failed: {e}"),
    }
}
