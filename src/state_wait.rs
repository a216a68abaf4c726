//! Association state monitoring.
//!
//! The vendor stack exposes no completion signal for an association
//! attempt, only a status query, so the wait is a fixed-interval poll
//! under a wall-clock ceiling. The poll suspends between checks; the
//! ordering guarantee is one status check per interval until the
//! ceiling.

use log::{debug, warn};
use tokio::time::{sleep, timeout};

use crate::Result;
use crate::constants::timeouts;
use crate::models::ConnectionError;
use crate::stack::WifiStack;

/// Waits for the stack to report an associated state.
///
/// Polls `status()` every 500 ms until it reports `Connected` or the
/// 20 s ceiling elapses. After the ceiling fires the status is checked
/// once more, since the link may have come up during the final interval.
///
/// # Errors
///
/// Returns `ConnectionError::Timeout` if the stack never reports an
/// associated state within the window.
pub(crate) async fn wait_for_association<S: WifiStack>(
    stack: &S,
    debug_enabled: bool,
) -> Result<()> {
    let result = timeout(timeouts::association_timeout(), async {
        loop {
            let status = stack.status().await;
            if status.is_connected() {
                if debug_enabled {
                    debug!("Association confirmed");
                }
                return;
            }
            if debug_enabled {
                debug!("Waiting for association, status: {status}");
            }
            sleep(timeouts::association_poll_interval()).await;
        }
    })
    .await;

    match result {
        Ok(()) => Ok(()),
        Err(_) => {
            let final_status = stack.status().await;
            if final_status.is_connected() {
                return Ok(());
            }
            if debug_enabled {
                warn!(
                    "Association not confirmed after {:?}, status: {final_status}",
                    timeouts::association_timeout()
                );
            }
            Err(ConnectionError::Timeout)
        }
    }
}
