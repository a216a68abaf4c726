//! A Rust library for joining WPA2-Enterprise Wi-Fi networks through a
//! vendor Wi-Fi stack.
//!
//! This crate drives an existing Wi-Fi stack (the `WifiStack` trait)
//! through one EAP-PEAP style username/password association:
//!
//! - Programming enterprise credentials on the interface
//! - Starting the association in station mode
//! - Waiting for the link with a fixed poll interval and wall-clock ceiling
//! - Reporting status, address, and connection state
//!
//! All authentication and handshake logic lives in the underlying stack;
//! this crate only sequences it and reports the outcome.
//!
//! # Example
//!
//! ```no_run
//! use eapsta::{EapCredentials, EnterpriseStation, WifiStack};
//!
//! async fn bring_up<S: WifiStack>(stack: S) -> eapsta::Result<()> {
//!     let mut station = EnterpriseStation::new(stack);
//!     let creds = EapCredentials::new("alice@corp.example", "hunter2");
//!
//!     station.connect("CorpNet", &creds).await?;
//!     println!("address: {}", station.local_address().await);
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! `connect` returns `Result<(), ConnectionError>` with a single failure
//! variant: `Timeout`. Failures inside the stack (rejected credentials,
//! misconfiguration) are not individually detected. They show up as the
//! interface never reaching an associated state and end in the same
//! timeout.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. The station's
//! own log output is additionally gated by its debug flag, so
//! `set_debug(false)` silences it regardless of the installed logger.

// Internal implementation modules
mod association;
mod constants;
mod state_wait;

// Public API modules
pub mod models;
pub mod stack;
pub mod station;

// Re-exported public API
pub use models::{ConnectionError, EapCredentials, StationStatus, WifiMode};
pub use stack::WifiStack;
pub use station::EnterpriseStation;

/// A specialized `Result` type for association operations.
pub type Result<T> = std::result::Result<T, ConnectionError>;
