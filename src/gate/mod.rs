//! Gate module — session access gate around a pluggable authenticator
//!
//! The gate holds exactly one bit of session state: `Locked` or
//! `Unlocked`. It starts locked on every process start, unlocks at most
//! once, and never re-locks. The authentication mechanism itself is an
//! external collaborator behind the [`Authenticator`] trait; the gate
//! only turns its yes/no/unavailable answer into state.
//!
//! The gate is advisory: callers check it before driving place-mutating
//! UI, but it does not wrap store operations.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Prompt shown to the user by the platform authenticator
const UNLOCK_REASON: &str = "Please authenticate yourself to unlock your places.";

/// Session gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Initial state on every process start
    Locked,
    /// Terminal state for the session; no re-lock operation exists
    Unlocked,
}

/// Outcome of an authentication attempt.
///
/// All three are normal control values, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The check succeeded; the gate is now unlocked
    Granted,
    /// The user failed or cancelled the check; the gate stays locked
    Denied,
    /// The device cannot perform the check at all; the caller decides
    /// the fallback UX
    Unavailable,
}

/// External authentication collaborator.
///
/// Implementors wrap a platform-owned mechanism (biometric hardware,
/// PIN dialog). Timeout and cancellation policy belong to the platform;
/// a collaborator error counts as a failed check.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Capability probe: can this device perform the check at all?
    fn is_available(&self) -> bool;

    /// Perform the check, suspending until the user responds.
    ///
    /// `reason` is the user-facing prompt. Returns true only when the
    /// user passed the check.
    async fn evaluate(&self, reason: &str) -> bool;
}

/// One-way session gate wrapping a single authentication attempt
pub struct AccessGate {
    authenticator: Arc<dyn Authenticator>,
    unlocked: AtomicBool,
}

impl AccessGate {
    /// Create a locked gate around the given authenticator
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            authenticator,
            unlocked: AtomicBool::new(false),
        }
    }

    /// Current gate state
    pub fn state(&self) -> GateState {
        if self.is_unlocked() {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }

    /// True once the session has been unlocked
    pub fn is_unlocked(&self) -> bool {
        self.unlocked.load(Ordering::Acquire)
    }

    /// Run the authentication check and transition the gate.
    ///
    /// An already-unlocked gate reports `Granted` without re-running the
    /// check. The unlock transition happens only after the collaborator
    /// reports success, so dropping the in-flight future leaves the gate
    /// locked.
    pub async fn authenticate(&self) -> AuthOutcome {
        if self.is_unlocked() {
            return AuthOutcome::Granted;
        }

        if !self.authenticator.is_available() {
            tracing::debug!("authentication unavailable on this device");
            return AuthOutcome::Unavailable;
        }

        if self.authenticator.evaluate(UNLOCK_REASON).await {
            self.unlocked.store(true, Ordering::Release);
            tracing::debug!("session unlocked");
            AuthOutcome::Granted
        } else {
            AuthOutcome::Denied
        }
    }
}
