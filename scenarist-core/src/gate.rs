//! Premium access gate.
//!
//! A session starts `Locked` and moves to `Unlocked` when the shared unlock
//! code is submitted. Nothing moves it back. The code is compared in
//! plaintext and guesses are unlimited.
use crate::constants::{UNLOCK_INVALID_CODE_MESSAGE, UNLOCK_MISSING_CODE_MESSAGE};
use crate::session::Session;
use thiserror::Error;

/// The configured shared secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct UnlockCode(String);

impl UnlockCode {
    /// Accept a configured secret.
    ///
    /// Returns `None` for blank values or values with surrounding
    /// whitespace, since trimmed submissions could never match those.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.trim() != raw {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }
}

impl std::fmt::Debug for UnlockCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UnlockCode(<redacted>)")
    }
}

/// Observable gate state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Verdict for a premium access point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectToStore,
}

/// User-correctable unlock failures. The display text is shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnlockError {
    #[error("{}", UNLOCK_MISSING_CODE_MESSAGE)]
    MissingCode,
    #[error("{}", UNLOCK_INVALID_CODE_MESSAGE)]
    InvalidCode,
}

#[must_use]
pub const fn check_unlocked(session: &Session) -> bool {
    session.premium_unlocked_dating()
}

#[must_use]
pub const fn gate_state(session: &Session) -> GateState {
    if check_unlocked(session) {
        GateState::Unlocked
    } else {
        GateState::Locked
    }
}

/// Validate a submitted code and unlock the session on a match.
///
/// # Errors
///
/// Returns [`UnlockError::MissingCode`] when the trimmed submission is empty
/// and [`UnlockError::InvalidCode`] when it differs from `expected`. The
/// session is untouched in both cases.
pub fn submit_unlock_code(
    session: &mut Session,
    submitted: &str,
    expected: &UnlockCode,
) -> Result<(), UnlockError> {
    let code = submitted.trim();
    if code.is_empty() {
        return Err(UnlockError::MissingCode);
    }
    if !expected.matches(code) {
        log::debug!("unlock attempt rejected");
        return Err(UnlockError::InvalidCode);
    }
    session.mark_premium_unlocked();
    Ok(())
}

#[must_use]
pub const fn guard_premium_route(session: &Session) -> Access {
    if check_unlocked(session) {
        Access::Allow
    } else {
        Access::RedirectToStore
    }
}
