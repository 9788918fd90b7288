//! Records persisted in local storage.

use serde::{Deserialize, Serialize};

/// The session-mirror record: a derived, non-authoritative copy of "who is
/// currently logged in". Used only to gate UI actions and stamp authorship;
/// the backend decides whether a session actually exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
}
