use std::fmt;

use tracing::{info, warn};

use crate::host::{HostContext, UserId};

pub const UNKNOWN_USER: &str = "unknown";

/// Who is using the widget for this page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIdentity {
  User(UserId),
  Unknown,
}

impl SessionIdentity {
  pub fn resolve<H: HostContext>(host: &H) -> Self {
    match host.init_data().and_then(|data| data.user).and_then(|user| user.id) {
      Some(id) => {
        info!("user id: {id}");
        Self::User(id)
      }
      None => {
        warn!("user id unavailable, check the host web app SDK setup");
        Self::Unknown
      }
    }
  }

  pub fn user_id(&self) -> Option<&UserId> {
    match self {
      Self::User(id) => Some(id),
      Self::Unknown => None,
    }
  }
}

impl fmt::Display for SessionIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::User(id) => write!(f, "{id}"),
      Self::Unknown => f.write_str(UNKNOWN_USER),
    }
  }
}
