mod static_host;

use std::fmt;

use serde::Deserialize;

pub use self::static_host::StaticHost;

/// Capabilities the embedding messenger hands to the widget.
pub trait HostContext {
  /// Tells the host the page is ready to be shown.
  fn ready(&self);

  /// Launch data injected by the host, if any.
  fn init_data(&self) -> Option<InitData>;
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InitData {
  #[serde(default)]
  pub user: Option<WebAppUser>,
}

/// Only the id is read; profile fields are skipped whatever their shape.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct WebAppUser {
  #[serde(default)]
  pub id: Option<UserId>,
}

/// Opaque user identifier, kept exactly as the host sent it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserId {
  Number(serde_json::Number),
  Text(String),
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UserId::Number(n) => write!(f, "{n}"),
      UserId::Text(s) => f.write_str(s),
    }
  }
}

impl From<i64> for UserId {
  fn from(id: i64) -> Self {
    Self::Number(id.into())
  }
}

impl From<&str> for UserId {
  fn from(id: &str) -> Self {
    Self::Text(id.to_owned())
  }
}
