use std::str::FromStr;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Room {
  pub name: String,
}

impl Room {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

/// Body of a successful `GET /api/rooms` response.
#[derive(Debug, Deserialize)]
pub struct RoomList {
  pub rooms: Vec<Room>,
}

impl RoomList {
  pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
    serde_json::from_slice(body)
  }
}

impl FromStr for RoomList {
  type Err = serde_json::Error;

  fn from_str(s: &str) -> serde_json::Result<Self> {
    serde_json::from_str(s)
  }
}
