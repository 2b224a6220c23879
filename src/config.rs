use anyhow::{Context, Result};
use reqwest::Url;

#[derive(Clone, Debug)]
pub struct Config {
  /// Rooms endpoint, resolved against the page origin
  pub rooms_path: String,
  /// Id of the element the room list is rendered into
  pub container_id: String,
  /// Class set on every rendered room element
  pub room_class: String,
  pub empty_message: String,
  /// Alert text shown when the room list cannot be fetched
  pub failure_message: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      rooms_path: "/api/rooms".into(),
      container_id: "rooms".into(),
      room_class: "room".into(),
      empty_message: "No rooms available.".into(),
      failure_message: "Failed to load the room list. Check the console for details.".into(),
    }
  }
}

impl Config {
  pub fn rooms_url(&self, base: &Url) -> Result<Url> {
    base.join(&self.rooms_path).with_context(|| format!("invalid rooms path {}", self.rooms_path))
  }
}
