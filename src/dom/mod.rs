mod memory;

use anyhow::Result;

pub use self::memory::{MemoryElement, Node};

use crate::config::Config;
use crate::room::Room;

/// The element room entries are rendered into.
pub trait Container {
  /// Removes every child node.
  fn clear(&mut self) -> Result<()>;

  /// Replaces the content with a single text node.
  fn set_text(&mut self, text: &str) -> Result<()>;

  /// Appends a child element carrying `class` and `text`.
  fn append_item(&mut self, class: &str, text: &str) -> Result<()>;
}

/// Replaces everything under `container` with `rooms`, in order.
pub fn render_rooms<C: Container>(container: &mut C, rooms: &[Room], config: &Config) -> Result<()> {
  container.clear()?;

  if rooms.is_empty() {
    return container.set_text(&config.empty_message);
  }

  for room in rooms {
    container.append_item(&config.room_class, &room.name)?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_list_shows_the_empty_message() {
    let config = Config::default();
    let mut container = MemoryElement::with_id("rooms");
    container.set_text("stale").unwrap();

    render_rooms(&mut container, &[], &config).unwrap();

    assert!(container.children().next().is_none());
    assert_eq!(container.text_content(), config.empty_message);
  }

  #[test]
  fn renders_one_item_per_room_in_order() {
    let config = Config::default();
    let mut container = MemoryElement::with_id("rooms");
    let rooms = [Room::new("Lobby"), Room::new("VIP"), Room::new("Lobby")];

    render_rooms(&mut container, &rooms, &config).unwrap();

    let items: Vec<_> = container.children().collect();
    assert_eq!(items.len(), 3);
    for (item, room) in items.iter().zip(&rooms) {
      assert_eq!(item.classes(), ["room"]);
      assert_eq!(item.text_content(), room.name);
    }
  }

  #[test]
  fn rendering_twice_gives_the_same_tree() {
    let config = Config::default();
    let rooms = [Room::new("Lobby"), Room::new("VIP")];
    let mut container = MemoryElement::with_id("rooms");

    render_rooms(&mut container, &rooms, &config).unwrap();
    let first = container.clone();
    render_rooms(&mut container, &rooms, &config).unwrap();

    assert_eq!(container, first);
  }
}
