use anyhow::{Context, Result};
use tracing::warn;
use web_sys::{Document, Element, Window};

use super::js_error;
use crate::dom::Container;
use crate::notify::Notifier;

pub struct DomContainer {
  document: Document,
  element: Element,
}

impl DomContainer {
  pub fn by_id(document: &Document, id: &str) -> Result<Self> {
    let element = document.get_element_by_id(id).with_context(|| format!("element #{id} not found"))?;
    Ok(Self { document: document.clone(), element })
  }
}

impl Container for DomContainer {
  fn clear(&mut self) -> Result<()> {
    self.element.set_inner_html("");
    Ok(())
  }

  fn set_text(&mut self, text: &str) -> Result<()> {
    self.element.set_text_content(Some(text));
    Ok(())
  }

  fn append_item(&mut self, class: &str, text: &str) -> Result<()> {
    let item = self.document.create_element("div").map_err(js_error)?;
    item.class_list().add_1(class).map_err(js_error)?;
    item.set_text_content(Some(text));
    self.element.append_child(&item).map_err(js_error)?;
    Ok(())
  }
}

pub struct AlertNotifier {
  window: Window,
}

impl AlertNotifier {
  pub fn new(window: Window) -> Self {
    Self { window }
  }
}

impl Notifier for AlertNotifier {
  fn alert(&self, message: &str) {
    if let Err(e) = self.window.alert_with_message(message) {
      warn!("alert failed: {e:?}");
    }
  }
}

#[cfg(test)]
mod tests {
  use js_sys::{Array, Function, Reflect};
  use wasm_bindgen::JsValue;
  use wasm_bindgen_test::*;

  use super::*;
  use crate::dom::render_rooms;
  use crate::{Config, Room};

  /// Attaches an empty `div#id` to the page.
  fn mount(id: &str) -> (Document, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.document_element().unwrap().append_child(&element).unwrap();
    (document, element)
  }

  /// `(class, text)` of every element child, in order.
  fn items(element: &Element) -> Vec<(String, String)> {
    let mut items = Vec::new();
    let mut child = element.first_element_child();
    while let Some(item) = child {
      items.push((item.class_name(), item.text_content().unwrap_or_default()));
      child = item.next_element_sibling();
    }
    items
  }

  #[wasm_bindgen_test]
  fn renders_rooms_in_order_and_rerenders_identically() {
    let (document, element) = mount("rooms-ordered");
    let mut container = DomContainer::by_id(&document, "rooms-ordered").unwrap();
    let config = Config::default();
    let rooms = [Room::new("Lobby"), Room::new("VIP")];
    let expected = vec![("room".to_owned(), "Lobby".to_owned()), ("room".to_owned(), "VIP".to_owned())];

    render_rooms(&mut container, &rooms, &config).unwrap();
    assert_eq!(element.child_element_count(), 2);
    assert_eq!(items(&element), expected);

    render_rooms(&mut container, &rooms, &config).unwrap();
    assert_eq!(element.child_element_count(), 2);
    assert_eq!(items(&element), expected);

    element.remove();
  }

  #[wasm_bindgen_test]
  fn empty_list_replaces_items_with_the_empty_message() {
    let (document, element) = mount("rooms-empty");
    let mut container = DomContainer::by_id(&document, "rooms-empty").unwrap();
    let config = Config::default();

    render_rooms(&mut container, &[Room::new("Lobby")], &config).unwrap();
    render_rooms(&mut container, &[], &config).unwrap();

    assert_eq!(element.child_element_count(), 0);
    assert_eq!(element.text_content().as_deref(), Some("No rooms available."));

    element.remove();
  }

  #[wasm_bindgen_test]
  fn missing_container_is_an_error() {
    let document = web_sys::window().unwrap().document().unwrap();
    assert!(DomContainer::by_id(&document, "no-such-rooms").is_err());
  }

  #[wasm_bindgen_test]
  fn alert_goes_through_window_alert() {
    let window = web_sys::window().unwrap();
    let shown = Array::new();
    Reflect::set(&window, &"shownAlerts".into(), &shown).unwrap();
    let alert = Function::new_with_args("message", "window.shownAlerts.push(message);");
    Reflect::set(&window, &"alert".into(), &alert).unwrap();

    AlertNotifier::new(window.clone()).alert("Failed to load the room list.");

    Reflect::delete_property(&window, &"alert".into()).unwrap();
    Reflect::delete_property(&window, &"shownAlerts".into()).unwrap();
    assert_eq!(shown.length(), 1);
    assert_eq!(shown.get(0), JsValue::from_str("Failed to load the room list."));
  }
}
