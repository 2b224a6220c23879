//! Browser entry point: wires the widget to `window.Telegram.WebApp`, the
//! page's `#rooms` element and `window.alert`.

mod console;
mod dom;
mod telegram;

use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use self::dom::{AlertNotifier, DomContainer};
pub use self::telegram::TelegramHost;

use crate::{Config, HttpRoomsApi, RoomListWidget};

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen(start)]
pub fn start() {
  console_error_panic_hook::set_once();
  console::init();

  spawn_local(async {
    if let Err(e) = run().await {
      error!("{e:#}");
    }
  });
}

async fn run() -> Result<()> {
  let window = web_sys::window().context("no global window")?;
  let document = window.document().context("no document on window")?;
  let origin = window.location().origin().map_err(js_error)?;
  let base = Url::parse(&origin).with_context(|| format!("invalid page origin {origin}"))?;

  let config = Config::default();
  let api = HttpRoomsApi::new(&base, &config)?;
  let container = DomContainer::by_id(&document, &config.container_id)?;
  let host = TelegramHost::from_window(&window);
  let notifier = AlertNotifier::new(window);

  let mut widget = RoomListWidget::new(config, host, api, container, notifier);
  widget.init().await;
  Ok(())
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
  anyhow!("{value:?}")
}
