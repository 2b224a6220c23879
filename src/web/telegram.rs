use js_sys::{Function, Reflect, JSON};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::host::{HostContext, InitData};

/// `window.Telegram.WebApp`, when the page runs inside the messenger.
pub struct TelegramHost {
  web_app: Option<JsValue>,
}

impl TelegramHost {
  pub fn from_window(window: &Window) -> Self {
    Self::new(property(window, "Telegram").and_then(|telegram| property(&telegram, "WebApp")))
  }

  pub fn new(web_app: Option<JsValue>) -> Self {
    if web_app.is_none() {
      warn!("Telegram.WebApp is not available");
    }
    Self { web_app }
  }
}

impl HostContext for TelegramHost {
  fn ready(&self) {
    let Some(web_app) = &self.web_app else { return };
    let Some(ready) = property(web_app, "ready").and_then(|f| f.dyn_into::<Function>().ok()) else {
      warn!("Telegram.WebApp.ready is not a function");
      return;
    };
    match ready.call0(web_app) {
      Ok(_) => debug!("host ready"),
      Err(e) => warn!("Telegram.WebApp.ready failed: {e:?}"),
    }
  }

  fn init_data(&self) -> Option<InitData> {
    let unsafe_data = property(self.web_app.as_ref()?, "initDataUnsafe")?;
    let json = JSON::stringify(&unsafe_data).ok()?.as_string()?;
    match serde_json::from_str(&json) {
      Ok(data) => Some(data),
      Err(e) => {
        warn!("malformed init data: {e}");
        None
      }
    }
  }
}

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
  Reflect::get(target, &JsValue::from_str(key)).ok().filter(|v| !v.is_undefined() && !v.is_null())
}
