use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::{HostContext, InitData};

/// Host whose launch data is known up front: previews and tests.
#[derive(Debug, Default)]
pub struct StaticHost {
  init_data: Option<InitData>,
  ready: AtomicBool,
}

impl StaticHost {
  pub fn new(init_data: Option<InitData>) -> Self {
    Self { init_data, ready: AtomicBool::new(false) }
  }

  pub fn from_json(json: &str) -> serde_json::Result<Self> {
    Ok(Self::new(Some(serde_json::from_str(json)?)))
  }

  pub fn is_ready(&self) -> bool {
    self.ready.load(Ordering::Relaxed)
  }
}

impl HostContext for StaticHost {
  fn ready(&self) {
    debug!("host ready");
    self.ready.store(true, Ordering::Relaxed);
  }

  fn init_data(&self) -> Option<InitData> {
    self.init_data.clone()
  }
}
