use std::sync::Arc;

use parking_lot::Mutex;

/// Blocking, user-facing notification channel.
pub trait Notifier {
  fn alert(&self, message: &str);
}

/// Keeps every alert instead of showing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
  alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
  pub fn alerts(&self) -> Vec<String> {
    self.alerts.lock().clone()
  }
}

impl Notifier for RecordingNotifier {
  fn alert(&self, message: &str) {
    self.alerts.lock().push(message.to_owned());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clones_share_the_record() {
    let notifier = RecordingNotifier::default();
    notifier.clone().alert("boom");
    assert_eq!(notifier.alerts(), ["boom"]);
  }
}
