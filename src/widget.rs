use tracing::{error, info, warn};

use crate::api::RoomsApi;
use crate::config::Config;
use crate::dom::{self, Container};
use crate::host::HostContext;
use crate::identity::SessionIdentity;
use crate::notify::Notifier;
use crate::room::Room;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
  Uninitialized,
  Loading,
  Rendered,
}

/// Resolves the user, fetches the rooms and renders them, once.
pub struct RoomListWidget<H, A, C, N> {
  config: Config,
  host: H,
  api: A,
  container: C,
  notifier: N,
  state: WidgetState,
  identity: Option<SessionIdentity>,
  rooms: Vec<Room>,
}

impl<H, A, C, N> RoomListWidget<H, A, C, N>
where
  H: HostContext,
  A: RoomsApi,
  C: Container,
  N: Notifier,
{
  pub fn new(config: Config, host: H, api: A, container: C, notifier: N) -> Self {
    Self {
      config,
      host,
      api,
      container,
      notifier,
      state: WidgetState::Uninitialized,
      identity: None,
      rooms: Vec::new(),
    }
  }

  pub fn state(&self) -> WidgetState {
    self.state
  }

  /// `None` until `init` has run.
  pub fn identity(&self) -> Option<&SessionIdentity> {
    self.identity.as_ref()
  }

  pub fn rooms(&self) -> &[Room] {
    &self.rooms
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  pub fn container(&self) -> &C {
    &self.container
  }

  pub fn notifier(&self) -> &N {
    &self.notifier
  }

  pub async fn init(&mut self) {
    if self.state != WidgetState::Uninitialized {
      warn!("widget already initialized");
      return;
    }

    self.host.ready();
    self.identity = Some(SessionIdentity::resolve(&self.host));

    self.state = WidgetState::Loading;
    self.fetch_rooms().await;
    self.render_rooms();
    self.state = WidgetState::Rendered;
  }

  /// Replaces the room list with the backend's. On failure the previous list
  /// is kept and the user is alerted once.
  pub async fn fetch_rooms(&mut self) {
    match self.api.fetch_rooms().await {
      Ok(rooms) => {
        info!("fetched rooms count={}", rooms.len());
        self.rooms = rooms;
      }
      Err(e) => {
        error!(kind = e.kind(), "failed to fetch rooms: {e}");
        self.notifier.alert(&self.config.failure_message);
      }
    }
  }

  pub fn render_rooms(&mut self) {
    if let Err(e) = dom::render_rooms(&mut self.container, &self.rooms, &self.config) {
      error!("failed to render rooms: {e:#}");
    }
  }
}
