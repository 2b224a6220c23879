mod api;
mod config;
pub mod dom;
mod error;
pub mod host;
mod identity;
mod notify;
mod room;
mod widget;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use self::api::{HttpRoomsApi, RoomsApi};
pub use self::config::Config;
pub use self::error::FetchError;
pub use self::identity::{SessionIdentity, UNKNOWN_USER};
pub use self::notify::{Notifier, RecordingNotifier};
pub use self::room::{Room, RoomList};
pub use self::widget::{RoomListWidget, WidgetState};
