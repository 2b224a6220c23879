use anyhow::Result;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::FetchError;
use crate::room::{Room, RoomList};

/// Source of the room list.
#[allow(async_fn_in_trait)]
pub trait RoomsApi {
  async fn fetch_rooms(&self) -> Result<Vec<Room>, FetchError>;
}

/// `GET /api/rooms` over HTTP, no credentials attached.
#[derive(Clone, Debug)]
pub struct HttpRoomsApi {
  client: Client,
  url: Url,
}

impl HttpRoomsApi {
  pub fn new(base: &Url, config: &Config) -> Result<Self> {
    Ok(Self { client: Client::new(), url: config.rooms_url(base)? })
  }
}

impl RoomsApi for HttpRoomsApi {
  #[instrument(name = "fetch", skip_all, fields(url = %self.url))]
  async fn fetch_rooms(&self) -> Result<Vec<Room>, FetchError> {
    let response = self.client.get(self.url.clone()).send().await?;

    let status = response.status();
    debug!("recv status={status}");
    if !status.is_success() {
      return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let list = RoomList::from_slice(&body)?;
    debug!("recv rooms count={}", list.rooms.len());
    Ok(list.rooms)
  }
}
