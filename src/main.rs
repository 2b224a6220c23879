#[cfg(not(target_arch = "wasm32"))]
mod preview {
  use anyhow::{bail, Context, Result};
  use clap::{Parser, ValueEnum};
  use reqwest::Url;
  use roomlist::dom::MemoryElement;
  use roomlist::host::StaticHost;
  use roomlist::{Config, HttpRoomsApi, RecordingNotifier, RoomListWidget};
  use tracing::Level;
  use tracing_subscriber::EnvFilter;

  #[derive(Clone, Copy, Debug, ValueEnum)]
  enum Format {
    Html,
    Text,
  }

  /// Renders the room list the way the web app would, without a browser
  #[derive(Parser, Debug)]
  #[command(author, version, about, long_about = None)]
  struct Args {
    /// Backend origin the rooms endpoint is resolved against
    #[arg(short, long, env = "ROOMLIST_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: Url,
    /// Host init data as JSON, e.g. '{"user":{"id":12345}}'
    #[arg(short, long, env = "ROOMLIST_INIT_DATA")]
    init_data: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
  }

  fn init_tracing() {
    let filter = |level: Level| {
      EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper=off".parse().unwrap())
        .add_directive("reqwest=off".parse().unwrap())
    };

    if cfg!(not(debug_assertions)) {
      tracing_subscriber::fmt().with_env_filter(filter(Level::INFO)).with_writer(std::io::stderr).init();
    } else {
      tracing_subscriber::fmt()
        .with_env_filter(filter(Level::DEBUG))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
    }
  }

  fn as_text(container: &MemoryElement) -> String {
    let items: Vec<_> = container.children().map(|item| format!("- {}", item.text_content())).collect();
    if items.is_empty() {
      container.text_content()
    } else {
      items.join("\n")
    }
  }

  #[tokio::main]
  pub async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let host = match &args.init_data {
      Some(json) => StaticHost::from_json(json).context("invalid init data")?,
      None => StaticHost::default(),
    };

    let config = Config::default();
    let api = HttpRoomsApi::new(&args.base_url, &config)?;
    let container = MemoryElement::with_id(config.container_id.clone());
    let notifier = RecordingNotifier::default();

    let mut widget = RoomListWidget::new(config, host, api, container, notifier.clone());
    widget.init().await;

    match args.format {
      Format::Html => println!("{}", widget.container().to_html()),
      Format::Text => println!("{}", as_text(widget.container())),
    }

    if let Some(alert) = notifier.alerts().pop() {
      bail!("{alert}");
    }
    Ok(())
  }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
  preview::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
