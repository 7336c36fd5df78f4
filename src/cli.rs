//! Command-line entry points
//!
//! `transform` writes the JSON document from the CSV, `serve` publishes it
//! over HTTP, and `order` runs a terminal ordering session against it.

use crate::cart::session::{handle_command, Reply, HELP};
use crate::cart::{MenuCartController, WhatsAppLink};
use crate::config::Settings;
use crate::error::{MenuError, Result};
use crate::menu::{store, transform_csv, MenuDocument};
use crate::router::{create_app_router, AppState};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub const USAGE: &str = "usage: pizza_menu <transform [csv] [json] | serve | order [json]>";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Transform {
        csv: Option<PathBuf>,
        json: Option<PathBuf>,
    },
    Serve,
    Order {
        json: Option<PathBuf>,
    },
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Option<Self> {
        let mut rest = args.iter().skip(1).map(PathBuf::from);
        let command = match args.first().map(String::as_str) {
            Some("transform") => Command::Transform {
                csv: rest.next(),
                json: rest.next(),
            },
            Some("serve") => Command::Serve,
            Some("order") => Command::Order { json: rest.next() },
            _ => return None,
        };
        if rest.next().is_some() {
            return None;
        }
        Some(command)
    }
}

pub async fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Transform { csv, json } => {
            let csv = csv.unwrap_or_else(|| settings.csv_path.clone());
            let json = json.unwrap_or_else(|| settings.json_path.clone());
            transform_file(&csv, &json).await.map(|_| ())
        }
        Command::Serve => serve(settings).await,
        Command::Order { json } => {
            let json = json.unwrap_or_else(|| settings.json_path.clone());
            order(&json, settings).await
        }
    }
}

/// Reads the CSV, writes the document and logs every skipped row.
pub async fn transform_file(csv: &Path, json: &Path) -> Result<MenuDocument> {
    let text = store::read_source(csv).await.inspect_err(|e| {
        if e.is_not_found() {
            tracing::error!(path = %csv.display(), "menu CSV not found in the working directory");
        }
    })?;

    let parsed = transform_csv(&text);
    for diagnostic in &parsed.diagnostics {
        tracing::warn!("{}", diagnostic);
    }

    store::write_document(json, &parsed.value).await?;
    tracing::info!(
        path = %json.display(),
        categories = parsed.value.menu_data.categories.len(),
        items = parsed.value.menu_data.item_count(),
        skipped = parsed.diagnostics.len(),
        "generated menu document"
    );
    Ok(parsed.value)
}

async fn serve(settings: &Settings) -> Result<()> {
    let document = transform_file(&settings.csv_path, &settings.json_path).await?;
    let state = Arc::new(AppState::new(document, settings.assets_dir()));
    let app = create_app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.http.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn order(json: &Path, settings: &Settings) -> Result<()> {
    let document = match store::load_document(json).await {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Грешка при вчитување на менито. Проверете дали '{}' постои.", json.display());
            return Err(e);
        }
    };

    let mut controller =
        MenuCartController::new(document).with_template(settings.order.template());
    controller.subscribe(|snapshot: &crate::cart::CartSnapshot| {
        tracing::debug!(count = snapshot.count, total = snapshot.total, "cart changed");
    });
    let mut sink = WhatsAppLink::new(settings.order.recipient.clone());

    println!("{}", crate::cart::session::render_menu(&controller));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(MenuError::Io)? {
        match handle_command(&mut controller, &mut sink, &line) {
            Ok(Reply::Output(text)) if text.is_empty() => {}
            Ok(Reply::Output(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}
