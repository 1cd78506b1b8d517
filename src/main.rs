use anyhow::{Context, Result, bail};
use clap::Parser;
use geo::Coord;
use spmc_labeler::api::{FetchRequest, SuperpixelClient};
use spmc_labeler::callbacks::{navigation, selection};
use spmc_labeler::classes::load_classes;
use spmc_labeler::config::{load_config, save_config};
use spmc_labeler::input::{KeyCode, KeyEvent, handle_key};
use spmc_labeler::renderer::{MapRenderer, Notice, SelectionChanged};
use spmc_labeler::state::{LayerChange, Session, ViewState, Viewport};
use spmc_labeler::style::FeatureStyle;
use std::io::BufRead;
use tracing::{info, warn};

/// Label superpixels of one scene from the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long)]
    server: Option<String>,
    #[arg(long)]
    scene: Option<i64>,
    #[arg(long)]
    algo: Option<i64>,
    /// Land-class YAML file
    #[arg(long)]
    classes: Option<String>,
    #[arg(long, env = "SPMC_CSRF_TOKEN")]
    csrf_token: Option<String>,
    /// Write the effective settings (config file plus flags) back to the config file
    #[arg(long)]
    save_config: bool,
}

/// Reports what a map view would draw.
struct LogRenderer;

impl MapRenderer for LogRenderer {
    fn selection_changed(&mut self, change: &SelectionChanged) {
        info!(
            "selected superpixel {} (centre {:.2}, {:.2})",
            change.id, change.center.x, change.center.y
        );
    }

    fn show_notice(&mut self, notice: Notice) {
        match notice {
            Notice::NoUnassigned => {
                warn!("All superpixels are labeled. Press Esc or Enter to continue.")
            }
        }
    }

    fn feature_restyled(&mut self, id: i64, style: FeatureStyle) {
        info!(
            "superpixel {id} fill rgba({}, {}, {}, {})",
            style.fill.r, style.fill.g, style.fill.b, style.fill.a
        );
    }

    fn layer_visibility_changed(&mut self, change: LayerChange) {
        info!("layers: {change:?}");
    }

    fn views_changed(&mut self, sentinel: ViewState, satellite: ViewState) {
        info!(
            "views: sentinel z{:.1}, satellite z{:.1} at ({:.2}, {:.2})",
            sentinel.zoom, satellite.zoom, sentinel.center.x, sentinel.center.y
        );
    }
}

fn parse_key(token: &str) -> Option<KeyEvent> {
    let (ctrl, key) = match token.strip_prefix("ctrl+") {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let code = match key {
        "space" => KeyCode::Space,
        "esc" => KeyCode::Escape,
        "enter" => KeyCode::Enter,
        k => match k.strip_prefix("num") {
            Some(n) => KeyCode::Numpad(n.parse().ok()?),
            None => KeyCode::Digit(k.parse().ok()?),
        },
    };
    Some(KeyEvent { code, ctrl })
}

fn parse_coord(x: &str, y: &str) -> Option<Coord<f64>> {
    Some(Coord {
        x: x.parse().ok()?,
        y: y.parse().ok()?,
    })
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("info".parse().context("invalid filter")?)
                .from_env_lossy(),
        )
        .try_init();

    let cli = Cli::parse();
    let mut config = load_config();
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    if let Some(scene) = cli.scene {
        config.scene.scene_id = scene;
    }
    if let Some(algo) = cli.algo {
        config.scene.algo_id = algo;
    }
    if cli.csrf_token.is_some() {
        config.server.csrf_token = cli.csrf_token;
    }
    if cli.classes.is_some() {
        config.classes.config_file = cli.classes;
    }
    if cli.save_config {
        match save_config(&config) {
            Ok(path) => info!("Saved settings to {}", path.display()),
            Err(e) => warn!("{e}"),
        }
    }
    let class_file = config.classes.config_file.clone();
    let classes = load_classes(class_file.as_deref()).context("invalid land-class table")?;

    let client = SuperpixelClient::new(&config.server)?;
    let records = client
        .fetch(&FetchRequest::from(&config.scene))
        .context("failed to fetch superpixels")?;

    let mut session = Session::from_config(&config, classes);
    let report = session.load(&records);
    if report.loaded == 0 {
        bail!("scene {} has no usable superpixels", config.scene.scene_id);
    }
    if report.skipped > 0 {
        warn!("{} superpixel(s) skipped due to bad geometry", report.skipped);
    }
    if report.unknown_class > 0 {
        warn!(
            "{} superpixel(s) carry a land class missing from the class table",
            report.unknown_class
        );
    }

    let mut renderer = LogRenderer;
    info!("Keys: 1-9 | num1-9 | ctrl+space | ctrl+0..9 | esc | click X Y | move sentinel|satellite X Y Z | quit");
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            ["quit"] => break,
            ["click", x, y] => match parse_coord(x, y) {
                Some(coord) => {
                    selection::select_at(&mut session, coord, &mut renderer);
                }
                None => warn!("bad coordinate: {line}"),
            },
            ["move", view, x, y, zoom] => {
                let viewport = match *view {
                    "sentinel" => Viewport::Sentinel,
                    "satellite" => Viewport::Satellite,
                    _ => {
                        warn!("unknown view {view}");
                        continue;
                    }
                };
                match (parse_coord(x, y), zoom.parse::<f64>()) {
                    (Some(center), Ok(zoom)) => navigation::view_moved(
                        &mut session,
                        viewport,
                        ViewState { center, zoom },
                        &mut renderer,
                    ),
                    _ => warn!("bad view state: {line}"),
                }
            }
            [token] => match parse_key(token) {
                Some(key) => {
                    handle_key(&mut session, key, &mut renderer, &client)?;
                }
                None => warn!("unknown key {token}"),
            },
            _ => warn!("unrecognized input: {line}"),
        }
    }
    Ok(())
}
