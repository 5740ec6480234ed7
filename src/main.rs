//! Krinkle CLI - generate a tiling and render it to PNG

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use krinkle::{init_logging, Config, InputEvent, KrinkleApp, PixmapSurface, TilingMode};
use tracing::{info, warn};

/// Parses a screen position given as `x,y`.
fn parse_position(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x: {}", e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y: {}", e))?;
    Ok((x, y))
}

#[derive(Parser, Debug)]
#[command(name = "krinkle", version)]
#[command(about = "Generate and render Modulo Krinkle tilings", long_about = None)]
struct Args {
    /// Configuration file (.toml or .json); defaults to the platform config location
    #[arg(long)]
    config: Option<PathBuf>,

    /// What to generate: prototile, wedge or tiling
    #[arg(long)]
    mode: Option<TilingMode>,

    /// Modulus
    #[arg(short = 'k', allow_hyphen_values = true)]
    k: Option<i64>,

    /// Step
    #[arg(short = 'm', allow_hyphen_values = true)]
    m: Option<i64>,

    /// Symmetry multiplier (n = k*t, or 2*(t*k - m) with --offset)
    #[arg(short = 't', allow_hyphen_values = true)]
    t: Option<i64>,

    /// Wedge depth
    #[arg(long)]
    rows: Option<usize>,

    /// Place half the wedges and complete the tiling by point reflection
    #[arg(long)]
    offset: bool,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Write the rendered canvas to this PNG file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the generated polygons as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Simulate the pointer at screen position x,y before rendering
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    hover: Option<(f64, f64)>,

    /// Hide edge indices and start/end markers
    #[arg(long)]
    no_edges: bool,

    /// Show per-wedge labels
    #[arg(long)]
    wedge_labels: bool,

    /// Show per-tile labels
    #[arg(long)]
    tile_labels: bool,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    if let Some(path) = &args.config {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match Config::default_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        Err(e) => {
            warn!("{}; using defaults", e);
            Ok(Config::default())
        }
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    let p = &mut config.parameters;
    if let Some(mode) = args.mode {
        p.mode = mode;
    }
    if let Some(k) = args.k {
        p.k = k;
    }
    if let Some(m) = args.m {
        p.m = m;
    }
    if let Some(t) = args.t {
        p.t = t;
    }
    if let Some(rows) = args.rows {
        p.rows = rows;
    }
    p.offset |= args.offset;

    if let Some(width) = args.width {
        config.view.canvas_width = width;
    }
    if let Some(height) = args.height {
        config.view.canvas_height = height;
    }

    let o = &mut config.overlays;
    o.show_edges &= !args.no_edges;
    o.show_wedge_labels |= args.wedge_labels;
    o.show_tile_labels |= args.tile_labels;
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    info!("Krinkle {} (built {})", krinkle::VERSION, krinkle::BUILD_DATE);

    let mut config = load_config(&args)?;
    apply_overrides(&mut config, &args);
    config.validate().context("Invalid configuration")?;

    let mut app = KrinkleApp::new(&config);
    app.request_update();
    app.run_until_idle();
    if app.status().is_error() {
        bail!("{}", app.status());
    }

    if let Some((x, y)) = args.hover {
        app.handle_input(InputEvent::PointerMove { x, y });
        if let Some(hover) = app.renderer().hover() {
            info!(
                "Hovering wedge {:?} at depth {:?}",
                hover.wedge_index, hover.row
            );
        }
    }

    if let Some(path) = &args.dump {
        let result = app
            .result()
            .context("No generation result to dump")?;
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} polygons to {}", result.len(), path.display());
    }

    if let Some(path) = &args.output {
        let mut surface = PixmapSurface::new(config.view.canvas_width, config.view.canvas_height)?
            .with_font_family(app.label_font_family());
        app.render(&mut surface);
        surface
            .save_png(path)
            .with_context(|| format!("Failed to render {}", path.display()))?;
    }

    println!("{}", app.status());
    Ok(())
}
