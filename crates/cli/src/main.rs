use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use peripheral::{visible_points, PointStore, VisibilityResult};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod load;
mod plot;
mod prompt;
mod provenance;

use plot::PlotCfg;

const USAGE: &str = "Usage: peripheral data.csv";
const EXIT_USAGE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 404;
const PLOT_NOTE: &str = "The plot is not shown in a window: it is written as an SVG file \
(INPUT with an .svg extension unless --plot is given), redrawn with the query overlay \
after a valid query, next to a .provenance.json sidecar.";

#[derive(Parser)]
#[command(name = "peripheral", version)]
#[command(about = "List the points visible from an observer's cone of vision")]
#[command(after_help = PLOT_NOTE)]
struct Cmd {
    /// CSV with a label column, X, Y and (for observers) Direction
    input: PathBuf,

    /// Name of the label column
    #[arg(long, default_value = "Number")]
    label_column: String,

    /// Where to write the SVG plot (default: INPUT with an .svg extension)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Skip plotting
    #[arg(long, conflicts_with = "plot")]
    no_plot: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only warnings and errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cmd {
    fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    fn plot_path(&self) -> Option<PathBuf> {
        if self.no_plot {
            return None;
        }
        Some(
            self.plot
                .clone()
                .unwrap_or_else(|| self.input.with_extension("svg")),
        )
    }
}

#[derive(Serialize)]
struct PlotParams<'a> {
    input: &'a Path,
    points: usize,
    source: Option<&'a str>,
    half_angle_deg: Option<f64>,
    max_distance: Option<f64>,
    visible: Vec<&'a str>,
}

fn main() -> Result<()> {
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            process::exit(EXIT_USAGE);
        }
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level())
        .with_writer(io::stderr)
        .init();

    let file = match File::open(&cmd.input) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(error = %e, "open_failed");
            println!("Error: {} file not found", cmd.input.display());
            process::exit(EXIT_NOT_FOUND);
        }
    };
    let store = load::read_points(file, &cmd.label_column)
        .with_context(|| format!("loading {}", cmd.input.display()))?;
    if store.is_empty() {
        bail!("{} contains no points", cmd.input.display());
    }
    tracing::info!(input = %cmd.input.display(), points = store.len(), "loaded");

    let plot_path = cmd.plot_path();
    let plot_cfg = PlotCfg::default();
    if let Some(path) = &plot_path {
        draw(path, &cmd.input, &store, None, &plot_cfg);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let (mut input, mut out) = (stdin.lock(), stdout.lock());
    let Some(query) = prompt::read_query(&mut input, &mut out, &store)? else {
        return Ok(());
    };
    let result = visible_points(&query);
    if result.cone.is_seam_clipped() {
        tracing::debug!(
            lo = result.cone.bounds().0,
            hi = result.cone.bounds().1,
            "cone interval crosses the 0/2π seam; part of the sector is not tested"
        );
    }
    prompt::report(&mut out, &result, &cmd.label_column)?;

    if let Some(path) = &plot_path {
        draw(path, &cmd.input, &store, Some(&result), &plot_cfg);
    }
    Ok(())
}

/// Render the plot plus its provenance sidecar; failures are logged, not fatal.
fn draw(
    path: &Path,
    input: &Path,
    store: &PointStore,
    overlay: Option<&VisibilityResult>,
    cfg: &PlotCfg,
) {
    let params = PlotParams {
        input,
        points: store.len(),
        source: overlay.map(|r| r.source.label.as_str()),
        half_angle_deg: overlay.map(|r| r.cone.half_angle.to_degrees()),
        max_distance: overlay.map(|r| r.max_distance),
        visible: overlay.map(|r| r.labels().collect()).unwrap_or_default(),
    };
    let written = plot::render(path, store, overlay, cfg)
        .and_then(|()| provenance::write_sidecar(path, &params));
    match written {
        Ok(sidecar) => tracing::info!(
            plot = %path.display(),
            provenance = %sidecar.display(),
            "plot_written"
        ),
        Err(e) => tracing::warn!(plot = %path.display(), error = %format!("{e:#}"), "plot_failed"),
    }
}
