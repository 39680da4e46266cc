use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use clap::{Args, Parser};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use polyfold::{
    polycube::reader::{read_file, read_polycube, ReadReport},
    PlanePolycube, SurfaceGraph,
};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

mod svg;
use svg::Palette;

fn finish_bar(bar: &ProgressBar, duration: Duration, unfolded: usize, total: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Unfolded {unfolded} of {total} polycubes in {secs}.{micros:06} s"
    ));
}

fn unknown_bar() -> ProgressBar {
    let style = ProgressStyle::with_template("[{elapsed_precise}] [{spinner:10.cyan/blue}] {msg}")
        .unwrap()
        .tick_strings(&[
            ">---------",
            "=>--------",
            "<=>-------",
            "-<=>------",
            "--<=>-----",
            "---<=>----",
            "----<=>---",
            "-----<=>--",
            "------<=>-",
            "-------<=>",
            "--------<=",
            "---------<",
        ]);

    let bar = ProgressBar::new(100).with_style(style);

    bar.enable_steady_tick(Duration::from_millis(66));

    bar
}

pub fn make_bar(len: u64) -> indicatif::ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}");

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Classify polycubes and describe their circumference and holes
    Info {
        /// Files of whitespace separated `x y z` triples, `-` for stdin
        #[clap(required = true)]
        path: Vec<String>,
    },
    /// Unfold single-layer polycubes into SVG files
    Unfold(UnfoldArgs),
    /// Build the surface graph of a polycube
    Surface(SurfaceArgs),
}

#[derive(Clone, Args)]
pub struct UnfoldArgs {
    /// Files of whitespace separated `x y z` triples, `-` for stdin
    #[clap(required = true)]
    pub path: Vec<String>,

    /// Directory to write the SVG files to.
    ///
    /// Defaults to the directory of each input file.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Side length of one square, in pixels
    #[clap(long, short, default_value_t = 20)]
    pub scale: u32,

    /// Colors to draw the squares with
    #[clap(long, value_enum, default_value = "color")]
    pub palette: Palette,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,
}

#[derive(Clone, Args)]
pub struct SurfaceArgs {
    /// File of whitespace separated `x y z` triples, `-` for stdin
    pub path: String,
}

fn read_input(path: &str) -> io::Result<ReadReport> {
    if path == "-" {
        read_polycube(io::stdin().lock())
    } else {
        read_file(path)
    }
}

fn read_or_exit(path: &str) -> ReadReport {
    match read_input(path) {
        Ok(report) => report,
        Err(e) => {
            println!("Failed to read {path}. Error: {e}");
            std::process::exit(1);
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn info(path: &str) {
    let report = read_or_exit(path);
    let polycube = &report.polycube;

    println!();
    println!("Info for {path}");
    println!("Compression method: {:?}", report.compression);
    if let Some(token) = &report.bad_token {
        println!("Stopped reading at: {token:?}");
    }
    println!("Triples read: {}", report.triples);
    println!("Amount of cubes: {}", polycube.len());
    println!("Connected: {}", yes_no(polycube.connected()));
    println!("Orthotree: {}", yes_no(polycube.orthotree()));

    let plane = match PlanePolycube::project(polycube) {
        Ok(plane) => plane,
        Err(e) => {
            println!("Cannot unfold: {e}");
            return;
        }
    };

    println!("Layer: {:?} = {}", plane.axis(), plane.layer());
    println!("Circumference: {}", plane.circumference().len());
    println!(
        "Holes: {} ({} cells)",
        plane.holes().len(),
        plane.hole_cubes().len()
    );
    println!("Big holes: {}", yes_no(plane.big_holes()));
    println!("Strategy: {:?}", plane.strategy());
}

fn output_path(path: &str, dir: Option<&Path>) -> PathBuf {
    let input = Path::new(path);

    let stem = if path == "-" {
        "stdin".to_string()
    } else {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "polycube".to_string())
    };

    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None if path == "-" => PathBuf::new(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    dir.join(format!("{stem}.svg"))
}

fn unfold_one(path: &str, opts: &UnfoldArgs) -> Result<PathBuf, String> {
    let report = read_input(path).map_err(|e| format!("Failed to read. Error: {e}"))?;

    let plane = PlanePolycube::project(&report.polycube).map_err(|e| format!("Cannot unfold: {e}"))?;

    let unfolding = plane
        .unfold()
        .ok_or_else(|| format!("Cannot unfold: strategy {:?}", plane.strategy()))?;

    let output = output_path(path, opts.output.as_deref());
    let svg = svg::render(&unfolding, opts.scale, opts.palette);

    fs::write(&output, svg)
        .map_err(|e| format!("Failed to write {}. Error: {e}", output.display()))?;

    Ok(output)
}

fn unfold(opts: &UnfoldArgs) {
    let start = Instant::now();
    let total = opts.path.len();

    let multi_bar = MultiProgress::new();
    let bar = multi_bar.add(make_bar(total as u64));
    bar.set_message("polycubes unfolded");

    let run = |path: &String| {
        let result = unfold_one(path, opts);

        let line = match &result {
            Ok(output) => format!("{path}: wrote {}", output.display()),
            Err(e) => format!("{path}: {e}"),
        };
        let _ = multi_bar.println(line);

        bar.inc(1);
        result.is_ok()
    };

    let unfolded = if opts.no_parallelism {
        opts.path.iter().map(run).filter(|ok| *ok).count()
    } else {
        opts.path.par_iter().map(run).filter(|ok| *ok).count()
    };

    finish_bar(&bar, start.elapsed(), unfolded, total);

    if unfolded != total {
        std::process::exit(1);
    }
}

fn surface(opts: &SurfaceArgs) {
    let report = read_or_exit(&opts.path);

    let bar = unknown_bar();
    bar.set_message(format!(
        "building surface of {} cubes",
        report.polycube.len()
    ));

    let graph = SurfaceGraph::build(&report.polycube);

    bar.finish_and_clear();

    println!("Surface of {}", opts.path);
    println!("Faces: {}", graph.len());
    println!("Edges: {}", graph.edge_count());
    println!("Reciprocal: {}", yes_no(graph.reciprocal()));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();

    match opts {
        Opts::Info { path } => path.iter().map(String::as_str).for_each(info),
        Opts::Unfold(u) => unfold(&u),
        Opts::Surface(s) => surface(&s),
    }
}
