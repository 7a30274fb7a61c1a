use std::path::{Path, PathBuf};

use clap::Parser;
use log::Log as _;
use mazecore::dims::Dims;
use mazewalk::{
    app::{self, RunConfig},
    logging,
    settings::Settings,
    surface::{term_size, Canvas, Surface as _, Terminal},
    AppError,
};
use rand::{thread_rng, Rng as _};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazewalk")]
struct Args {
    #[clap(long, help = "Seed of the maze, random if not set")]
    seed: Option<u64>,
    #[clap(long, help = "Width of the drawing area")]
    width: Option<i32>,
    #[clap(long, help = "Height of the drawing area")]
    height: Option<i32>,
    #[clap(long, help = "Width of a single cell")]
    cell_width: Option<i32>,
    #[clap(long, help = "Height of a single cell")]
    cell_height: Option<i32>,
    #[clap(short, long, help = "Delay between solving steps in milliseconds")]
    delay: Option<u64>,
    #[clap(long, action, help = "Print the solved maze instead of animating it")]
    headless: bool,
    #[clap(short, long, action, help = "Show debug messages")]
    verbose: bool,
    #[clap(short, long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        let cell_size = settings.get_cell_size();
        if self.cell_width.is_some() || self.cell_height.is_some() {
            settings.cell_size = Some(Dims(
                self.cell_width.unwrap_or(cell_size.0),
                self.cell_height.unwrap_or(cell_size.1),
            ));
        }
        if let Some(delay) = self.delay {
            settings.delay_ms = Some(delay);
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }

    /// Drawing area, each side taken from the arguments, the settings, or `fallback`, in that
    /// order.
    fn screen(&self, settings: &Settings, fallback: Dims) -> Dims {
        let screen = settings.get_screen().unwrap_or(fallback);
        Dims(
            self.width.unwrap_or(screen.0),
            self.height.unwrap_or(screen.1),
        )
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&config_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = config_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", config_path);
        }
        return Ok(());
    }

    better_panic::install();

    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = logging::init(level) {
        eprintln!("Logger is already set: {}", err);
    }

    let result = run(&args, &config_path);

    // terminal is restored by now, so collected messages can go to stderr
    logging::get_logger().flush();

    result
}

fn run(args: &Args, config_path: &Path) -> Result<(), AppError> {
    let mut settings = Settings::load(config_path)?;
    args.apply(&mut settings);

    let seed = settings.get_seed().unwrap_or_else(|| thread_rng().gen());
    log::info!("Using seed {}", seed);

    let report = if args.headless {
        let screen = args.screen(&settings, term_size());
        let config = RunConfig::from_settings(&settings, screen, seed).headless();
        let mut canvas = Canvas::new(screen);
        let report = app::run(&mut canvas, &config)?;
        println!("{}", canvas.to_text());
        report
    } else {
        let mut terminal = Terminal::new(settings.get_color_scheme())?;
        let screen = app::clamp_screen(args.screen(&settings, terminal.size()), terminal.size());
        let config = RunConfig::from_settings(&settings, screen, seed);
        app::run(&mut terminal, &config)?
    };

    println!("{}", report);
    Ok(())
}
