use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use symbios_fractal::{
    ExpansionLimits, FractalError, LSystemConfig, Preset, SvgStyle, SvgSurface, render,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lsystem-render")]
#[command(about = "Render L-System fractals to SVG", long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Render a built-in preset
    Preset {
        /// Preset name (see `list`)
        #[arg(value_name = "NAME")]
        name: Preset,
        /// Number of rewriting generations (defaults to the preset's suggestion)
        #[arg(short, long)]
        generations: Option<u32>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a JSON configuration file
    Config {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Override the generation count from the file
        #[arg(short, long)]
        generations: Option<u32>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the built-in presets
    List,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output SVG file
    #[arg(short, long, value_name = "OUT", default_value = "lsystem.svg")]
    output: PathBuf,
    /// Refuse to expand beyond this many symbols
    #[arg(long, value_name = "N")]
    max_symbols: Option<usize>,
    /// Stroke color
    #[arg(long, default_value = "blue")]
    stroke: String,
    /// Canvas size in pixels
    #[arg(long, default_value_t = 900)]
    size: u32,
    /// Override the turtle's step distance
    #[arg(long, value_name = "DIST")]
    step: Option<f64>,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders `config` and writes the SVG to `args.output`.
///
/// An unbalanced `]` still writes whatever was drawn before it, then reports
/// the error.
fn render_to_file(config: &LSystemConfig, args: &OutputArgs) -> Result<(), FractalError> {
    let config = match args.step {
        Some(step) => config.clone().with_step(step),
        None => config.clone(),
    };
    let limits = match args.max_symbols {
        Some(max_symbols) => ExpansionLimits { max_symbols },
        None => ExpansionLimits::default(),
    };
    let mut surface = SvgSurface::new(SvgStyle {
        canvas_size: args.size,
        stroke: args.stroke.clone(),
        ..Default::default()
    });

    let result = render(&config, limits, &mut surface);
    if matches!(result, Ok(_) | Err(FractalError::State { .. })) {
        std::fs::write(&args.output, surface.finish())?;
    }
    let report = result?;

    println!(
        "{} symbols, {} segments, bounds ({:.3}, {:.3})..({:.3}, {:.3}) -> {}",
        report.instruction_len,
        report.segments,
        report.bounds.min.x,
        report.bounds.min.y,
        report.bounds.max.x,
        report.bounds.max.y,
        args.output.display()
    );
    Ok(())
}

fn run(args: Args) -> Result<(), FractalError> {
    match args.command {
        Command::Preset {
            name,
            generations,
            output,
        } => {
            let config = name.config(generations.unwrap_or_else(|| name.suggested_generations()));
            render_to_file(&config, &output)
        }
        Command::Config {
            file,
            generations,
            output,
        } => {
            let mut config = LSystemConfig::from_path(&file)?;
            if let Some(generations) = generations {
                config.generations = generations;
            }
            render_to_file(&config, &output)
        }
        Command::List => {
            for preset in Preset::ALL {
                let config = preset.config(preset.suggested_generations());
                println!(
                    "{:<14} axiom {:<14} angle {:>5}  generations {}",
                    preset.name(),
                    config.axiom,
                    config.angle,
                    config.generations
                );
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
