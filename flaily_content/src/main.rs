#![warn(clippy::pedantic)]
//! CLI entry point for flaily_content.
//! Usage: cargo run -p flaily_content -- generate --count 12 --seed 7

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};

use flaily_content::{
    CourseDocument, GeneratorConfig, InstructionTemplate, ObstacleSource, OverflowPolicy, PRESET_COURSE, Position,
    Section, SignTokens, TRACK_LENGTH, generate,
};
use flaily_data::validate_positions;

#[derive(Parser)]
#[command(author, version, about = "Generate FlailySnail sign strings and door placement commands.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Block names for occupied and free cells.
    #[arg(long, value_name = "OCCUPIED,FREE", global = true)]
    sign_tokens: Option<SignTokens>,
    /// Emit the stock door command for another level.
    #[arg(long, value_name = "NAME", global = true, conflicts_with = "template")]
    level: Option<String>,
    /// Full command template containing one `{pos}` placeholder.
    #[arg(long, value_name = "TEXT", global = true)]
    template: Option<InstructionTemplate>,
    /// Print just one of the two assets (text output only).
    #[arg(long, value_enum, global = true)]
    only: Option<OnlyArg>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Use the hand-authored preset course (default).
    Preset,
    /// Use an explicit list of positions, in emission order.
    List(ListArgs),
    /// Place obstacles at random, keeping a minimum gap.
    Generate(GenerateArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Obstacle positions, comma or space separated.
    #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
    positions: Vec<Position>,
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of obstacles to place.
    #[arg(long, default_value_t = 15)]
    count: u32,
    /// Minimum distance between neighbouring obstacles.
    #[arg(long, default_value_t = 7)]
    gap: Position,
    /// Lowest position for the first obstacle.
    #[arg(long, default_value_t = 15)]
    floor: Position,
    /// Exclusive upper bound for every obstacle.
    #[arg(long, default_value_t = TRACK_LENGTH)]
    bound: Position,
    /// Seed for a reproducible course.
    #[arg(long)]
    seed: Option<u64>,
    /// Place as many obstacles as fit instead of failing.
    #[arg(long)]
    truncate: bool,
}

impl From<&GenerateArgs> for GeneratorConfig {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            count: args.count,
            gap: args.gap,
            floor: args.floor,
            bound: args.bound,
            policy: if args.truncate {
                OverflowPolicy::Truncate
            } else {
                OverflowPolicy::Fail
            },
            seed: args.seed,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum OnlyArg {
    Sign,
    Instructions,
}

impl From<OnlyArg> for Section {
    fn from(arg: OnlyArg) -> Self {
        match arg {
            OnlyArg::Sign => Section::Sign,
            OnlyArg::Instructions => Section::Instructions,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let document = build_document(&cli)?;
    println!("{}", render(&cli, &document)?);
    Ok(())
}

fn render(cli: &Cli, document: &CourseDocument) -> Result<String> {
    match cli.format {
        OutputFormat::Text => Ok(document.to_text(cli.only.map(Section::from))),
        OutputFormat::Json => {
            if cli.only.is_some() {
                warn!("--only is ignored for JSON output");
            }
            serde_json::to_string_pretty(document).context("while serializing course document")
        },
    }
}

fn build_document(cli: &Cli) -> Result<CourseDocument> {
    let tokens = cli.sign_tokens.clone().unwrap_or_default();
    let template = match (&cli.level, &cli.template) {
        (Some(level), _) => {
            InstructionTemplate::for_level(level).with_context(|| format!("while building door command for '{level}'"))?
        },
        (None, Some(template)) => template.clone(),
        (None, None) => InstructionTemplate::default(),
    };

    let (source, obstacles, seed) = match &cli.command {
        None | Some(Commands::Preset) => (ObstacleSource::Preset, PRESET_COURSE.to_vec(), None),
        Some(Commands::List(args)) => (ObstacleSource::List, args.positions.clone(), None),
        Some(Commands::Generate(args)) => {
            let config = GeneratorConfig::from(args);
            let course = generate(&config).context("while generating obstacles")?;
            (ObstacleSource::Generated, course.obstacles.to_vec(), Some(course.seed))
        },
    };
    info!("{} obstacles from {source:?} source", obstacles.len());

    for err in validate_positions(obstacles.iter().copied()) {
        warn!("{err}; it will not appear on the sign");
    }

    let document = CourseDocument::build(source, obstacles, &tokens, &template);
    Ok(match seed {
        Some(seed) => document.with_seed(seed),
        None => document,
    })
}
