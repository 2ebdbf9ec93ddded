use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;

use folio::commands;
use folio::context::FolioContext;
use folio::readline;
use folio_core::context::DelayKind;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = folio::logging::init();
    let ctx = FolioContext::new();

    commands::show_section("hero")?;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start (or resume) the hero typing animation
    Play,
    /// Freeze the typing animation
    Stop,
    /// Discard the animation so config changes apply on next play
    Reset,
    /// Show the animation state and visible text
    Status,
    /// Print one page section
    Show { section: String },
    /// Print the whole page
    Page,
    /// List section names for `show`
    Sections,
    /// Feed a pointer move to the page
    Move {
        #[arg(short, long, allow_negative_numbers = true)]
        x: i32,
        #[arg(short, long, allow_negative_numbers = true)]
        y: i32,
    },
    /// Show the pointer and overlay positions
    Cursor,
    /// Print the active config as TOML
    Config,
    /// Change one typing delay and save it
    SetDelay {
        #[arg(short, long, value_enum)]
        kind: DelayArg,
        #[arg(short, long)]
        ms: u64,
    },
    /// Tear down the page and quit
    Exit,
}

#[derive(Clone, Copy, ValueEnum)]
enum DelayArg {
    Type,
    Pause,
    Delete,
}

impl From<DelayArg> for DelayKind {
    fn from(arg: DelayArg) -> Self {
        match arg {
            DelayArg::Type => DelayKind::Type,
            DelayArg::Pause => DelayKind::Pause,
            DelayArg::Delete => DelayKind::Delete,
        }
    }
}

async fn respond(line: &str, ctx: &FolioContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "folio".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Play) => commands::play(ctx).await?,
        Some(Commands::Stop) => commands::stop(ctx).await,
        Some(Commands::Reset) => commands::reset(ctx).await,
        Some(Commands::Status) => commands::status(ctx).await,
        Some(Commands::Show { section }) => commands::show_section(section)?,
        Some(Commands::Page) => commands::show_page(),
        Some(Commands::Sections) => commands::list_sections(),
        Some(Commands::Move { x, y }) => commands::move_pointer(ctx, *x, *y),
        Some(Commands::Cursor) => commands::show_cursor(ctx).await,
        Some(Commands::Config) => commands::show_config(ctx).await?,
        Some(Commands::SetDelay { kind, ms }) => {
            commands::set_delay(ctx, (*kind).into(), *ms).await?
        }
        Some(Commands::Exit) => {
            commands::exit(ctx).await?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
