use std::path::PathBuf;

use accessnav::NavConfig;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colonynav::{
    app::{MenuOptions, open_menu},
    menus::MenuKind,
    world::World,
};

/// Browse a colony's menus by keyboard, with spoken feedback.
#[derive(Parser)]
#[command(name = "colonynav", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a menu on a colonist
    Open(OpenArgs),
    /// Print the JSON schema of a file format
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Args)]
struct OpenArgs {
    /// Menu to open
    #[arg(value_enum)]
    menu: MenuKind,
    /// World file
    world: PathBuf,
    /// Colonist to open the menu on
    #[arg(short, long)]
    colonist: String,
    /// Navigation config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Replay actions instead of reading keys, e.g. "down,enter,esc"
    #[arg(long)]
    script: Option<String>,
    /// Write changes back to the world file
    #[arg(long)]
    save: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SchemaKind {
    /// The world file
    World,
    /// The navigation config file
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Open(args) => {
            let opts = MenuOptions {
                world: args.world,
                colonist: args.colonist,
                config: args.config,
                script: args.script,
                save: args.save,
            };
            open_menu(args.menu, &opts)?;
        }
        Command::Schema { kind } => {
            let schema = match kind {
                SchemaKind::World => World::json_schema(),
                SchemaKind::Config => NavConfig::json_schema(),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}
