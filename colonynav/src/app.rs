//! Opening a menu from the command line.

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use accessnav::{
    DataProvider, NavConfig, NavigationSession, Sinks,
    input::{InputDispatcher, LogicalAction, parse_script},
    run::run_terminal,
};
use anyhow::Context;

use crate::{
    menus::{MenuKind, OperationsMenu, PawnRef, SettingsMenu},
    term::{Output, OuterFocus, TerminalCues, TerminalSpeech},
    world::World,
};

/// Everything needed to open one menu.
#[derive(Debug, Clone, Default)]
pub struct MenuOptions {
    /// World file.
    pub world: PathBuf,
    /// Name of the colonist to open the menu on.
    pub colonist: String,
    /// Navigation config file.
    pub config: Option<PathBuf>,
    /// Actions to replay instead of reading the keyboard.
    pub script: Option<String>,
    /// Write the world back when the menu closes.
    pub save: bool,
}

/// Open `kind` on the chosen colonist and drive it until it closes.
pub fn open_menu(kind: MenuKind, opts: &MenuOptions) -> anyhow::Result<()> {
    let config = match &opts.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::default(),
    };
    let script = opts
        .script
        .as_deref()
        .map(parse_script)
        .transpose()
        .context("invalid --script")?;

    let world = World::load(&opts.world)?;
    let Some(index) = world.find_colonist(&opts.colonist) else {
        bail!(
            "no colonist named `{}` in {}",
            opts.colonist,
            opts.world.display()
        );
    };
    let pawn = Rc::new(PawnRef::new(index, world.colonists[index].name.clone()));
    let world = Rc::new(RefCell::new(world));
    info!("opening {kind:?} for {}", pawn.name);

    let out = Output::stdout(script.is_none());
    match kind {
        MenuKind::Settings => {
            let menu = SettingsMenu::new(world.clone());
            drive(menu, &pawn, config, out, script)?;
        }
        MenuKind::Operations => {
            let menu = OperationsMenu::new(world.clone());
            drive(menu, &pawn, config, out, script)?;
        }
    }

    if opts.save {
        world.borrow().save(&opts.world)?;
        println!("World saved to {}", opts.world.display());
    }
    Ok(())
}

/// Run a session over `provider`, from a script or from the keyboard.
pub fn drive<P>(
    provider: P,
    pawn: &Rc<PawnRef>,
    config: NavConfig,
    out: Output,
    script: Option<Vec<LogicalAction>>,
) -> anyhow::Result<()>
where
    P: DataProvider<Subject = PawnRef>,
{
    let speech = TerminalSpeech::new(out.clone());
    let cues = TerminalCues::new(out.clone());
    let focus = OuterFocus::new(format!("Colonist {}", pawn.name), out);
    let sinks = Sinks::new(speech, cues).with_focus(focus);
    let mut session = NavigationSession::new(provider, sinks).with_config(config);
    let mut dispatcher = InputDispatcher::new(&mut session);
    dispatcher.open(Some(pawn));

    match script {
        Some(actions) => {
            let total = actions.len();
            let performed = dispatcher.replay(actions);
            if performed < total {
                warn!("menu closed after {performed} of {total} scripted actions");
            }
        }
        None => run_terminal(&mut dispatcher).context("reading keys")?,
    }
    Ok(())
}
