//! Colonist operations menu.
//!
//! The queue lists queued operations followed by an "Add operation" entry.
//! Choosing a queued operation opens its actions; choosing "Add operation"
//! opens the recipe catalog, and a recipe then needs a body part.

use accessnav::{
    Activation, Applied, ApplyError, Context, DataProvider, Description, Item, LevelInfo, Selected,
};

use super::{PawnRef, SharedWorld};
use crate::world::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationsLevel {
    Queue,
    Actions,
    Catalog,
    BodyPart,
}

/// What can be done to a queued operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationAction {
    MoveUp,
    MoveDown,
    Suspend,
    Resume,
    Remove,
    GoBack,
}

impl OperationAction {
    pub fn label(self) -> &'static str {
        match self {
            OperationAction::MoveUp => "Move up",
            OperationAction::MoveDown => "Move down",
            OperationAction::Suspend => "Suspend",
            OperationAction::Resume => "Resume",
            OperationAction::Remove => "Remove",
            OperationAction::GoBack => "Go back",
        }
    }
}

/// A body part target, or the whole body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    WholeBody,
    Part(String),
}

impl Target {
    fn from_part(part: Option<String>) -> Self {
        part.map_or(Target::WholeBody, Target::Part)
    }

    fn into_part(self) -> Option<String> {
        match self {
            Target::WholeBody => None,
            Target::Part(part) => Some(part),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationsItem {
    Queued {
        index: usize,
        label: String,
        suspended: bool,
    },
    Action(OperationAction),
    Recipe(String),
    Target(Target),
}

impl Item for OperationsItem {
    fn label(&self) -> String {
        match self {
            OperationsItem::Queued { label, .. } => label.clone(),
            OperationsItem::Action(action) => action.label().to_string(),
            OperationsItem::Recipe(name) => name.clone(),
            OperationsItem::Target(Target::WholeBody) => "Whole body".to_string(),
            OperationsItem::Target(Target::Part(part)) => part.clone(),
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            OperationsItem::Queued { suspended, .. } if *suspended => Some("Suspended".to_string()),
            _ => None,
        }
    }
}

pub struct OperationsMenu {
    world: SharedWorld,
}

impl OperationsMenu {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    fn queued(ctx: &Context<'_, Self>) -> Option<(usize, bool)> {
        match ctx.item(OperationsLevel::Queue)? {
            OperationsItem::Queued {
                index, suspended, ..
            } => Some((*index, *suspended)),
            _ => None,
        }
    }

    fn recipe<'a>(ctx: &Context<'a, Self>) -> Option<&'a str> {
        match ctx.item(OperationsLevel::Catalog)? {
            OperationsItem::Recipe(name) => Some(name.as_str()),
            _ => None,
        }
    }

    fn act(
        &self,
        action: OperationAction,
        ctx: &Context<'_, Self>,
    ) -> Result<Applied<OperationsLevel>, ApplyError> {
        let back = Applied::back_to(OperationsLevel::Queue);
        if action == OperationAction::GoBack {
            return Ok(back);
        }

        let (index, _) = Self::queued(ctx)
            .ok_or_else(|| ApplyError::new("No operation selected"))?;
        let mut world = self.world.borrow_mut();
        let colonist = ctx
            .subject
            .resolve_mut(&mut world)
            .ok_or_else(|| ApplyError::new("Colonist is no longer available"))?;
        let queue = &mut colonist.operations;
        let label = queue
            .get(index)
            .map(Operation::label)
            .ok_or_else(|| ApplyError::new("Operation is no longer queued"))?;

        // the queue cursor follows the operation it was on
        let (notice, cursor) = match action {
            OperationAction::MoveUp => {
                if index == 0 {
                    return Err(ApplyError::new("Already first in the queue"));
                }
                queue.swap(index, index - 1);
                (format!("Moved {label} to position {index}"), index - 1)
            }
            OperationAction::MoveDown => {
                if index + 1 >= queue.len() {
                    return Err(ApplyError::new("Already last in the queue"));
                }
                let to = index + 1;
                queue.swap(index, to);
                (format!("Moved {label} to position {}", to + 1), to)
            }
            OperationAction::Suspend | OperationAction::Resume => {
                let op = &mut queue[index];
                op.suspended = action == OperationAction::Suspend;
                let state = if op.suspended { "Suspended" } else { "Resumed" };
                (format!("{state} {label}"), index)
            }
            OperationAction::Remove => {
                queue.remove(index);
                (format!("Removed {label}"), index)
            }
            OperationAction::GoBack => return Ok(back),
        };
        debug!("{}: {notice}", colonist.name);
        Ok(back.with_notice(notice).selecting(cursor))
    }

    fn queue_recipe(
        &self,
        target: &Target,
        ctx: &Context<'_, Self>,
    ) -> Result<Applied<OperationsLevel>, ApplyError> {
        let recipe = Self::recipe(ctx)
            .ok_or_else(|| ApplyError::new("No recipe selected"))?;
        let mut world = self.world.borrow_mut();
        let colonist = ctx
            .subject
            .resolve_mut(&mut world)
            .ok_or_else(|| ApplyError::new("Colonist is no longer available"))?;
        let op = Operation {
            recipe: recipe.to_string(),
            part: target.clone().into_part(),
            suspended: false,
        };
        let notice = format!("Added {} to the queue", op.label());
        colonist.operations.push(op);
        Ok(Applied::back_to(OperationsLevel::Queue).with_notice(notice))
    }
}

impl DataProvider for OperationsMenu {
    type Level = OperationsLevel;
    type Subject = PawnRef;
    type Item = OperationsItem;

    fn entry_level(&self) -> OperationsLevel {
        OperationsLevel::Queue
    }

    fn parent(&self, level: OperationsLevel) -> Option<OperationsLevel> {
        match level {
            OperationsLevel::Queue => None,
            OperationsLevel::Actions | OperationsLevel::Catalog => Some(OperationsLevel::Queue),
            OperationsLevel::BodyPart => Some(OperationsLevel::Catalog),
        }
    }

    fn level_info(&self, level: OperationsLevel) -> LevelInfo {
        match level {
            OperationsLevel::Queue => {
                let info = LevelInfo::new("Operation", "Press Enter to manage or add");
                info.with_trailing("Add operation")
            }
            OperationsLevel::Actions => LevelInfo::new("Action", "Press Enter to perform"),
            OperationsLevel::Catalog => {
                LevelInfo::new("Recipe", "Press Enter to add to the queue")
            }
            OperationsLevel::BodyPart => {
                LevelInfo::new("Part", "Press Enter to operate on this part")
            }
        }
    }

    fn fetch(&self, level: OperationsLevel, ctx: &Context<'_, Self>) -> Vec<OperationsItem> {
        let world = self.world.borrow();
        let Some(colonist) = ctx.subject.resolve(&world) else {
            return Vec::new();
        };

        match level {
            OperationsLevel::Queue => colonist
                .operations
                .iter()
                .enumerate()
                .map(|(index, op)| OperationsItem::Queued {
                    index,
                    label: op.label(),
                    suspended: op.suspended,
                })
                .collect(),
            OperationsLevel::Actions => {
                let Some((_, suspended)) = Self::queued(ctx) else {
                    return Vec::new();
                };
                let toggle = if suspended {
                    OperationAction::Resume
                } else {
                    OperationAction::Suspend
                };
                [
                    OperationAction::MoveUp,
                    OperationAction::MoveDown,
                    toggle,
                    OperationAction::Remove,
                    OperationAction::GoBack,
                ]
                .into_iter()
                .map(OperationsItem::Action)
                .collect()
            }
            OperationsLevel::Catalog => world
                .recipes
                .iter()
                .map(|r| OperationsItem::Recipe(r.name.clone()))
                .collect(),
            OperationsLevel::BodyPart => Self::recipe(ctx)
                .and_then(|name| world.recipe(name))
                .map(|recipe| {
                    colonist
                        .eligible_parts(recipe)
                        .into_iter()
                        .map(|part| OperationsItem::Target(Target::from_part(part)))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    fn describe(
        &self,
        _level: OperationsLevel,
        selected: Selected<'_, OperationsItem>,
        _ctx: &Context<'_, Self>,
    ) -> Description {
        let item = match selected {
            Selected::Item(item) => item,
            Selected::Synthetic => return Description::new("Add operation"),
        };
        let OperationsItem::Recipe(name) = item else {
            return Description::of(item);
        };

        let world = self.world.borrow();
        let Some(recipe) = world.recipe(name) else {
            return Description::of(item);
        };
        Description::of(item)
            .with_list("Requires: ", &recipe.ingredients)
            .with_optional_detail(recipe.skill.map(|skill| format!("Medicine skill {skill}")))
    }

    fn activation(
        &self,
        level: OperationsLevel,
        selected: Selected<'_, OperationsItem>,
        _ctx: &Context<'_, Self>,
    ) -> Activation<OperationsLevel> {
        match (level, selected) {
            (OperationsLevel::Queue, Selected::Synthetic) => {
                Activation::Enter(OperationsLevel::Catalog)
            }
            (OperationsLevel::Queue, Selected::Item(_)) => {
                Activation::Enter(OperationsLevel::Actions)
            }
            (OperationsLevel::Actions, _) | (OperationsLevel::BodyPart, _) => Activation::Apply,
            (OperationsLevel::Catalog, _) => Activation::PickTarget(OperationsLevel::BodyPart),
        }
    }

    fn apply(
        &mut self,
        level: OperationsLevel,
        selected: Selected<'_, OperationsItem>,
        ctx: &Context<'_, Self>,
    ) -> Result<Applied<OperationsLevel>, ApplyError> {
        let Some(item) = selected.item() else {
            return Ok(Applied::stay());
        };
        match (level, item) {
            (OperationsLevel::Actions, OperationsItem::Action(action)) => self.act(*action, ctx),
            (OperationsLevel::BodyPart, OperationsItem::Target(target)) => {
                self.queue_recipe(target, ctx)
            }
            _ => Ok(Applied::stay()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use accessnav::{NavConfig, NavigationSession, Sinks};

    use super::*;
    use crate::world::tests::sample;

    fn open() -> (NavigationSession<OperationsMenu>, SharedWorld, Rc<PawnRef>) {
        let world = Rc::new(RefCell::new(sample()));
        let mut config = NavConfig::default();
        config.announce.separator = " and ".to_string();
        let menu = OperationsMenu::new(world.clone());
        let mut session = NavigationSession::new(menu, Sinks::silent()).with_config(config);
        let pawn = Rc::new(PawnRef::new(0, "Engie"));
        session.open(Some(&pawn));
        (session, world, pawn)
    }

    fn text(session: &NavigationSession<OperationsMenu>) -> String {
        session
            .current_announcement()
            .map(|a| a.text())
            .unwrap_or_default()
    }

    fn queue(world: &SharedWorld) -> Vec<String> {
        let world = world.borrow();
        let ops = &world.colonists[0].operations;
        ops.iter().map(Operation::label).collect()
    }

    /// Open the catalog and put the cursor on `recipe`.
    fn catalog_at(session: &mut NavigationSession<OperationsMenu>, recipe: usize) {
        session.select_previous();
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Catalog));
        for _ in 0..recipe {
            session.select_next();
        }
    }

    #[test]
    fn test_queue_has_add_entry() {
        let (mut session, _world, _pawn) = open();
        assert_eq!(session.display_count(), 3);
        assert_eq!(
            text(&session),
            "Remove leg (Left leg)\nOperation 1 of 3\nPress Enter to manage or add"
        );
        session.select_previous();
        assert!(text(&session).starts_with("Add operation\nOperation 3"));
    }

    #[test]
    fn test_catalog_describes_requirements() {
        let (mut session, _world, _pawn) = open();
        catalog_at(&mut session, 0);
        let text = text(&session);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Install peg leg",
                "Requires: Peg leg and Herbal medicine",
                "Medicine skill 3",
                "Recipe 1 of 5",
                "Press Enter to add to the queue",
            ]
        );
    }

    #[test]
    fn test_recipe_with_several_parts_opens_picker() {
        let (mut session, world, _pawn) = open();
        catalog_at(&mut session, 0);
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::BodyPart));
        assert_eq!(session.display_count(), 2);

        session.select_next();
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Queue));
        assert_eq!(queue(&world)[2], "Install peg leg (Right leg)");
    }

    #[test]
    fn test_recipe_with_one_part_is_added_directly() {
        let (mut session, world, _pawn) = open();
        catalog_at(&mut session, 1);
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Queue));
        assert_eq!(queue(&world).len(), 3);
        assert_eq!(queue(&world)[2], "Install bionic arm (Left arm)");
    }

    #[test]
    fn test_recipe_without_parts_is_refused() {
        let (mut session, world, _pawn) = open();
        catalog_at(&mut session, 2);
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Catalog));

        session.select_next();
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Catalog));
        assert_eq!(queue(&world).len(), 2);
    }

    #[test]
    fn test_whole_body_recipe() {
        let (mut session, world, _pawn) = open();
        catalog_at(&mut session, 4);
        session.activate();
        assert_eq!(queue(&world)[2], "Euthanize");
    }

    #[test]
    fn test_move_and_remove() {
        let (mut session, world, _pawn) = open();
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Actions));

        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Actions));
        assert_eq!(queue(&world)[0], "Remove leg (Left leg)");

        session.select_next();
        session.activate();
        assert_eq!(session.level(), Some(OperationsLevel::Queue));
        assert_eq!(queue(&world), ["Anesthetize", "Remove leg (Left leg)"]);

        session.activate();
        for _ in 0..3 {
            session.select_next();
        }
        session.activate();
        assert_eq!(queue(&world), ["Anesthetize"]);
        assert_eq!(session.cursor(), Some(1));
        assert!(text(&session).starts_with("Add operation"));
    }

    #[test]
    fn test_moved_operation_keeps_the_cursor() {
        let (mut session, world, _pawn) = open();
        session.activate();
        session.select_next();
        session.activate();

        assert_eq!(queue(&world), ["Anesthetize", "Remove leg (Left leg)"]);
        assert_eq!(session.cursor(), Some(1));
        assert_eq!(
            text(&session),
            "Remove leg (Left leg)\nOperation 2 of 3\nPress Enter to manage or add"
        );

        session.activate();
        session.activate();
        assert_eq!(queue(&world), ["Remove leg (Left leg)", "Anesthetize"]);
        assert_eq!(session.cursor(), Some(0));
        assert!(text(&session).contains("\nOperation 1 of 3\n"));
    }

    #[test]
    fn test_suspend_and_resume() {
        let (mut session, world, _pawn) = open();
        session.activate();
        session.select_next();
        session.select_next();
        session.activate();
        assert!(world.borrow().colonists[0].operations[0].suspended);
        assert!(text(&session).contains("(Left leg)\nSuspended\n"));

        session.activate();
        session.select_next();
        session.select_next();
        assert!(text(&session).starts_with("Resume"));
        session.activate();
        assert!(!world.borrow().colonists[0].operations[0].suspended);
    }
}
