//! Colonist settings menu.
//!
//! Two levels: the list of settings, and the choices for one setting.
//! Self-tend is a toggle and flips in place.

use accessnav::{
    Activation, Applied, ApplyError, Context, DataProvider, Description, Item, LevelInfo, Selected,
};

use super::{PawnRef, SharedWorld};
use crate::world::{Colonist, HostilityResponse, MedicalCare, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsLevel {
    List,
    Change,
}

/// A setting a colonist has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    FoodRestriction,
    Outfit,
    MedicalCare,
    HostilityResponse,
    SelfTend,
}

impl SettingKind {
    pub const ALL: [SettingKind; 5] = [
        SettingKind::FoodRestriction,
        SettingKind::Outfit,
        SettingKind::MedicalCare,
        SettingKind::HostilityResponse,
        SettingKind::SelfTend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingKind::FoodRestriction => "Food restriction",
            SettingKind::Outfit => "Outfit",
            SettingKind::MedicalCare => "Medical care",
            SettingKind::HostilityResponse => "Hostility response",
            SettingKind::SelfTend => "Self-tend",
        }
    }

    /// The colonist's value for this setting, as spoken.
    pub fn current_value(self, colonist: &Colonist) -> String {
        match self {
            SettingKind::FoodRestriction => colonist.food_policy.clone(),
            SettingKind::Outfit => colonist.outfit.clone(),
            SettingKind::MedicalCare => colonist.medical_care.to_string(),
            SettingKind::HostilityResponse => colonist.hostility.to_string(),
            SettingKind::SelfTend => {
                let state = if colonist.self_tend { "On" } else { "Off" };
                state.to_string()
            }
        }
    }

    /// Toggles flip in place instead of offering choices.
    fn is_toggle(self) -> bool {
        self == SettingKind::SelfTend
    }

    fn choices(self, world: &World) -> Vec<Choice> {
        match self {
            SettingKind::FoodRestriction => named(&world.food_policies),
            SettingKind::Outfit => named(&world.outfits),
            SettingKind::MedicalCare => MedicalCare::ALL.map(Choice::Care).into(),
            SettingKind::HostilityResponse => HostilityResponse::ALL.map(Choice::Hostility).into(),
            SettingKind::SelfTend => Vec::new(),
        }
    }
}

fn named(names: &[String]) -> Vec<Choice> {
    names.iter().cloned().map(Choice::Named).collect()
}

/// A value a setting can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Named(String),
    Care(MedicalCare),
    Hostility(HostilityResponse),
}

impl Choice {
    fn label(&self) -> String {
        match self {
            Choice::Named(name) => name.clone(),
            Choice::Care(care) => care.to_string(),
            Choice::Hostility(response) => response.to_string(),
        }
    }

    fn assign(&self, kind: SettingKind, colonist: &mut Colonist) {
        match (kind, self) {
            (SettingKind::FoodRestriction, Choice::Named(name)) => {
                colonist.food_policy = name.clone();
            }
            (SettingKind::Outfit, Choice::Named(name)) => colonist.outfit = name.clone(),
            (SettingKind::MedicalCare, Choice::Care(care)) => colonist.medical_care = *care,
            (SettingKind::HostilityResponse, Choice::Hostility(r)) => colonist.hostility = *r,
            _ => warn!("{:?} does not apply to {kind:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsItem {
    Setting(SettingKind),
    Choice(Choice),
}

impl Item for SettingsItem {
    fn label(&self) -> String {
        match self {
            SettingsItem::Setting(kind) => kind.label().to_string(),
            SettingsItem::Choice(choice) => choice.label(),
        }
    }
}

pub struct SettingsMenu {
    world: SharedWorld,
}

impl SettingsMenu {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    fn setting(ctx: &Context<'_, Self>) -> Option<SettingKind> {
        match ctx.item(SettingsLevel::List)? {
            SettingsItem::Setting(kind) => Some(*kind),
            SettingsItem::Choice(_) => None,
        }
    }
}

fn gone() -> ApplyError {
    ApplyError::new("Colonist is no longer available")
}

impl DataProvider for SettingsMenu {
    type Level = SettingsLevel;
    type Subject = PawnRef;
    type Item = SettingsItem;

    fn entry_level(&self) -> SettingsLevel {
        SettingsLevel::List
    }

    fn parent(&self, level: SettingsLevel) -> Option<SettingsLevel> {
        match level {
            SettingsLevel::List => None,
            SettingsLevel::Change => Some(SettingsLevel::List),
        }
    }

    fn level_info(&self, level: SettingsLevel) -> LevelInfo {
        match level {
            SettingsLevel::List => LevelInfo::new("Setting", "Press Enter to change"),
            SettingsLevel::Change => {
                LevelInfo::new("Option", "Press Enter to select, Escape to go back")
            }
        }
    }

    fn fetch(&self, level: SettingsLevel, ctx: &Context<'_, Self>) -> Vec<SettingsItem> {
        match level {
            SettingsLevel::List => SettingKind::ALL.map(SettingsItem::Setting).into(),
            SettingsLevel::Change => match Self::setting(ctx) {
                Some(kind) => kind
                    .choices(&self.world.borrow())
                    .into_iter()
                    .map(SettingsItem::Choice)
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    fn describe(
        &self,
        level: SettingsLevel,
        selected: Selected<'_, SettingsItem>,
        ctx: &Context<'_, Self>,
    ) -> Description {
        let Some(item) = selected.item() else {
            return Description::default();
        };
        let world = self.world.borrow();
        let Some(colonist) = ctx.subject.resolve(&world) else {
            return Description::of(item);
        };

        match (level, item) {
            (SettingsLevel::List, SettingsItem::Setting(kind)) => {
                let current = kind.current_value(colonist);
                Description::of(item).with_detail(format!("Current: {current}"))
            }
            (SettingsLevel::Change, SettingsItem::Choice(choice)) => {
                let current = Self::setting(ctx)
                    .is_some_and(|kind| kind.current_value(colonist) == choice.label());
                Description::of(item).with_optional_detail(current.then(|| "Current".to_string()))
            }
            _ => Description::of(item),
        }
    }

    fn activation(
        &self,
        level: SettingsLevel,
        selected: Selected<'_, SettingsItem>,
        _ctx: &Context<'_, Self>,
    ) -> Activation<SettingsLevel> {
        let Some(item) = selected.item() else {
            return Activation::Nothing;
        };
        match (level, item) {
            (SettingsLevel::List, SettingsItem::Setting(kind)) if kind.is_toggle() => {
                Activation::Apply
            }
            (SettingsLevel::List, SettingsItem::Setting(_)) => {
                Activation::Enter(SettingsLevel::Change)
            }
            (SettingsLevel::Change, SettingsItem::Choice(_)) => Activation::Apply,
            _ => Activation::Nothing,
        }
    }

    fn apply(
        &mut self,
        level: SettingsLevel,
        selected: Selected<'_, SettingsItem>,
        ctx: &Context<'_, Self>,
    ) -> Result<Applied<SettingsLevel>, ApplyError> {
        let mut world = self.world.borrow_mut();
        let colonist = ctx.subject.resolve_mut(&mut world).ok_or_else(gone)?;
        let Some(item) = selected.item() else {
            return Ok(Applied::stay());
        };

        match (level, item) {
            (SettingsLevel::List, SettingsItem::Setting(kind)) if kind.is_toggle() => {
                colonist.self_tend = !colonist.self_tend;
                let state = kind.current_value(colonist).to_lowercase();
                Ok(Applied::stay().with_notice(format!("Self-tend {state}")))
            }
            (SettingsLevel::Change, SettingsItem::Choice(choice)) => {
                let kind = Self::setting(ctx)
                    .ok_or_else(|| ApplyError::new("No setting selected"))?;
                choice.assign(kind, colonist);
                debug!("{} {} -> {}", colonist.name, kind.label(), choice.label());
                let notice = format!("{} set to {}", kind.label(), choice.label());
                Ok(Applied::back_to(SettingsLevel::List).with_notice(notice))
            }
            _ => Ok(Applied::stay()),
        }
    }
}
