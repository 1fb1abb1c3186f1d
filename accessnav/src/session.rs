//! The navigation state machine.
//!
//! A [`NavigationSession`] is an explicit value owned by whatever currently
//! has input focus. It owns the provider, the sinks and every visited level.
//! Each public operation runs to completion synchronously and speaks at most
//! one message.

use std::rc::{Rc, Weak};

use crate::{
    announce::{self, Announcement},
    config::NavConfig,
    data::{Frame, FrameStack},
    error::ApplyError,
    provider::{Activation, Applied, Context, DataProvider, Then},
    sink::{Cue, CueSink, FocusRestore, NullSink, Priority, SpeechSink, strip_markup},
};

/// Output sinks a session talks to.
pub struct Sinks {
    /// Text-to-speech output.
    pub speech: Box<dyn SpeechSink>,
    /// Audio cue output.
    pub cues: Box<dyn CueSink>,
    /// Outer context that re-announces itself after a root-level cancel.
    pub focus: Option<Box<dyn FocusRestore>>,
}

impl Sinks {
    /// Speech and cue sinks without focus restoration.
    pub fn new(speech: impl SpeechSink + 'static, cues: impl CueSink + 'static) -> Self {
        Self {
            speech: Box::new(speech),
            cues: Box::new(cues),
            focus: None,
        }
    }

    /// Sinks that discard everything.
    pub fn silent() -> Self {
        Self::new(NullSink, NullSink)
    }

    /// Notify `focus` when the user cancels out of a root level.
    pub fn with_focus(mut self, focus: impl FocusRestore + 'static) -> Self {
        self.focus = Some(Box::new(focus));
        self
    }
}

type Frames<P> = FrameStack<<P as DataProvider>::Level, <P as DataProvider>::Item>;
type FrameOf<P> = Frame<<P as DataProvider>::Level, <P as DataProvider>::Item>;
type ApplyResult<P> = Result<Applied<<P as DataProvider>::Level>, ApplyError>;

/// Live navigation state for one menu family.
pub struct NavigationSession<P: DataProvider> {
    provider: P,
    sinks: Sinks,
    config: NavConfig,
    subject: Option<Weak<P::Subject>>,
    frames: Frames<P>,
    active: bool,
}

impl<P: DataProvider> NavigationSession<P> {
    /// Create an inactive session with the default configuration.
    pub fn new(provider: P, sinks: Sinks) -> Self {
        Self {
            provider,
            sinks,
            config: NavConfig::default(),
            subject: None,
            frames: FrameStack::new(),
            active: false,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether the session is open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current level, if open.
    pub fn level(&self) -> Option<P::Level> {
        self.frames.current().map(|f| f.level)
    }

    /// Cursor of the current level, if open.
    pub fn cursor(&self) -> Option<usize> {
        self.frames.current().map(Frame::cursor)
    }

    /// Fetched items of the current level.
    pub fn items(&self) -> &[P::Item] {
        self.frames.current().map(Frame::items).unwrap_or_default()
    }

    /// Entry count of the current level, including a synthetic trailing entry.
    pub fn display_count(&self) -> usize {
        self.frames.current().map_or(0, Frame::display_count)
    }

    /// Visited levels, entry level first.
    pub fn path(&self) -> Vec<P::Level> {
        self.frames.path()
    }

    /// The provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Open the menu on `subject` at its entry level.
    ///
    /// Does nothing when `subject` is `None`. Opening an open session resets
    /// it.
    pub fn open(&mut self, subject: Option<&Rc<P::Subject>>) {
        let Some(subject) = subject else {
            debug!("open declined: no subject");
            return;
        };

        self.frames.clear();
        self.subject = Some(Rc::downgrade(subject));
        self.active = true;

        let level = self.provider.entry_level();
        let frame = load_frame(&self.provider, level, subject, &[]);
        debug!(
            "session opened at {:?} with {} entries",
            level,
            frame.display_count()
        );
        self.frames.push(frame);

        self.cue(Cue::Open);
        self.announce(subject, None);
    }

    /// Close the session and drop all level state.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.teardown();
        debug!("session closed");
        self.cue(Cue::Close);
    }

    /// Drop all state without playing any cue.
    pub fn reset(&mut self) {
        self.teardown();
    }

    /// Move the cursor to the next entry, wrapping.
    pub fn select_next(&mut self) {
        self.step(true);
    }

    /// Move the cursor to the previous entry, wrapping.
    pub fn select_previous(&mut self) {
        self.step(false);
    }

    /// Drill down into, or act on, the selected entry.
    pub fn activate(&mut self) {
        let Some(subject) = self.live_subject() else {
            return;
        };
        let Some(frame) = self.frames.current() else {
            return;
        };
        let level = frame.level;
        let Some(selected) = frame.selected() else {
            debug!("activate ignored: {level:?} is empty");
            return;
        };

        let ctx = Context::new(&*subject, self.frames.as_slice());
        match self.provider.activation(level, selected, &ctx) {
            Activation::Nothing => {}
            Activation::Enter(child) => self.enter(child, &subject),
            Activation::Apply => {
                let result = self.apply_selected(&subject);
                self.finish_apply(result, &subject);
            }
            Activation::PickTarget(picker) => self.pick_target(picker, &subject),
        }
    }

    /// Go back to the parent level, or close the session at a root level.
    pub fn cancel(&mut self) {
        let Some(subject) = self.live_subject() else {
            return;
        };
        let Some(level) = self.frames.current().map(|f| f.level) else {
            return;
        };

        match self.provider.parent(level) {
            None => {
                self.close();
                if let Some(focus) = self.sinks.focus.as_mut() {
                    focus.restore_focus();
                }
            }
            Some(parent) => {
                debug!("back from {level:?} to {parent:?}");
                self.return_to(parent, &subject);
                self.cue(Cue::Back);
                self.announce(&subject, None);
            }
        }
    }

    /// Speak the current announcement again without changing anything.
    pub fn repeat(&mut self) {
        if let Some(subject) = self.live_subject() {
            self.announce(&subject, None);
        }
    }

    /// The announcement for the current state, if there is one to make.
    pub fn current_announcement(&self) -> Option<Announcement> {
        let subject = self.subject.as_ref()?.upgrade()?;
        self.render_current(&subject)
    }

    fn step(&mut self, forward: bool) {
        let Some(subject) = self.live_subject() else {
            return;
        };
        let Some(frame) = self.frames.current_mut() else {
            return;
        };
        let moved = if forward {
            frame.select_next()
        } else {
            frame.select_previous()
        };
        if !moved {
            return;
        }
        self.cue(Cue::Tick);
        self.announce(&subject, None);
    }

    fn enter(&mut self, child: P::Level, subject: &P::Subject) {
        let frame = load_frame(&self.provider, child, subject, self.frames.as_slice());
        if frame.selected().is_none() {
            debug!("enter {child:?} refused: nothing to list");
            let message = self.config.messages.nothing_available.clone();
            self.reject(&message, Priority::Normal);
            return;
        }
        debug!("enter {child:?} with {} entries", frame.display_count());
        self.frames.push(frame);
        self.cue(Cue::Confirm);
        self.announce(subject, None);
    }

    fn pick_target(&mut self, picker: P::Level, subject: &P::Subject) {
        let frame = load_frame(&self.provider, picker, subject, self.frames.as_slice());
        match frame.items().len() {
            0 => {
                debug!("pick {picker:?} refused: no eligible target");
                let message = self.config.messages.not_available.clone();
                self.reject(&message, Priority::High);
            }
            1 => {
                debug!("pick {picker:?}: single target, applying directly");
                self.frames.push(frame);
                let result = self.apply_selected(subject);
                self.frames.pop();
                self.finish_apply(result, subject);
            }
            count => {
                debug!("enter {picker:?} with {count} targets");
                self.frames.push(frame);
                self.cue(Cue::Confirm);
                self.announce(subject, None);
            }
        }
    }

    fn apply_selected(&mut self, subject: &P::Subject) -> ApplyResult<P> {
        let Some(frame) = self.frames.current() else {
            return Ok(Applied::stay());
        };
        let level = frame.level;
        let Some(selected) = frame.selected() else {
            return Ok(Applied::stay());
        };
        let ctx = Context::new(subject, self.frames.as_slice());
        self.provider.apply(level, selected, &ctx)
    }

    fn finish_apply(&mut self, result: ApplyResult<P>, subject: &P::Subject) {
        let applied = match result {
            Ok(applied) => applied,
            Err(err) => {
                warn!("apply refused on {:?}: {}", self.level(), err);
                self.reject(err.reason(), Priority::High);
                return;
            }
        };

        match applied.then {
            Then::Close => {
                if let Some(notice) = &applied.notice {
                    self.speak(notice, Priority::Normal);
                }
                self.close();
            }
            Then::Stay => {
                self.refresh_current(subject);
                self.select(applied.select);
                self.cue(Cue::Confirm);
                self.announce(subject, applied.notice.as_deref());
            }
            Then::Return(level) => {
                self.return_to(level, subject);
                self.select(applied.select);
                self.cue(Cue::Confirm);
                self.announce(subject, applied.notice.as_deref());
            }
        }
    }

    /// Make `level` current again, re-fetching its items.
    fn return_to(&mut self, level: P::Level, subject: &P::Subject) {
        if self.frames.navigate_back_to(level) {
            self.refresh_current(subject);
        } else {
            // reached from somewhere else: take the current level's place
            let frame = load_frame(&self.provider, level, subject, self.frames.below_current());
            self.frames.replace_top(frame);
        }
    }

    fn select(&mut self, index: Option<usize>) {
        if let (Some(index), Some(frame)) = (index, self.frames.current_mut()) {
            frame.select(index);
        }
    }

    fn refresh_current(&mut self, subject: &P::Subject) {
        let Some((top, below)) = self.frames.split_current_mut() else {
            return;
        };
        let info = self.provider.level_info(top.level);
        if info.is_static() {
            return;
        }
        let ctx = Context::new(subject, below);
        top.refresh(self.provider.fetch(top.level, &ctx));
    }

    fn render_current(&self, subject: &P::Subject) -> Option<Announcement> {
        let frame = self.frames.current()?;
        let selected = frame.selected()?;
        let ctx = Context::new(subject, self.frames.as_slice());
        let info = self.provider.level_info(frame.level);
        let description = self.provider.describe(frame.level, selected, &ctx);
        let announcement = announce::render(&info, frame, &description, &self.config.announce);
        Some(announcement)
    }

    fn announce(&mut self, subject: &P::Subject, notice: Option<&str>) {
        match self.render_current(subject) {
            Some(mut announcement) => {
                if let Some(notice) = notice {
                    announcement.prepend(notice);
                }
                let text = announcement.text();
                self.sinks.speech.speak(&text, Priority::Normal);
            }
            None => {
                let mut text = self.config.messages.nothing_available.clone();
                if let Some(notice) = notice {
                    text = format!("{notice}\n{text}");
                }
                self.speak(&text, Priority::Normal);
            }
        }
    }

    fn reject(&mut self, message: &str, priority: Priority) {
        self.cue(Cue::Reject);
        self.speak(message, priority);
    }

    /// Upgrade the weak subject. A subject that has gone away closes the
    /// session with a spoken notice.
    fn live_subject(&mut self) -> Option<Rc<P::Subject>> {
        if !self.active {
            return None;
        }
        if let Some(subject) = self.subject.as_ref().and_then(Weak::upgrade) {
            return Some(subject);
        }
        warn!("subject dropped while the session was open");
        let message = self.config.messages.subject_lost.clone();
        self.reject(&message, Priority::High);
        self.teardown();
        None
    }

    fn teardown(&mut self) {
        self.active = false;
        self.subject = None;
        self.frames.clear();
    }

    fn cue(&mut self, cue: Cue) {
        if self.config.cues {
            self.sinks.cues.play(cue);
        }
    }

    fn speak(&mut self, text: &str, priority: Priority) {
        let text = strip_markup(text);
        if !text.is_empty() {
            self.sinks.speech.speak(&text, priority);
        }
    }
}

fn load_frame<P: DataProvider>(
    provider: &P,
    level: P::Level,
    subject: &P::Subject,
    trail: &[FrameOf<P>],
) -> FrameOf<P> {
    let info = provider.level_info(level);
    let items = if info.is_static() {
        Vec::new()
    } else {
        provider.fetch(level, &Context::new(subject, trail))
    };
    Frame::new(level, &info, items)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::data::{Description, LevelInfo, Selected};

    #[derive(Default)]
    struct Log {
        spoken: Vec<(String, Priority)>,
        cues: Vec<Cue>,
        focus: usize,
    }

    #[derive(Clone)]
    struct Recorder(Rc<RefCell<Log>>);

    impl SpeechSink for Recorder {
        fn speak(&mut self, text: &str, priority: Priority) {
            let mut log = self.0.borrow_mut();
            log.spoken.push((text.to_string(), priority));
        }
    }

    impl CueSink for Recorder {
        fn play(&mut self, cue: Cue) {
            self.0.borrow_mut().cues.push(cue);
        }
    }

    impl FocusRestore for Recorder {
        fn restore_focus(&mut self) {
            self.0.borrow_mut().focus += 1;
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Settings,
        Options,
    }

    /// Three settings; the last one is a toggle.
    struct Settings {
        options: Vec<String>,
        toggled: bool,
    }

    impl DataProvider for Settings {
        type Level = Level;
        type Subject = String;
        type Item = String;

        fn entry_level(&self) -> Level {
            Level::Settings
        }

        fn parent(&self, level: Level) -> Option<Level> {
            match level {
                Level::Settings => None,
                Level::Options => Some(Level::Settings),
            }
        }

        fn level_info(&self, level: Level) -> LevelInfo {
            match level {
                Level::Settings => LevelInfo::new("Setting", "Press Enter to change"),
                Level::Options => LevelInfo::new("Option", "Press Enter to confirm"),
            }
        }

        fn fetch(&self, level: Level, _ctx: &Context<'_, Self>) -> Vec<String> {
            match level {
                Level::Settings => vec!["Outfit".into(), "Diet".into(), "Self-tend".into()],
                Level::Options => self.options.clone(),
            }
        }

        fn describe(
            &self,
            _level: Level,
            selected: Selected<'_, String>,
            ctx: &Context<'_, Self>,
        ) -> Description {
            let label = selected.item().cloned().unwrap_or_default();
            if label == "Self-tend" {
                let value = if self.toggled { "on" } else { "off" };
                return Description::new(label).with_detail(format!("Current: {value}"));
            }
            Description::new(label).with_detail(format!("Colonist: {}", ctx.subject))
        }

        fn activation(
            &self,
            level: Level,
            selected: Selected<'_, String>,
            _ctx: &Context<'_, Self>,
        ) -> Activation<Level> {
            match (level, selected.item().map(String::as_str)) {
                (Level::Settings, Some("Self-tend")) => Activation::Apply,
                (Level::Settings, _) => Activation::Enter(Level::Options),
                (Level::Options, _) => Activation::Apply,
            }
        }

        fn apply(
            &mut self,
            level: Level,
            selected: Selected<'_, String>,
            ctx: &Context<'_, Self>,
        ) -> Result<Applied<Level>, ApplyError> {
            match level {
                Level::Settings => {
                    self.toggled = !self.toggled;
                    Ok(Applied::stay())
                }
                Level::Options => {
                    let option = selected.item().cloned().unwrap_or_default();
                    if option == "Locked" {
                        return Err(ApplyError::new("That option is locked"));
                    }
                    if option == "Done" {
                        return Ok(Applied::close().with_notice("<b>Outfit confirmed</b>"));
                    }
                    let setting = ctx.item(Level::Settings).cloned().unwrap_or_default();
                    Ok(Applied::back_to(Level::Settings)
                        .with_notice(format!("{setting} set to {option}")))
                }
            }
        }
    }

    fn session(options: &[&str]) -> (NavigationSession<Settings>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let rec = Recorder(log.clone());
        let provider = Settings {
            options: options.iter().map(|s| s.to_string()).collect(),
            toggled: false,
        };
        let sinks = Sinks::new(rec.clone(), rec.clone()).with_focus(rec);
        (NavigationSession::new(provider, sinks), log)
    }

    fn last_spoken(log: &Rc<RefCell<Log>>) -> String {
        let log = log.borrow();
        log.spoken.last().map(|s| s.0.clone()).unwrap_or_default()
    }

    #[test]
    fn test_open_without_subject() {
        let (mut s, log) = session(&["Worker"]);
        s.open(None);
        assert!(!s.is_active());
        assert!(log.borrow().spoken.is_empty());
        assert!(log.borrow().cues.is_empty());
    }

    #[test]
    fn test_open_announces_entry_level() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));

        assert!(s.is_active());
        assert_eq!(s.level(), Some(Level::Settings));
        assert_eq!(s.cursor(), Some(0));
        assert_eq!(log.borrow().cues, vec![Cue::Open]);
        assert_eq!(
            last_spoken(&log),
            "Outfit\nColonist: Engie\nSetting 1 of 3\nPress Enter to change"
        );
    }

    #[test]
    fn test_next_position_lines() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));

        let mut positions = Vec::new();
        for _ in 0..3 {
            s.select_next();
            let text = last_spoken(&log);
            positions.push(text.lines().nth(2).unwrap_or_default().to_string());
        }
        assert_eq!(s.cursor(), Some(0));
        let expected = ["Setting 2 of 3", "Setting 3 of 3", "Setting 1 of 3"];
        assert_eq!(positions, expected);
        assert_eq!(log.borrow().spoken.len(), 4);
        assert_eq!(&log.borrow().cues[1..], [Cue::Tick, Cue::Tick, Cue::Tick]);
    }

    #[test]
    fn test_toggle_stays_and_reflects_new_value() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.select_previous();
        assert!(last_spoken(&log).contains("Current: off"));

        s.activate();
        assert_eq!(s.level(), Some(Level::Settings));
        assert_eq!(s.cursor(), Some(2));
        assert!(last_spoken(&log).contains("Current: on"));
        assert_eq!(log.borrow().cues.last(), Some(&Cue::Confirm));
    }

    #[test]
    fn test_enter_and_apply_returns_with_notice() {
        let (mut s, log) = session(&["Worker", "Soldier"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));

        s.activate();
        assert_eq!(s.level(), Some(Level::Options));
        assert_eq!(s.path(), vec![Level::Settings, Level::Options]);
        assert!(last_spoken(&log).contains("Option 1 of 2"));

        s.select_next();
        s.activate();
        assert_eq!(s.level(), Some(Level::Settings));
        assert_eq!(s.cursor(), Some(0));
        let text = last_spoken(&log);
        let notice = "Outfit set to Soldier\nOutfit\n";
        assert!(text.starts_with(notice), "{text}");
    }

    #[test]
    fn test_enter_empty_child_is_refused() {
        let (mut s, log) = session(&[]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.activate();

        assert_eq!(s.level(), Some(Level::Settings));
        let log = log.borrow();
        assert_eq!(log.cues.last(), Some(&Cue::Reject));
        let (text, priority) = log.spoken.last().unwrap();
        assert_eq!(text, "Nothing available");
        assert_eq!(*priority, Priority::Normal);
    }

    #[test]
    fn test_apply_failure_is_spoken_high() {
        let (mut s, log) = session(&["Locked"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.activate();
        s.activate();

        assert_eq!(s.level(), Some(Level::Options));
        let log = log.borrow();
        assert_eq!(log.cues.last(), Some(&Cue::Reject));
        let (text, priority) = log.spoken.last().unwrap();
        assert_eq!(text, "That option is locked");
        assert_eq!(*priority, Priority::High);
    }

    #[test]
    fn test_cancel_from_child_and_root() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.activate();

        s.cancel();
        assert!(s.is_active());
        assert_eq!(s.level(), Some(Level::Settings));
        assert_eq!(log.borrow().cues.last(), Some(&Cue::Back));
        assert_eq!(log.borrow().focus, 0);

        let spoken_before = log.borrow().spoken.len();
        s.cancel();
        assert!(!s.is_active());
        assert_eq!(s.level(), None);
        assert_eq!(log.borrow().cues.last(), Some(&Cue::Close));
        assert_eq!(log.borrow().focus, 1);
        assert_eq!(log.borrow().spoken.len(), spoken_before);

        s.cancel();
        assert_eq!(log.borrow().focus, 1);
    }

    #[test]
    fn test_apply_can_close_with_notice() {
        let (mut s, log) = session(&["Done"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.activate();
        s.activate();

        assert!(!s.is_active());
        assert_eq!(s.level(), None);
        let log = log.borrow();
        let (text, priority) = log.spoken.last().unwrap();
        assert_eq!(text, "Outfit confirmed");
        assert_eq!(*priority, Priority::Normal);
        assert_eq!(log.cues, vec![Cue::Open, Cue::Confirm, Cue::Close]);
        assert_eq!(log.focus, 0);
    }

    #[test]
    fn test_reset_drops_state_silently() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.activate();
        let (spoken, cues) = (log.borrow().spoken.len(), log.borrow().cues.len());

        s.reset();
        assert!(!s.is_active());
        assert_eq!(s.level(), None);
        assert!(s.path().is_empty());
        assert!(s.current_announcement().is_none());
        assert_eq!(log.borrow().spoken.len(), spoken);
        assert_eq!(log.borrow().cues.len(), cues);
        assert_eq!(log.borrow().focus, 0);

        s.select_next();
        s.cancel();
        assert_eq!(log.borrow().cues.len(), cues);

        s.open(Some(&pawn));
        assert_eq!(s.path(), vec![Level::Settings]);
    }

    #[test]
    fn test_dropped_subject_closes_with_notice() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        drop(pawn);

        s.select_next();
        assert!(!s.is_active());
        assert_eq!(last_spoken(&log), "No longer available");
        let priority = log.borrow().spoken.last().map(|(_, p)| *p);
        assert_eq!(priority, Some(Priority::High));
    }

    #[test]
    fn test_inactive_session_ignores_actions() {
        let (mut s, log) = session(&["Worker"]);
        s.select_next();
        s.activate();
        s.cancel();
        s.close();
        assert!(log.borrow().spoken.is_empty());
        assert!(log.borrow().cues.is_empty());
    }

    #[test]
    fn test_cues_can_be_disabled() {
        let (s, log) = session(&["Worker"]);
        let mut config = NavConfig::default();
        config.cues = false;
        let mut s = s.with_config(config);
        let pawn = Rc::new("Engie".to_string());
        s.open(Some(&pawn));
        s.select_next();
        assert!(log.borrow().cues.is_empty());
        assert_eq!(log.borrow().spoken.len(), 2);
    }

    #[test]
    fn test_repeat_and_current_announcement() {
        let (mut s, log) = session(&["Worker"]);
        let pawn = Rc::new("Engie".to_string());
        assert!(s.current_announcement().is_none());

        s.open(Some(&pawn));
        s.repeat();
        let log = log.borrow();
        assert_eq!(log.spoken.len(), 2);
        assert_eq!(log.spoken[0], log.spoken[1]);
        assert_eq!(log.cues, vec![Cue::Open]);
        let current = s.current_announcement().map(|a| a.text());
        assert_eq!(current, Some(log.spoken[1].0.clone()));
    }
}
