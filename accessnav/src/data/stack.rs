use crate::data::level::Frame;

/// Stack of visited levels, entry level at the bottom.
///
/// Going back is not a blind pop: every level names its own parent, so
/// [`FrameStack::navigate_back_to`] unwinds to wherever that parent sits.
#[derive(Debug, Clone)]
pub struct FrameStack<L, I> {
    frames: Vec<Frame<L, I>>,
}

impl<L, I> Default for FrameStack<L, I> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<L: Copy + PartialEq, I> FrameStack<L, I> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a child level.
    pub fn push(&mut self, frame: Frame<L, I>) {
        self.frames.push(frame);
    }

    /// Leave the current level without entering another one.
    pub fn pop(&mut self) -> Option<Frame<L, I>> {
        self.frames.pop()
    }

    /// Swap the current level for another one at the same depth.
    pub fn replace_top(&mut self, frame: Frame<L, I>) {
        self.frames.pop();
        self.frames.push(frame);
    }

    /// Unwind to the closest frame for `level`.
    ///
    /// Returns `false` and leaves the stack untouched when `level` has not
    /// been visited.
    pub fn navigate_back_to(&mut self, level: L) -> bool {
        match self.frames.iter().rposition(|f| f.level == level) {
            Some(idx) => {
                self.frames.truncate(idx + 1);
                true
            }
            None => false,
        }
    }

    /// Drop every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// The current (top) frame.
    pub fn current(&self) -> Option<&Frame<L, I>> {
        self.frames.last()
    }

    /// The current frame, mutably.
    pub fn current_mut(&mut self) -> Option<&mut Frame<L, I>> {
        self.frames.last_mut()
    }

    /// The current frame together with the frames below it.
    pub fn split_current_mut(&mut self) -> Option<(&mut Frame<L, I>, &[Frame<L, I>])> {
        self.frames
            .split_last_mut()
            .map(|(top, below)| (top, &*below))
    }

    /// Frames below the current one.
    pub fn below_current(&self) -> &[Frame<L, I>] {
        match self.frames.split_last() {
            Some((_, below)) => below,
            None => &[],
        }
    }

    /// All frames, entry level first.
    pub fn as_slice(&self) -> &[Frame<L, I>] {
        &self.frames
    }

    /// Number of frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Levels from the entry level to the current one.
    pub fn path(&self) -> Vec<L> {
        self.frames.iter().map(|f| f.level).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::level::LevelInfo;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        List,
        Actions,
        Catalog,
        Picker,
    }

    fn frame(level: Level) -> Frame<Level, String> {
        Frame::new(level, &LevelInfo::new("Entry", ""), vec!["x".to_string()])
    }

    #[test]
    fn test_navigate_back_to_unwinds() {
        let mut stack = FrameStack::new();
        stack.push(frame(Level::List));
        stack.push(frame(Level::Catalog));
        stack.push(frame(Level::Picker));

        assert!(stack.navigate_back_to(Level::List));
        assert_eq!(stack.path(), vec![Level::List]);
    }

    #[test]
    fn test_navigate_back_to_unknown_level() {
        let mut stack = FrameStack::new();
        stack.push(frame(Level::List));
        stack.push(frame(Level::Picker));

        assert!(!stack.navigate_back_to(Level::Actions));
        assert_eq!(stack.depth(), 2);

        stack.replace_top(frame(Level::Catalog));
        assert_eq!(stack.path(), vec![Level::List, Level::Catalog]);
    }

    #[test]
    fn test_below_current() {
        let mut stack: FrameStack<Level, String> = FrameStack::new();
        assert!(stack.below_current().is_empty());
        assert!(stack.split_current_mut().is_none());

        stack.push(frame(Level::List));
        stack.push(frame(Level::Actions));
        assert_eq!(stack.below_current().len(), 1);

        let (top, below) = stack.split_current_mut().unwrap();
        assert_eq!(top.level, Level::Actions);
        assert_eq!(below[0].level, Level::List);
    }
}
