use serde::Serialize;

use crate::error::{DeckError, DeckResult};

/// Bounded slide cursor over `[0, slide_count - 1]`. No wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideCursor {
    index: usize,
    slide_count: usize,
}

impl SlideCursor {
    pub fn new(slide_count: usize, start: usize) -> DeckResult<Self> {
        if slide_count == 0 {
            return Err(DeckError::InvalidData(
                "slide deck must contain at least one slide".to_owned(),
            ));
        }
        if start >= slide_count {
            return Err(DeckError::SlideOutOfRange {
                index: start,
                slide_count,
            });
        }
        Ok(Self {
            index: start,
            slide_count,
        })
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn slide_count(self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.index + 1 == self.slide_count
    }

    /// Advances one slide; returns `false` at the last slide.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Retreats one slide; returns `false` at the first slide.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Absolute jump. Out-of-range targets are rejected and the cursor is left untouched.
    pub fn go_to(&mut self, index: usize) -> DeckResult<bool> {
        if index >= self.slide_count {
            return Err(DeckError::SlideOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }
        let changed = self.index != index;
        self.index = index;
        Ok(changed)
    }
}

/// Active tab among a fixed tab list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSet<T> {
    tabs: Vec<T>,
    active: usize,
}

impl<T: Copy + PartialEq> TabSet<T> {
    /// The first tab starts active.
    pub fn new(tabs: Vec<T>) -> DeckResult<Self> {
        if tabs.is_empty() {
            return Err(DeckError::InvalidData(
                "tab set must contain at least one tab".to_owned(),
            ));
        }
        Ok(Self { tabs, active: 0 })
    }

    #[must_use]
    pub fn active(&self) -> T {
        self.tabs[self.active]
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn tabs(&self) -> &[T] {
        &self.tabs
    }

    /// Activates `tab`; unknown tabs leave the selection unchanged.
    pub fn select(&mut self, tab: T) -> bool {
        match self.tabs.iter().position(|candidate| *candidate == tab) {
            Some(position) => {
                self.active = position;
                true
            }
            None => false,
        }
    }
}
