use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::data::slides::{SLIDES, SlideSpec};
use crate::error::{DeckError, DeckResult};
use crate::interaction::{
    EventHub, HostEvent, ListenerGuard, NavKey, OriginAllowList, SlideCursor, apply_nav_key,
};

use super::DeckConfig;

/// Read-only state passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckContext {
    pub slide_index: usize,
    pub slide_count: usize,
    pub slide_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckEvent {
    SlideChanged { from: usize, to: usize },
}

/// Hook for code that follows the deck without driving it.
pub trait DeckObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: DeckEvent, context: DeckContext);
}

/// Slide deck state: cursor, trusted origins and observers.
pub struct PresentationController {
    slides: &'static [SlideSpec],
    cursor: SlideCursor,
    home_slide: usize,
    origins: OriginAllowList,
    observers: Vec<Box<dyn DeckObserver>>,
}

impl PresentationController {
    /// Deck over the shipped slide catalog.
    pub fn new(config: &DeckConfig) -> DeckResult<Self> {
        Self::with_slides(SLIDES, config)
    }

    pub fn with_slides(slides: &'static [SlideSpec], config: &DeckConfig) -> DeckResult<Self> {
        config.validate(slides.len())?;
        Ok(Self {
            slides,
            cursor: SlideCursor::new(slides.len(), config.start_slide)?,
            home_slide: config.home_slide,
            origins: config.allowed_origins.clone(),
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn cursor(&self) -> SlideCursor {
        self.cursor
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn current_slide(&self) -> &SlideSpec {
        &self.slides[self.cursor.index()]
    }

    #[must_use]
    pub fn slides(&self) -> &'static [SlideSpec] {
        self.slides
    }

    #[must_use]
    pub fn origins(&self) -> &OriginAllowList {
        &self.origins
    }

    pub fn next(&mut self) -> bool {
        let from = self.cursor.index();
        let moved = self.cursor.next();
        self.finish_move(from, moved)
    }

    pub fn previous(&mut self) -> bool {
        let from = self.cursor.index();
        let moved = self.cursor.previous();
        self.finish_move(from, moved)
    }

    /// Jumps to `index`; out-of-range targets leave the deck where it is.
    pub fn go_to(&mut self, index: usize) -> DeckResult<bool> {
        let from = self.cursor.index();
        let moved = self.cursor.go_to(index)?;
        Ok(self.finish_move(from, moved))
    }

    /// Jumps to the slide with catalog id `id`, as table-of-contents entries do.
    pub fn go_to_slide(&mut self, id: &str) -> DeckResult<bool> {
        let index = self
            .slides
            .iter()
            .position(|slide| slide.id == id)
            .ok_or_else(|| DeckError::InvalidData(format!("unknown slide id `{id}`")))?;
        self.go_to(index)
    }

    /// Back to the table of contents.
    pub fn go_home(&mut self) -> bool {
        let from = self.cursor.index();
        // `home_slide` was validated against this deck.
        let moved = self.cursor.go_to(self.home_slide).unwrap_or(false);
        self.finish_move(from, moved)
    }

    /// Keyboard input; keys other than the arrows are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match NavKey::from_key(key) {
            Some(key) => self.apply(key),
            None => false,
        }
    }

    /// Message posted by a hosting frame. Untrusted origins and unknown
    /// payloads are ignored without a trace.
    pub fn handle_frame_message(&mut self, origin: &str, data: &Value) -> bool {
        match self.origins.accept(origin, data) {
            Some(key) => self.apply(key),
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: &HostEvent) -> bool {
        match event {
            HostEvent::KeyDown { key } => self.handle_key(key),
            HostEvent::Message { origin, data } => self.handle_frame_message(origin, data),
        }
    }

    fn apply(&mut self, key: NavKey) -> bool {
        let from = self.cursor.index();
        let moved = apply_nav_key(&mut self.cursor, key);
        self.finish_move(from, moved)
    }

    fn finish_move(&mut self, from: usize, moved: bool) -> bool {
        if moved {
            let to = self.cursor.index();
            debug!(from, to, slide = self.current_slide().id, "slide changed");
            self.emit(DeckEvent::SlideChanged { from, to });
        }
        moved
    }

    fn context(&self) -> DeckContext {
        DeckContext {
            slide_index: self.cursor.index(),
            slide_count: self.cursor.slide_count(),
            slide_id: self.slides[self.cursor.index()].id,
        }
    }

    fn emit(&mut self, event: DeckEvent) {
        let context = self.context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }

    /// Registers an observer with a unique id.
    pub fn add_observer(&mut self, observer: Box<dyn DeckObserver>) -> DeckResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(DeckError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(DeckError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Returns `true` when an observer was removed.
    pub fn remove_observer(&mut self, observer_id: &str) -> bool {
        match self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            Some(position) => {
                self.observers.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Attaches keyboard and message listeners to `hub` for as long as the
    /// returned mount lives.
    pub fn mount(this: &Rc<RefCell<Self>>, hub: &EventHub) -> PresentationMount {
        let keyboard = hub.subscribe(forward(Rc::downgrade(this), |deck, event| {
            if let HostEvent::KeyDown { key } = event {
                deck.handle_key(key);
            }
        }));
        let messages = hub.subscribe(forward(Rc::downgrade(this), |deck, event| {
            if let HostEvent::Message { origin, data } = event {
                deck.handle_frame_message(origin, data);
            }
        }));
        debug!(listeners = hub.listener_count(), "presentation mounted");
        PresentationMount {
            _keyboard: keyboard,
            _messages: messages,
        }
    }
}

/// Handler that reaches the controller only while it is alive and not
/// already borrowed by the caller that dispatched the event.
fn forward<F>(
    deck: Weak<RefCell<PresentationController>>,
    handle: F,
) -> impl FnMut(&HostEvent) + 'static
where
    F: Fn(&mut PresentationController, &HostEvent) + 'static,
{
    move |event| {
        let Some(deck) = deck.upgrade() else {
            return;
        };
        if let Ok(mut deck) = deck.try_borrow_mut() {
            handle(&mut deck, event);
        }
    }
}

/// Listener registrations of a mounted deck. Dropping it unmounts.
#[must_use = "dropping the mount detaches its listeners"]
pub struct PresentationMount {
    _keyboard: ListenerGuard,
    _messages: ListenerGuard,
}

impl PresentationMount {
    pub fn unmount(self) {}
}
