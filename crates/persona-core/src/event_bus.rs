//! Controller → UI notifications, drained once per frame.
//!
//! Single-threaded; clones share one queue. The queue is bounded so a
//! background tab that stops repainting cannot grow it without limit.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use persona_types::event::ChatEvent;

pub const MAX_BUFFERED_EVENTS: usize = 64;

#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::with_capacity(8))),
        }
    }

    /// Queue an event, evicting the oldest when full.
    pub fn emit(&self, event: ChatEvent) {
        let mut queue = self.queue.borrow_mut();
        if queue.len() == MAX_BUFFERED_EVENTS {
            if let Some(dropped) = queue.pop_front() {
                log::warn!("Event queue full, dropping {:?}", dropped);
            }
        }
        queue.push_back(event);
    }

    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
