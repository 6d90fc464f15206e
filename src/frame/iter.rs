use super::FrameWrapper;
use crate::error::CoreError;
use crate::inferior::{DebuggerCore, FrameId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// Shared slot recording why a frame walk ended early.
#[derive(Debug, Clone, Default)]
pub struct UnwindStatus(Rc<RefCell<Option<CoreError>>>);

impl UnwindStatus {
    pub fn take(&self) -> Option<CoreError> {
        self.0.borrow_mut().take()
    }

    fn record(&self, err: CoreError) {
        self.0.borrow_mut().get_or_insert(err);
    }
}

/// Walks frames outward from a starting frame, wrapping each one.
pub struct FrameIter<'c> {
    core: &'c dyn DebuggerCore,
    next: Option<FrameId>,
    level: usize,
    status: UnwindStatus,
}

impl<'c> FrameIter<'c> {
    pub fn new(core: &'c dyn DebuggerCore, start: FrameId) -> Self {
        Self {
            core,
            next: Some(start),
            level: 0,
            status: UnwindStatus::default(),
        }
    }

    /// Starts at the innermost frame of the current thread.
    pub fn from_newest(core: &'c dyn DebuggerCore) -> Result<Self, CoreError> {
        Ok(Self::new(core, core.newest_frame()?))
    }

    /// Handle to the early-stop slot; stays valid after the iterator is consumed.
    pub fn status(&self) -> UnwindStatus {
        self.status.clone()
    }
}

impl<'c> Iterator for FrameIter<'c> {
    type Item = FrameWrapper<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next.take()?;
        let wrapped = FrameWrapper::new(self.core, frame, self.level);
        self.level += 1;

        match self.core.older_frame(frame) {
            Ok(older) => self.next = older,
            Err(e) => {
                warn!(frame = %frame, level = wrapped.level(), error = %e, "unwinding stopped");
                self.status.record(e);
            }
        }
        Some(wrapped)
    }
}
