//! Frame filter chain.
//!
//! Filters are registered once, typically at startup, and applied to the lazy
//! frame sequence of every filtered backtrace. Each filter sees the output of
//! the one registered before it.

use crate::frame::FrameWrapper;
use tracing::info;

/// Lazy sequence of frames flowing through the filter chain.
pub type FrameStream<'c> = Box<dyn Iterator<Item = FrameWrapper<'c>> + 'c>;

/// Turns one frame stream into another.
pub trait FrameFilter: Send + Sync {
    fn filter<'c>(&self, frames: FrameStream<'c>) -> FrameStream<'c>;
}

impl<F> FrameFilter for F
where
    F: for<'c> Fn(FrameStream<'c>) -> FrameStream<'c> + Send + Sync,
{
    fn filter<'c>(&self, frames: FrameStream<'c>) -> FrameStream<'c> {
        self(frames)
    }
}

/// Applies `outer` to whatever `inner` produces.
struct Chained {
    inner: Box<dyn FrameFilter>,
    outer: Box<dyn FrameFilter>,
}

impl FrameFilter for Chained {
    fn filter<'c>(&self, frames: FrameStream<'c>) -> FrameStream<'c> {
        self.outer.filter(self.inner.filter(frames))
    }
}

/// Ordered composition of registered filters.
///
/// Registration takes `&mut self`, so a host sharing one registry between
/// threads has to put it behind a lock.
#[derive(Default)]
pub struct FilterRegistry {
    chain: Option<Box<dyn FrameFilter>>,
    len: usize,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter written as a closure over the frame stream.
    pub fn push_frame_filter<F>(&mut self, constructor: F)
    where
        F: for<'c> Fn(FrameStream<'c>) -> FrameStream<'c> + Send + Sync + 'static,
    {
        self.push(constructor);
    }

    /// Registers any [`FrameFilter`]. It runs after every filter already registered.
    pub fn push<F: FrameFilter + 'static>(&mut self, filter: F) {
        let filter: Box<dyn FrameFilter> = Box::new(filter);
        self.chain = Some(match self.chain.take() {
            None => filter,
            Some(previous) => Box::new(Chained {
                inner: previous,
                outer: filter,
            }),
        });
        self.len += 1;
        info!(filters = self.len, "frame filter registered");
    }

    /// Runs `frames` through the chain; unchanged when nothing is registered.
    pub fn create_frame_filter<'c>(&self, frames: FrameStream<'c>) -> FrameStream<'c> {
        match &self.chain {
            Some(chain) => chain.filter(frames),
            None => frames,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Drops frames whose function name is in the list.
#[derive(Debug, Clone)]
pub struct HideFunctions {
    names: Vec<String>,
}

impl HideFunctions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl FrameFilter for HideFunctions {
    fn filter<'c>(&self, frames: FrameStream<'c>) -> FrameStream<'c> {
        let names = self.names.clone();
        Box::new(frames.filter(move |f| !names.contains(&f.name())))
    }
}
