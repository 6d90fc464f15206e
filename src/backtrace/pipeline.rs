use crate::error::Result;
use crate::filter::{FilterRegistry, FrameStream};
use crate::frame::{FrameIter, FrameWrapper};
use crate::inferior::DebuggerCore;
use crate::parser::BacktraceArgs;
use std::cmp::Ordering;
use std::io::Write;
use tracing::debug;

/// A frame paired with its depth from the innermost frame.
pub type NumberedFrame<'c> = (usize, FrameWrapper<'c>);

/// Collects the whole sequence and reverses it.
pub fn reverse_iter<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    let mut result: Vec<_> = iter.into_iter().collect();
    result.reverse();
    result
}

/// The last `n` items of the sequence (all of them when there are fewer).
pub fn final_n<I: IntoIterator>(iter: I, n: usize) -> Vec<I::Item> {
    let mut result: Vec<_> = iter.into_iter().collect();
    let skip = result.len().saturating_sub(n);
    result.split_off(skip)
}

/// Positive `count` keeps the first entries, negative the last, zero everything.
pub fn select_range<'a, T: 'a>(
    iter: Box<dyn Iterator<Item = T> + 'a>,
    count: i64,
) -> Box<dyn Iterator<Item = T> + 'a> {
    let n = usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX);
    match count.cmp(&0) {
        Ordering::Less => Box::new(final_n(iter, n).into_iter()),
        Ordering::Greater => Box::new(iter.take(n)),
        Ordering::Equal => iter,
    }
}

/// Numbers, orders and slices the frames of `stream`. Only reversal and a
/// negative count force the sequence to be materialized.
pub fn arrange<'c>(
    stream: FrameStream<'c>,
    reverse: bool,
    count: i64,
) -> Box<dyn Iterator<Item = NumberedFrame<'c>> + 'c> {
    let numbered: Box<dyn Iterator<Item = NumberedFrame<'c>> + 'c> =
        Box::new(stream.map(|frame| (frame.level(), frame)));

    let ordered: Box<dyn Iterator<Item = NumberedFrame<'c>> + 'c> = if reverse {
        Box::new(reverse_iter(numbered).into_iter())
    } else {
        numbered
    };

    select_range(ordered, count)
}

/// Writes the backtrace described by `args` and returns how many frames were printed.
///
/// Frames printed before an unwind failure stay printed; the failure is then
/// returned to the caller.
pub fn write_backtrace(
    core: &dyn DebuggerCore,
    filters: &FilterRegistry,
    reverse: bool,
    args: &BacktraceArgs,
    out: &mut dyn Write,
) -> Result<usize> {
    let base = FrameIter::from_newest(core)?;
    let status = base.status();

    let mut frames: FrameStream<'_> = Box::new(base);
    if args.filter {
        frames = filters.create_frame_filter(frames);
    }

    let mut printed = 0usize;
    for (index, frame) in arrange(frames, reverse, args.count) {
        write!(out, "#{:<2}", index)?;
        frame.describe(out, args.full)?;
        printed += 1;
    }
    out.flush()?;

    debug!(printed, reverse, filtered = args.filter, count = args.count, "backtrace written");

    match status.take() {
        Some(e) => Err(e.into()),
        None => Ok(printed),
    }
}
