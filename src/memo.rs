//! Background-filled, append-only digit buffer
//!
//! A [`Memoizer`] owns a single-pass digit cursor and drives it from one
//! background thread. Readers never touch the cursor. They bump a
//! "requested length" watermark and wait until the published prefix covers
//! the index they want.
//!
//! # Synchronization
//!
//! | Condition | Signalled by | Waited on by |
//! |-----------|--------------|--------------|
//! | `grow` | readers raising the watermark, drop | background thread |
//! | `advanced` | background thread publishing a chunk | readers |
//!
//! The published prefix only ever grows, so a digit once observed never
//! changes.

use crate::sequence::Sequence;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread;
use tracing::{debug, trace, warn};

/// Default number of digits computed per background cycle
pub const DEFAULT_CHUNK_SIZE: usize = 100;

#[derive(Debug, Default)]
struct State {
    digits: Vec<u8>,
    requested: usize,
    done: bool,
    closed: bool,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    grow: Condvar,
    advanced: Condvar,
    chunk_size: usize,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a reader panicked; the buffer itself
        // is still a valid published prefix.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Block until digit `index` is published or the sequence has ended.
    fn wait_for(&self, index: usize) -> MutexGuard<'_, State> {
        let mut state = self.lock();
        if index >= state.requested && !state.done {
            state.requested = (index / self.chunk_size)
                .saturating_add(1)
                .saturating_mul(self.chunk_size);
            self.grow.notify_one();
        }
        while index >= state.digits.len() && !state.done {
            state = self
                .advanced
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
        state
    }

    /// Copy the published digits in `[start, start + max)`, waiting for at
    /// least the first of them if necessary.
    fn copy_from(&self, start: usize, max: usize, out: &mut Vec<u8>) {
        let state = self.wait_for(start);
        if start < state.digits.len() {
            let end = state.digits.len().min(start.saturating_add(max));
            out.extend_from_slice(&state.digits[start..end]);
        }
    }
}

/// Marks the buffer done when the producer exits, including by panic.
struct FinishGuard(Arc<Shared>);

impl Drop for FinishGuard {
    fn drop(&mut self) {
        let mut state = self.0.lock();
        if !state.done && !state.closed && thread::panicking() {
            warn!(
                published = state.digits.len(),
                "Digit producer panicked, truncating sequence"
            );
        }
        state.done = true;
        self.0.advanced.notify_all();
    }
}

fn produce<I>(shared: Arc<Shared>, mut cursor: I)
where
    I: Iterator<Item = u8>,
{
    let _guard = FinishGuard(Arc::clone(&shared));
    let chunk_size = shared.chunk_size;
    let mut chunk = Vec::with_capacity(chunk_size);

    loop {
        {
            let mut state = shared.lock();
            while !state.closed && state.digits.len() >= state.requested {
                state = shared.grow.wait(state).unwrap_or_else(|e| e.into_inner());
            }
            if state.closed {
                debug!(published = state.digits.len(), "Memoizer dropped, stopping producer");
                return;
            }
        }

        // Computing digits is the expensive part; do it without the lock.
        chunk.clear();
        chunk.extend(cursor.by_ref().take(chunk_size));
        let exhausted = chunk.len() < chunk_size;

        let mut state = shared.lock();
        state.digits.extend_from_slice(&chunk);
        trace!(published = state.digits.len(), "Published digit chunk");
        if exhausted {
            debug!(len = state.digits.len(), "Digit sequence exhausted");
            state.done = true;
        }
        shared.advanced.notify_all();
        if exhausted {
            return;
        }
    }
}

/// Thread-safe, random-access view of a single-pass digit cursor
#[derive(Debug)]
pub struct Memoizer {
    shared: Arc<Shared>,
}

impl Memoizer {
    /// Wrap `cursor` using the default chunk size
    pub fn new<I>(cursor: I) -> Self
    where
        I: Iterator<Item = u8> + Send + 'static,
    {
        Self::with_chunk_size(cursor, DEFAULT_CHUNK_SIZE)
    }

    /// Wrap `cursor`, growing the buffer `chunk_size` digits at a time
    pub fn with_chunk_size<I>(cursor: I, chunk_size: usize) -> Self
    where
        I: Iterator<Item = u8> + Send + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(State::default()),
            grow: Condvar::new(),
            advanced: Condvar::new(),
            chunk_size: chunk_size.max(1),
        });

        let producer = Arc::clone(&shared);
        let spawned = thread::Builder::new()
            .name("rootdigits-memo".to_string())
            .spawn(move || produce(producer, cursor));

        match spawned {
            Ok(_) => debug!(chunk_size = shared.chunk_size, "Started digit producer"),
            Err(e) => {
                // Without a producer the sequence can never grow.
                warn!(error = %e, "Failed to spawn digit producer");
                shared.lock().done = true;
            }
        }

        Self { shared }
    }

    /// Digit at `index`, or `None` past the end of a finite sequence
    pub fn at(&self, index: usize) -> Option<u8> {
        let state = self.shared.wait_for(index);
        state.digits.get(index).copied()
    }

    /// Up to `n` leading digits; fewer only if the sequence is shorter
    pub fn first_n(&self, n: usize) -> Vec<u8> {
        if n == 0 {
            return Vec::new();
        }
        let state = self.shared.wait_for(n - 1);
        state.digits[..n.min(state.digits.len())].to_vec()
    }

    /// Forward iterator over digits starting at `start`
    pub fn digits_from(&self, start: usize) -> MemoIter<'_> {
        MemoIter {
            shared: &self.shared,
            next: start,
            buffer: Vec::new(),
            offset: 0,
        }
    }

    /// Backward iterator over digits at positions `< end`, last first.
    /// Positions past the end of a finite sequence are skipped.
    pub fn digits_before(&self, end: usize) -> MemoBackIter<'_> {
        MemoBackIter {
            shared: &self.shared,
            end,
            buffer: Vec::new(),
        }
    }

    /// Number of digits published so far
    pub fn len_hint(&self) -> usize {
        self.shared.lock().digits.len()
    }

    /// Whether the wrapped cursor has been exhausted
    pub fn is_done(&self) -> bool {
        self.shared.lock().done
    }

    /// Total length, computing the whole sequence first. Never returns for
    /// an infinite cursor; callers bound it by truncating the source.
    pub fn len_to_end(&self) -> usize {
        let mut state = self.shared.lock();
        while !state.done {
            let len = state.digits.len();
            if len >= state.requested {
                state.requested = len + self.shared.chunk_size;
                self.shared.grow.notify_one();
            }
            state = self
                .shared
                .advanced
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
        state.digits.len()
    }
}

impl Drop for Memoizer {
    fn drop(&mut self) {
        let mut state = self.shared.lock();
        state.closed = true;
        self.shared.grow.notify_all();
    }
}

impl Sequence for Memoizer {
    type Iter<'a> = std::iter::Zip<std::ops::RangeFrom<usize>, MemoIter<'a>>;

    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        (start..).zip(self.digits_from(start))
    }
}

/// Forward iterator over a [`Memoizer`]
///
/// Copies published digits in chunk-sized batches so most calls to `next`
/// do not take the lock.
#[derive(Debug)]
pub struct MemoIter<'a> {
    shared: &'a Shared,
    next: usize,
    buffer: Vec<u8>,
    offset: usize,
}

impl Iterator for MemoIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.offset == self.buffer.len() {
            self.buffer.clear();
            self.offset = 0;
            self.shared
                .copy_from(self.next, self.shared.chunk_size, &mut self.buffer);
        }
        let digit = *self.buffer.get(self.offset)?;
        self.offset += 1;
        self.next += 1;
        Some(digit)
    }
}

/// Backward iterator over a [`Memoizer`], yielding `(position, digit)`
#[derive(Debug)]
pub struct MemoBackIter<'a> {
    shared: &'a Shared,
    end: usize,
    buffer: Vec<u8>,
}

impl Iterator for MemoBackIter<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<(usize, u8)> {
        if self.buffer.is_empty() {
            if self.end == 0 {
                return None;
            }
            let state = self.shared.wait_for(self.end - 1);
            self.end = self.end.min(state.digits.len());
            let start = self.end.saturating_sub(self.shared.chunk_size);
            self.buffer.extend_from_slice(&state.digits[start..self.end]);
            if self.buffer.is_empty() {
                return None;
            }
        }
        let digit = self.buffer.pop()?;
        self.end -= 1;
        Some((self.end, digit))
    }
}
