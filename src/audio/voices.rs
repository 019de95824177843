//! The set of sinks currently sounding.
//!
//! rodio's mixer sums every connected sink, so keeping several alive is all
//! it takes to play tracks on top of each other.

use rodio::Sink;

/// Something that plays until it drains or is halted.
pub(super) trait Voice {
    fn is_done(&self) -> bool;
    fn halt(&self);
}

impl Voice for Sink {
    fn is_done(&self) -> bool {
        self.empty()
    }

    fn halt(&self) {
        self.stop();
    }
}

#[derive(Debug)]
pub(super) struct Voices<V> {
    active: Vec<V>,
}

impl<V> Default for Voices<V> {
    fn default() -> Self {
        Self { active: Vec::new() }
    }
}

impl<V: Voice> Voices<V> {
    /// Add `voice` alongside the others, dropping any that already finished.
    pub(super) fn add(&mut self, voice: V) {
        self.active.retain(|v| !v.is_done());
        self.active.push(voice);
    }

    /// Halt every voice. Returns how many were still held.
    pub(super) fn halt_all(&mut self) -> usize {
        let n = self.active.len();
        for v in self.active.drain(..) {
            v.halt();
        }
        n
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &V> {
        self.active.iter()
    }

    pub(super) fn len(&self) -> usize {
        self.active.len()
    }
}
