#![allow(dead_code)]

use std::collections::VecDeque;

use randkit::{EntropySource, RandomError, Result};

/// Replays a fixed byte sequence, then fails.
pub struct ScriptedSource {
    bytes: VecDeque<u8>,
    pub drawn: usize,
}

impl ScriptedSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            drawn: 0,
        }
    }
}

impl EntropySource for ScriptedSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self
                .bytes
                .pop_front()
                .ok_or_else(|| RandomError::EntropyUnavailable("script exhausted".into()))?;
            self.drawn += 1;
        }
        Ok(())
    }
}

/// Yields 0, 1, ..., 255, 0, 1, ... forever.
#[derive(Default)]
pub struct CycleSource {
    next: u8,
    pub drawn: usize,
}

impl EntropySource for CycleSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self.next;
            self.next = self.next.wrapping_add(1);
            self.drawn += 1;
        }
        Ok(())
    }
}

/// Always yields the same byte.
pub struct ConstantSource(pub u8);

impl EntropySource for ConstantSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Counts requests and bytes passed through to an inner source.
pub struct CountingSource<S> {
    pub inner: S,
    pub calls: usize,
    pub bytes: usize,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: 0,
            bytes: 0,
        }
    }
}

impl<S: EntropySource> EntropySource for CountingSource<S> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.calls += 1;
        self.bytes += dest.len();
        self.inner.fill_bytes(dest)
    }
}

/// A source whose backing device is gone.
pub struct FailingSource;

impl EntropySource for FailingSource {
    fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<()> {
        Err(RandomError::EntropyUnavailable("device unavailable".into()))
    }
}
