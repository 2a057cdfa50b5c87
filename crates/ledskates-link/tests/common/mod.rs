//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use embassy_time::Instant;
use ledskates_link::{DatagramSink, DatagramSource, EffectEngine};

const MODE_NAMES: [&str; 4] = ["Static", "Blink", "Breath", "Rainbow"];

/// In-memory effect engine with a configurable mode count
#[derive(Debug, Clone)]
pub struct FakeEngine {
    pub color: u32,
    pub mode: u8,
    pub mode_count: u8,
    pub brightness: u8,
    pub speed: u16,
    pub ticks: u32,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::with_mode_count(MODE_NAMES.len() as u8)
    }

    pub fn with_mode_count(mode_count: u8) -> Self {
        Self {
            color: 0x00FF00,
            mode: 0,
            mode_count,
            brightness: 128,
            speed: 1000,
            ticks: 0,
        }
    }
}

impl EffectEngine for FakeEngine {
    fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    fn set_mode(&mut self, mode: u8) {
        assert!(mode < self.mode_count, "mode {mode} out of range");
        self.mode = mode;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn set_speed(&mut self, speed: u16) {
        self.speed = speed;
    }

    fn color(&self) -> u32 {
        self.color
    }

    fn mode(&self) -> u8 {
        self.mode
    }

    fn mode_count(&self) -> u8 {
        self.mode_count
    }

    fn mode_name(&self, mode: u8) -> &str {
        MODE_NAMES.get(usize::from(mode)).copied().unwrap_or("Custom")
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn speed(&self) -> u16 {
        self.speed
    }

    fn tick(&mut self, _now: Instant) {
        self.ticks += 1;
    }
}

/// Sink recording every datagram it is asked to send
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub sent: Vec<Vec<u8>>,
    pub fail: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SinkDown;

impl DatagramSink for RecordingSink {
    type Error = SinkDown;

    fn send_datagram(&mut self, payload: &[u8]) -> Result<(), SinkDown> {
        if self.fail {
            return Err(SinkDown);
        }
        self.sent.push(payload.to_vec());
        Ok(())
    }
}

/// Source handing out queued datagrams, one per receive call.
///
/// Like a datagram socket, it reports the full length of a payload that does
/// not fit the receive buffer.
#[derive(Debug, Default)]
pub struct QueuedSource {
    pub pending: VecDeque<Result<Vec<u8>, SourceDown>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDown;

impl QueuedSource {
    pub fn push(&mut self, payload: &[u8]) {
        self.pending.push_back(Ok(payload.to_vec()));
    }

    pub fn push_error(&mut self) {
        self.pending.push_back(Err(SourceDown));
    }
}

impl DatagramSource for QueuedSource {
    type Error = SourceDown;

    fn try_recv_datagram(&mut self, buf: &mut [u8]) -> Result<Option<usize>, SourceDown> {
        match self.pending.pop_front() {
            None => Ok(None),
            Some(Err(e)) => Err(e),
            Some(Ok(payload)) => {
                let copied = payload.len().min(buf.len());
                buf[..copied].copy_from_slice(&payload[..copied]);
                Ok(Some(payload.len()))
            }
        }
    }
}

pub fn at(millis: u64) -> Instant {
    Instant::from_millis(millis)
}
