//! Scripted [`TwoWireMaster`] for unit tests.
//!
//! Records every issued bus operation and answers from pre-programmed
//! queues. Bytes sent are acknowledged unless their position (counted from
//! zero across the whole test) was marked with [`ScriptedMaster::nack_at`].
//!
//! Operations issued while the previous one is still busy are counted in
//! `issued_while_busy` instead of panicking, so tests can assert on it.

use crate::bus::{Ack, TwoWireMaster};
use std::collections::VecDeque;

/// One issued bus operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Restart,
    Stop,
    Abort,
    Send(u8),
    Receive(Ack),
}

#[derive(Debug, Default)]
pub struct ScriptedMaster {
    events: Vec<Event>,
    rx: VecDeque<u8>,
    nacks: Vec<usize>,
    sent: usize,
    last_ack: Option<Ack>,
    last_rx: u8,
    stuck_after: Option<usize>,
    aborted: bool,
    busy_for: u32,
    pending: u32,
    pub busy_polls: u32,
    pub issued_while_busy: u32,
}

impl ScriptedMaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes the slave will return on subsequent receives.
    pub fn with_rx(mut self, bytes: &[u8]) -> Self {
        self.rx.extend(bytes.iter().copied());
        self
    }

    /// Make the slave not-acknowledge the `index`-th byte sent.
    pub fn nack_at(mut self, index: usize) -> Self {
        self.nacks.push(index);
        self
    }

    /// Let the first `count` operations complete, then report busy forever.
    pub fn stuck_after(mut self, count: usize) -> Self {
        self.stuck_after = Some(count);
        self
    }

    /// Keep every operation busy for `polls` polls before it completes.
    pub fn busy_for(mut self, polls: u32) -> Self {
        self.busy_for = polls;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn stuck(&self) -> bool {
        !self.aborted && matches!(self.stuck_after, Some(count) if self.events.len() > count)
    }

    fn issue(&mut self, event: Event) {
        if self.stuck() || self.pending > 0 {
            self.issued_while_busy += 1;
        }
        self.events.push(event);
        self.pending = self.busy_for;
    }
}

impl TwoWireMaster for ScriptedMaster {
    fn start(&mut self) {
        self.issue(Event::Start);
    }

    fn restart(&mut self) {
        self.issue(Event::Restart);
    }

    fn stop(&mut self) {
        self.issue(Event::Stop);
    }

    fn abort(&mut self) {
        self.events.push(Event::Abort);
        self.aborted = true;
        self.pending = 0;
    }

    fn send(&mut self, byte: u8) {
        self.issue(Event::Send(byte));
        self.last_ack = Some(if self.nacks.contains(&self.sent) {
            Ack::Nack
        } else {
            Ack::Ack
        });
        self.sent += 1;
    }

    fn receive(&mut self, reply: Ack) {
        self.issue(Event::Receive(reply));
        self.last_rx = self.rx.pop_front().unwrap_or(0xFF);
    }

    fn is_busy(&mut self) -> bool {
        self.busy_polls += 1;
        if self.stuck() {
            return true;
        }
        if self.pending > 0 {
            self.pending -= 1;
            return true;
        }
        false
    }

    fn ack_status(&mut self) -> Ack {
        self.last_ack.unwrap_or(Ack::Nack)
    }

    fn received(&mut self) -> u8 {
        self.last_rx
    }
}
