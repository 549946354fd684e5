//! Polled two-wire bus master protocol engine.
//!
//! Frames register transactions on top of a [`TwoWireMaster`]:
//!
//! ```text
//! write:       S | ADDR+W a | REG a | DATA a ...        | P
//! burst read:  S | ADDR+W a | REG a | Sr | ADDR+R a | DATA A ... DATA N | P
//! ```
//!
//! (`a` is the slave's acknowledge, `A`/`N` the master's acknowledge or
//! not-acknowledge.) Every phase is issued and then polled to completion
//! before the next one starts. The engine keeps no state between calls
//! beyond its configuration.

use crate::{
    bus::{Ack, Direction, TwoWireMaster},
    config::{BusConfig, NackPolicy, WaitPolicy},
    error::Error,
};

/// Longest burst the engine frames in one transaction.
pub const MAX_BURST_LEN: usize = 32;

/// Step of a transaction, reported with every fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Phase {
    Start,
    AddressWrite,
    Register,
    Data,
    Restart,
    AddressRead,
    Receive,
    Stop,
}

/// Transport failure of the polled engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Fault {
    /// The slave did not acknowledge the byte sent during this phase.
    Nack(Phase),
    /// The peripheral stayed busy for longer than the wait policy allows.
    Timeout(Phase),
}

/// Single-master engine talking to one 7-bit addressed slave.
pub struct TwoWireEngine<M> {
    master: M,
    config: BusConfig,
}

impl<M> TwoWireEngine<M>
where
    M: TwoWireMaster,
{
    pub fn new(master: M, config: BusConfig) -> Self {
        Self { master, config }
    }

    /// Returns the underlying peripheral, consuming this engine.
    pub fn release(self) -> M {
        self.master
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Write one byte to `register`.
    pub fn write(&mut self, register: u8, value: u8) -> Result<(), Error<Fault>> {
        self.burst_write(register, &[value])
    }

    /// Read one byte from `register`. The byte is answered with a
    /// not-acknowledge.
    pub fn read(&mut self, register: u8) -> Result<u8, Error<Fault>> {
        let mut buf = [0; 1];
        self.burst_read(register, &mut buf)?;
        Ok(buf[0])
    }

    /// Fill `buf` from consecutive registers starting at `register`.
    ///
    /// Every byte but the last is acknowledged; the last one gets a
    /// not-acknowledge so the slave releases the bus before the stop.
    pub fn burst_read(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<Fault>> {
        check_len(buf.len())?;
        trace!("burst read {} bytes from {}", buf.len(), register);

        self.select(register)?;
        self.condition(Phase::Restart)?;
        let header = self.config.address.header(Direction::Read);
        self.transmit(header, Phase::AddressRead)?;

        let last = buf.len() - 1;
        for (i, slot) in buf.iter_mut().enumerate() {
            let reply = if i == last { Ack::Nack } else { Ack::Ack };
            *slot = self.clock_in(reply)?;
        }

        self.condition(Phase::Stop)
    }

    /// Write `data` to consecutive registers starting at `register`, each
    /// byte individually acknowledged.
    pub fn burst_write(&mut self, register: u8, data: &[u8]) -> Result<(), Error<Fault>> {
        check_len(data.len())?;
        trace!("burst write {} bytes to {}", data.len(), register);

        self.select(register)?;
        for &byte in data {
            self.transmit(byte, Phase::Data)?;
        }

        self.condition(Phase::Stop)
    }

    /// Start, address the slave for writing and send the register pointer.
    fn select(&mut self, register: u8) -> Result<(), Error<Fault>> {
        self.condition(Phase::Start)?;
        let header = self.config.address.header(Direction::Write);
        self.transmit(header, Phase::AddressWrite)?;
        self.transmit(register, Phase::Register)
    }

    fn condition(&mut self, phase: Phase) -> Result<(), Error<Fault>> {
        match phase {
            Phase::Start => self.master.start(),
            Phase::Restart => self.master.restart(),
            _ => self.master.stop(),
        }
        self.complete(phase)
    }

    fn transmit(&mut self, byte: u8, phase: Phase) -> Result<(), Error<Fault>> {
        self.master.send(byte);
        self.complete(phase)?;

        if self.master.ack_status() == Ack::Nack {
            match self.config.nack {
                NackPolicy::Abort => {
                    warn!("nack during {:?}, aborting", phase);
                    self.abandon();
                    return Err(Error::Bus(Fault::Nack(phase)));
                }
                NackPolicy::Continue => {
                    warn!("nack during {:?}, continuing", phase);
                }
            }
        }
        Ok(())
    }

    fn clock_in(&mut self, reply: Ack) -> Result<u8, Error<Fault>> {
        self.master.receive(reply);
        self.complete(Phase::Receive)?;
        Ok(self.master.received())
    }

    /// Wait for `phase` to finish; on timeout abort the pending operation
    /// and fail. The peripheral is still busy at that point, so `abort` is
    /// the only primitive it may be handed.
    fn complete(&mut self, phase: Phase) -> Result<(), Error<Fault>> {
        if self.wait() {
            return Ok(());
        }
        warn!("bus stuck during {:?}", phase);
        self.master.abort();
        Err(Error::Bus(Fault::Timeout(phase)))
    }

    /// Best-effort stop after a not-acknowledged phase. The peripheral is
    /// idle here.
    fn abandon(&mut self) {
        self.master.stop();
        let _ = self.wait();
    }

    /// `false` if the wait policy ran out before the peripheral went idle.
    fn wait(&mut self) -> bool {
        match self.config.wait {
            WaitPolicy::Unbounded => {
                while self.master.is_busy() {
                    core::hint::spin_loop();
                }
                true
            }
            WaitPolicy::Bounded { polls } => {
                for _ in 0..polls {
                    if !self.master.is_busy() {
                        return true;
                    }
                    core::hint::spin_loop();
                }
                false
            }
        }
    }
}

fn check_len(len: usize) -> Result<(), Error<Fault>> {
    if len == 0 || len > MAX_BURST_LEN {
        Err(Error::InvalidParameter)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        address::Address,
        testing::{Event, ScriptedMaster},
    };

    fn engine(master: ScriptedMaster) -> TwoWireEngine<ScriptedMaster> {
        TwoWireEngine::new(master, BusConfig::default())
    }

    #[test]
    fn write_frames_single_byte() {
        let mut bus = engine(ScriptedMaster::new());
        bus.write(0x6B, 0x00).unwrap();

        assert_eq!(
            bus.release().events(),
            &[
                Event::Start,
                Event::Send(0xD0),
                Event::Send(0x6B),
                Event::Send(0x00),
                Event::Stop,
            ]
        );
    }

    #[test]
    fn read_ends_with_nack_and_stop() {
        let mut bus = engine(ScriptedMaster::new().with_rx(&[0x68]));
        assert_eq!(bus.read(0x75).unwrap(), 0x68);

        assert_eq!(
            bus.release().events(),
            &[
                Event::Start,
                Event::Send(0xD0),
                Event::Send(0x75),
                Event::Restart,
                Event::Send(0xD1),
                Event::Receive(Ack::Nack),
                Event::Stop,
            ]
        );
    }

    #[test]
    fn burst_read_acknowledges_all_but_last() {
        let data = [0x00, 0x64, 0xFF, 0x9C, 0x12, 0x34];
        let mut bus = engine(ScriptedMaster::new().with_rx(&data));
        let mut buf = [0; 6];
        bus.burst_read(0x43, &mut buf).unwrap();
        assert_eq!(buf, data);

        let master = bus.release();
        let replies: Vec<Ack> = master
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Receive(reply) => Some(*reply),
                _ => None,
            })
            .collect();
        assert_eq!(
            replies,
            [Ack::Ack, Ack::Ack, Ack::Ack, Ack::Ack, Ack::Ack, Ack::Nack]
        );
        assert_eq!(master.events().last(), Some(&Event::Stop));
    }

    #[test]
    fn burst_write_sends_every_byte_before_stop() {
        let mut bus = engine(ScriptedMaster::new());
        bus.burst_write(0x13, &[0x01, 0x02, 0x03]).unwrap();

        assert_eq!(
            bus.release().events(),
            &[
                Event::Start,
                Event::Send(0xD0),
                Event::Send(0x13),
                Event::Send(0x01),
                Event::Send(0x02),
                Event::Send(0x03),
                Event::Stop,
            ]
        );
    }

    #[test]
    fn nack_on_address_aborts_with_stop() {
        let mut bus = engine(ScriptedMaster::new().nack_at(0));
        assert_eq!(
            bus.read(0x75),
            Err(Error::Bus(Fault::Nack(Phase::AddressWrite)))
        );
        assert_eq!(
            bus.release().events(),
            &[Event::Start, Event::Send(0xD0), Event::Stop]
        );
    }

    #[test]
    fn nack_on_data_byte_aborts_burst_write() {
        // header, register, first data byte, second data byte
        let mut bus = engine(ScriptedMaster::new().nack_at(3));
        assert_eq!(
            bus.burst_write(0x13, &[0x01, 0x02, 0x03]),
            Err(Error::Bus(Fault::Nack(Phase::Data)))
        );
        let master = bus.release();
        assert!(!master.events().contains(&Event::Send(0x03)));
        assert_eq!(master.events().last(), Some(&Event::Stop));
    }

    #[test]
    fn continue_policy_completes_framing_after_nack() {
        let config = BusConfig::default().with_nack(NackPolicy::Continue);
        let master = ScriptedMaster::new().with_rx(&[0x42]).nack_at(2);
        let mut bus = TwoWireEngine::new(master, config);

        assert_eq!(bus.read(0x75).unwrap(), 0x42);
        assert_eq!(bus.release().events().len(), 7);
    }

    #[test]
    fn bounded_wait_times_out_and_releases_bus() {
        let config = BusConfig::default().with_wait(WaitPolicy::Bounded { polls: 5 });
        let mut bus = TwoWireEngine::new(ScriptedMaster::new().stuck_after(0), config);

        assert_eq!(
            bus.write(0x6B, 0x00),
            Err(Error::Bus(Fault::Timeout(Phase::Start)))
        );
        let master = bus.release();
        assert_eq!(master.events(), &[Event::Start, Event::Abort]);
        assert_eq!(master.busy_polls, 5);
        assert_eq!(master.issued_while_busy, 0);
    }

    #[test]
    fn timeout_mid_transaction_reports_phase() {
        let config = BusConfig::default().with_wait(WaitPolicy::Bounded { polls: 3 });
        // start and address header complete, register byte hangs
        let mut bus = TwoWireEngine::new(ScriptedMaster::new().stuck_after(2), config);

        assert_eq!(
            bus.read(0x75),
            Err(Error::Bus(Fault::Timeout(Phase::Register)))
        );
        let master = bus.release();
        assert_eq!(master.events().last(), Some(&Event::Abort));
        assert_eq!(master.issued_while_busy, 0);
    }

    #[test]
    fn unbounded_wait_outlasts_slow_peripheral() {
        // every phase takes longer than the default bound allows
        let mut master = ScriptedMaster::new().busy_for(20_000).with_rx(&[0x68]);

        let config = BusConfig::default().with_wait(WaitPolicy::Unbounded);
        assert_eq!(TwoWireEngine::new(&mut master, config).read(0x75), Ok(0x68));
        assert_eq!(master.events().len(), 7);
        assert_eq!(master.events().last(), Some(&Event::Stop));
        assert_eq!(master.busy_polls, 7 * 20_001);
        assert_eq!(master.issued_while_busy, 0);

        let mut master = ScriptedMaster::new().busy_for(20_000).with_rx(&[0x68]);
        assert_eq!(
            TwoWireEngine::new(&mut master, BusConfig::default()).read(0x75),
            Err(Error::Bus(Fault::Timeout(Phase::Start)))
        );
        assert_eq!(master.events(), &[Event::Start, Event::Abort]);
        assert_eq!(master.busy_polls, 10_000);
        assert_eq!(master.issued_while_busy, 0);
    }

    #[test]
    fn invalid_lengths_touch_nothing() {
        let mut bus = engine(ScriptedMaster::new());
        let mut empty = [0u8; 0];
        let mut huge = [0u8; MAX_BURST_LEN + 1];

        assert_eq!(bus.burst_read(0x43, &mut empty), Err(Error::InvalidParameter));
        assert_eq!(bus.burst_read(0x43, &mut huge), Err(Error::InvalidParameter));
        assert_eq!(bus.burst_write(0x13, &[]), Err(Error::InvalidParameter));
        assert!(bus.release().events().is_empty());
    }

    #[test]
    fn alternate_address_is_used_in_headers() {
        let config = BusConfig::default().with_address(Address::ALTERNATE);
        let mut bus = TwoWireEngine::new(ScriptedMaster::new().with_rx(&[0]), config);
        bus.read(0x75).unwrap();

        let events = bus.release();
        assert_eq!(events.events()[1], Event::Send(0xD2));
        assert_eq!(events.events()[4], Event::Send(0xD3));
    }
}
