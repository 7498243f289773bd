// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! In-memory register models used by the host tests.

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::IoBus;
use crate::board::{SLOT_WORDS, SYS_CLK_FREQ_MHZ};

/// Shared tick counter standing in for the system timer.
pub type Clock = Rc<Cell<u64>>;

pub fn clock() -> Clock {
    Rc::new(Cell::new(0))
}

/// Convert a tick count of the simulated clock into milliseconds.
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks / (SYS_CLK_FREQ_MHZ as u64 * 1000)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Write {
    pub at: u64,
    pub reg: usize,
    pub data: u32,
}

#[derive(Default)]
pub struct SlotState {
    pub regs: [u32; SLOT_WORDS],
    pub writes: Vec<Write>,
}

/// Plain register file: reads return the last written (or preset) value.
#[derive(Clone)]
pub struct SimSlot {
    state: Rc<RefCell<SlotState>>,
    clock: Clock,
}

impl SimSlot {
    pub fn new() -> Self {
        Self::with_clock(clock())
    }

    /// Time-stamp every write with `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            state: Rc::new(RefCell::new(SlotState::default())),
            clock,
        }
    }

    pub fn set(&self, reg: usize, data: u32) {
        self.state.borrow_mut().regs[reg] = data;
    }

    pub fn get(&self, reg: usize) -> u32 {
        self.state.borrow().regs[reg]
    }

    pub fn writes(&self) -> Vec<Write> {
        self.state.borrow().writes.clone()
    }

    /// Values written to `reg`, in order.
    pub fn written(&self, reg: usize) -> Vec<u32> {
        self.state
            .borrow()
            .writes
            .iter()
            .filter(|w| w.reg == reg)
            .map(|w| w.data)
            .collect()
    }

    pub fn clear_writes(&self) {
        self.state.borrow_mut().writes.clear();
    }
}

impl IoBus for SimSlot {
    fn read_reg(&mut self, reg: usize) -> u32 {
        self.state.borrow().regs[reg]
    }

    fn write_reg(&mut self, reg: usize, data: u32) {
        let at = self.clock.get();
        let mut state = self.state.borrow_mut();
        state.regs[reg] = data;
        state.writes.push(Write { at, reg, data });
    }
}

/// Free-running 48-bit counter that advances `step` ticks on every low-word read.
#[derive(Clone)]
pub struct SimTimer {
    clock: Clock,
    step: u64,
    ctrl: u32,
}

impl SimTimer {
    pub fn new(clock: Clock, step: u64) -> Self {
        Self {
            clock,
            step,
            ctrl: 0,
        }
    }
}

impl IoBus for SimTimer {
    fn read_reg(&mut self, reg: usize) -> u32 {
        match reg {
            0 => {
                if self.ctrl & 0x01 != 0 {
                    self.clock.set(self.clock.get() + self.step);
                }
                self.clock.get() as u32
            }
            1 => (self.clock.get() >> 32) as u32 & 0xffff,
            2 => self.ctrl,
            _ => 0,
        }
    }

    fn write_reg(&mut self, reg: usize, data: u32) {
        if reg == 2 {
            self.ctrl = data;
            if data & 0x02 != 0 {
                self.clock.set(0);
            }
        }
    }
}

#[derive(Default)]
pub struct SpiState {
    pub ss_n: u32,
    pub ctrl: u32,
    /// Bytes shifted out, with the SS_n value active during each.
    pub mosi: Vec<(u32, u8)>,
    /// Bytes the slave returns, in order; 0 once exhausted.
    pub miso: VecDeque<u8>,
    rx: u8,
}

/// SPI master core with an always-ready shifter and a scripted slave.
#[derive(Clone, Default)]
pub struct SimSpi {
    state: Rc<RefCell<SpiState>>,
}

impl SimSpi {
    pub fn new(miso: &[u8]) -> Self {
        let sim = Self::default();
        sim.state.borrow_mut().miso.extend(miso.iter().copied());
        sim
    }

    pub fn state(&self) -> Ref<'_, SpiState> {
        self.state.borrow()
    }

    /// Bytes shifted out while `ss_n` was low, grouped into transactions.
    pub fn transactions(&self, ss: usize) -> Vec<Vec<u8>> {
        let mut out: Vec<Vec<u8>> = Vec::new();
        let mut prev_selected = false;
        for &(ss_n, byte) in &self.state.borrow().mosi {
            let selected = ss_n & (1u32 << ss) == 0;
            if selected {
                if !prev_selected {
                    out.push(Vec::new());
                }
                if let Some(t) = out.last_mut() {
                    t.push(byte);
                }
            }
            prev_selected = selected;
        }
        out
    }

    /// Mark a chip-select boundary so back-to-back transactions stay separate.
    fn note_ss(&self) {
        self.state.borrow_mut().mosi.push((u32::MAX, 0));
    }
}

impl IoBus for SimSpi {
    fn read_reg(&mut self, reg: usize) -> u32 {
        let state = self.state.borrow();
        match reg {
            0 => 0x100 | state.rx as u32,
            1 => state.ss_n,
            3 => state.ctrl,
            _ => 0,
        }
    }

    fn write_reg(&mut self, reg: usize, data: u32) {
        match reg {
            1 => {
                self.state.borrow_mut().ss_n = data;
                self.note_ss();
            }
            2 => {
                let mut state = self.state.borrow_mut();
                let ss_n = state.ss_n;
                state.mosi.push((ss_n, data as u8));
                state.rx = state.miso.pop_front().unwrap_or(0);
            }
            3 => self.state.borrow_mut().ctrl = data,
            _ => {}
        }
    }
}

#[derive(Default)]
pub struct UartState {
    pub dvsr: u32,
    pub tx: Vec<u8>,
    pub rx: VecDeque<u8>,
}

/// UART core whose transmitter never fills and whose receiver is fed from a queue.
#[derive(Clone, Default)]
pub struct SimUart {
    state: Rc<RefCell<UartState>>,
}

impl SimUart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&self, bytes: &[u8]) {
        self.state.borrow_mut().rx.extend(bytes.iter().copied());
    }

    pub fn dvsr(&self) -> u32 {
        self.state.borrow().dvsr
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().tx).into_owned()
    }
}

impl IoBus for SimUart {
    fn read_reg(&mut self, reg: usize) -> u32 {
        let state = self.state.borrow();
        match (reg, state.rx.front()) {
            (0, Some(&b)) => b as u32,
            (0, None) => 0x100,
            _ => 0,
        }
    }

    fn write_reg(&mut self, reg: usize, data: u32) {
        let mut state = self.state.borrow_mut();
        match reg {
            1 => state.dvsr = data,
            2 => state.tx.push(data as u8),
            3 => {
                state.rx.pop_front();
            }
            _ => {}
        }
    }
}
