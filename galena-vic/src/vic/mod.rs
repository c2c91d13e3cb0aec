mod lines;
mod priority;
pub mod registers;

pub use lines::{Lines, NUM_LINES};
pub use priority::{PriorityStack, PriorityTable, IDLE_PRIORITY, NUM_VECTORS};

use crate::signal::{SharedSignals, Signals};
use log::warn;
use registers::Register;

/// Vectored interrupt controller: 32 input lines, 32 priority-ordered
/// vector slots, an IRQ output gated by the serviced priority, and an FIQ
/// output that bypasses priority entirely.
///
/// The register frame is exposed through [`Vic::read`] and [`Vic::write`];
/// peripherals drive lines through [`Vic::set_line`]. Both output signals
/// are republished after every state change.
pub struct Vic {
    lines: Lines,
    table: PriorityTable,
    stack: PriorityStack,
    irq_enable: u32,
    fiq_select: u32,
    protection: bool,
    signals: SharedSignals,
}

impl Vic {
    pub fn new(signals: SharedSignals) -> Vic {
        let mut vic = Vic {
            lines: Lines::new(),
            table: PriorityTable::new(),
            stack: PriorityStack::new(),
            irq_enable: 0,
            fiq_select: 0,
            protection: false,
            signals,
        };
        vic.update();
        vic
    }

    /// Overwrites the level of one input line.
    pub fn set_line(&mut self, id: usize, level: bool) {
        self.lines.set_line(id, level);
        self.update();
    }

    /// Current output signal state, as the processor model sees it.
    pub fn signals(&self) -> Signals {
        self.signals.get()
    }

    /// Returns the controller to its post-reset state: slot table and
    /// default vector zeroed, masks rebuilt empty, priority stack idle.
    /// Line levels, enables, and routing are left alone; lines are driven
    /// from outside and the routing registers keep their values across a
    /// controller reset.
    pub fn reset(&mut self) {
        self.table.reset();
        self.stack.reset();
        self.update();
    }

    /// Pending lines that are enabled and not routed to FIQ.
    fn irq_level(&self) -> u32 {
        self.lines.combined() & self.irq_enable & !self.fiq_select
    }

    /// Recomputes both output signals. Runs after every mutation.
    fn update(&mut self) {
        let irq = self.irq_level() & self.table.mask(self.stack.current()) != 0;
        let fiq = self.lines.combined() & self.fiq_select != 0;
        self.signals.set(Signals { irq, fiq });
    }

    /// Vector fetch, the read half of the VECTADDR protocol.
    ///
    /// Scans priority positions from the top for an enabled pending line
    /// ranked above the serviced level; claiming one saves the old level
    /// and elevates. Re-reading before the matching restore lands on the
    /// serviced level itself and returns its address unchanged. From idle
    /// with nothing vectored pending, the default address is returned and
    /// nothing else happens.
    fn fetch(&mut self) -> u32 {
        let pending = self.irq_level();
        let mut level = 0;
        while level < self.stack.current() && pending & self.table.mask(level + 1) == 0 {
            level += 1;
        }
        if level == IDLE_PRIORITY {
            return self.table.default_address();
        }
        if level < self.stack.current() {
            self.stack.elevate(level);
            self.update();
        }
        self.table.address(self.stack.current())
    }

    /// Register read at a byte offset. Unmapped offsets read as zero.
    pub fn read(&mut self, offset: u32) -> u32 {
        let reg = match Register::decode(offset) {
            Some(reg) => reg,
            None => {
                warn!("read of unmapped offset {:#05X}", offset);
                return 0;
            }
        };

        match reg {
            Register::IrqStatus => self.irq_level(),
            Register::FiqStatus => self.lines.combined() & self.fiq_select,
            Register::RawIntr => self.lines.combined(),
            Register::IntSelect => self.fiq_select,
            Register::IntEnable => self.irq_enable,
            Register::SoftInt => self.lines.soft(),
            Register::Protection => self.protection as u32,
            Register::VectAddr => self.fetch(),
            Register::DefVectAddr => self.table.default_address(),
            Register::VectorAddress(slot) => self.table.address(slot),
            Register::VectorControl(slot) => self.table.control(slot),
            Register::Id(word) => registers::PERIPHERAL_ID[word] as u32,
            Register::IntEnClear | Register::SoftIntClear | Register::TestControl => {
                warn!("read of write-only offset {:#05X}", offset);
                0
            }
        }
    }

    /// Register write at a byte offset. Unmapped and read-only offsets are
    /// dropped; every accepted write ends in an output recompute.
    pub fn write(&mut self, offset: u32, value: u32) {
        let reg = match Register::decode(offset) {
            Some(reg) => reg,
            None => {
                warn!("write of unmapped offset {:#05X}", offset);
                return;
            }
        };

        match reg {
            // Read-only, but guests write it anyway. Discard quietly.
            Register::IrqStatus => {}
            Register::IntSelect => self.fiq_select = value,
            Register::IntEnable => self.irq_enable |= value,
            Register::IntEnClear => self.irq_enable &= !value,
            Register::SoftInt => self.lines.soft_set(value),
            Register::SoftIntClear => self.lines.soft_clear(value),
            Register::Protection => self.protection = value & 1 != 0,
            // The restore half of the VECTADDR protocol; the value is
            // ignored and writing while idle does nothing.
            Register::VectAddr => self.stack.restore(),
            Register::DefVectAddr => self.table.set_default_address(value),
            Register::VectorAddress(slot) => self.table.write_address(slot, value),
            Register::VectorControl(slot) => self.table.write_control(slot, value),
            Register::TestControl => {
                if value != 0 {
                    warn!("test mode is not implemented");
                }
            }
            Register::FiqStatus | Register::RawIntr | Register::Id(_) => {
                warn!("write of read-only offset {:#05X}", offset);
                return;
            }
        }
        self.update();
    }
}
