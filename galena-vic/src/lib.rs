//! Model of a PrimeCell-style vectored interrupt controller.
//!
//! The controller aggregates 32 interrupt lines, ranks them through 32
//! configurable vector slots, and drives two output signals: IRQ, filtered
//! by the priority of whatever is currently being serviced, and FIQ, which
//! bypasses priority entirely. Interrupt-entry code reads the vector
//! address register to claim the highest-ranked pending interrupt and
//! writes it back to return to the preempted level.

pub mod signal;
pub mod vic;

pub use signal::{SharedSignals, Signals};
pub use vic::Vic;
