use galena_common::Shared;

/// Aggregated controller outputs, one bit per processor interrupt input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub irq: bool,
    pub fiq: bool,
}

/// Handle to the output signals. The controller writes through its copy on
/// every state change; the processor model polls a clone of the same cell.
pub type SharedSignals = Shared<Signals>;
