use super::priority::NUM_VECTORS;
use galena_common::BitIndex;
use static_assertions::const_assert_eq;

pub const IRQ_STATUS: u32 = 0x000;
pub const FIQ_STATUS: u32 = 0x004;
pub const RAW_INTR: u32 = 0x008;
pub const INT_SELECT: u32 = 0x00C;
pub const INT_ENABLE: u32 = 0x010;
pub const INT_EN_CLEAR: u32 = 0x014;
pub const SOFT_INT: u32 = 0x018;
pub const SOFT_INT_CLEAR: u32 = 0x01C;
pub const PROTECTION: u32 = 0x020;
pub const VECT_ADDR: u32 = 0x030;
pub const DEF_VECT_ADDR: u32 = 0x034;
pub const VECTOR_ADDR_BASE: u32 = 0x100;
pub const VECTOR_CNTL_BASE: u32 = 0x200;
pub const TEST_CONTROL: u32 = 0x300;
pub const ID_BASE: u32 = 0xFE0;

const VECTOR_ADDR_LAST: u32 = VECTOR_ADDR_BASE + 4 * (NUM_VECTORS as u32 - 1);
const VECTOR_CNTL_LAST: u32 = VECTOR_CNTL_BASE + 4 * (NUM_VECTORS as u32 - 1);
const ID_LAST: u32 = ID_BASE + 4 * (PERIPHERAL_ID.len() as u32 - 1);

/// PrimeCell identification pattern, one byte per word offset.
pub const PERIPHERAL_ID: [u8; 8] = [0x92, 0x11, 0x04, 0x00, 0x0D, 0xF0, 0x05, 0xB1];

// The identification block runs up to the end of the 4 KiB register frame.
const_assert_eq!(ID_BASE + 4 * PERIPHERAL_ID.len() as u32, 0x1000);

/// One addressable register of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    IrqStatus,
    FiqStatus,
    RawIntr,
    IntSelect,
    IntEnable,
    IntEnClear,
    SoftInt,
    SoftIntClear,
    Protection,
    VectAddr,
    DefVectAddr,
    VectorAddress(usize),
    VectorControl(usize),
    TestControl,
    Id(usize),
}

impl Register {
    /// Decodes a byte offset, keyed by its word-aligned address. `None`
    /// marks an unmapped offset; the access paths turn that into the
    /// logged read-as-zero / dropped-write behavior.
    pub fn decode(offset: u32) -> Option<Register> {
        let reg = match offset & !3 {
            IRQ_STATUS => Register::IrqStatus,
            FIQ_STATUS => Register::FiqStatus,
            RAW_INTR => Register::RawIntr,
            INT_SELECT => Register::IntSelect,
            INT_ENABLE => Register::IntEnable,
            INT_EN_CLEAR => Register::IntEnClear,
            SOFT_INT => Register::SoftInt,
            SOFT_INT_CLEAR => Register::SoftIntClear,
            PROTECTION => Register::Protection,
            VECT_ADDR => Register::VectAddr,
            DEF_VECT_ADDR => Register::DefVectAddr,
            aligned @ VECTOR_ADDR_BASE..=VECTOR_ADDR_LAST => {
                Register::VectorAddress(((aligned - VECTOR_ADDR_BASE) >> 2) as usize)
            }
            aligned @ VECTOR_CNTL_BASE..=VECTOR_CNTL_LAST => {
                Register::VectorControl(((aligned - VECTOR_CNTL_BASE) >> 2) as usize)
            }
            TEST_CONTROL => Register::TestControl,
            aligned @ ID_BASE..=ID_LAST => Register::Id(((aligned - ID_BASE) >> 2) as usize),
            _ => return None,
        };
        Some(reg)
    }
}

/// Slot control word: bit 5 enables the slot, bits 0..=4 bind a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorControl(u8);

impl VectorControl {
    pub const fn new() -> VectorControl {
        VectorControl(0)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn enabled(self) -> bool {
        self.0.bit(5)
    }

    pub fn source(self) -> usize {
        self.0.bits(0..5) as usize
    }
}

impl From<u32> for VectorControl {
    fn from(value: u32) -> VectorControl {
        VectorControl((value & 0x3F) as u8)
    }
}
