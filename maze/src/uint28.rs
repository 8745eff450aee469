use crate::MazeError;

/// A value that fits in the 28 payload bits of a cell.
///
/// Cells are stored as 32-bit integers with the low 4 bits reserved for corridors,
/// so the only way to write a payload is through this type. [`UInt28::new`] rejects
/// anything wider, [`UInt28::clamped`] masks it down.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Default)]
pub struct UInt28(u32);

impl UInt28 {
    /// 28 set bits.
    pub const MASK: u32 = 0x0fff_ffff;
    pub const MAX: UInt28 = UInt28(UInt28::MASK);

    pub fn new(value: u32) -> Result<UInt28, MazeError> {
        if value & !UInt28::MASK != 0 {
            return Err(MazeError::ValueRange(value));
        }
        Ok(UInt28(value))
    }

    pub fn clamped(value: u32) -> UInt28 {
        UInt28(value & UInt28::MASK)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for UInt28 {
    type Error = MazeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        UInt28::new(value)
    }
}
