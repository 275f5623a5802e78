//! Byte-level tile id encoding.
//!
//! Each grid cell is stored as one byte: the three most-significant
//! bits carry the flip flags, the low bits carry the tile id. Id 0
//! means "no tile here"; it is never a registry key.

/// Horizontal-flip flag bit.
pub const FLIP_H: u8 = 0x80; // bit 7
/// Vertical-flip flag bit.
pub const FLIP_V: u8 = 0x40; // bit 6
/// Diagonal-flip flag bit.
pub const FLIP_D: u8 = 0x20; // bit 5
/// Mask that clears all three flag bits, leaving the tile id.
pub const GID_MASK: u8 = 0x1F;

/// One stored tile byte: id in the low bits, flip flags in the high bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gid(pub u8);

impl Gid {
    /// Full stored byte, flags included.
    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }

    /// Gid with the flag bits cleared, usable as a registry key.
    #[inline]
    pub fn clean(self) -> Gid {
        Gid(self.0 & GID_MASK)
    }

    /// Tests bit 7.
    #[inline]
    pub fn flip_h(self) -> bool {
        (self.0 & FLIP_H) != 0
    }

    /// Tests bit 6.
    #[inline]
    pub fn flip_v(self) -> bool {
        (self.0 & FLIP_V) != 0
    }

    /// Tests bit 5.
    #[inline]
    pub fn flip_d(self) -> bool {
        (self.0 & FLIP_D) != 0
    }

    /// True when the masked id is 0, the reserved "no tile" value.
    #[inline]
    pub fn is_empty(self) -> bool {
        (self.0 & GID_MASK) == 0
    }
}

/// Decoded form of one grid byte: the masked id plus all three flip
/// flags as explicit fields. The diagonal flag has no dedicated layer
/// accessor; this is where it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Masked tile id (flag bits cleared).
    pub id: Gid,
    /// Mirror the tile image left-to-right when rendering.
    pub flip_h: bool,
    /// Mirror the tile image top-to-bottom when rendering.
    pub flip_v: bool,
    /// Flip the tile image across its main diagonal when rendering.
    pub flip_d: bool,
}

impl Cell {
    /// Decodes one stored byte.
    #[inline]
    pub fn decode(raw: u8) -> Self {
        let gid = Gid(raw);
        Cell {
            id: gid.clean(),
            flip_h: gid.flip_h(),
            flip_v: gid.flip_v(),
            flip_d: gid.flip_d(),
        }
    }

    /// True when the cell holds no tile.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_exactly_the_flag_bits() {
        for raw in 0..=u8::MAX {
            assert_eq!(Gid(raw).clean().raw(), raw & GID_MASK);
        }
    }

    #[test]
    fn flags_are_independent_of_each_other_and_of_the_id() {
        for raw in 0..=u8::MAX {
            let gid = Gid(raw);
            assert_eq!(gid.flip_h(), raw & FLIP_H != 0);
            assert_eq!(gid.flip_v(), raw & FLIP_V != 0);
            assert_eq!(gid.flip_d(), raw & FLIP_D != 0);
        }
    }

    #[test]
    fn decode_round_trips_id_and_flags() {
        let cell = Cell::decode(FLIP_H | FLIP_D | 7);
        assert_eq!(cell.id, Gid(7));
        assert!(cell.flip_h);
        assert!(!cell.flip_v);
        assert!(cell.flip_d);
    }

    #[test]
    fn flags_only_byte_is_still_empty() {
        assert!(Gid(FLIP_H | FLIP_V).is_empty());
        assert!(Cell::decode(FLIP_D).is_empty());
    }
}
