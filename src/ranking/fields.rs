use super::slots::Slot;

/// Per-category field values before packing. Each primitive field holds
/// 0 when its category is absent, otherwise the 2..=14 deciding rank;
/// the two composite fields hold a combined magnitude instead. Keeping
/// the record explicit lets the composites read finalized primitive
/// values instead of masking a half-built scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Fields {
    pub high_card: u8,
    pub one_pair: u8,
    pub two_pair: u8,
    pub three_kind: u8,
    pub straight: u8,
    pub flush: u8,
    pub full_house: u8,
    pub four_kind: u8,
    pub straight_flush: u8,
}

impl Fields {
    /// The pair component feeding a full house: the higher pair when two
    /// were found, else the lone pair, else 0 (no full house).
    pub(crate) fn full_house_pair(&self) -> u8 {
        if self.two_pair > 0 {
            self.two_pair
        } else {
            self.one_pair
        }
    }

    /// Pack the nine fields into one ordered scalar, one left-shift per
    /// slot of the shared layout.
    pub(crate) fn pack(&self) -> u64 {
        (self.high_card as u64) << Slot::HighCard.shift()
            | (self.one_pair as u64) << Slot::OnePair.shift()
            | (self.two_pair as u64) << Slot::TwoPair.shift()
            | (self.three_kind as u64) << Slot::ThreeOfAKind.shift()
            | (self.straight as u64) << Slot::Straight.shift()
            | (self.flush as u64) << Slot::Flush.shift()
            | (self.full_house as u64) << Slot::FullHouse.shift()
            | (self.four_kind as u64) << Slot::FourOfAKind.shift()
            | (self.straight_flush as u64) << Slot::StraightFlush.shift()
    }
}

/// Combined magnitude for the full-house field. The triple rank must
/// dominate the pair (sevens full of twos beats sixes full of aces), so
/// the pair contributes only a coarse low-order nudge: `4*triple` gaps
/// never overlap `pair/4` (at most 3). Exact pair ties left unresolved
/// here fall through to the pair slots lower in the word. Maximum value
/// is 4*14 + 3 = 59, inside a 6-bit field.
pub(crate) fn full_house_magnitude(triple: u8, pair: u8) -> u8 {
    triple * 4 + pair / 4
}
