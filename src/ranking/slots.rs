/// Width of one category field in the packed rank value. Six bits is
/// enough for any field value this crate writes (deciding ranks top out
/// at 14, the full-house magnitude at 59).
pub(crate) const SLOT_WIDTH: u32 = 6;

/// Number of category fields in the packed value.
pub(crate) const SLOT_COUNT: u32 = 9;

// The nine fields must fit a single u64.
const _: () = assert!(SLOT_COUNT * SLOT_WIDTH <= u64::BITS);

/// One 6-bit field of the packed rank value. The discriminant is the
/// slot position from least significant (weakest category) upward, so
/// slot order alone encodes category priority: any hand with a nonzero
/// higher slot beats every hand whose highest nonzero slot is lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub(crate) enum Slot {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Slot {
    pub(crate) const ALL: [Slot; SLOT_COUNT as usize] = [
        Slot::HighCard,
        Slot::OnePair,
        Slot::TwoPair,
        Slot::ThreeOfAKind,
        Slot::Straight,
        Slot::Flush,
        Slot::FullHouse,
        Slot::FourOfAKind,
        Slot::StraightFlush,
    ];

    pub(crate) const fn shift(self) -> u32 {
        self as u32 * SLOT_WIDTH
    }

    pub(crate) const fn mask(self) -> u64 {
        ((1u64 << SLOT_WIDTH) - 1) << self.shift()
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            Slot::HighCard => "high-card",
            Slot::OnePair => "one-pair",
            Slot::TwoPair => "two-pair",
            Slot::ThreeOfAKind => "three-of-a-kind",
            Slot::Straight => "straight",
            Slot::Flush => "flush",
            Slot::FullHouse => "full-house",
            Slot::FourOfAKind => "four-of-a-kind",
            Slot::StraightFlush => "straight-flush",
        }
    }
}
