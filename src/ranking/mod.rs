mod detect;
mod fields;
mod slots;

use std::fmt;

use crate::cards::{Card, Rank};
use detect::{find_flush, find_pair, find_quads, find_straight, find_trips, high_card};
use fields::{full_house_magnitude, Fields};
use slots::Slot;

/// Minimum number of cards a hand needs before ranking is meaningful.
pub const MIN_HAND_SIZE: usize = 5;

/// Compact, totally ordered hand strength. Higher beats lower, for any
/// pair of hands: plain `>`/`<`/`==` on this value is the full poker
/// comparison, category first and tie-breakers after, so no category
/// enum or comparator chain is needed.
///
/// The internal bit layout is not part of the public contract; `raw`
/// exposes the scalar only for storage and caching.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(u64);

impl HandRank {
    /// The packed scalar, for caching or persistence by the caller.
    pub const fn raw(self) -> u64 {
        self.0
    }

    pub(crate) fn field(self, slot: Slot) -> u8 {
        ((self.0 & slot.mask()) >> slot.shift()) as u8
    }
}

impl fmt::Debug for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandRank({:#016x}", self.0)?;
        for slot in Slot::ALL.iter().rev() {
            let v = self.field(*slot);
            if v > 0 {
                write!(f, " {}={}", slot.label(), v)?;
            }
        }
        write!(f, ")")
    }
}

/// Rejection for hands the engine cannot rank.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankError {
    #[error("a hand needs at least {MIN_HAND_SIZE} cards, got {0}")]
    InsufficientHand(usize),
}

/// Rank a hand of 5 or more cards into one comparable value.
///
/// The caller's collection is never mutated; the engine works on sorted
/// copies. Card order does not matter, and every evaluation is a pure,
/// bounded computation, so batches of hands can be ranked from many
/// threads without synchronization.
///
/// ```
/// use handrank::cards::parse_cards;
/// use handrank::ranking::rank_hand;
///
/// let trips = rank_hand(&parse_cards("Qc Qd Qh 9s 2c").unwrap()).unwrap();
/// let flush = rank_hand(&parse_cards("Ah 9h 7h 3h 2h").unwrap()).unwrap();
/// assert!(flush > trips);
/// ```
pub fn rank_hand(cards: &[Card]) -> Result<HandRank, RankError> {
    if cards.len() < MIN_HAND_SIZE {
        return Err(RankError::InsufficientHand(cards.len()));
    }

    // Two sorted views of the same hand. Both secondary keys are fixed
    // so any permutation of the input produces identical views.
    let mut by_value = cards.to_vec();
    by_value.sort_by(|a, b| a.rank().cmp(&b.rank()).then(a.suit().cmp(&b.suit())));
    let mut by_suit = cards.to_vec();
    by_suit.sort_by(|a, b| a.suit().cmp(&b.suit()).then(a.rank().cmp(&b.rank())));

    let mut fields = Fields::default();

    // Flush and straight read unpruned views: group detectors must not
    // steal cards from them.
    let flush = find_flush(&by_suit);
    fields.flush = flush.map_or(0, |m| m.high.value());
    fields.straight = find_straight(&by_value).map_or(0, Rank::value);

    // Group detectors run strongest first, each pruning its matched
    // cards so weaker detectors cannot re-claim them.
    let quads = find_quads(&by_value);
    fields.four_kind = quads.field();
    let trips = find_trips(&quads.remainder);
    fields.three_kind = trips.field();
    let low_pair = find_pair(&trips.remainder);
    fields.one_pair = low_pair.field();
    let high_pair = find_pair(&low_pair.remainder);
    fields.two_pair = high_pair.field();
    fields.high_card = high_card(&high_pair.remainder).map_or(0, Rank::value);

    // Composites derive from the finalized primitive fields. A full
    // house is a triple plus any pair already on record.
    if fields.three_kind > 0 && fields.full_house_pair() > 0 {
        fields.full_house = full_house_magnitude(fields.three_kind, fields.full_house_pair());
    }

    // A straight flush needs the straight and the flush to share cards,
    // not merely coexist: rescan the straight inside the flush suit.
    if fields.straight > 0 {
        if let Some(m) = flush {
            let suited: Vec<Card> = by_value.iter().copied().filter(|c| c.suit() == m.suit).collect();
            fields.straight_flush = find_straight(&suited).map_or(0, Rank::value);
        }
    }

    Ok(HandRank(fields.pack()))
}
