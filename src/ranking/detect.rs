use crate::cards::{Card, Rank, Suit};

/// Outcome of a matched-group scan: the deciding rank (`None` when the
/// category is absent) and the cards left over for lower-priority scans.
/// Named fields instead of a positional tuple so the assembler cannot
/// silently swap the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Detection {
    pub rank: Option<Rank>,
    pub remainder: Vec<Card>,
}

impl Detection {
    fn miss(cards: &[Card]) -> Self {
        Self { rank: None, remainder: cards.to_vec() }
    }

    pub(crate) fn field(&self) -> u8 {
        self.rank.map_or(0, Rank::value)
    }
}

/// Scan a value-sorted slice for `size` consecutive equal ranks. The
/// matched cards are removed from the remainder so later scans cannot
/// re-claim them.
///
/// `lowest_first` picks which of two equal-size groups wins when the
/// hand holds more than one: quads and trips claim the highest group,
/// while the pair scan takes the lowest so a second invocation finds
/// the next pair up.
fn matched_group(by_value: &[Card], size: usize, lowest_first: bool) -> Detection {
    if by_value.len() < size {
        return Detection::miss(by_value);
    }
    let matches_at = |i: &usize| by_value[*i].rank() == by_value[*i + size - 1].rank();
    let mut starts = 0..=by_value.len() - size;
    let found = if lowest_first { starts.find(matches_at) } else { starts.rev().find(matches_at) };

    match found {
        Some(i) => {
            let mut remainder = by_value[..i].to_vec();
            remainder.extend_from_slice(&by_value[i + size..]);
            Detection { rank: Some(by_value[i].rank()), remainder }
        }
        None => Detection::miss(by_value),
    }
}

/// Four consecutive equal ranks in the value-sorted view.
pub(crate) fn find_quads(by_value: &[Card]) -> Detection {
    matched_group(by_value, 4, false)
}

/// Three consecutive equal ranks; run on the post-quad remainder.
pub(crate) fn find_trips(by_value: &[Card]) -> Detection {
    matched_group(by_value, 3, false)
}

/// Lowest adjacent pair in the value-sorted view; run on the post-trips
/// remainder. Invoked twice in sequence: the first call fills the
/// one-pair slot, the second (on the first call's remainder) finds the
/// next pair up for the two-pair slot.
pub(crate) fn find_pair(by_value: &[Card]) -> Detection {
    matched_group(by_value, 2, true)
}

/// Highest rank among the cards no group detector claimed, or `None`
/// when every card was consumed.
pub(crate) fn high_card(remainder: &[Card]) -> Option<Rank> {
    remainder.iter().map(|c| c.rank()).max()
}

/// Highest rank topping a run of five consecutive values in the
/// value-sorted view, or `None` when no straight exists.
///
/// A held ace also echoes as a virtual rank 1 ahead of the scan, which
/// is the only place ace-low semantics exist; the wheel therefore ranks
/// as a 5-high straight. The scan advances only on an exact +1 step, so
/// duplicated ranks break a run instead of being miscounted, and a later
/// (higher) qualifying run replaces an earlier one.
pub(crate) fn find_straight(by_value: &[Card]) -> Option<Rank> {
    let mut values: Vec<u8> = by_value.iter().map(|c| c.rank().value()).collect();
    if values.last() == Some(&Rank::Ace.value()) {
        values.insert(0, 1);
    }

    let mut best: Option<u8> = None;
    let mut run = 1usize;
    for i in 1..values.len() {
        if values[i] == values[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best = Some(values[i]);
            }
        } else {
            run = 1;
        }
    }
    // A run top is at least 5, so the conversion cannot fail.
    best.and_then(|v| Rank::try_from(v).ok())
}

/// A detected flush: the highest rank in the matched same-suit run and
/// the suit it lives in (kept for the straight-flush co-occurrence
/// check).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlushMatch {
    pub high: Rank,
    pub suit: Suit,
}

/// Any 5-card window of the suit-sorted view whose first and last card
/// share a suit is a flush. The view is sorted by suit then rank, so the
/// window's last card is its highest; when several windows qualify
/// (possible only with oversized synthetic input, never with <=7 cards
/// from one deck) the highest-ranked flush wins.
pub(crate) fn find_flush(by_suit: &[Card]) -> Option<FlushMatch> {
    let mut best: Option<FlushMatch> = None;
    for window in by_suit.windows(5) {
        if window[0].suit() == window[4].suit() {
            let candidate = FlushMatch { high: window[4].rank(), suit: window[4].suit() };
            if best.map_or(true, |b| candidate.high > b.high) {
                best = Some(candidate);
            }
        }
    }
    best
}
