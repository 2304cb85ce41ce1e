//! Blackjack scoring for a hand that is accumulated one card at a time.

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

const ACE_HIGH: u8 = 11;
const ACE_LOW: u8 = 1;
const FACE_VALUE: u8 = 10;

/// Maps a face value string to its blackjack point value.
///
/// Numeric ranks `"2"` to `"10"` count as themselves and `JACK`, `QUEEN`, and
/// `KING` count as 10. An `ACE` counts as 11 when `current_score + 11` stays at
/// or under 21, otherwise as 1. `current_score` must be the score *before*
/// this card is added.
///
/// Returns `None` for any other input.
///
/// # Example
///
/// ```
/// use deckjack::card_value;
///
/// assert_eq!(card_value("7", 0), Some(7));
/// assert_eq!(card_value("QUEEN", 0), Some(10));
/// assert_eq!(card_value("ACE", 10), Some(11));
/// assert_eq!(card_value("ACE", 15), Some(1));
/// assert_eq!(card_value("JOKER", 0), None);
/// ```
#[must_use]
pub fn card_value(face: &str, current_score: u8) -> Option<u8> {
    match face {
        "JACK" | "QUEEN" | "KING" => Some(FACE_VALUE),
        "ACE" => {
            if current_score.saturating_add(ACE_HIGH) > BLACKJACK {
                Some(ACE_LOW)
            } else {
                Some(ACE_HIGH)
            }
        }
        _ if face.bytes().all(|b| b.is_ascii_digit()) => face
            .parse::<u8>()
            .ok()
            .filter(|rank| (2..=10).contains(rank)),
        _ => None,
    }
}

/// Returns whether the score is over 21.
#[must_use]
pub const fn is_bust(score: u8) -> bool {
    score > BLACKJACK
}
