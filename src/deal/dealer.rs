//! Shuffling and the opening deal.
//!
//! ## Opening layout
//!
//! - `pile1`..`pile7`: pile *i* gets *i* cards, only the last face-up
//! - `draw`: the remaining 24 cards, face-down
//! - `discard`, `stack1`..`stack4`: empty

use rustc_hash::FxHashSet;
use tracing::info;

use crate::core::card::{fresh_deck, Card, DECK_SIZE};
use crate::core::config::GameConfig;
use crate::core::error::DeckError;
use crate::core::rng::GameRng;
use crate::session::GameSession;
use crate::table::{Layout, PileId};

/// Uniformly permute `deck` in place.
pub fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(deck);
}

/// Deal a 52-card deck into the opening layout.
///
/// Fails if `deck` is not exactly one deck (wrong size or a duplicate card).
/// Incoming orientation is ignored.
pub fn deal(deck: Vec<Card>) -> Result<Layout, DeckError> {
    check_deck(&deck)?;
    Ok(lay_out(deck))
}

/// Lay a checked deck onto the table.
fn lay_out(deck: Vec<Card>) -> Layout {
    let mut cards = deck.into_iter().map(Card::turned_down);
    let mut layout = Layout::empty();

    for (n, &id) in PileId::TABLEAU.iter().enumerate() {
        let pile = layout.pile_mut(id);
        pile.extend(cards.by_ref().take(n + 1));
        pile.reveal_top();
    }
    layout.pile_mut(PileId::Draw).extend(cards);

    layout
}

/// Shuffle a fresh deck and deal a new game.
///
/// Uses the configured seed, or a random one that is recorded on the
/// session so the deal can be reproduced.
#[must_use]
pub fn deal_new_game(config: &GameConfig) -> GameSession {
    let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    let mut deck = fresh_deck();
    shuffle(&mut deck, &mut rng);

    // A shuffled fresh deck is always exactly one deck
    let layout = lay_out(deck);

    info!(seed = rng.seed(), draw_mode = %config.draw_mode, "new game dealt");

    let session = GameSession::new(layout, config.draw_mode).with_seed(rng.seed());
    match &config.owner {
        Some(owner) => session.with_owner(owner.clone()),
        None => session,
    }
}

fn check_deck(deck: &[Card]) -> Result<(), DeckError> {
    if deck.len() != DECK_SIZE {
        return Err(DeckError::WrongSize { found: deck.len() });
    }
    let mut seen = FxHashSet::default();
    for card in deck {
        if !seen.insert(card.key()) {
            return Err(DeckError::Duplicate(*card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DrawMode;

    #[test]
    fn test_deal_shape() {
        let layout = deal(fresh_deck()).unwrap();

        for (n, &id) in PileId::TABLEAU.iter().enumerate() {
            let pile = layout.pile(id);
            assert_eq!(pile.len(), n + 1);
            assert!(pile.top().unwrap().face_up);
            assert!(pile.iter().take(n).all(|c| !c.face_up));
        }
        assert_eq!(layout.pile(PileId::Draw).len(), 24);
        assert!(layout.pile(PileId::Draw).iter().all(|c| !c.face_up));
        assert!(layout.pile(PileId::Discard).is_empty());
        for id in PileId::FOUNDATIONS {
            assert!(layout.pile(id).is_empty());
        }
        assert!(layout.check_conservation().is_ok());
    }

    #[test]
    fn test_deal_consumes_deck_in_order() {
        let deck = fresh_deck();
        let layout = deal(deck.clone()).unwrap();

        assert!(layout.pile(PileId::Tableau(0)).top().unwrap().same_card(&deck[0]));
        assert!(layout.pile(PileId::Tableau(1)).get(0).unwrap().same_card(&deck[1]));
        assert!(layout.pile(PileId::Draw).head().unwrap().same_card(&deck[28]));
    }

    #[test]
    fn test_deal_rejects_bad_decks() {
        let mut short = fresh_deck();
        short.pop();
        assert_eq!(deal(short), Err(DeckError::WrongSize { found: 51 }));

        let mut dup = fresh_deck();
        dup[51] = dup[0];
        assert_eq!(deal(dup), Err(DeckError::Duplicate(fresh_deck()[0])));
    }

    #[test]
    fn test_deal_normalizes_orientation() {
        let deck: Vec<Card> = fresh_deck().into_iter().map(Card::turned_up).collect();
        let layout = deal(deck).unwrap();
        assert!(layout.pile(PileId::Draw).iter().all(|c| !c.face_up));
        assert!(!layout.pile(PileId::Tableau(6)).get(0).unwrap().face_up);
    }

    #[test]
    fn test_seeded_deal_is_reproducible() {
        let config = GameConfig::new().with_seed(42).with_draw_mode(DrawMode::Three);
        let a = deal_new_game(&config);
        let b = deal_new_game(&config);

        assert_eq!(a.layout(), b.layout());
        assert_eq!(a.seed(), Some(42));
        assert_eq!(a.draw_mode(), DrawMode::Three);
        assert_ne!(a.layout(), deal(fresh_deck()).as_ref().unwrap());
    }

    #[test]
    fn test_new_games_hold_one_deck() {
        for seed in 0..32 {
            let session = deal_new_game(&GameConfig::new().with_seed(seed));
            assert!(session.layout().check_conservation().is_ok(), "seed {seed}");
            assert_eq!(session.layout().pile(PileId::Draw).len(), 24);
        }
    }

    #[test]
    fn test_random_deal_records_seed() {
        let session = deal_new_game(&GameConfig::new().with_owner("bob"));
        let seed = session.seed().unwrap();
        let replay = deal_new_game(&GameConfig::new().with_seed(seed));

        assert_eq!(session.layout(), replay.layout());
        assert_eq!(session.owner(), Some("bob"));
        assert!(session.layout().check_conservation().is_ok());
    }
}
