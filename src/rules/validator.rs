//! Move validation and application.
//!
//! [`validate`] is a pure function: it reads a layout and a move request and
//! returns either the resulting layout or the reason the move is illegal.
//! The input layout is never modified, so a rejection leaves the caller's
//! table exactly as it was.
//!
//! ## Checks, in order
//!
//! 1. Both pile names are known
//! 2. The move names at least one card
//! 3. The first card is in the source pile
//! 4. The destination can receive from the source ([`MoveKind::classify`])
//! 5. The destination's placement rules
//!
//! Cards leave the discard pile and the foundations one at a time, from
//! the top. Only tableau piles give up a run, and the request must list
//! that run in full.

use tracing::trace;

use super::moves::{Move, MoveKind};
use crate::core::card::{Card, Rank};
use crate::core::config::DrawMode;
use crate::core::error::Rejection;
use crate::table::{Layout, Pile, PileId};

/// Validate `mv` against `layout` and return the resulting layout.
///
/// ```
/// use klondike_engine::core::{Card, DrawMode, Rank, Suit};
/// use klondike_engine::rules::{validate, Move};
/// use klondike_engine::table::{Layout, PileId};
///
/// let ace = Card::up(Suit::Hearts, Rank::Ace);
/// let layout = Layout::empty().with_pile(PileId::Tableau(0), [ace]);
///
/// let next = validate(&layout, &Move::new([ace], "pile1", "stack1"), DrawMode::One).unwrap();
/// assert_eq!(next.pile(PileId::Foundation(0)).top(), Some(&ace));
/// assert!(next.pile(PileId::Tableau(0)).is_empty());
/// ```
pub fn validate(layout: &Layout, mv: &Move, draw_mode: DrawMode) -> Result<Layout, Rejection> {
    let result = try_validate(layout, mv, draw_mode);
    if let Err(rejection) = &result {
        trace!(%mv, %rejection, "move rejected");
    }
    result
}

fn try_validate(layout: &Layout, mv: &Move, draw_mode: DrawMode) -> Result<Layout, Rejection> {
    let src: PileId = mv.src.parse()?;
    let dst: PileId = mv.dst.parse()?;
    let lead = mv.lead().ok_or(Rejection::EmptyMove)?;
    let index = locate(layout.pile(src), lead)?;

    match MoveKind::classify(src, dst)? {
        MoveKind::DrawToDiscard => Ok(draw_to_discard(layout, index, draw_mode)),
        MoveKind::ToFoundation(_) => {
            if mv.cards.len() != 1 {
                return Err(Rejection::MultipleToFoundation);
            }
            let card = face_up_at(layout.pile(src), index)?;
            if index + 1 != layout.pile(src).len() {
                return Err(Rejection::NotTopCard);
            }
            check_foundation(card, layout.pile(dst))?;
            Ok(relocate(layout, src, index, dst))
        }
        MoveKind::ToTableau(_) => {
            let pile = layout.pile(src);
            let card = face_up_at(pile, index)?;
            // Runs only leave tableau piles
            if !src.is_tableau() && index + 1 != pile.len() {
                return Err(Rejection::NotTopCard);
            }
            check_run(pile, index, &mv.cards)?;
            check_tableau(card, layout.pile(dst))?;
            Ok(relocate(layout, src, index, dst))
        }
    }
}

/// Whether `card` may be played onto `foundation`.
///
/// Shared by the validator and by stuck detection.
#[must_use]
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    check_foundation(card, foundation).is_ok()
}

/// Index of `card` in `pile`, matched by suit and rank.
fn locate(pile: &Pile, card: &Card) -> Result<usize, Rejection> {
    pile.position(card).ok_or(Rejection::CardNotFound)
}

fn face_up_at(pile: &Pile, index: usize) -> Result<&Card, Rejection> {
    match pile.get(index) {
        Some(card) if card.face_up => Ok(card),
        Some(_) => Err(Rejection::FaceDown),
        None => Err(Rejection::CardNotFound),
    }
}

/// The requested cards must be exactly the run from `index` to the top.
fn check_run(pile: &Pile, index: usize, cards: &[Card]) -> Result<(), Rejection> {
    let run_len = pile.len() - index;
    if cards.len() != run_len || !pile.iter().skip(index).zip(cards).all(|(a, b)| a.same_card(b)) {
        return Err(Rejection::RunMismatch);
    }
    Ok(())
}

fn check_foundation(card: &Card, foundation: &Pile) -> Result<(), Rejection> {
    match foundation.top() {
        None if card.rank == Rank::Ace => Ok(()),
        None => Err(Rejection::FoundationNeedsAce),
        Some(top) if top.suit != card.suit => Err(Rejection::FoundationSuitMismatch),
        Some(top) if top.rank.successor() != Some(card.rank) => Err(Rejection::SequenceMismatch),
        Some(_) => Ok(()),
    }
}

fn check_tableau(card: &Card, pile: &Pile) -> Result<(), Rejection> {
    match pile.top() {
        None if card.rank == Rank::King => Ok(()),
        None => Err(Rejection::EmptyPileNeedsKing),
        Some(top) if top.color() == card.color() => Err(Rejection::SameColor),
        // Kings only go to empty piles
        Some(_) if card.rank == Rank::King => Err(Rejection::SequenceMismatch),
        Some(top) if top.rank.predecessor() != Some(card.rank) => Err(Rejection::SequenceMismatch),
        Some(_) => Ok(()),
    }
}

/// Move the run starting at `index` from `src` to the top of `dst`, then
/// reveal the new top of `src`.
fn relocate(layout: &Layout, src: PileId, index: usize, dst: PileId) -> Layout {
    let mut next = layout.clone();
    let run = next.pile_mut(src).split_off(index);
    next.pile_mut(src).reveal_top();
    next.pile_mut(dst).append(run);
    next
}

/// Turn up to `draw_mode.count()` cards starting at `index` onto the discard
/// pile. The draw pile itself stays face-down.
fn draw_to_discard(layout: &Layout, index: usize, draw_mode: DrawMode) -> Layout {
    let mut next = layout.clone();
    let mut drawn = next.pile_mut(PileId::Draw).take_range(index, draw_mode.count());
    drawn.turn_all_up();
    next.pile_mut(PileId::Discard).append(drawn);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::up(suit, rank)
    }

    fn down(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_unknown_pile() {
        let layout = Layout::empty();
        let mv = Move::new([up(Suit::Hearts, Rank::Ace)], "pile8", "stack1");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::unknown_pile("pile8")));

        let mv = Move::new([up(Suit::Hearts, Rank::Ace)], "pile1", "foundation");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::unknown_pile("foundation")));
    }

    #[test]
    fn test_empty_move() {
        let layout = Layout::empty();
        let mv = Move::new([], "pile1", "pile2");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::EmptyMove));
    }

    #[test]
    fn test_card_not_found() {
        let layout = Layout::empty().with_pile(PileId::Tableau(0), [up(Suit::Hearts, Rank::Ace)]);
        let mv = Move::new([up(Suit::Spades, Rank::Ace)], "pile1", "stack1");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::CardNotFound));
    }

    #[test]
    fn test_card_lookup_precedes_draw_destination_check() {
        let layout = Layout::empty().with_pile(PileId::Discard, [up(Suit::Hearts, Rank::Four)]);

        let missing = Move::new([up(Suit::Spades, Rank::Ace)], "discard", "draw");
        assert_eq!(validate(&layout, &missing, DrawMode::One), Err(Rejection::CardNotFound));

        let present = Move::new([up(Suit::Hearts, Rank::Four)], "discard", "draw");
        assert_eq!(validate(&layout, &present, DrawMode::One), Err(Rejection::MoveToDraw));
    }

    #[test]
    fn test_draw_moves_head_card() {
        let layout = Layout::empty().with_pile(
            PileId::Draw,
            [down(Suit::Clubs, Rank::Two), down(Suit::Diamonds, Rank::Five)],
        );

        let next = validate(&layout, &Move::draw(down(Suit::Clubs, Rank::Two)), DrawMode::One).unwrap();

        assert_eq!(next.pile(PileId::Draw).to_vec(), vec![down(Suit::Diamonds, Rank::Five)]);
        assert_eq!(next.pile(PileId::Discard).to_vec(), vec![up(Suit::Clubs, Rank::Two)]);
    }

    #[test]
    fn test_draw_three() {
        let draw: Vec<Card> = [Rank::Two, Rank::Three, Rank::Four, Rank::Five]
            .iter()
            .map(|&r| down(Suit::Spades, r))
            .collect();
        let layout = Layout::empty()
            .with_pile(PileId::Draw, draw)
            .with_pile(PileId::Discard, [up(Suit::Hearts, Rank::King)]);

        let next = validate(&layout, &Move::draw(down(Suit::Spades, Rank::Two)), DrawMode::Three).unwrap();

        assert_eq!(next.pile(PileId::Draw).to_vec(), vec![down(Suit::Spades, Rank::Five)]);
        let discard = next.pile(PileId::Discard).to_vec();
        assert_eq!(
            discard,
            vec![
                up(Suit::Hearts, Rank::King),
                up(Suit::Spades, Rank::Two),
                up(Suit::Spades, Rank::Three),
                up(Suit::Spades, Rank::Four),
            ]
        );

        // Fewer than three left: take what remains
        let last = validate(&next, &Move::draw(down(Suit::Spades, Rank::Five)), DrawMode::Three).unwrap();
        assert!(last.pile(PileId::Draw).is_empty());
        assert_eq!(last.pile(PileId::Discard).len(), 5);
    }

    #[test]
    fn test_discard_only_from_draw() {
        let layout = Layout::empty().with_pile(PileId::Tableau(0), [up(Suit::Hearts, Rank::Ace)]);
        let mv = Move::new([up(Suit::Hearts, Rank::Ace)], "pile1", "discard");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::DiscardFromNonDraw));
    }

    #[test]
    fn test_foundation_rules() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [up(Suit::Hearts, Rank::Two)])
            .with_pile(PileId::Tableau(1), [up(Suit::Spades, Rank::Two)])
            .with_pile(PileId::Tableau(2), [up(Suit::Hearts, Rank::Three)])
            .with_pile(PileId::Foundation(1), [up(Suit::Hearts, Rank::Ace)]);

        let two_on_empty = Move::new([up(Suit::Hearts, Rank::Two)], "pile1", "stack1");
        assert_eq!(validate(&layout, &two_on_empty, DrawMode::One), Err(Rejection::FoundationNeedsAce));

        let wrong_suit = Move::new([up(Suit::Spades, Rank::Two)], "pile2", "stack2");
        assert_eq!(validate(&layout, &wrong_suit, DrawMode::One), Err(Rejection::FoundationSuitMismatch));

        let skip = Move::new([up(Suit::Hearts, Rank::Three)], "pile3", "stack2");
        assert_eq!(validate(&layout, &skip, DrawMode::One), Err(Rejection::SequenceMismatch));

        let good = Move::new([up(Suit::Hearts, Rank::Two)], "pile1", "stack2");
        let next = validate(&layout, &good, DrawMode::One).unwrap();
        assert_eq!(next.pile(PileId::Foundation(1)).len(), 2);
        assert!(next.pile(PileId::Tableau(0)).is_empty());
    }

    #[test]
    fn test_foundation_single_card_only() {
        let layout = Layout::empty().with_pile(
            PileId::Tableau(0),
            [up(Suit::Spades, Rank::Two), up(Suit::Hearts, Rank::Ace)],
        );
        let mv = Move::new(
            [up(Suit::Spades, Rank::Two), up(Suit::Hearts, Rank::Ace)],
            "pile1",
            "stack1",
        );
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::MultipleToFoundation));

        let buried = Move::new([up(Suit::Spades, Rank::Two)], "pile1", "stack1");
        assert_eq!(validate(&layout, &buried, DrawMode::One), Err(Rejection::NotTopCard));
    }

    #[test]
    fn test_foundation_reveals_source() {
        let layout = Layout::empty().with_pile(
            PileId::Tableau(3),
            [down(Suit::Clubs, Rank::Nine), up(Suit::Diamonds, Rank::Ace)],
        );
        let mv = Move::new([up(Suit::Diamonds, Rank::Ace)], "pile4", "stack3");
        let next = validate(&layout, &mv, DrawMode::One).unwrap();

        assert_eq!(next.pile(PileId::Tableau(3)).to_vec(), vec![up(Suit::Clubs, Rank::Nine)]);
        assert_eq!(next.pile(PileId::Foundation(2)).to_vec(), vec![up(Suit::Diamonds, Rank::Ace)]);
    }

    #[test]
    fn test_face_down_card_cannot_move() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [down(Suit::Hearts, Rank::King), up(Suit::Spades, Rank::Queen)])
            .with_pile(PileId::Draw, [down(Suit::Spades, Rank::King)]);

        let buried = Move::new([down(Suit::Hearts, Rank::King)], "pile1", "pile2");
        assert_eq!(validate(&layout, &buried, DrawMode::One), Err(Rejection::FaceDown));

        let from_stock = Move::new([down(Suit::Spades, Rank::King)], "draw", "pile3");
        assert_eq!(validate(&layout, &from_stock, DrawMode::One), Err(Rejection::FaceDown));
    }

    #[test]
    fn test_empty_tableau_needs_king() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [up(Suit::Hearts, Rank::Queen)])
            .with_pile(PileId::Tableau(1), [down(Suit::Clubs, Rank::Two), up(Suit::Spades, Rank::King)]);

        let queen = Move::new([up(Suit::Hearts, Rank::Queen)], "pile1", "pile3");
        assert_eq!(validate(&layout, &queen, DrawMode::One), Err(Rejection::EmptyPileNeedsKing));

        let king = Move::new([up(Suit::Spades, Rank::King)], "pile2", "pile3");
        let next = validate(&layout, &king, DrawMode::One).unwrap();
        assert_eq!(next.pile(PileId::Tableau(2)).to_vec(), vec![up(Suit::Spades, Rank::King)]);
        // Empty-pile moves reveal the source too
        assert_eq!(next.pile(PileId::Tableau(1)).to_vec(), vec![up(Suit::Clubs, Rank::Two)]);
    }

    #[test]
    fn test_tableau_sequencing() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [up(Suit::Spades, Rank::Seven)])
            .with_pile(PileId::Tableau(1), [up(Suit::Diamonds, Rank::Six)])
            .with_pile(PileId::Tableau(2), [up(Suit::Spades, Rank::Six)])
            .with_pile(PileId::Tableau(3), [up(Suit::Hearts, Rank::Five)]);

        let red_on_black = Move::new([up(Suit::Diamonds, Rank::Six)], "pile2", "pile1");
        let next = validate(&layout, &red_on_black, DrawMode::One).unwrap();
        assert_eq!(next.pile(PileId::Tableau(0)).len(), 2);
        assert!(next.pile(PileId::Tableau(1)).is_empty());

        let black_on_black = Move::new([up(Suit::Spades, Rank::Six)], "pile3", "pile1");
        assert_eq!(validate(&layout, &black_on_black, DrawMode::One), Err(Rejection::SameColor));

        let gap = Move::new([up(Suit::Hearts, Rank::Five)], "pile4", "pile1");
        assert_eq!(validate(&layout, &gap, DrawMode::One), Err(Rejection::SequenceMismatch));
    }

    #[test]
    fn test_king_never_onto_non_empty() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [up(Suit::Spades, Rank::Ace)])
            .with_pile(PileId::Tableau(1), [up(Suit::Hearts, Rank::King)]);
        let mv = Move::new([up(Suit::Hearts, Rank::King)], "pile2", "pile1");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::SequenceMismatch));
    }

    #[test]
    fn test_run_moves_as_unit() {
        let layout = Layout::empty()
            .with_pile(
                PileId::Tableau(0),
                [
                    down(Suit::Clubs, Rank::Ace),
                    up(Suit::Hearts, Rank::Nine),
                    up(Suit::Spades, Rank::Eight),
                    up(Suit::Diamonds, Rank::Seven),
                ],
            )
            .with_pile(PileId::Tableau(4), [up(Suit::Clubs, Rank::Ten)]);

        let mv = Move::new(
            [up(Suit::Hearts, Rank::Nine), up(Suit::Spades, Rank::Eight), up(Suit::Diamonds, Rank::Seven)],
            "pile1",
            "pile5",
        );
        let next = validate(&layout, &mv, DrawMode::One).unwrap();

        assert_eq!(next.pile(PileId::Tableau(0)).to_vec(), vec![up(Suit::Clubs, Rank::Ace)]);
        assert_eq!(
            next.pile(PileId::Tableau(4)).iter().map(|c| c.rank).collect::<Vec<_>>(),
            vec![Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven]
        );
    }

    #[test]
    fn test_foundation_card_back_to_tableau() {
        let layout = Layout::empty()
            .with_pile(PileId::Foundation(0), [up(Suit::Hearts, Rank::Ace), up(Suit::Hearts, Rank::Two)])
            .with_pile(PileId::Tableau(0), [up(Suit::Clubs, Rank::Three)]);
        let mv = Move::new([up(Suit::Hearts, Rank::Two)], "stack1", "pile1");
        let next = validate(&layout, &mv, DrawMode::One).unwrap();

        assert_eq!(next.pile(PileId::Foundation(0)).len(), 1);
        assert_eq!(next.pile(PileId::Tableau(0)).len(), 2);
    }

    #[test]
    fn test_buried_discard_card_stays_put() {
        let layout = Layout::empty()
            .with_pile(PileId::Discard, [up(Suit::Hearts, Rank::Five), up(Suit::Spades, Rank::Nine)])
            .with_pile(PileId::Tableau(0), [up(Suit::Spades, Rank::Six)]);

        let mv = Move::new([up(Suit::Hearts, Rank::Five)], "discard", "pile1");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::NotTopCard));

        let with_tail = Move::new([up(Suit::Hearts, Rank::Five), up(Suit::Spades, Rank::Nine)], "discard", "pile1");
        assert_eq!(validate(&layout, &with_tail, DrawMode::One), Err(Rejection::NotTopCard));
    }

    #[test]
    fn test_buried_foundation_card_stays_put() {
        let layout = Layout::empty()
            .with_pile(PileId::Foundation(0), [up(Suit::Hearts, Rank::Ace), up(Suit::Hearts, Rank::Two)])
            .with_pile(PileId::Tableau(0), [up(Suit::Spades, Rank::Two)]);

        let mv = Move::new([up(Suit::Hearts, Rank::Ace)], "stack1", "pile1");
        assert_eq!(validate(&layout, &mv, DrawMode::One), Err(Rejection::NotTopCard));
    }

    #[test]
    fn test_run_must_be_listed_in_full() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [up(Suit::Hearts, Rank::Nine), up(Suit::Spades, Rank::Eight)])
            .with_pile(PileId::Tableau(1), [up(Suit::Clubs, Rank::Ten)]);

        let short = Move::new([up(Suit::Hearts, Rank::Nine)], "pile1", "pile2");
        assert_eq!(validate(&layout, &short, DrawMode::One), Err(Rejection::RunMismatch));

        let wrong = Move::new([up(Suit::Hearts, Rank::Nine), up(Suit::Clubs, Rank::Eight)], "pile1", "pile2");
        assert_eq!(validate(&layout, &wrong, DrawMode::One), Err(Rejection::RunMismatch));

        let full = Move::new([up(Suit::Hearts, Rank::Nine), up(Suit::Spades, Rank::Eight)], "pile1", "pile2");
        assert!(validate(&layout, &full, DrawMode::One).is_ok());
    }

    #[test]
    fn test_rejection_leaves_input_untouched() {
        let layout = Layout::empty()
            .with_pile(PileId::Tableau(0), [up(Suit::Spades, Rank::Seven)])
            .with_pile(PileId::Tableau(2), [up(Suit::Spades, Rank::Six)]);
        let before = layout.clone();

        let mv = Move::new([up(Suit::Spades, Rank::Six)], "pile3", "pile1");
        assert!(validate(&layout, &mv, DrawMode::One).is_err());
        assert_eq!(layout, before);
    }

    #[test]
    fn test_can_move_to_foundation() {
        let empty = Pile::new();
        assert!(can_move_to_foundation(&up(Suit::Clubs, Rank::Ace), &empty));
        assert!(!can_move_to_foundation(&up(Suit::Clubs, Rank::Two), &empty));

        let clubs: Pile = vec![up(Suit::Clubs, Rank::Ace)].into();
        assert!(can_move_to_foundation(&up(Suit::Clubs, Rank::Two), &clubs));
        assert!(!can_move_to_foundation(&up(Suit::Spades, Rank::Two), &clubs));
    }
}
