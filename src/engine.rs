/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use log::{debug, trace, warn};
use rand::seq::SliceRandom;

use crate::{
    generate_pseudo_legal, Board, CastlingRights, Color, Evaluator, HistoryTable, KillerTable,
    Move, MoveList, OpeningBook, Position, Search, SearchConfig, TTable, Validator,
};

/// Exponent applied to book line weights when sampling among them.
const BOOK_WEIGHTING: f64 = 0.5;

/// The engine: glues the opening book, the search, and the random fallback
/// behind a single move-making entry point.
///
/// Owns the transposition, killer, and history tables; all are scoped to one
/// search invocation and cleared before each. The legality oracle and the
/// evaluator are external collaborators supplied at construction.
pub struct Engine<V, E> {
    validator: V,
    evaluator: E,
    book: Option<Box<dyn OpeningBook>>,

    ttable: TTable,
    killers: KillerTable,
    history: HistoryTable,

    config: SearchConfig,
    moves_played: u32,
}

impl<V: Validator, E: Evaluator> Engine<V, E> {
    /// Construct an [`Engine`] around the provided collaborators, with the
    /// default search configuration and no opening book.
    pub fn new(validator: V, evaluator: E) -> Self {
        Self::with_config(validator, evaluator, SearchConfig::default())
    }

    /// Construct an [`Engine`] with an explicit search configuration.
    pub fn with_config(validator: V, evaluator: E, config: SearchConfig) -> Self {
        Self {
            validator,
            evaluator,
            book: None,
            ttable: TTable::new(config.tt_size_mb),
            killers: KillerTable::default(),
            history: HistoryTable::default(),
            config,
            moves_played: 0,
        }
    }

    /// Attach an opening book, which is probed before every search.
    pub fn set_book(&mut self, book: Box<dyn OpeningBook>) {
        self.book = Some(book);
    }

    /// The active search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Select and apply a move for `side_to_move`, mutating `board` in
    /// place. Returns whether a move was made.
    ///
    /// The move is taken from the opening book when it offers one, otherwise
    /// from the search, otherwise uniformly at random among the legal moves.
    /// `false` means no legal move exists at all — the game is over, and
    /// whether by checkmate or stalemate is the Validator's verdict, not
    /// ours.
    pub fn make_move(
        &mut self,
        board: &mut Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        last_move: Option<Move>,
    ) -> bool {
        let position = Position::from_board(board, side_to_move, castling_rights, last_move);

        let chosen = self
            .try_book_move(board, &position, side_to_move, castling_rights, last_move)
            .or_else(|| self.search_move(&position))
            .or_else(|| self.random_move(&position));

        match chosen {
            Some(mv) => match board.apply(mv) {
                Ok(()) => {
                    self.moves_played += 1;
                    true
                }
                Err(err) => {
                    warn!("refusing to apply {mv}: {err}");
                    false
                }
            },
            None => false,
        }
    }

    /// Probe the opening book. Book errors degrade to "no book move" and
    /// never reach the caller; a move the Validator rejects is likewise
    /// discarded, since a book must never produce an illegal move.
    fn try_book_move(
        &self,
        board: &Board,
        position: &Position,
        side_to_move: Color,
        castling_rights: CastlingRights,
        last_move: Option<Move>,
    ) -> Option<Move> {
        let book = self.book.as_ref()?;

        let probe = book.try_get_move(
            board,
            side_to_move,
            self.moves_played,
            castling_rights,
            last_move,
            BOOK_WEIGHTING,
        );

        match probe {
            Ok(Some(mv)) if self.validator.is_valid_move(position, mv) => {
                debug!("book move {mv}");
                Some(mv)
            }
            Ok(Some(mv)) => {
                warn!("book offered illegal move {mv}, ignoring");
                None
            }
            Ok(None) => None,
            Err(err) => {
                warn!("book error: {err}");
                None
            }
        }
    }

    /// Run the search. The tables are scoped to one invocation, so they are
    /// cleared first.
    fn search_move(&mut self, position: &Position) -> Option<Move> {
        self.ttable.clear();
        self.killers.clear();
        self.history.clear();

        let result = Search::new(
            &self.validator,
            &self.evaluator,
            &mut self.ttable,
            &mut self.killers,
            &mut self.history,
            self.config,
        )
        .start(position);

        debug!(
            "search finished: depth {} score {} nodes {}",
            result.depth, result.score, result.nodes
        );

        result.best_move
    }

    /// Uniformly random legal move, the last resort when the search produced
    /// nothing inside its budget.
    fn random_move(&self, position: &Position) -> Option<Move> {
        let moves = self.legal_moves(position);
        let mv = moves.choose(&mut rand::thread_rng()).copied();
        if let Some(mv) = mv {
            trace!("falling back to random move {mv}");
        }
        mv
    }

    /// Pseudo-legal moves filtered through the Validator.
    fn legal_moves(&self, position: &Position) -> MoveList {
        let mut moves = generate_pseudo_legal(position, position.side_to_move());
        moves.retain(|mv| self.validator.is_valid_move(position, *mv));
        moves
    }
}
