/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use log::debug;

use crate::{
    generate_pseudo_legal, pawn_attacks, Bound, Evaluator, HistoryTable, KillerTable, Move,
    MoveKind, MoveList, PieceKind, Position, Score, TTable, TTableEntry, Validator, ZobristKey,
};

/// Maximum depth that can be searched.
pub const MAX_DEPTH: u8 = 64;

/// Half-width of the aspiration window opened around the previous
/// iteration's score.
const ASPIRATION_WINDOW: i32 = 50;

/// Minimum depth at which null-move pruning applies.
const MIN_NULL_MOVE_DEPTH: u8 = 3;

/// Extra reduction applied to the zero-move search, beyond the regular ply.
const NULL_MOVE_REDUCTION: u8 = 2;

/// Minimum depth at which late moves are reduced.
const MIN_LMR_DEPTH: u8 = 3;

/// How many moves are searched at full depth before reductions kick in.
const MIN_LMR_MOVES: usize = 4;

/// Captures are shifted above every quiet-ordering bonus, as in MVV-LVA
/// tables.
const CAPTURE_SHIFT: u32 = 16;

/// Ordering bonus for castling moves.
const CASTLE_BONUS: i32 = 1000;

/// Ordering bonus for promotions.
const PROMOTION_BONUS: i32 = 500;

/// Ordering bonus for killer moves.
const KILLER_BONUS: i32 = 100;

/// Multiplier applied to history scores during ordering.
const HISTORY_WEIGHT: i32 = 2;

/// Ceiling on the history contribution, so accumulated history can never
/// outrank a capture.
const HISTORY_ORDER_CAP: i32 = 1 << 15;

/// Configuration for one search invocation.
///
/// The pruning toggles exist because pruning must never change the move a
/// full-fidelity search would pick — only how fast it is found. Turning them
/// off makes that property checkable.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Maximum depth of the iterative-deepening loop.
    pub max_depth: u8,

    /// Wall-clock budget for the whole search.
    pub max_time: Duration,

    /// Transposition table size, in megabytes.
    pub tt_size_mb: usize,

    /// Whether null-move pruning is applied.
    pub use_null_move: bool,

    /// Whether late-move reductions are applied.
    pub use_lmr: bool,
}

impl Default for SearchConfig {
    #[inline(always)]
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_time: Duration::from_secs(10),
            tt_size_mb: TTable::DEFAULT_SIZE_MB,
            use_null_move: true,
            use_lmr: true,
        }
    }
}

/// The outcome of a search: the best move found by the deepest *completed*
/// iteration, its score, and some accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` if no legal move exists.
    pub best_move: Option<Move>,

    /// Score of `best_move`, from the root side's perspective.
    pub score: Score,

    /// Depth of the deepest completed iteration.
    pub depth: u8,

    /// Number of nodes visited.
    pub nodes: u64,
}

impl Default for SearchResult {
    #[inline(always)]
    fn default() -> Self {
        Self {
            best_move: None,
            score: Score::ALPHA,
            depth: 0,
            nodes: 0,
        }
    }
}

/// One search invocation: an iterative-deepening alpha-beta driver over
/// Validator-filtered pseudo-legal moves.
///
/// Borrows the engine's transposition, killer and history tables for the
/// duration of the search. Single-threaded and synchronous; the wall-clock
/// deadline is polled at every node and expiry unwinds the recursion through
/// error propagation, so a timed-out node never stores a transposition entry.
pub struct Search<'a, V, E> {
    validator: &'a V,
    evaluator: &'a E,

    ttable: &'a mut TTable,
    killers: &'a mut KillerTable,
    history: &'a mut HistoryTable,

    config: SearchConfig,
    deadline: Instant,
    nodes: u64,

    /// Occurrence counts for every fingerprint on the current search path.
    /// Incremented before descending into a child, decremented on backtrack.
    repetitions: HashMap<ZobristKey, u32>,
}

impl<'a, V: Validator, E: Evaluator> Search<'a, V, E> {
    /// Construct a new [`Search`] borrowing the provided tables.
    pub fn new(
        validator: &'a V,
        evaluator: &'a E,
        ttable: &'a mut TTable,
        killers: &'a mut KillerTable,
        history: &'a mut HistoryTable,
        config: SearchConfig,
    ) -> Self {
        Self {
            validator,
            evaluator,
            ttable,
            killers,
            history,
            config,
            deadline: Instant::now() + config.max_time,
            nodes: 0,
            repetitions: HashMap::new(),
        }
    }

    /// Run the search on `position`, consuming this [`Search`].
    ///
    /// Iterates depth 1, 2, 3, … up to the configured maximum, each iteration
    /// seeded by the previous one's transposition data and score. When the
    /// budget expires mid-iteration the partial iteration is discarded and
    /// the previous completed result is returned.
    pub fn start(mut self, position: &Position) -> SearchResult {
        let mut root_moves = self.legal_moves(position);
        let mut result = SearchResult::default();

        if root_moves.is_empty() {
            return result;
        }

        // The root position is on the path once before any move is made
        *self.repetitions.entry(position.key()).or_insert(0) += 1;

        for depth in 1..=self.config.max_depth.min(MAX_DEPTH) {
            if Instant::now() >= self.deadline {
                break;
            }

            // Aspiration window around the previous score. Mate scores swing
            // too much between iterations to be worth a narrow window.
            let mut full_window = depth == 1 || result.score.is_mate();
            loop {
                let (alpha, beta) = if full_window {
                    (Score::ALPHA, Score::BETA)
                } else {
                    (
                        result.score - ASPIRATION_WINDOW,
                        result.score + ASPIRATION_WINDOW,
                    )
                };

                match self.search_root(position, &mut root_moves, depth, alpha, beta) {
                    Ok((score, best_move)) => {
                        // A score outside the aspiration window is only a
                        // bound; re-search this depth with the full window
                        if !full_window && (score <= alpha || score >= beta) {
                            full_window = true;
                            continue;
                        }

                        result.score = score;
                        result.depth = depth;
                        result.best_move = best_move;

                        debug!(
                            "depth {depth}: best {} score {score} nodes {}",
                            result
                                .best_move
                                .map_or_else(|| "-".into(), |mv| mv.to_string()),
                            self.nodes,
                        );
                    }
                    // Out of time: discard the partial iteration and keep the
                    // deepest completed result
                    Err(_) => {
                        result.nodes = self.nodes;
                        return result;
                    }
                }
                break;
            }
        }

        result.nodes = self.nodes;
        result
    }

    /// Search every root move at `depth`, returning the best score and move.
    ///
    /// The root keeps its own move loop (rather than relying on the
    /// transposition table for the best move) so a partially searched
    /// iteration can never corrupt the reported move.
    fn search_root(
        &mut self,
        position: &Position,
        root_moves: &mut MoveList,
        depth: u8,
        mut alpha: Score,
        beta: Score,
    ) -> Result<(Score, Option<Move>)> {
        let key = position.key();
        let tt_move = self.ttable.get(&key).and_then(|entry| entry.best_move);
        self.order_moves(position, root_moves, tt_move, depth);

        let original_alpha = alpha;
        let mut best = Score::ALPHA;
        let mut best_move = None;

        for mv in root_moves.iter() {
            let next = position.with_move_made(*mv);
            let next_key = next.key();

            *self.repetitions.entry(next_key).or_insert(0) += 1;
            let searched = self
                .negamax(&next, depth - 1, 1, -beta, -alpha, true)
                .map(|score| -score);
            self.decrement_repetition(next_key);

            let score = searched?;
            if score > best {
                best = score;
                best_move = Some(*mv);
                if score > alpha {
                    alpha = score;
                }
            }
            if alpha >= beta {
                break;
            }
        }

        self.ttable.store(TTableEntry {
            key,
            depth,
            score: best,
            bound: Bound::classify(best, original_alpha, beta),
            best_move,
        });

        Ok((best, best_move))
    }

    /// Alpha-beta in negamax form, fail-soft.
    ///
    /// `ply` is the distance from the root; `allow_null` is false for the
    /// node directly following a null move, so the turn is never passed
    /// twice in a row.
    fn negamax(
        &mut self,
        position: &Position,
        depth: u8,
        ply: u8,
        mut alpha: Score,
        mut beta: Score,
        allow_null: bool,
    ) -> Result<Score> {
        self.check_deadline()?;
        self.nodes += 1;

        let key = position.key();

        // Threefold repetition along this path is a draw, material be damned
        if self.repetitions.get(&key).copied().unwrap_or(0) >= 3 {
            return Ok(Score::DRAW);
        }

        // Transposition probe: an entry from an equal-or-deeper search either
        // cuts off outright or narrows the window with its bound
        let tt_move = match self.ttable.get(&key) {
            Some(entry) => {
                if let Some(score) = entry.try_score(depth, ply, alpha, beta) {
                    return Ok(score);
                }
                if entry.depth >= depth {
                    let score = entry.score.relative(ply);
                    match entry.bound {
                        Bound::Lower => alpha = alpha.max(score),
                        Bound::Upper => beta = beta.min(score),
                        Bound::Exact => {}
                    }
                    if alpha >= beta {
                        return Ok(score);
                    }
                }
                entry.best_move
            }
            None => None,
        };

        // The horizon: resolve captures before trusting the static score
        if depth == 0 {
            return self.quiescence(position, alpha, beta);
        }

        let us = position.side_to_move();
        let in_check = self.validator.is_in_check(position, us);

        // Null-move pruning: if passing the turn still beats beta at reduced
        // depth, a real move surely would. Unsound in check and in pawn-only
        // endings (zugzwang), so both are excluded.
        if self.config.use_null_move
            && allow_null
            && !in_check
            && depth >= MIN_NULL_MOVE_DEPTH
            && position.has_non_pawn_material(us)
        {
            let null = position.with_null_move();
            let null_depth = depth - 1 - NULL_MOVE_REDUCTION;
            let score = -self.negamax(&null, null_depth, ply + 1, -beta, -beta + 1, false)?;
            if score >= beta {
                return Ok(score);
            }
        }

        let mut moves = self.legal_moves(position);
        if moves.is_empty() {
            // Terminal only by the Validator's word: the generator
            // over-produces, so emptiness alone proves nothing
            return Ok(if self.validator.is_checkmate(position, us) {
                Score::mated_in(ply)
            } else {
                Score::DRAW
            });
        }

        self.order_moves(position, &mut moves, tt_move, depth);

        let original_alpha = alpha;
        let mut best = Score::ALPHA;
        let mut best_move = moves[0];

        for (index, mv) in moves.iter().enumerate() {
            let next = position.with_move_made(*mv);
            let next_key = next.key();
            *self.repetitions.entry(next_key).or_insert(0) += 1;

            // Late-move reduction: with decent ordering, moves this far down
            // the list rarely matter. Probe them one ply shallower with a
            // zero window and only pay for the full search if they surprise.
            let reduce = self.config.use_lmr
                && depth >= MIN_LMR_DEPTH
                && index >= MIN_LMR_MOVES
                && !in_check
                && !position.is_capture(*mv);

            let searched = if reduce {
                match self
                    .negamax(&next, depth - 2, ply + 1, -alpha - 1, -alpha, true)
                    .map(|score| -score)
                {
                    Ok(score) if score > alpha => self
                        .negamax(&next, depth - 1, ply + 1, -beta, -alpha, true)
                        .map(|score| -score),
                    other => other,
                }
            } else {
                self.negamax(&next, depth - 1, ply + 1, -beta, -alpha, true)
                    .map(|score| -score)
            };

            self.decrement_repetition(next_key);
            let score = searched?;

            if score > best {
                best = score;
                if score > alpha {
                    alpha = score;
                    best_move = *mv;
                }
                if score >= beta {
                    // Remember quiet refutations for ordering at this depth
                    if !position.is_capture(*mv) {
                        self.killers.insert(depth, *mv);
                        self.history.update(*mv, depth);
                    }
                    break;
                }
            }
        }

        // The loop ran to completion or a natural cutoff, so this entry is
        // trustworthy. Timed-out nodes never reach here.
        self.ttable.store(TTableEntry {
            key,
            depth,
            score: best.absolute(ply),
            bound: Bound::classify(best, original_alpha, beta),
            best_move: Some(best_move),
        });

        Ok(best)
    }

    /// Capture-only search past the horizon.
    ///
    /// Standing pat is always allowed — not capturing is always an option, so
    /// the static score is a lower bound — which keeps the engine from
    /// misjudging positions mid-exchange.
    fn quiescence(&mut self, position: &Position, mut alpha: Score, beta: Score) -> Result<Score> {
        self.check_deadline()?;
        self.nodes += 1;

        let stand_pat = self
            .evaluator
            .score(position, position.side_to_move());
        if stand_pat >= beta {
            return Ok(stand_pat);
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut captures = self.legal_moves(position);
        captures.retain(|mv| position.is_capture(*mv));
        captures.sort_by_cached_key(|mv| self.capture_order_key(position, *mv));

        let mut best = stand_pat;
        for mv in captures.iter() {
            let next = position.with_move_made(*mv);
            let score = -self.quiescence(&next, -beta, -alpha)?;

            if score > best {
                best = score;
                if score > alpha {
                    alpha = score;
                }
                if score >= beta {
                    break;
                }
            }
        }

        Ok(best)
    }

    /// Pseudo-legal moves for the side to move, filtered through the
    /// Validator. Every move the search applies passes through here first.
    fn legal_moves(&self, position: &Position) -> MoveList {
        let mut moves = generate_pseudo_legal(position, position.side_to_move());
        moves.retain(|mv| self.validator.is_valid_move(position, *mv));
        moves
    }

    /// Sort `moves` so the most promising come first. Stable, so ties keep
    /// their encounter order. Ordering never affects which move a full
    /// search settles on — only how quickly the rest are refuted.
    fn order_moves(
        &self,
        position: &Position,
        moves: &mut MoveList,
        tt_move: Option<Move>,
        depth: u8,
    ) {
        moves.sort_by_cached_key(|mv| self.move_order_key(position, *mv, tt_move, depth));
    }

    /// Ordering key for `mv`; lower sorts earlier.
    ///
    /// Priority: transposition move, then captures by most-valuable-victim /
    /// least-valuable-attacker, then promotion/castling bonuses, killers and
    /// history, and a penalty for parking a piece where an enemy pawn
    /// attacks it.
    fn move_order_key(
        &self,
        position: &Position,
        mv: Move,
        tt_move: Option<Move>,
        depth: u8,
    ) -> i32 {
        if tt_move == Some(mv) {
            return i32::MIN;
        }

        let (from, to) = (mv.from(), mv.to());
        let us = position.side_to_move();
        // A generated move always has a piece on its origin
        let mover = position.piece_at(from).unwrap();
        let victim = position.piece_at(to);
        let kind = MoveKind::classify(mover, mv, victim.is_some());

        let mut score = 0;

        if let Some(victim) = victim {
            score += (10 * victim.kind().value() - mover.kind().value()) << CAPTURE_SHIFT;
        } else if kind == MoveKind::EnPassant {
            score += (10 * PieceKind::Pawn.value() - PieceKind::Pawn.value()) << CAPTURE_SHIFT;
        } else {
            if self.killers.contains(depth, mv) {
                score += KILLER_BONUS;
            }
            score += HISTORY_WEIGHT * self.history.get(mv).min(HISTORY_ORDER_CAP);
        }

        match kind {
            MoveKind::Castle => score += CASTLE_BONUS,
            MoveKind::Promotion => score += PROMOTION_BONUS,
            _ => {}
        }

        // Parking on a square a cheaper enemy piece attacks invites a trade
        // down; pawns are the cheapest attackers and the cheapest to detect
        let enemy_pawns = position.pieces_of(us.opponent(), PieceKind::Pawn);
        if pawn_attacks(to, us).intersects(enemy_pawns)
            && mover.kind().value() > PieceKind::Pawn.value()
        {
            score -= mover.kind().value() / 2;
        }

        -score
    }

    /// Ordering key for quiescence captures: plain MVV-LVA.
    fn capture_order_key(&self, position: &Position, mv: Move) -> i32 {
        let victim_value = position
            .piece_at(mv.to())
            .map_or(PieceKind::Pawn.value(), |victim| victim.kind().value());
        // A generated move always has a piece on its origin
        let attacker = position.piece_at(mv.from()).unwrap();

        -(10 * victim_value - attacker.kind().value())
    }

    /// Fails when the wall-clock budget is spent, unwinding the recursion.
    /// Polled at every node entry.
    #[inline(always)]
    fn check_deadline(&self) -> Result<()> {
        if Instant::now() >= self.deadline {
            bail!("search budget of {:?} exhausted", self.config.max_time);
        }
        Ok(())
    }

    /// Remove one occurrence of `key` from the path counts.
    fn decrement_repetition(&mut self, key: ZobristKey) {
        if let Some(count) = self.repetitions.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        attacks_for, Board, CastlingRights, Color, Piece, Square,
    };

    /// A compact legality oracle for unit tests: pseudo-legal geometry plus
    /// a king-safety check by attack scan. Integration tests carry a fuller
    /// version; this one exists so search internals can be driven in-crate.
    struct Oracle;

    impl Oracle {
        fn attacked(position: &Position, square: Square, by: Color) -> bool {
            let occupancy = position.occupied();
            PieceKind::all().into_iter().any(|kind| {
                position
                    .pieces_of(by, kind)
                    .into_iter()
                    .any(|from| attacks_for(kind, from, by, occupancy).contains(square))
            })
        }

        fn legal_for(&self, position: &Position, color: Color) -> Vec<Move> {
            generate_pseudo_legal(position, color)
                .into_iter()
                .filter(|mv| self.move_is_safe(position, *mv, color))
                .collect()
        }

        fn move_is_safe(&self, position: &Position, mv: Move, color: Color) -> bool {
            let next = position.with_move_made(mv);
            !self.is_in_check(&next, color)
        }
    }

    impl Validator for Oracle {
        fn legal_moves(&self, position: &Position, from: Square) -> Vec<Square> {
            match position.piece_at(from) {
                Some(piece) => self
                    .legal_for(position, piece.color())
                    .into_iter()
                    .filter(|mv| mv.from() == from)
                    .map(|mv| mv.to())
                    .collect(),
                None => Vec::new(),
            }
        }

        fn is_in_check(&self, position: &Position, color: Color) -> bool {
            position
                .king(color)
                .is_some_and(|king| Self::attacked(position, king, color.opponent()))
        }

        fn is_valid_move(&self, position: &Position, mv: Move) -> bool {
            let Some(piece) = position.piece_at(mv.from()) else {
                return false;
            };
            generate_pseudo_legal(position, piece.color()).contains(&mv)
                && self.move_is_safe(position, mv, piece.color())
        }

        fn is_checkmate(&self, position: &Position, color: Color) -> bool {
            self.is_in_check(position, color) && self.legal_for(position, color).is_empty()
        }

        fn is_stalemate(&self, position: &Position, color: Color) -> bool {
            !self.is_in_check(position, color) && self.legal_for(position, color).is_empty()
        }
    }

    /// Pure material count, relative to the side to move.
    struct Material;

    impl Evaluator for Material {
        fn score(&self, position: &Position, side_to_move: Color) -> Score {
            let mut total = 0;
            for kind in PieceKind::all() {
                let value = kind.value();
                total += value * position.pieces_of(side_to_move, kind).population() as i32;
                total -= value
                    * position
                        .pieces_of(side_to_move.opponent(), kind)
                        .population() as i32;
            }
            Score::new(total)
        }
    }

    fn run_search(position: &Position, config: SearchConfig) -> SearchResult {
        let mut ttable = TTable::new(config.tt_size_mb);
        let mut killers = KillerTable::default();
        let mut history = HistoryTable::default();
        Search::new(
            &Oracle,
            &Material,
            &mut ttable,
            &mut killers,
            &mut history,
            config,
        )
        .start(position)
    }

    fn startpos() -> Position {
        Position::from_board(&Board::standard(), Color::White, CastlingRights::ALL, None)
    }

    #[test]
    fn one_ply_search_picks_a_legal_opening_move() {
        let config = SearchConfig {
            max_depth: 1,
            ..Default::default()
        };
        let result = run_search(&startpos(), config);

        let mv = result.best_move.expect("20 legal moves exist");
        let oracle = Oracle;
        assert!(oracle.is_valid_move(&startpos(), mv));
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn finds_mate_in_one() {
        // White: Ka6, Qb6; Black: Ka8. Qb7 is mate.
        let mut board = Board::new();
        board.set(Square::A6, Piece::new(Color::White, PieceKind::King));
        board.set(Square::B6, Piece::new(Color::White, PieceKind::Queen));
        board.set(Square::A8, Piece::new(Color::Black, PieceKind::King));
        let position = Position::from_board(&board, Color::White, CastlingRights::NONE, None);

        let config = SearchConfig {
            max_depth: 3,
            ..Default::default()
        };
        let result = run_search(&position, config);

        // Both queen checks on the 7th are mate; either is acceptable
        let mates = [
            Move::new(Square::B6, Square::B7),
            Move::new(Square::B6, Square::A7),
        ];
        assert!(mates.contains(&result.best_move.unwrap()));
        assert!(result.score.is_mate());
    }

    #[test]
    fn a_thrice_repeated_path_scores_zero() {
        // Black is a queen up, but the node has already occurred twice on
        // this path: one more visit is a draw by repetition
        let mut board = Board::new();
        board.set(Square::A1, Piece::new(Color::White, PieceKind::King));
        board.set(Square::H8, Piece::new(Color::Black, PieceKind::King));
        board.set(Square::D8, Piece::new(Color::Black, PieceKind::Queen));
        let position = Position::from_board(&board, Color::White, CastlingRights::NONE, None);

        let mut ttable = TTable::new(1);
        let mut killers = KillerTable::default();
        let mut history = HistoryTable::default();
        let mut search = Search::new(
            &Oracle,
            &Material,
            &mut ttable,
            &mut killers,
            &mut history,
            SearchConfig::default(),
        );

        search.repetitions.insert(position.key(), 3);
        let score = search
            .negamax(&position, 4, 0, Score::ALPHA, Score::BETA, true)
            .unwrap();
        assert_eq!(score, Score::DRAW);

        // Without the repetitions the same node reflects the material deficit
        search.repetitions.clear();
        search.ttable.clear();
        let score = search
            .negamax(&position, 2, 0, Score::ALPHA, Score::BETA, true)
            .unwrap();
        assert!(score < Score::DRAW);
    }

    #[test]
    fn quiescence_on_a_quiet_position_returns_the_static_score() {
        // No captures available for either side
        let mut board = Board::new();
        board.set(Square::A1, Piece::new(Color::White, PieceKind::King));
        board.set(Square::H8, Piece::new(Color::Black, PieceKind::King));
        board.set(Square::D4, Piece::new(Color::White, PieceKind::Pawn));
        let position = Position::from_board(&board, Color::White, CastlingRights::NONE, None);

        let mut ttable = TTable::new(1);
        let mut killers = KillerTable::default();
        let mut history = HistoryTable::default();
        let mut search = Search::new(
            &Oracle,
            &Material,
            &mut ttable,
            &mut killers,
            &mut history,
            SearchConfig::default(),
        );

        let score = search
            .quiescence(&position, Score::ALPHA, Score::BETA)
            .unwrap();
        assert_eq!(score, Material.score(&position, Color::White));
    }

    #[test]
    fn expired_budget_reports_no_move() {
        let config = SearchConfig {
            max_time: Duration::from_millis(0),
            ..Default::default()
        };
        let result = run_search(&startpos(), config);

        // No iteration completed, so there is no result to trust; the engine
        // falls back to a random legal move in this case
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn no_legal_moves_yields_no_move() {
        // Black is stalemated: Ka8 against Kb6, Qc7
        let mut board = Board::new();
        board.set(Square::A8, Piece::new(Color::Black, PieceKind::King));
        board.set(Square::B6, Piece::new(Color::White, PieceKind::King));
        board.set(Square::C7, Piece::new(Color::White, PieceKind::Queen));
        let position = Position::from_board(&board, Color::Black, CastlingRights::NONE, None);

        let result = run_search(&position, SearchConfig::default());
        assert_eq!(result.best_move, None);
    }
}
