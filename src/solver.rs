use log::{debug, trace};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::field::Field;
use crate::line::Line;
use crate::solution::Solution;

/// How the solver decides that three queens lie on one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollinearityCheck {
    /// Integer cross product of the three coordinates.
    #[default]
    Exact,
    /// Real-valued line through two queens, with
    /// [`COLLINEARITY_TOLERANCE`](crate::line::COLLINEARITY_TOLERANCE).
    Tolerance,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SolverOptions {
    pub collinearity: CollinearityCheck,
}

impl SolverOptions {
    pub fn with_collinearity(mut self, collinearity: CollinearityCheck) -> Self {
        self.collinearity = collinearity;
        self
    }
}

/// Counters collected during the last search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Queens committed to a column.
    pub commits: u64,
    /// Columns given up and popped.
    pub backtracks: u64,
    /// Candidate squares already under attack.
    pub attack_rejections: u64,
    /// Candidate squares in line with two placed queens.
    pub collinear_rejections: u64,
}

/// Backtracking search for N queens where no two attack each other and no
/// three lie on one straight line.
///
/// Queens are placed column by column, each in the lowest row that survives
/// both checks, so the first solution found is always the same for a given
/// size.
#[derive(Clone, Debug)]
pub struct Solver {
    size: u16,
    options: SolverOptions,
    /// One threat board per committed column.
    placements: Vec<Board>,
    /// `threats[i]` is the union of `placements[..i]`; one longer than `placements`.
    threats: Vec<Bitboard>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(size: u16) -> Self {
        Self::with_options(size, SolverOptions::default())
    }

    pub fn with_options(size: u16, options: SolverOptions) -> Self {
        Solver {
            size,
            options,
            placements: Vec::with_capacity(size as usize),
            threats: vec![Bitboard::empty(size as usize * size as usize)],
            stats: SearchStats::default(),
        }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Queens committed so far, one per column.
    pub fn placement(&self) -> Vec<Field> {
        Board::set_fields(&self.placements)
    }

    fn reset(&mut self) {
        self.placements.clear();
        self.threats.truncate(1);
        self.stats = SearchStats::default();
    }

    /// Run the search from an empty board. Returns `None` when no placement
    /// exists for this size.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn find_solution(&mut self) -> Option<Solution> {
        self.reset();
        debug!("searching for {} queens", self.size);

        // lowest row still untried in the current column
        let mut floor = 0;
        loop {
            let column = self.placements.len() as u16;
            if column == self.size {
                let solution = Solution::new(self.size, self.placement());
                debug!(
                    "found a solution for {} queens: {:?} ({:?})",
                    self.size,
                    solution.rows(),
                    self.stats
                );
                return Some(solution);
            }

            if self.advance(column, floor).is_some() {
                floor = 0;
                continue;
            }

            match self.retreat() {
                Some(row) => floor = row + 1,
                None => {
                    debug!("no solution for {} queens ({:?})", self.size, self.stats);
                    return None;
                }
            }
        }
    }

    /// Commit a queen to `column` in the lowest row at or above `floor` that is
    /// neither attacked nor in line with two placed queens.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub(crate) fn advance(&mut self, column: u16, floor: u16) -> Option<Field> {
        debug_assert_eq!(column as usize, self.placements.len());
        let attacked = self.threats.last()?;

        for row in floor..self.size {
            let candidate = Field::new(column, row);
            if attacked.get(candidate.to_index(self.size)) {
                self.stats.attack_rejections += 1;
                continue;
            }
            if self.in_line_with_placed(candidate) {
                self.stats.collinear_rejections += 1;
                continue;
            }

            self.commit(candidate);
            trace!("column {column}: queen at {candidate}");
            return Some(candidate);
        }

        trace!("column {column}: no free row from {floor}");
        None
    }

    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    fn commit(&mut self, field: Field) {
        let board = Board::queen_in_range(self.size, field);
        let mut threats = self
            .threats
            .last()
            .cloned()
            .unwrap_or_else(|| Bitboard::empty(self.size as usize * self.size as usize));
        threats |= board.bits();
        self.placements.push(board);
        self.threats.push(threats);
        self.stats.commits += 1;
    }

    /// Drop the queen of the last committed column and return its row, or
    /// `None` when there is nothing left to drop.
    pub(crate) fn retreat(&mut self) -> Option<u16> {
        let board = self.placements.pop()?;
        self.threats.pop();
        self.stats.backtracks += 1;

        let field = board.field()?;
        trace!("column {}: removing queen at {}", field.column(), field);
        Some(field.row())
    }

    fn in_line_with_placed(&self, candidate: Field) -> bool {
        let placed: Vec<Field> = self.placements.iter().filter_map(Board::field).collect();
        placed.iter().enumerate().any(|(i, &a)| {
            placed[i + 1..].iter().any(|&b| match self.options.collinearity {
                CollinearityCheck::Exact => Field::collinear(a, b, candidate),
                CollinearityCheck::Tolerance => {
                    Line::through(a, b).is_some_and(|line| line.contains(candidate))
                }
            })
        })
    }
}

/// Find the first placement of `size` queens with the default options.
pub fn find_solution(size: u16) -> Option<Solution> {
    Solver::new(size).find_solution()
}
