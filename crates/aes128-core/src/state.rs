//! The 4×4 cipher state.

use crate::block::{Block, BLOCK_SIZE};

/// Number of rows (and columns) in the state matrix.
pub const NB: usize = 4;

/// One block laid out as a 4×4 byte matrix.
///
/// Byte `k` of the linear block lives at row `k % 4`, column `k / 4`. Loading,
/// storing and every round transformation go through this type so the
/// mapping is defined exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// `cells[row][col]`.
    cells: [[u8; NB]; NB],
}

impl State {
    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut cells = [[0u8; NB]; NB];
        for (k, &byte) in block.iter().enumerate() {
            cells[k % NB][k / NB] = byte;
        }
        Self { cells }
    }

    /// Serializes back to linear byte order using the same mapping as
    /// [`State::from_block`].
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (k, byte) in block.iter_mut().enumerate() {
            *byte = self.cells[k % NB][k / NB];
        }
        block
    }

    /// Byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Copy of row `row`.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; NB] {
        self.cells[row]
    }

    /// Copy of column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; NB] {
        [
            self.cells[0][col],
            self.cells[1][col],
            self.cells[2][col],
            self.cells[3][col],
        ]
    }

    #[inline]
    pub(crate) fn set_column(&mut self, col: usize, column: [u8; NB]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.cells[row][col] = byte;
        }
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut [[u8; NB]; NB] {
        &mut self.cells
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.cells.iter_mut().flatten()
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
