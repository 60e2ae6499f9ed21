//! Dense per-cell, per-state occupancy tensor.
//!
//! # Layout
//!
//! Shape is `(width, height, AgentState::COUNT)` stored row-major in a single
//! `Vec<f32>`:
//!
//! ```text
//! data[((x * height) + y) * AgentState::COUNT + state.index()]
//! ```
//!
//! An occupied cell has exactly one `1.0` along the state axis (the
//! occupant's state); an empty cell is all zeros.  `f32` matches what RL
//! frameworks consume directly.

use epi_core::{AgentState, Coord};

/// The one-hot observation tensor.  Read-only outside this crate; `Grid`
/// is the only writer.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    width:  u32,
    height: u32,
    data:   Vec<f32>,
}

impl Observation {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * AgentState::COUNT;
        Self { width, height, data: vec![0.0; len] }
    }

    /// `(width, height, num_states)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width as usize, self.height as usize, AgentState::COUNT)
    }

    /// The flat backing buffer in the layout described in the module docs.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The value of one state layer at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    pub fn get(&self, coord: Coord, state: AgentState) -> f32 {
        self.cell(coord)[state.index()]
    }

    /// All `AgentState::COUNT` layers of one cell.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    pub fn cell(&self, coord: Coord) -> &[f32] {
        let start = self.offset(coord);
        &self.data[start..start + AgentState::COUNT]
    }

    /// The state whose layer is set at `coord`, or `None` for an empty cell.
    pub fn state_at(&self, coord: Coord) -> Option<AgentState> {
        let cell = self.cell(coord);
        AgentState::ALL.into_iter().find(|s| cell[s.index()] > 0.0)
    }

    /// Number of cells whose `state` layer is set.
    pub fn layer_count(&self, state: AgentState) -> usize {
        self.data
            .chunks_exact(AgentState::COUNT)
            .filter(|cell| cell[state.index()] > 0.0)
            .count()
    }

    /// Clear every layer at `coord`, then set the `state` layer.
    pub(crate) fn set_one_hot(&mut self, coord: Coord, state: AgentState) {
        let start = self.offset(coord);
        let cell = &mut self.data[start..start + AgentState::COUNT];
        cell.fill(0.0);
        cell[state.index()] = 1.0;
    }

    pub(crate) fn clear(&mut self, coord: Coord) {
        let start = self.offset(coord);
        self.data[start..start + AgentState::COUNT].fill(0.0);
    }

    #[inline]
    fn offset(&self, coord: Coord) -> usize {
        assert!(
            coord.in_bounds(self.width, self.height),
            "observation index {coord} outside {}x{} grid",
            self.width,
            self.height,
        );
        (coord.x as usize * self.height as usize + coord.y as usize) * AgentState::COUNT
    }
}
