//! Single-occupancy population grid.
//!
//! # Data layout
//!
//! Cells are stored column-major by `x` to match the observation tensor:
//!
//! ```text
//! cells[x * height + y]   → Option<AgentId>
//! ```
//!
//! Alongside the occupancy vector the grid keeps an index of empty cells
//! (`empties`) with a back-pointer per cell (`empty_slot`).  Occupying a cell
//! swap-removes it from `empties` and vacating pushes it back, so both
//! random-empty-cell placement and emptiness checks are O(1).
//!
//! # Wraparound
//!
//! On a toric grid every coordinate is reduced modulo the extents before use.
//! On a bounded grid out-of-range coordinates are never wrapped: lookups
//! return `None` and neighborhood scans silently omit them.

use epi_core::{AgentId, AgentState, Coord, SimRng};

use crate::{GridError, GridResult, Observation};

/// Which cells count as "adjacent" within a given radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// The full `(2r+1)²` square (Chebyshev distance ≤ r).
    #[default]
    Moore,
    /// The diamond of Manhattan distance ≤ r.
    VonNeumann,
}

/// The population grid: occupancy, empty-cell index, and observation tensor.
#[derive(Clone, Debug)]
pub struct Grid {
    width:       u32,
    height:      u32,
    toric:       bool,
    cells:       Vec<Option<AgentId>>,
    empties:     Vec<Coord>,
    /// Position of each cell inside `empties`; `None` while occupied.
    empty_slot:  Vec<Option<usize>>,
    observation: Observation,
}

impl Grid {
    /// Create an empty `width × height` grid.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimensions`] if either extent is zero or does not
    /// fit in an `i32` coordinate.
    pub fn new(width: u32, height: u32, toric: bool) -> GridResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cell_count = width as usize * height as usize;

        let mut empties = Vec::with_capacity(cell_count);
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                empties.push(Coord::new(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            toric,
            cells: vec![None; cell_count],
            empties,
            empty_slot: (0..cell_count).map(Some).collect(),
            observation: Observation::new(width, height),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_toric(&self) -> bool {
        self.toric
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn empty_count(&self) -> usize {
        self.empties.len()
    }

    pub fn is_full(&self) -> bool {
        self.empties.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Resolve `coord` to an in-grid coordinate: wrapped when toric, `None`
    /// when out of range on a bounded grid.
    #[inline]
    pub fn normalize(&self, coord: Coord) -> Option<Coord> {
        if self.toric {
            Some(coord.wrapped(self.width, self.height))
        } else if coord.in_bounds(self.width, self.height) {
            Some(coord)
        } else {
            None
        }
    }

    /// The agent at `coord`, if any.
    pub fn get(&self, coord: Coord) -> Option<AgentId> {
        let coord = self.normalize(coord)?;
        self.cells[self.index(coord)]
    }

    /// `true` if `coord` resolves to a cell with no occupant.
    /// Out-of-range coordinates on a bounded grid are not empty cells.
    pub fn is_cell_empty(&self, coord: Coord) -> bool {
        match self.normalize(coord) {
            Some(c) => self.cells[self.index(c)].is_none(),
            None => false,
        }
    }

    /// Read-only view of the observation tensor.
    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    /// Iterator over every occupied cell in `x`-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, AgentId)> + '_ {
        let height = self.height as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|agent| (Coord::new((i / height) as i32, (i % height) as i32), agent))
        })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` with `state` at `coord`.  Returns the normalized coordinate.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] on a bounded grid, [`GridError::CellOccupied`]
    /// if another agent is already there.
    pub fn place(&mut self, agent: AgentId, coord: Coord, state: AgentState) -> GridResult<Coord> {
        let coord = self.normalize(coord).ok_or(GridError::OutOfBounds(coord))?;
        let idx = self.index(coord);
        if self.cells[idx].is_some() {
            return Err(GridError::CellOccupied(coord));
        }
        self.occupy(idx, agent);
        self.observation.set_one_hot(coord, state);
        Ok(coord)
    }

    /// Put `agent` on a uniformly sampled empty cell.
    ///
    /// Consumes one draw when at least one cell is empty and none otherwise.
    ///
    /// # Errors
    ///
    /// [`GridError::GridFull`] if no cell is empty.
    pub fn place_random_empty(
        &mut self,
        agent: AgentId,
        state: AgentState,
        rng:   &mut SimRng,
    ) -> GridResult<Coord> {
        let coord = *rng.choose(&self.empties).ok_or(GridError::GridFull {
            width:  self.width,
            height: self.height,
        })?;
        self.place(agent, coord, state)
    }

    /// Move the occupant of `from` to the empty cell `to`, carrying its
    /// observation layer along.  Returns the normalized destination.
    ///
    /// # Errors
    ///
    /// [`GridError::CellEmpty`] if nobody is at `from`,
    /// [`GridError::CellOccupied`] if `to` is taken,
    /// [`GridError::OutOfBounds`] for either coordinate on a bounded grid.
    pub fn move_agent(&mut self, from: Coord, to: Coord) -> GridResult<Coord> {
        let from = self.normalize(from).ok_or(GridError::OutOfBounds(from))?;
        let to = self.normalize(to).ok_or(GridError::OutOfBounds(to))?;
        let from_idx = self.index(from);
        let to_idx = self.index(to);

        let agent = self.cells[from_idx].ok_or(GridError::CellEmpty(from))?;
        if self.cells[to_idx].is_some() {
            return Err(GridError::CellOccupied(to));
        }
        let state = self.observation.state_at(from).ok_or(GridError::CellEmpty(from))?;

        self.vacate(from_idx, from);
        self.observation.clear(from);
        self.occupy(to_idx, agent);
        self.observation.set_one_hot(to, state);
        Ok(to)
    }

    /// Rewrite the observation layer of the occupant at `coord` after its
    /// state changed.
    ///
    /// # Errors
    ///
    /// [`GridError::CellEmpty`] if `coord` has no occupant.
    pub fn set_state(&mut self, coord: Coord, state: AgentState) -> GridResult<()> {
        let coord = self.normalize(coord).ok_or(GridError::OutOfBounds(coord))?;
        if self.cells[self.index(coord)].is_none() {
            return Err(GridError::CellEmpty(coord));
        }
        self.observation.set_one_hot(coord, state);
        Ok(())
    }

    // ── Neighborhood queries ──────────────────────────────────────────────

    /// Cells around `center` within `radius`, scanned with `dx` as the outer
    /// loop and `dy` as the inner loop, both from `-radius` to `radius`.
    ///
    /// On a toric grid offsets wrap independently and a cell reached twice
    /// (grids narrower than `2 * radius + 1`) is reported once.  Unless
    /// `include_center` is set, `center` itself is never reported, even when
    /// an offset wraps back onto it.  On a bounded grid out-of-range offsets
    /// are omitted.
    pub fn neighborhood(
        &self,
        center:         Coord,
        radius:         u32,
        kind:           Neighborhood,
        include_center: bool,
    ) -> Vec<Coord> {
        let r = radius as i32;
        let home = self.normalize(center);
        let mut out = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);

        for dx in -r..=r {
            for dy in -r..=r {
                if kind == Neighborhood::VonNeumann && dx.abs() + dy.abs() > r {
                    continue;
                }
                let is_center_offset = dx == 0 && dy == 0;
                if is_center_offset && !include_center {
                    continue;
                }
                let Some(cell) = self.normalize(center.offset(dx, dy)) else {
                    continue;
                };
                if !is_center_offset && !include_center && Some(cell) == home {
                    continue;
                }
                if self.toric && out.contains(&cell) {
                    continue;
                }
                out.push(cell);
            }
        }
        out
    }

    /// Occupants of the cells returned by [`neighborhood`](Self::neighborhood),
    /// in the same scan order.
    pub fn neighbors(
        &self,
        center:         Coord,
        radius:         u32,
        kind:           Neighborhood,
        include_center: bool,
    ) -> Vec<AgentId> {
        self.neighborhood(center, radius, kind, include_center)
            .into_iter()
            .filter_map(|c| self.cells[self.index(c)])
            .collect()
    }

    /// Occupants of the radius-1 Moore neighborhood, center excluded.
    pub fn moore_neighbors(&self, center: Coord) -> Vec<AgentId> {
        self.neighbors(center, 1, Neighborhood::Moore, false)
    }

    /// Empty cells of the radius-1 Moore neighborhood, in scan order.
    pub fn empty_neighbors(&self, center: Coord) -> Vec<Coord> {
        self.neighborhood(center, 1, Neighborhood::Moore, false)
            .into_iter()
            .filter(|&c| self.cells[self.index(c)].is_none())
            .collect()
    }

    /// A uniformly chosen empty Moore neighbor, or `None` if `center` is
    /// fully surrounded.  Draws only when a candidate exists.
    pub fn random_empty_neighbor(&self, center: Coord, rng: &mut SimRng) -> Option<Coord> {
        let candidates = self.empty_neighbors(center);
        rng.choose(&candidates).copied()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.x as usize * self.height as usize + coord.y as usize
    }

    fn occupy(&mut self, idx: usize, agent: AgentId) {
        self.cells[idx] = Some(agent);
        // Callers check the cell is empty first, so the slot is always set.
        let Some(slot) = self.empty_slot[idx].take() else {
            return;
        };
        self.empties.swap_remove(slot);
        if let Some(&moved) = self.empties.get(slot) {
            let moved_idx = self.index(moved);
            self.empty_slot[moved_idx] = Some(slot);
        }
    }

    fn vacate(&mut self, idx: usize, coord: Coord) {
        self.cells[idx] = None;
        self.empty_slot[idx] = Some(self.empties.len());
        self.empties.push(coord);
    }
}
