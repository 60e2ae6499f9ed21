//! Unit tests for epi-grid.

#[cfg(test)]
mod construction {
    use epi_core::Coord;

    use crate::{Grid, GridError};

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 3, true).unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.empty_count(), 12);
        assert!(!grid.is_full());
        assert_eq!(grid.observation().shape(), (4, 3, 6));
        assert!(grid.observation().as_slice().iter().all(|&v| v == 0.0));
        assert!(grid.get(Coord::new(1, 1)).is_none());
    }

    #[test]
    fn zero_extent_rejected() {
        assert_eq!(
            Grid::new(0, 5, true).unwrap_err(),
            GridError::InvalidDimensions { width: 0, height: 5 }
        );
        assert!(Grid::new(5, 0, false).is_err());
    }
}

#[cfg(test)]
mod placement {
    use epi_core::{AgentId, AgentState, Coord, SimRng};

    use crate::{Grid, GridError};

    #[test]
    fn place_sets_one_hot_layer() {
        let mut grid = Grid::new(3, 3, false).unwrap();
        grid.place(AgentId(0), Coord::new(1, 2), AgentState::Infectious).unwrap();

        let obs = grid.observation();
        assert_eq!(obs.get(Coord::new(1, 2), AgentState::Infectious), 1.0);
        assert_eq!(obs.cell(Coord::new(1, 2)).iter().sum::<f32>(), 1.0);
        assert_eq!(obs.state_at(Coord::new(1, 2)), Some(AgentState::Infectious));
        // Flat layout: ((x * height) + y) * 6 + state.
        assert_eq!(obs.as_slice()[((1 * 3) + 2) * 6 + 2], 1.0);
        assert_eq!(grid.empty_count(), 8);
    }

    #[test]
    fn place_on_occupied_cell_fails() {
        let mut grid = Grid::new(3, 3, false).unwrap();
        grid.place(AgentId(0), Coord::new(0, 0), AgentState::Susceptible).unwrap();
        assert_eq!(
            grid.place(AgentId(1), Coord::new(0, 0), AgentState::Susceptible),
            Err(GridError::CellOccupied(Coord::new(0, 0)))
        );
    }

    #[test]
    fn place_wraps_on_toric_grid() {
        let mut grid = Grid::new(3, 3, true).unwrap();
        let at = grid.place(AgentId(0), Coord::new(-1, 4), AgentState::Susceptible).unwrap();
        assert_eq!(at, Coord::new(2, 1));
        assert_eq!(grid.get(Coord::new(2, 1)), Some(AgentId(0)));
    }

    #[test]
    fn place_out_of_bounds_on_bounded_grid_fails() {
        let mut grid = Grid::new(3, 3, false).unwrap();
        assert_eq!(
            grid.place(AgentId(0), Coord::new(3, 0), AgentState::Susceptible),
            Err(GridError::OutOfBounds(Coord::new(3, 0)))
        );
    }

    #[test]
    fn fill_then_grid_full() {
        let mut grid = Grid::new(2, 2, true).unwrap();
        let mut rng = SimRng::new(1);
        for i in 0..4 {
            grid.place_random_empty(AgentId(i), AgentState::Susceptible, &mut rng).unwrap();
        }
        assert!(grid.is_full());
        assert_eq!(grid.occupied().count(), 4);
        assert_eq!(
            grid.place_random_empty(AgentId(4), AgentState::Susceptible, &mut rng),
            Err(GridError::GridFull { width: 2, height: 2 })
        );
    }

    #[test]
    fn random_placement_never_double_books() {
        let mut grid = Grid::new(10, 10, false).unwrap();
        let mut rng = SimRng::new(42);
        for i in 0..75 {
            grid.place_random_empty(AgentId(i), AgentState::Susceptible, &mut rng).unwrap();
        }
        assert_eq!(grid.empty_count(), 25);
        assert_eq!(grid.observation().layer_count(AgentState::Susceptible), 75);
    }
}

#[cfg(test)]
mod movement {
    use epi_core::{AgentId, AgentState, Coord, SimRng};

    use crate::{Grid, GridError};

    #[test]
    fn move_carries_state_and_updates_empties() {
        let mut grid = Grid::new(3, 3, false).unwrap();
        grid.place(AgentId(5), Coord::new(0, 0), AgentState::Exposed).unwrap();
        grid.move_agent(Coord::new(0, 0), Coord::new(1, 1)).unwrap();

        assert!(grid.get(Coord::new(0, 0)).is_none());
        assert_eq!(grid.get(Coord::new(1, 1)), Some(AgentId(5)));
        assert_eq!(grid.observation().state_at(Coord::new(0, 0)), None);
        assert_eq!(grid.observation().state_at(Coord::new(1, 1)), Some(AgentState::Exposed));
        assert_eq!(grid.empty_count(), 8);
        assert!(grid.is_cell_empty(Coord::new(0, 0)));
    }

    #[test]
    fn move_errors() {
        let mut grid = Grid::new(3, 3, false).unwrap();
        grid.place(AgentId(0), Coord::new(0, 0), AgentState::Susceptible).unwrap();
        grid.place(AgentId(1), Coord::new(0, 1), AgentState::Susceptible).unwrap();

        assert_eq!(
            grid.move_agent(Coord::new(2, 2), Coord::new(1, 1)),
            Err(GridError::CellEmpty(Coord::new(2, 2)))
        );
        assert_eq!(
            grid.move_agent(Coord::new(0, 0), Coord::new(0, 1)),
            Err(GridError::CellOccupied(Coord::new(0, 1)))
        );
    }

    #[test]
    fn set_state_rewrites_layer() {
        let mut grid = Grid::new(2, 2, true).unwrap();
        grid.place(AgentId(0), Coord::new(1, 0), AgentState::Susceptible).unwrap();
        grid.set_state(Coord::new(1, 0), AgentState::Vaccinated).unwrap();
        let obs = grid.observation();
        assert_eq!(obs.get(Coord::new(1, 0), AgentState::Susceptible), 0.0);
        assert_eq!(obs.get(Coord::new(1, 0), AgentState::Vaccinated), 1.0);
        assert_eq!(
            grid.set_state(Coord::new(0, 0), AgentState::Recovered),
            Err(GridError::CellEmpty(Coord::new(0, 0)))
        );
    }

    #[test]
    fn surrounded_agent_has_no_empty_neighbor() {
        let mut grid = Grid::new(3, 3, true).unwrap();
        let mut rng = SimRng::new(0);
        for i in 0..9 {
            grid.place_random_empty(AgentId(i), AgentState::Susceptible, &mut rng).unwrap();
        }
        assert!(grid.random_empty_neighbor(Coord::new(1, 1), &mut rng).is_none());
    }

    #[test]
    fn random_empty_neighbor_is_adjacent_and_empty() {
        let mut grid = Grid::new(5, 5, false).unwrap();
        let mut rng = SimRng::new(8);
        grid.place(AgentId(0), Coord::new(2, 2), AgentState::Susceptible).unwrap();
        grid.place(AgentId(1), Coord::new(1, 1), AgentState::Susceptible).unwrap();
        for _ in 0..50 {
            let to = grid.random_empty_neighbor(Coord::new(2, 2), &mut rng).unwrap();
            assert!((to.x - 2).abs() <= 1 && (to.y - 2).abs() <= 1);
            assert_ne!(to, Coord::new(2, 2));
            assert_ne!(to, Coord::new(1, 1));
        }
    }
}

#[cfg(test)]
mod neighborhood {
    use epi_core::{AgentId, AgentState, Coord};

    use crate::{Grid, Neighborhood};

    #[test]
    fn moore_scan_order_dx_outer_dy_inner() {
        let grid = Grid::new(5, 5, false).unwrap();
        let cells = grid.neighborhood(Coord::new(2, 2), 1, Neighborhood::Moore, false);
        let expected = [
            (1, 1), (1, 2), (1, 3),
            (2, 1),         (2, 3),
            (3, 1), (3, 2), (3, 3),
        ];
        assert_eq!(cells, expected.map(Coord::from).to_vec());
    }

    #[test]
    fn include_center() {
        let grid = Grid::new(5, 5, false).unwrap();
        let cells = grid.neighborhood(Coord::new(2, 2), 1, Neighborhood::Moore, true);
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn von_neumann_is_a_diamond() {
        let grid = Grid::new(7, 7, false).unwrap();
        assert_eq!(grid.neighborhood(Coord::new(3, 3), 1, Neighborhood::VonNeumann, false).len(), 4);
        assert_eq!(grid.neighborhood(Coord::new(3, 3), 2, Neighborhood::VonNeumann, false).len(), 12);
    }

    #[test]
    fn bounded_corner_omits_out_of_range() {
        let grid = Grid::new(5, 5, false).unwrap();
        let cells = grid.neighborhood(Coord::new(0, 0), 1, Neighborhood::Moore, false);
        assert_eq!(cells, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn toric_corner_wraps() {
        let grid = Grid::new(5, 5, true).unwrap();
        let cells = grid.neighborhood(Coord::new(0, 0), 1, Neighborhood::Moore, false);
        assert_eq!(cells.len(), 8);
        assert!(cells.contains(&Coord::new(4, 4)));
        assert!(cells.contains(&Coord::new(0, 4)));
        assert!(cells.contains(&Coord::new(4, 0)));
    }

    #[test]
    fn tiny_toric_grid_dedups_and_excludes_center() {
        let grid = Grid::new(2, 2, true).unwrap();
        let cells = grid.neighborhood(Coord::new(0, 0), 1, Neighborhood::Moore, false);
        assert_eq!(cells.len(), 3);
        assert!(!cells.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn neighbors_reports_occupants_only() {
        let mut grid = Grid::new(4, 4, true).unwrap();
        grid.place(AgentId(0), Coord::new(0, 0), AgentState::Infectious).unwrap();
        grid.place(AgentId(1), Coord::new(3, 3), AgentState::Susceptible).unwrap();
        grid.place(AgentId(2), Coord::new(2, 2), AgentState::Susceptible).unwrap();
        assert_eq!(grid.moore_neighbors(Coord::new(0, 0)), vec![AgentId(1)]);
        assert_eq!(grid.empty_neighbors(Coord::new(0, 0)).len(), 7);
    }
}
