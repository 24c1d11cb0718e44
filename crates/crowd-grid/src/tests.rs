//! Unit tests for crowd-grid.

use crowd_core::{AgentId, GridPos, ObstacleId};

use crate::{Grid, Occupant};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn agent(n: u32) -> Occupant {
    Occupant::Agent(AgentId(n))
}

fn wall(n: u32) -> Occupant {
    Occupant::Obstacle(ObstacleId(n))
}

fn p(x: i32, y: i32) -> GridPos {
    GridPos::new(x, y)
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.occupied_count(), 0);
        assert!(g.is_empty(p(0, 0)));
        assert!(g.is_empty(p(3, 2)));
    }

    #[test]
    fn out_of_bounds_is_never_empty() {
        let g = Grid::new(4, 3);
        assert!(!g.is_empty(p(-1, 0)));
        assert!(!g.is_empty(p(4, 0)));
        assert!(!g.is_empty(p(0, 3)));
        assert!(!g.in_bounds(p(0, -1)));
        assert_eq!(g.occupant(p(9, 9)), None);
    }

    #[test]
    fn place_and_query() {
        let mut g = Grid::new(5, 5);
        g.place(agent(0), p(1, 2)).unwrap();
        assert!(!g.is_empty(p(1, 2)));
        assert_eq!(g.occupant(p(1, 2)), Some(agent(0)));
        assert_eq!(g.position_of(agent(0)), Some(p(1, 2)));
    }

    #[test]
    fn place_on_occupied_cell_fails() {
        let mut g = Grid::new(5, 5);
        g.place(wall(0), p(2, 2)).unwrap();
        let err = g.place(agent(0), p(2, 2)).unwrap_err();
        assert_eq!(err, GridError::Occupied { pos: p(2, 2), by: wall(0) });
        assert_eq!(g.position_of(agent(0)), None);
    }

    #[test]
    fn place_out_of_bounds_fails() {
        let mut g = Grid::new(5, 5);
        assert_eq!(g.place(agent(0), p(5, 0)), Err(GridError::OutOfBounds(p(5, 0))));
    }

    #[test]
    fn place_twice_fails() {
        let mut g = Grid::new(5, 5);
        g.place(agent(0), p(0, 0)).unwrap();
        assert_eq!(g.place(agent(0), p(1, 1)), Err(GridError::AlreadyPlaced(agent(0))));
        assert!(g.is_empty(p(1, 1)));
    }

    #[test]
    fn move_vacates_old_cell() {
        let mut g = Grid::new(5, 5);
        g.place(agent(3), p(0, 0)).unwrap();
        let from = g.move_to(agent(3), p(0, 1)).unwrap();
        assert_eq!(from, p(0, 0));
        assert!(g.is_empty(p(0, 0)));
        assert_eq!(g.occupant(p(0, 1)), Some(agent(3)));
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn move_onto_occupied_cell_leaves_grid_unchanged() {
        let mut g = Grid::new(5, 5);
        g.place(agent(0), p(0, 0)).unwrap();
        g.place(agent(1), p(0, 1)).unwrap();
        assert!(g.move_to(agent(0), p(0, 1)).is_err());
        assert_eq!(g.position_of(agent(0)), Some(p(0, 0)));
        assert_eq!(g.position_of(agent(1)), Some(p(0, 1)));
    }

    #[test]
    fn move_unplaced_fails() {
        let mut g = Grid::new(5, 5);
        assert_eq!(g.move_to(agent(9), p(0, 0)), Err(GridError::NotPlaced(agent(9))));
    }

    #[test]
    fn remove_frees_cell() {
        let mut g = Grid::new(5, 5);
        g.place(agent(0), p(4, 4)).unwrap();
        assert_eq!(g.remove(agent(0)).unwrap(), p(4, 4));
        assert!(g.is_empty(p(4, 4)));
        assert!(g.remove(agent(0)).is_err());
    }

    #[test]
    fn occupied_iterates_everything() {
        let mut g = Grid::new(5, 5);
        g.place(agent(0), p(0, 0)).unwrap();
        g.place(wall(0), p(2, 2)).unwrap();
        let mut all: Vec<_> = g.occupied().map(|(_, pos)| pos).collect();
        all.sort();
        assert_eq!(all, vec![p(0, 0), p(2, 2)]);
        assert!(wall(0).is_obstacle());
        assert!(!agent(0).is_obstacle());
    }
}

// ── ObstacleIndex ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacle_index_tests {
    use super::*;
    use crate::{Obstacle, ObstacleIndex};

    fn obstacles(cells: &[(i32, i32)]) -> Vec<Obstacle> {
        cells
            .iter()
            .enumerate()
            .map(|(i, &c)| Obstacle { id: ObstacleId(i as u32), pos: c.into() })
            .collect()
    }

    #[test]
    fn empty_index_is_infinitely_far() {
        let idx = ObstacleIndex::new(&[]);
        assert!(idx.is_empty());
        assert_eq!(idx.distance_to_nearest(p(0, 0)), f64::INFINITY);
        assert!(idx.nearest(p(0, 0)).is_none());
    }

    #[test]
    fn nearest_obstacle_distance() {
        let idx = ObstacleIndex::new(&obstacles(&[(5, 5), (0, 9)]));
        assert_eq!(idx.len(), 2);
        assert!((idx.distance_to_nearest(p(5, 7)) - 2.0).abs() < 1e-12);
        let (id, d) = idx.nearest(p(1, 8)).unwrap();
        assert_eq!(id, ObstacleId(1));
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn distance_on_obstacle_is_zero() {
        let idx = ObstacleIndex::new(&obstacles(&[(3, 3)]));
        assert_eq!(idx.distance_to_nearest(p(3, 3)), 0.0);
    }

    #[test]
    fn far_obstacle_distance_is_exact() {
        // 59_999² alone is beyond i32::MAX.
        let idx = ObstacleIndex::new(&obstacles(&[(0, 0)]));
        assert_eq!(idx.distance_to_nearest(p(59_999, 0)), 59_999.0);
        assert_eq!(idx.distance_to_nearest(p(0, 59_999)), 59_999.0);

        let d = idx.distance_to_nearest(p(3_000_000, 4_000_000));
        assert_eq!(d, 5_000_000.0);
    }

    #[test]
    fn nearest_picks_closer_of_two_distant_obstacles() {
        let idx = ObstacleIndex::new(&obstacles(&[(0, 0), (59_999, 2)]));
        let (id, d) = idx.nearest(p(59_998, 1)).unwrap();
        assert_eq!(id, ObstacleId(1));
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod destination_tests {
    use crowd_core::{DestinationId, Preset, Rgb};

    use super::*;
    use crate::Destination;

    #[test]
    fn reached_only_on_the_cell() {
        let d = Destination::new(DestinationId(0), p(9, 9), Preset::Exit, Rgb::NAVY);
        assert!(d.is_reached_from(p(9, 9)));
        assert!(!d.is_reached_from(p(9, 8)));
        assert!(!d.is_reached_from(p(8, 8)));
    }
}
