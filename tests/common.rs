//! Test utilities for VastuKhoj.
//!
//! Hand-built environments, walk validation, and an independent brute-force
//! optimum used to check the search.

#![allow(dead_code)]

use std::collections::VecDeque;
use vastu_khoj::{CellType, Environment, Grid, Position};

/// Build an environment from marker rows (`S`, `E`, `C`, `X`, `.`).
pub fn environment(rows: &[&str]) -> Environment {
    let grid = Grid::from_rows(rows).expect("rows must form a square grid");
    Environment::from_grid(grid).expect("grid needs one start and one exit")
}

/// Assert that `path` is a legal collect-all walk for `env`.
pub fn assert_valid_walk(env: &Environment, path: &[Position]) {
    assert!(!path.is_empty(), "path is empty");
    assert_eq!(path[0], env.start, "path must begin at start");
    assert_eq!(*path.last().unwrap(), env.exit, "path must end at exit");

    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} -> {} is not one orthogonal step",
            pair[0],
            pair[1]
        );
    }
    for pos in path {
        assert_ne!(
            env.grid.get(*pos),
            Some(CellType::Obstacle),
            "path crosses obstacle at {}",
            pos
        );
        assert!(env.grid.is_valid(*pos), "path leaves the grid at {}", pos);
    }
    for c in env.collectibles.iter() {
        assert!(path.contains(c), "collectible {} never visited", c);
    }
}

/// Single-source step distances over cells the search may enter.
///
/// The source itself is the only non-enterable cell allowed, matching the
/// rule that the start cell is never stepped back onto.
pub fn distances_from(grid: &Grid, source: Position) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.cell_count()];
    let Some(src) = grid.index_of(source) else {
        return dist;
    };
    dist[src] = Some(0);

    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        let d = dist[grid.index_of(current).unwrap()].unwrap();
        for n in current.neighbors_4() {
            let Some(i) = grid.index_of(n) else {
                continue;
            };
            if dist[i].is_none() && grid.cells()[i].is_enterable() {
                dist[i] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

/// Minimum number of steps of any walk from start that visits every
/// collectible and ends on the exit, by trying every visiting order.
pub fn brute_force_steps(env: &Environment) -> Option<usize> {
    let items: Vec<Position> = env.collectibles.iter().copied().collect();
    let from_start = distances_from(&env.grid, env.start);
    let from_items: Vec<Vec<Option<usize>>> = items
        .iter()
        .map(|c| distances_from(&env.grid, *c))
        .collect();
    let exit_idx = env.grid.index_of(env.exit)?;

    if items.is_empty() {
        return from_start[exit_idx];
    }

    let mut best: Option<usize> = None;
    let mut order: Vec<usize> = (0..items.len()).collect();
    permute(&mut order, 0, &mut |perm| {
        let first = env.grid.index_of(items[perm[0]]).unwrap();
        let Some(mut total) = from_start[first] else {
            return;
        };
        for w in perm.windows(2) {
            let next = env.grid.index_of(items[w[1]]).unwrap();
            match from_items[w[0]][next] {
                Some(d) => total += d,
                None => return,
            }
        }
        match from_items[*perm.last().unwrap()][exit_idx] {
            Some(d) => total += d,
            None => return,
        }
        best = Some(best.map_or(total, |b| b.min(total)));
    });
    best
}

fn permute(order: &mut Vec<usize>, k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == order.len() {
        visit(order);
        return;
    }
    for i in k..order.len() {
        order.swap(k, i);
        permute(order, k + 1, visit);
        order.swap(k, i);
    }
}
