//! # Themed Fills
//!
//! Per-cell random passes that dress a map up: grass over the whole grid,
//! then sparse trees and rabbits on open ground.

use crate::generation::cave::fill_each;
use crate::{Tile, TileGrid};
use log::debug;
use rand::Rng;

/// Ground cover chosen uniformly by [`TileGrid::grasslands`].
pub const GRASSLAND_ALPHABET: [Tile; 3] = [Tile::Floor, Tile::Grass, Tile::TallGrass];

impl TileGrid {
    /// Overwrites every cell with uniformly chosen ground cover.
    pub fn grasslands<R: Rng>(&mut self, rng: &mut R) {
        fill_each(self, rng, |_, rng| {
            GRASSLAND_ALPHABET[rng.gen_range(0..GRASSLAND_ALPHABET.len())]
        });
        debug!("Filled grid with grasslands");
    }

    /// Turns each non-wall cell into a tree with probability `chance`.
    pub fn trees<R: Rng>(&mut self, rng: &mut R, chance: f64) {
        fill_each(self, rng, |tile, rng| {
            if !tile.is_wall() && rng.gen_bool(chance) {
                Tile::Tree
            } else {
                tile
            }
        });
        debug!("Planted {} trees", self.count(Tile::Tree));
    }

    /// Puts a rabbit on each open cell (neither wall nor tree) with
    /// probability `chance`.
    pub fn rabbits<R: Rng>(&mut self, rng: &mut R, chance: f64) {
        fill_each(self, rng, |tile, rng| {
            if !matches!(tile, Tile::Wall | Tile::Tree) && rng.gen_bool(chance) {
                Tile::Rabbit
            } else {
                tile
            }
        });
        debug!("Released {} rabbits", self.count(Tile::Rabbit));
    }
}
