//! # Cave Generation
//!
//! Cellular-automaton cave carving.
//!
//! The pipeline fills the map with uniform wall/floor noise, then runs
//! smoothing generations. Each generation turns a cell into wall when at
//! least [`WALL_THRESHOLD`] of the nine cells around it (itself included)
//! are wall or off the map, and into floor otherwise. Every generation reads
//! only the previous one, never cells already rewritten in the same pass.

use crate::config::{SMOOTHING_PASSES, WALL_THRESHOLD};
use crate::generation::{GenerationConfig, Generator};
use crate::{GrottoError, GrottoResult, Position, Tile, TileGrid};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Tiles the random fill chooses between, with equal probability.
pub const CAVE_ALPHABET: [Tile; 2] = [Tile::Floor, Tile::Wall];

impl TileGrid {
    /// Overwrites every cell with a uniformly random wall or floor.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        fill_each(self, rng, |_, rng| {
            CAVE_ALPHABET[rng.gen_range(0..CAVE_ALPHABET.len())]
        });
        debug!("Randomized {}x{} grid", self.width(), self.height());
    }

    /// Runs one smoothing generation.
    ///
    /// The next generation is computed in full from the current one and then
    /// swapped in.
    ///
    /// # Examples
    ///
    /// ```
    /// use grottos::TileGrid;
    ///
    /// let mut grid = TileGrid::from_rows(&["...", ".#.", "..."]).unwrap();
    /// grid.smooth();
    /// assert_eq!(grid.to_rows(), vec!["#.#", "...", "#.#"]);
    /// ```
    pub fn smooth(&mut self) {
        let next: Vec<Vec<Tile>> = (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| {
                        if self.wall_neighbor_count(Position::new(x, y)) >= WALL_THRESHOLD {
                            Tile::Wall
                        } else {
                            Tile::Floor
                        }
                    })
                    .collect()
            })
            .collect();

        self.tiles = next;
    }

    /// Random fill followed by the standard number of smoothing generations.
    pub fn carve_caves<R: Rng>(&mut self, rng: &mut R) {
        self.randomize(rng);
        for _ in 0..SMOOTHING_PASSES {
            self.smooth();
        }
        debug!(
            "Carved caves: {} floor cells of {}",
            self.count(Tile::Floor),
            self.width() * self.height()
        );
    }
}

/// Assigns every cell from `pick`, which sees the current tile.
pub(crate) fn fill_each<R, F>(grid: &mut TileGrid, rng: &mut R, mut pick: F)
where
    R: Rng,
    F: FnMut(Tile, &mut R) -> Tile,
{
    for row in grid.tiles.iter_mut() {
        for tile in row.iter_mut() {
            *tile = pick(*tile, rng);
        }
    }
}

/// Generator producing a freshly carved cave map.
#[derive(Debug, Clone, Default)]
pub struct CaveGenerator;

impl CaveGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator<TileGrid> for CaveGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> GrottoResult<TileGrid> {
        let mut grid = TileGrid::new(config.map_width, config.map_height)?;
        grid.randomize(rng);
        for pass in 0..config.smoothing_passes {
            grid.smooth();
            debug!("Smoothing pass {} complete", pass + 1);
        }

        self.validate(&grid, config)?;
        debug!(
            "{} produced {}x{} map with {} floor cells",
            self.generator_type(),
            grid.width(),
            grid.height(),
            grid.count(Tile::Floor)
        );
        Ok(grid)
    }

    fn validate(&self, content: &TileGrid, config: &GenerationConfig) -> GrottoResult<()> {
        if content.width() != config.map_width || content.height() != config.map_height {
            return Err(GrottoError::GenerationFailed(format!(
                "expected {}x{} map, got {}x{}",
                config.map_width,
                config.map_height,
                content.width(),
                content.height()
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "CaveGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randomize_uses_only_cave_tiles() -> GrottoResult<()> {
        let mut grid = TileGrid::new(30, 30)?;
        let mut rng = StdRng::seed_from_u64(1);
        grid.randomize(&mut rng);

        let walls = grid.count(Tile::Wall);
        let floors = grid.count(Tile::Floor);
        assert_eq!(walls + floors, 900);
        // Uniform noise lands far from either extreme.
        assert!(walls > 300 && floors > 300);
        Ok(())
    }

    #[test]
    fn test_randomize_is_seeded() -> GrottoResult<()> {
        let mut a = TileGrid::new(16, 8)?;
        let mut b = TileGrid::new(16, 8)?;
        a.randomize(&mut StdRng::seed_from_u64(99));
        b.randomize(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_smooth_reads_previous_generation_only() -> GrottoResult<()> {
        // Scanning row-major, an in-place update would turn (1,0) into wall
        // before (2,0) is visited, raising its count from 4 to 5.
        let mut grid = TileGrid::from_rows(&[
            "#...#", //
            "#.#.#", //
            ".....",
        ])?;
        let before = grid.clone();
        grid.smooth();

        for pos in before.positions() {
            let expected = if before.wall_neighbor_count(pos) >= WALL_THRESHOLD {
                Tile::Wall
            } else {
                Tile::Floor
            };
            assert_eq!(grid.get_tile(pos), Some(expected), "mismatch at {:?}", pos);
        }
        assert_eq!(before.wall_neighbor_count(Position::new(2, 0)), 4);
        assert_eq!(grid.get_tile(Position::new(1, 0)), Some(Tile::Wall));
        assert_eq!(grid.get_tile(Position::new(2, 0)), Some(Tile::Floor));
        Ok(())
    }

    #[test]
    fn test_smooth_keeps_dimensions() -> GrottoResult<()> {
        let mut grid = TileGrid::new(9, 4)?;
        grid.randomize(&mut StdRng::seed_from_u64(3));
        grid.smooth();
        assert_eq!((grid.width(), grid.height()), (9, 4));
        assert!(grid.tiles.iter().all(|row| row.len() == 9));
        Ok(())
    }

    #[test]
    fn test_solid_rock_stays_solid() -> GrottoResult<()> {
        let mut grid = TileGrid::filled(6, 6, Tile::Wall)?;
        grid.smooth();
        assert_eq!(grid.count(Tile::Wall), 36);
        Ok(())
    }

    #[test]
    fn test_carve_caves_matches_manual_pipeline() -> GrottoResult<()> {
        let mut carved = TileGrid::new(40, 20)?;
        carved.carve_caves(&mut StdRng::seed_from_u64(11));

        let mut manual = TileGrid::new(40, 20)?;
        manual.randomize(&mut StdRng::seed_from_u64(11));
        manual.smooth();
        manual.smooth();
        manual.smooth();

        assert_eq!(carved, manual);
        Ok(())
    }

    #[test]
    fn test_cave_generator_output() -> GrottoResult<()> {
        let config = GenerationConfig::for_testing(5);
        let generator = CaveGenerator::new();
        let grid = generator.generate(&config, &mut utils::create_rng(&config))?;

        assert_eq!(grid.width(), config.map_width);
        assert_eq!(grid.height(), config.map_height);
        assert_eq!(
            grid.count(Tile::Wall) + grid.count(Tile::Floor),
            (config.map_width * config.map_height) as usize
        );

        let again = generator.generate(&config, &mut utils::create_rng(&config))?;
        assert_eq!(grid, again);
        Ok(())
    }

    #[test]
    fn test_cave_generator_rejects_bad_size() {
        let mut config = GenerationConfig::for_testing(5);
        config.map_height = 0;
        let result = CaveGenerator::new().generate(&config, &mut utils::create_rng(&config));
        assert!(matches!(result, Err(GrottoError::InvalidDimensions { .. })));
    }
}
