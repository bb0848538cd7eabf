//! # World Representation
//!
//! The tile map the player explores. Generation passes live in
//! [`crate::generation`]; this module owns storage and bounds-checked access.

use crate::{GrottoError, GrottoResult, Position};

/// Terrain kinds a map cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Solid rock
    Wall,
    /// Open cave floor
    #[default]
    Floor,
    /// Short grass
    Grass,
    /// Tall grass
    TallGrass,
    /// A tree
    Tree,
    /// A rabbit, drawn as scenery
    Rabbit,
}

impl Tile {
    /// The character used to draw this tile.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Grass => ',',
            Tile::TallGrass => '"',
            Tile::Tree => 'T',
            Tile::Rabbit => 'r',
        }
    }

    /// Whether this tile is solid rock.
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// A fixed-size rectangular map of tiles, indexed `[y][x]`.
///
/// Every row holds exactly `width` tiles and the grid is never resized
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    pub(crate) tiles: Vec<Vec<Tile>>,
}

impl TileGrid {
    /// Creates a grid filled with [`Tile::Floor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use grottos::{Position, Tile, TileGrid};
    ///
    /// let grid = TileGrid::new(4, 3).unwrap();
    /// assert_eq!(grid.get_tile(Position::new(3, 2)), Some(Tile::Floor));
    /// assert_eq!(grid.get_tile(Position::new(4, 0)), None);
    /// assert!(TileGrid::new(0, 3).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> GrottoResult<Self> {
        Self::filled(width, height, Tile::Floor)
    }

    /// Creates a grid where every cell is `tile`.
    pub fn filled(width: i32, height: i32, tile: Tile) -> GrottoResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GrottoError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            tiles: vec![vec![tile; width as usize]; height as usize],
        })
    }

    /// Builds a grid from text rows, one character per tile.
    ///
    /// `#` is wall, everything else is floor. Rows must share one length.
    pub fn from_rows(rows: &[&str]) -> GrottoResult<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.chars().count()) as i32;
        let mut grid = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(GrottoError::InvalidDimensions {
                    width: row.chars().count() as i32,
                    height,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.tiles[y][x] = Tile::Wall;
                }
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        0 <= pos.x && pos.x < self.width && 0 <= pos.y && pos.y < self.height
    }

    /// Returns the tile at `pos`, or `None` outside the grid.
    pub fn get_tile(&self, pos: Position) -> Option<Tile> {
        if self.in_bounds(pos) {
            Some(self.tiles[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Overwrites the tile at `pos`. Returns false outside the grid.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> bool {
        if self.in_bounds(pos) {
            self.tiles[pos.y as usize][pos.x as usize] = tile;
            true
        } else {
            false
        }
    }

    /// Counts walls among `pos` and its 8 neighbours.
    ///
    /// Cells outside the grid count as walls, so map edges pull walls in.
    pub fn wall_neighbor_count(&self, pos: Position) -> u32 {
        let outside_or_wall = |p: Position| self.get_tile(p).map_or(true, Tile::is_wall);

        let neighbors = pos
            .adjacent_positions()
            .into_iter()
            .filter(|&p| outside_or_wall(p))
            .count() as u32;

        // The centre cell only counts when it is an actual wall.
        let centre = u32::from(self.get_tile(pos).is_some_and(Tile::is_wall));
        neighbors + centre
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == tile)
            .count()
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// One text row per grid row, using tile glyphs.
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .iter()
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }
}
