//! 32×32 block tiling order
//!
//! SC textures store pixels block by block instead of in raster order. The
//! image is cut into a grid of `(width / 32 + 1) × (height / 32 + 1)` blocks
//! where the last column is `width % 32` wide and the last row is
//! `height % 32` tall. Blocks are stored row-major and each block's pixels
//! are stored row-major. Empty remainder blocks contribute nothing.
//!
//! For a block row this gives the full 32×32 blocks followed by the
//! right-edge strip; after all full block rows come the bottom remainder
//! blocks and finally the bottom-right corner.

/// Edge length of a tile block in pixels.
pub const BLOCK_SIZE: u32 = 32;

/// Block grid dimensions of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub width: u32,
    pub height: u32,
    /// Number of full 32-wide block columns
    pub full_blocks_x: u32,
    /// Number of full 32-tall block rows
    pub full_blocks_y: u32,
    /// Width of the right-edge strip
    pub remainder_x: u32,
    /// Height of the bottom strip
    pub remainder_y: u32,
}

impl TileLayout {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            full_blocks_x: width / BLOCK_SIZE,
            full_blocks_y: height / BLOCK_SIZE,
            remainder_x: width % BLOCK_SIZE,
            remainder_y: height % BLOCK_SIZE,
        }
    }

    /// Width of the block in grid column `col`.
    const fn block_width(&self, col: u32) -> u32 {
        if col == self.full_blocks_x {
            self.remainder_x
        } else {
            BLOCK_SIZE
        }
    }

    /// Height of the block in grid row `row`.
    const fn block_height(&self, row: u32) -> u32 {
        if row == self.full_blocks_y {
            self.remainder_y
        } else {
            BLOCK_SIZE
        }
    }

    /// Number of non-empty blocks, remainders included.
    #[must_use]
    pub fn block_count(&self) -> u32 {
        let cols = self.full_blocks_x + u32::from(self.remainder_x > 0);
        let rows = self.full_blocks_y + u32::from(self.remainder_y > 0);
        cols * rows
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Iterator over `(x, y)` coordinates in storage order.
///
/// Created by [`tile_sequence`].
#[derive(Debug, Clone)]
pub struct TileSequence {
    layout: TileLayout,
    block_row: u32,
    block_col: u32,
    row: u32,
    col: u32,
    remaining: usize,
}

/// Coordinates of a `width × height` texture in the order its pixels are stored.
///
/// Yields every coordinate in `[0, width) × [0, height)` exactly once.
#[must_use]
pub fn tile_sequence(width: u32, height: u32) -> TileSequence {
    let layout = TileLayout::new(width, height);
    TileSequence {
        layout,
        block_row: 0,
        block_col: 0,
        row: 0,
        col: 0,
        remaining: layout.pixel_count(),
    }
}

impl TileSequence {
    fn next_block(&mut self) {
        self.row = 0;
        self.col = 0;
        self.block_col += 1;
        if self.block_col > self.layout.full_blocks_x {
            self.block_col = 0;
            self.block_row += 1;
        }
    }
}

impl Iterator for TileSequence {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            let block_width = self.layout.block_width(self.block_col);
            let block_height = self.layout.block_height(self.block_row);

            if self.row >= block_height || block_width == 0 {
                self.next_block();
                continue;
            }

            let x = self.block_col * BLOCK_SIZE + self.col;
            let y = self.block_row * BLOCK_SIZE + self.row;

            self.col += 1;
            if self.col == block_width {
                self.col = 0;
                self.row += 1;
            }
            self.remaining -= 1;

            return Some((x, y));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TileSequence {}

impl std::iter::FusedIterator for TileSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Straightforward nested-loop rendition of the storage order.
    fn reference_order(width: u32, height: u32) -> Vec<(u32, u32)> {
        let (bw, bh, rw, rh) = (width / 32, height / 32, width % 32, height % 32);
        let mut out = Vec::new();

        for l in 0..bh {
            for k in 0..bw {
                for j in 0..32 {
                    for h in 0..32 {
                        out.push((h + k * 32, j + l * 32));
                    }
                }
            }
            for j in 0..32 {
                for h in 0..rw {
                    out.push((h + (width - rw), j + l * 32));
                }
            }
        }
        for k in 0..bw {
            for j in 0..rh {
                for h in 0..32 {
                    out.push((h + k * 32, j + (height - rh)));
                }
            }
        }
        for j in 0..rh {
            for h in 0..rw {
                out.push((h + (width - rw), j + (height - rh)));
            }
        }
        out
    }

    #[test]
    fn test_matches_reference_order() {
        for (width, height) in [
            (1, 1),
            (2, 2),
            (31, 31),
            (32, 32),
            (33, 1),
            (1, 33),
            (64, 33),
            (33, 64),
            (65, 70),
            (100, 3),
            (96, 96),
        ] {
            let seq: Vec<_> = tile_sequence(width, height).collect();
            assert_eq!(seq, reference_order(width, height), "{width}x{height}");
        }
    }

    #[test]
    fn test_visits_every_coordinate_once() {
        for (width, height) in [(7, 5), (32, 1), (45, 77), (128, 40), (31, 129)] {
            let mut seen = vec![0u8; (width * height) as usize];
            for (x, y) in tile_sequence(width, height) {
                assert!(x < width && y < height, "({x}, {y}) out of bounds");
                seen[(y * width + x) as usize] += 1;
            }
            assert!(seen.iter().all(|&n| n == 1), "{width}x{height}");
        }
    }

    #[test]
    fn test_single_full_block() {
        let layout = TileLayout::new(32, 32);
        assert_eq!(layout.block_count(), 1);
        assert_eq!((layout.remainder_x, layout.remainder_y), (0, 0));

        let seq: Vec<_> = tile_sequence(32, 32).collect();
        let raster: Vec<_> = (0..32).flat_map(|y| (0..32).map(move |x| (x, y))).collect();
        assert_eq!(seq, raster);
    }

    #[test]
    fn test_33_by_1() {
        let seq: Vec<_> = tile_sequence(33, 1).collect();
        // Bottom remainder block covers the first 32 columns, the corner the last one
        let expected: Vec<_> = (0..33).map(|x| (x, 0)).collect();
        assert_eq!(seq, expected);
        assert_eq!(TileLayout::new(33, 1).block_count(), 2);
    }

    #[test]
    fn test_right_strip_follows_block_row() {
        let seq: Vec<_> = tile_sequence(33, 64).collect();
        // First block, then the 1-wide strip beside it, then the second block row
        assert_eq!(seq[32 * 32 - 1], (31, 31));
        assert_eq!(seq[32 * 32], (32, 0));
        assert_eq!(seq[32 * 32 + 31], (32, 31));
        assert_eq!(seq[32 * 32 + 32], (0, 32));
    }

    #[test]
    fn test_empty_dimensions() {
        assert_eq!(tile_sequence(0, 0).count(), 0);
        assert_eq!(tile_sequence(0, 40).count(), 0);
        assert_eq!(tile_sequence(40, 0).count(), 0);
        assert_eq!(tile_sequence(40, 0).next(), None);
    }

    #[test]
    fn test_exact_size() {
        let mut seq = tile_sequence(45, 3);
        assert_eq!(seq.len(), 135);
        seq.next();
        assert_eq!(seq.len(), 134);
    }
}
