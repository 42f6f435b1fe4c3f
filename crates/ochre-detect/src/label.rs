use crate::blob::Blob;
use crate::grid::{CANDIDATE, LabelGrid};
use std::collections::VecDeque;

/// Rewrite every `CANDIDATE` cell to a dense component id and return the
/// per-component statistics, indexed by id.
///
/// Raster scan, y outer, x inner: each foreground pixel still unassigned
/// when the scan reaches it seeds a new component and a worklist flood fill
/// over its 4-connected neighbors (up, down, left, right). Ids are assigned
/// in the order components are first encountered. Every flooded pixel is
/// fed to its component's accumulator exactly once.
///
/// After the pass no `CANDIDATE` cell remains: components partition the
/// foreground into maximal 4-connected regions.
pub fn label_components(grid: &mut LabelGrid) -> Vec<Blob> {
    let width = grid.width();
    let height = grid.height();
    let mut blobs: Vec<Blob> = Vec::new();
    let mut worklist: VecDeque<(u32, u32)> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if grid.get(x, y) != CANDIDATE {
                continue;
            }

            let id = blobs.len() as i32;
            let mut blob = Blob::new();

            worklist.push_back((x, y));
            while let Some((cx, cy)) = worklist.pop_front() {
                // Neighbors are pushed unconditionally, so a cell can sit
                // in the worklist twice; the label check deduplicates.
                if grid.get(cx, cy) != CANDIDATE {
                    continue;
                }
                grid.set(cx, cy, id);
                blob.add_pixel(cx, cy);

                // x neighbors are bounded by width, y neighbors by height
                if cx + 1 < width {
                    worklist.push_back((cx + 1, cy));
                }
                if cx > 0 {
                    worklist.push_back((cx - 1, cy));
                }
                if cy + 1 < height {
                    worklist.push_back((cx, cy + 1));
                }
                if cy > 0 {
                    worklist.push_back((cx, cy - 1));
                }
            }

            blobs.push(blob);
        }
    }

    blobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BACKGROUND;

    /// Build a grid from rows of '#' (candidate) and '.' (background).
    fn grid_from(rows: &[&str]) -> LabelGrid {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut grid = LabelGrid::new();
        grid.reset(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                if cell == '#' {
                    grid.set(x as u32, y as u32, CANDIDATE);
                }
            }
        }
        grid
    }

    fn assert_no_candidates(grid: &LabelGrid) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                assert_ne!(grid.get(x, y), CANDIDATE, "unlabeled pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_all_background_yields_no_components() {
        let mut grid = grid_from(&["....", "....", "...."]);
        let blobs = label_components(&mut grid);
        assert!(blobs.is_empty());
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), BACKGROUND);
            }
        }
    }

    #[test]
    fn test_separated_regions_stay_distinct() {
        let mut grid = grid_from(&[
            "##..#",
            "##..#",
            ".....",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0].n(), 4);
        assert_eq!(blobs[1].n(), 2);
        assert_no_candidates(&grid);
    }

    #[test]
    fn test_diagonal_touch_stays_distinct() {
        let mut grid = grid_from(&[
            "#..",
            ".#.",
            "..#",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 3);
        for blob in &blobs {
            assert_eq!(blob.n(), 1);
        }
    }

    #[test]
    fn test_edge_touch_merges() {
        let mut grid = grid_from(&[
            "##.",
            ".##",
            "..#",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].n(), 5);
    }

    #[test]
    fn test_ids_assigned_in_scan_order() {
        let mut grid = grid_from(&[
            ".#.#.",
            ".#.#.",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 2);
        // Scan is y outer, x inner: the left bar gets id 0
        assert_eq!(grid.get(1, 0), 0);
        assert_eq!(grid.get(3, 0), 1);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.get(3, 1), 1);
    }

    #[test]
    fn test_column_beyond_height_bound_labels_fully() {
        // Wide, short frame with a vertical bar at x >= height. A flood
        // fill that checked the downward neighbor's x against the height
        // would split this bar into one component per row.
        let mut grid = grid_from(&[
            "......#.",
            "......#.",
            "......#.",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].n(), 3);
        assert_no_candidates(&grid);
    }

    #[test]
    fn test_region_touching_last_row_and_column() {
        let mut grid = grid_from(&[
            ".....",
            "...##",
            "...##",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].n(), 4);
        assert_eq!(grid.get(4, 2), 0);
    }

    #[test]
    fn test_components_are_disjoint_and_exhaustive() {
        let mut grid = grid_from(&[
            "##..##",
            "#....#",
            "...#..",
        ]);
        let blobs = label_components(&mut grid);
        assert_eq!(blobs.len(), 3);

        // Per-id pixel counts recovered from the grid must match the blobs
        let mut counts = vec![0u32; blobs.len()];
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let label = grid.get(x, y);
                if label >= 0 {
                    counts[label as usize] += 1;
                }
            }
        }
        for (blob, count) in blobs.iter().zip(&counts) {
            assert_eq!(blob.n(), *count);
        }
        assert_eq!(counts.iter().sum::<u32>(), 7);
    }
}
