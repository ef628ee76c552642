use super::*;

#[test]
fn construction_rejects_degenerate_inputs() {
    assert!(Partition::new(10, 10, 0).is_err());
    assert!(Partition::new(0, 10, 3).is_err());
    assert!(Partition::new(10, 0, 3).is_err());
}

#[test]
fn cell_count_is_ceil_by_ceil() {
    for (w, h, e, expect) in [
        (10u32, 10u32, 3u32, 4 * 4),
        (10, 10, 5, 2 * 2),
        (9, 7, 4, 3 * 2),
        (1, 1, 50, 1),
        (100, 1, 10, 10),
    ] {
        let p = Partition::new(w, h, e).unwrap();
        assert_eq!(p.cell_count(), expect, "{w}x{h}/{e}");
        assert_eq!(p.cell_count(), p.cols() * p.rows());
    }
}

#[test]
fn cells_cover_the_image_exactly_once() {
    for (w, h, e) in [(10u32, 10u32, 3u32), (12, 8, 4), (7, 5, 2), (5, 9, 9)] {
        let p = Partition::new(w, h, e).unwrap();
        let mut hits = vec![0u32; (w * h) as usize];
        for cell in p.construction_cells() {
            assert!(cell.right <= w && cell.bottom <= h);
            for y in cell.top..cell.bottom {
                for x in cell.left..cell.right {
                    hits[(y * w + x) as usize] += 1;
                }
            }
        }
        assert!(hits.iter().all(|&n| n == 1), "{w}x{h}/{e}");
    }
}

#[test]
fn edge_cells_are_clamped_short() {
    let p = Partition::new(10, 7, 4).unwrap();
    // Last column is 2 wide, last row is 3 tall.
    let last = p.construction_cells().last().copied().unwrap();
    assert_eq!(last.width(), 2);
    assert_eq!(last.height(), 3);
}

#[test]
fn cell_at_finds_the_containing_cell_in_construction_order() {
    let p = Partition::new(10, 10, 4).unwrap();
    let cell = p.cell_at(5, 1).unwrap();
    assert_eq!((cell.left, cell.top), (4, 0));
    assert!(cell.contains(5, 1));
    assert_eq!(p.cell_at(9, 9).map(|c| (c.left, c.top)), Some((8, 8)));
    assert_eq!(p.cell_at(10, 3), None);
    assert_eq!(p.cell_at(3, 10), None);
}

#[test]
fn playback_cells_clamp_past_the_end() {
    let p = Partition::new(6, 6, 3).unwrap();
    assert!(p.cell(3).is_some());
    assert!(p.cell(4).is_none());
}

#[test]
fn flagged_cell_starts_unrevealed() {
    let fc = FlaggedCell::new(Cell {
        left: 0,
        top: 0,
        right: 4,
        bottom: 4,
    });
    assert!(!fc.revealed);
}
