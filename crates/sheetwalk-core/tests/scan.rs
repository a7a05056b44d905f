//! Gap-tolerant traversal behaviour.

mod common;

use common::{model, single_sheet};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sheetwalk_core::{Result, ScanOptions};

fn column_positions(grid: common::GridBackend) -> Vec<u32> {
    let model = model(grid);
    let sheet = model.get_sheet("Data", 0, 0).unwrap().unwrap();
    let column = sheet.get_column_by_index(0).unwrap();
    column
        .iter()
        .map(|cell| cell.map(|cell| cell.y()))
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

#[test]
fn test_gap_of_nine_is_bridged() {
    let grid = single_sheet();
    for y in [0, 1, 2, 12] {
        grid.put(0, 0, y, "v");
    }
    assert_eq!(column_positions(grid), (0..=12).collect::<Vec<_>>());
}

#[test]
fn test_gap_of_ten_ends_scan() {
    let grid = single_sheet();
    for y in [0, 1, 2, 13] {
        grid.put(0, 0, y, "v");
    }
    assert_eq!(column_positions(grid), vec![0, 1, 2]);
}

#[test]
fn test_empty_line_yields_nothing() {
    assert_eq!(column_positions(single_sheet()), Vec::<u32>::new());
}

#[test]
fn test_leading_blank_is_yielded_when_followed() {
    let grid = single_sheet();
    grid.put(0, 0, 3, "late start");
    assert_eq!(column_positions(grid), vec![0, 1, 2, 3]);
}

#[test]
fn test_empty_text_counts_as_blank() {
    let grid = single_sheet();
    grid.put(0, 0, 0, "a");
    grid.put(0, 0, 1, "");
    grid.put(0, 0, 2, " ");
    // "" is blank, " " is not
    assert_eq!(column_positions(grid), vec![0, 1, 2]);
}

#[test]
fn test_row_scan() {
    let grid = single_sheet();
    for x in [0, 1, 5] {
        grid.put(0, x, 2, x);
    }
    let model = model(grid);
    let sheet = model.get_sheet("Data", 0, 0).unwrap().unwrap();
    let row = sheet.get_row_by_index(2).unwrap();
    let xs = row
        .iter()
        .map(|cell| cell.map(|cell| cell.x()))
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(xs, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_positions_up_to_probe_hit_are_not_reread() {
    let grid = single_sheet();
    for y in [0, 4, 6] {
        grid.put(0, 0, y, "v");
    }
    let model = model(grid);
    let sheet = model.get_sheet("Data", 0, 0).unwrap().unwrap();
    let column = sheet.get_column_by_index(0).unwrap();
    let before = model.backend().reads();

    let mut scan = column.iter();
    let mut yielded = Vec::new();
    while let Some(cell) = scan.advance().unwrap() {
        yielded.push(cell.y());
    }

    assert_eq!(yielded, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(scan.highest_probed(), Some(6));
    // 0: 1 | 1: 1 + probe 2..=4 | 2..=4: trusted | 5: 1 + probe 6 | 6: trusted
    // 7: 1 + probe 8..=16
    assert_eq!(model.backend().reads() - before, 1 + (1 + 3) + (1 + 1) + (1 + 9));
}

#[test]
fn test_scan_is_fused() {
    let grid = single_sheet();
    grid.put(0, 0, 0, "only");
    let model = model(grid);
    let sheet = model.get_sheet("Data", 0, 0).unwrap().unwrap();
    let column = sheet.get_column_by_index(0).unwrap();

    let mut scan = column.iter();
    assert!(scan.next().is_some());
    assert!(scan.next().is_none());
    let reads = model.backend().reads();
    assert!(scan.next().is_none());
    assert_eq!(model.backend().reads(), reads);
}

#[test]
fn test_custom_max_gap() {
    let grid = single_sheet();
    for y in [0, 3] {
        grid.put(0, 0, y, "v");
    }
    let model = model(grid);
    let mut sheet = model.get_sheet("Data", 0, 0).unwrap().unwrap();

    sheet
        .set_scan_options(ScanOptions::with_max_gap(2).unwrap())
        .unwrap();
    assert_eq!(sheet.get_column_by_index(0).unwrap().len().unwrap(), 1);

    sheet
        .set_scan_options(ScanOptions::with_max_gap(3).unwrap())
        .unwrap();
    assert_eq!(sheet.get_column_by_index(0).unwrap().len().unwrap(), 4);

    let rejected = sheet.set_scan_options(ScanOptions { max_gap: 0 });
    assert!(rejected.unwrap_err().is_invalid_argument());
}

proptest! {
    #[test]
    fn prop_gap_shorter_than_window_is_bridged(gap in 0u32..=12) {
        let grid = single_sheet();
        grid.put(0, 0, 0, "first");
        grid.put(0, 0, gap + 1, "second");
        let expected = if gap < 10 { gap as usize + 2 } else { 1 };
        prop_assert_eq!(column_positions(grid).len(), expected);
    }
}
