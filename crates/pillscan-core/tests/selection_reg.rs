//! Selection list regression test
//!
//! Builds selections by sampling a synthetic tray and exercises the list
//! operations a viewer uses: add, undo and clear.

use pillscan_core::{Error, Rgb, Selection, SelectionList};
use pillscan_test::{BLUE, PillScene, RED, RegParams, TRAY};

#[test]
fn selection_reg() {
    let mut rp = RegParams::new("selection");

    let img = PillScene::new(30, 20)
        .disc(6, 6, 3, RED)
        .rect(15, 10, 20, 14, BLUE)
        .build()
        .expect("scene");

    // --- Test 1: sampling ---
    let red = Selection::from_sample(&img, 6, 6, "Red", 0.2, 10, 30).expect("red");
    let blue = Selection::from_sample(&img, 17, 12, "Blue", 0.2, 5, 15).expect("blue");
    rp.check(red.color() == RED, "red sampled");
    rp.check(blue.color() == BLUE, "blue sampled");
    rp.compare_strings(
        "Pill Name: Red, Color Threshold: 0.2, Size Range: 10-30",
        &red.to_string(),
    );

    let outside = Selection::from_sample(&img, 30, 0, "Edge", 0.2, 1, 2);
    rp.check(
        matches!(outside, Err(Error::CoordinateOutOfBounds { x: 30, .. })),
        "sample outside image",
    );
    let tray = Selection::from_sample(&img, 0, 0, "Tray", 0.2, 1, 2).expect("tray");
    rp.check(tray.color() == TRAY, "tray sampled");

    // --- Test 2: invalid parameters ---
    rp.check(
        Selection::new("x", RED, -0.1, 1, 2).is_err(),
        "negative threshold",
    );
    rp.check(Selection::new("x", RED, f64::NAN, 1, 2).is_err(), "NaN threshold");
    rp.check(Selection::new("x", RED, 0.1, 5, 4).is_err(), "inverted range");
    rp.check(
        Selection::new("x", Rgb::new(1.5, 0.0, 0.0), 0.1, 1, 2).is_err(),
        "color out of range",
    );
    rp.check(Selection::new("x", RED, 0.1, 4, 4).is_ok(), "single size range");

    // --- Test 3: list editing ---
    let mut list = SelectionList::new();
    rp.check(list.undo_last().is_none(), "undo on empty list");
    list.push(red.clone());
    list.push(blue);
    list.push(tray);
    rp.compare_values(3.0, list.len() as f64, 0.0);
    let undone = list.undo_last().expect("undo");
    rp.compare_strings("Tray", undone.name());
    rp.compare_values(2.0, list.len() as f64, 0.0);
    rp.check(list.get(0) == Some(&red), "order kept");
    let names: Vec<&str> = list.iter().map(Selection::name).collect();
    rp.check(names == ["Red", "Blue"], "names in order");
    list.clear();
    rp.check(list.is_empty(), "cleared");

    assert!(rp.cleanup(), "selection regression test failed");
}
