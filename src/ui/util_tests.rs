#![allow(clippy::unwrap_used)]

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_item() {
    assert_eq!(truncate("Lunch", 10), "Lunch");
    assert_eq!(truncate("Lunch", 5), "Lunch");
}

#[test]
fn test_truncate_long_item() {
    assert_eq!(truncate("Electricity bill", 8), "Electri…");
}

#[test]
fn test_truncate_zero_and_one() {
    assert_eq!(truncate("Rent", 0), "");
    assert_eq!(truncate("Rent", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café crème", 5), "café…");
}

// ── cursor movement ───────────────────────────────────────────

#[test]
fn test_scroll_down_follows_cursor() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..4 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 4);
    assert_eq!(scroll, 2);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 5);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_up_pulls_scroll() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_clamp_cursor_after_shrink() {
    let (mut index, mut scroll) = (5, 4);
    clamp_cursor(&mut index, &mut scroll, 3);
    assert_eq!((index, scroll), (2, 2));

    let (mut index, mut scroll) = (1, 0);
    clamp_cursor(&mut index, &mut scroll, 0);
    assert_eq!((index, scroll), (0, 0));
}
