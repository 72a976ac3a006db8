use super::*;

#[test]
fn test_scroll_clamps_to_content() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);

    scroll.up();
    assert_eq!(scroll.position, 0);

    scroll.page_down();
    assert_eq!(scroll.position, 10);
    scroll.page_down();
    scroll.page_down();
    assert_eq!(scroll.position, 20);

    scroll.down();
    assert_eq!(scroll.position, 20);

    scroll.page_up();
    scroll.up();
    assert_eq!(scroll.position, 9);
}

#[test]
fn test_short_list_does_not_scroll() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 10);

    scroll.page_down();
    assert_eq!(scroll.position, 0);
}

#[test]
fn test_shrinking_list_pulls_position_back() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 10);
    scroll.page_down();
    scroll.page_down();
    assert_eq!(scroll.position, 20);

    scroll.set_state(15, 10);
    assert_eq!(scroll.position, 5);
}

#[test]
fn test_ensure_visible() {
    let mut scroll = Scroll::default();
    scroll.set_state(40, 10);

    // Already visible.
    scroll.ensure_visible(2, 4);
    assert_eq!(scroll.position, 0);

    // Below the viewport: bottom aligned.
    scroll.ensure_visible(12, 4);
    assert_eq!(scroll.position, 6);

    // Above the viewport: top aligned.
    scroll.ensure_visible(3, 4);
    assert_eq!(scroll.position, 3);

    // Taller than the viewport: top wins.
    scroll.ensure_visible(20, 15);
    assert_eq!(scroll.position, 20);
}
