use blockfall::term::RenderThrottle;

#[test]
fn unchanged_frames_are_skipped_until_idle_interval() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(16, 1));
    assert!(!t.should_render(999, 1));
    assert!(t.should_render(1000, 1));
    assert!(!t.should_render(1016, 1));
}

#[test]
fn changed_fingerprint_renders_immediately() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(16, 2));
    assert!(!t.should_render(32, 2));
    assert!(t.should_render(48, 1));
}
