use super::*;

#[test]
fn first_writer_wins() {
    let mut nav = NavigationCoordinator::new();
    assert!(nav.stash("/pricing"));
    assert!(!nav.stash("/about"));
    assert_eq!(nav.pending(), Some("/pricing"));
}

#[test]
fn take_consumes_exactly_once() {
    let mut nav = NavigationCoordinator::new();
    nav.stash("/a");
    assert_eq!(nav.take().as_deref(), Some("/a"));
    assert_eq!(nav.take(), None);
    assert!(nav.stash("/b"));
}
