use super::*;

#[test]
fn test_begin_issues_increasing_generations() {
    let mut loader = AssetLoader::new();
    let a = loader.begin("a.glb");
    let b = loader.begin("b.glb");
    assert!(b.generation() > a.generation());
    assert_eq!(loader.in_flight().unwrap().name(), "b.glb");
}

#[test]
fn test_new_load_cancels_previous() {
    let mut loader = AssetLoader::new();
    let a = loader.begin("a.glb");
    let b = loader.begin("b.glb");

    assert!(a.is_cancelled());
    assert!(!b.is_cancelled());
    assert!(!loader.accept(&a));
    assert!(loader.accept(&b));
    assert!(loader.in_flight().is_none());
}

#[test]
fn test_ticket_is_accepted_once() {
    let mut loader = AssetLoader::new();
    let a = loader.begin("a.glb");
    assert!(loader.accept(&a));
    assert!(!loader.accept(&a));
}

#[test]
fn test_cancelled_clone_is_rejected() {
    let mut loader = AssetLoader::new();
    let ticket = loader.begin("a.glb");
    let worker_copy = ticket.clone();
    worker_copy.cancel();
    assert!(ticket.is_cancelled());
    assert!(!loader.accept(&ticket));
}

#[test]
fn test_cancel_without_load_is_noop() {
    let mut loader = AssetLoader::new();
    loader.cancel();
    assert!(loader.in_flight().is_none());
}
