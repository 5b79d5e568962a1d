use super::*;

#[test]
fn quiet_progress_still_counts() {
    let progress = ScanProgress::new(100, true);
    progress.inc();
    progress.inc();
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn visible_progress_bar_accepts_updates() {
    let progress = ScanProgress::new_with_visibility(3, false, true);
    progress.set_length(5);
    for _ in 0..5 {
        progress.inc();
    }
    assert_eq!(progress.position(), 5);
    progress.finish();
}

#[test]
fn clones_share_the_counter() {
    let progress = ScanProgress::hidden();
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
    assert_eq!(cloned.position(), 2);
}

#[test]
fn parallel_increments_are_counted() {
    use rayon::prelude::*;

    let progress = ScanProgress::hidden();
    (0..64).into_par_iter().for_each(|_| progress.inc());
    assert_eq!(progress.position(), 64);
}
