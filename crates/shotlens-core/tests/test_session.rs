use std::time::{Duration, Instant};

use shotlens_core::session::{Apply, Debouncer, LatestSlot, RequestSequencer};

#[test]
fn test_sequencer_latest_tag_is_current() {
    let mut seq = RequestSequencer::new();
    let a = seq.issue();
    let b = seq.issue();
    assert!(a < b);
    assert!(!seq.is_current(a));
    assert!(seq.is_current(b));
    seq.invalidate();
    assert!(!seq.is_current(b));
}

#[test]
fn test_slot_drops_stale_results() {
    let mut slot = LatestSlot::new();
    let first = slot.begin();
    let second = slot.begin();

    // The newer request completes first; the older one must not overwrite it.
    assert_eq!(slot.offer(second, "second"), Apply::Applied);
    assert_eq!(slot.offer(first, "first"), Apply::Stale);
    assert_eq!(slot.get(), Some(&"second"));
}

#[test]
fn test_slot_keeps_old_value_until_result() {
    let mut slot = LatestSlot::new();
    let t = slot.begin();
    slot.offer(t, 1);
    let pending = slot.begin();
    assert!(slot.is_pending(pending));
    assert_eq!(slot.get(), Some(&1));
}

#[test]
fn test_slot_clear_invalidates_in_flight() {
    let mut slot = LatestSlot::new();
    let t = slot.begin();
    slot.clear();
    assert_eq!(slot.offer(t, 5), Apply::Stale);
    assert_eq!(slot.get(), None);
}

#[test]
fn test_debounce_fires_once_after_last_edit() {
    let mut d = Debouncer::new(Duration::from_millis(300));
    let t0 = Instant::now();
    d.schedule(t0);
    d.schedule(t0 + Duration::from_millis(100));

    assert!(!d.poll(t0 + Duration::from_millis(350)));
    assert_eq!(
        d.remaining(t0 + Duration::from_millis(350)),
        Some(Duration::from_millis(50))
    );
    assert!(d.poll(t0 + Duration::from_millis(400)));
    assert!(!d.poll(t0 + Duration::from_millis(800)));
    assert!(!d.is_pending());
}

#[test]
fn test_debounce_cancel() {
    let mut d = Debouncer::new(Duration::from_millis(10));
    let t0 = Instant::now();
    d.schedule(t0);
    d.cancel();
    assert!(!d.poll(t0 + Duration::from_secs(1)));
    assert_eq!(d.remaining(t0), None);
}
