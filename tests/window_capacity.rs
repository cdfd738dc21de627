use live_feed_chart::domain::feed::{Sample, Window};
use quickcheck_macros::quickcheck;

const CAPACITY: usize = 10;

fn seeded(seed_len: usize) -> Window {
    Window::with_seed(CAPACITY, (0..seed_len).map(|i| Sample::new(format!("s{i}"), i as f64)))
}

#[quickcheck]
fn length_never_exceeds_capacity(seed_len: u8, appends: u8) -> bool {
    let seed_len = usize::from(seed_len) % (CAPACITY + 1);
    let appends = usize::from(appends);
    let mut window = seeded(seed_len);
    for i in 0..appends {
        window.append(Sample::new(format!("a{i}"), 1000.0 + i as f64));
        if window.len() > CAPACITY {
            return false;
        }
    }
    window.len() == (seed_len + appends).min(CAPACITY)
}

#[quickcheck]
fn evicts_in_insertion_order(appends: u8) -> bool {
    let mut window = seeded(6);
    let mut inserted: Vec<f64> = window.values();
    let mut evicted = Vec::new();
    for i in 0..usize::from(appends) {
        let value = 100.0 + i as f64;
        inserted.push(value);
        if let Some(old) = window.append(Sample::new(format!("a{i}"), value)) {
            evicted.push(old.value());
        }
    }
    let kept = inserted.split_off(inserted.len() - window.len());
    evicted == inserted && window.values() == kept
}

#[test]
fn append_beyond_capacity_evicts_exactly_one() {
    let mut window = seeded(CAPACITY);
    let evicted = window.append(Sample::new("new", 42.0));
    assert_eq!(evicted.map(|s| s.value()), Some(0.0));
    assert_eq!(window.len(), CAPACITY);
    assert_eq!(window.latest().map(Sample::value), Some(42.0));
}

#[test]
fn tail_past_head_is_absent() {
    let window = seeded(3);
    assert_eq!(window.tail(2).map(Sample::value), Some(0.0));
    assert!(window.tail(3).is_none());
    assert!(Window::new(CAPACITY).latest().is_none());
}
