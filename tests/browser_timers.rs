#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use live_feed_chart::application::TickScheduler;
use live_feed_chart::infrastructure::timers::GlooScheduler;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn interval_fires_until_cancelled() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let mut handle = GlooScheduler.every(Duration::from_millis(10), Box::new(move || c.set(c.get() + 1)));

    sleep(Duration::from_millis(55)).await;
    handle.cancel();
    let fired = count.get();
    assert!(fired >= 2, "fired {fired} times");
    assert!(!handle.is_active());

    sleep(Duration::from_millis(40)).await;
    assert_eq!(count.get(), fired);
}
