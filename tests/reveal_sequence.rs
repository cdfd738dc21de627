use live_feed_chart::application::{FeedEngine, Mutation};
use live_feed_chart::domain::config::{EngineConfig, EngineVariant};
use live_feed_chart::domain::events::FeedEvent;
use live_feed_chart::domain::feed::{RevealPhase, RevealSequencer, SampleGenerator};
use std::cell::RefCell;
use std::rc::Rc;

fn reveal_engine() -> (FeedEngine, Rc<RefCell<Vec<FeedEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let mut engine = FeedEngine::new(EngineConfig::default().with_variant(EngineVariant::Reveal))
        .unwrap()
        .with_generator(SampleGenerator::seeded(5));
    engine.subscribe_to_feed_events(move |event| sink.borrow_mut().push(event.clone()));
    (engine, events)
}

#[test]
fn sequencer_walks_idle_revealing_done() {
    let mut reveal = RevealSequencer::new(3);
    assert_eq!(reveal.visible_len(), Some(0));
    assert!(reveal.start());
    assert!(!reveal.start());
    assert_eq!(reveal.phase(), RevealPhase::Revealing(0));
    assert_eq!(reveal.advance(), RevealPhase::Revealing(1));
    assert_eq!(reveal.visible_len(), Some(2));
    assert_eq!(reveal.advance(), RevealPhase::Done);
    assert_eq!(reveal.advance(), RevealPhase::Done);
    assert_eq!(reveal.visible_len(), None);
}

#[test]
fn single_sample_seed_completes_on_start() {
    let mut reveal = RevealSequencer::new(1);
    assert!(reveal.start());
    assert!(reveal.is_done());
}

#[test]
fn reveal_grows_visible_prefix_one_point_per_step() {
    let (mut engine, _) = reveal_engine();
    let first = engine.apply(Mutation::StartReveal).unwrap();
    assert_eq!(first.window.len(), 1);
    assert_eq!(first.phase, RevealPhase::Revealing(0));
    // A lone revealed point has no change yet.
    assert_eq!(first.metrics.map(|m| m.change), Some(0.0));

    let lengths: Vec<usize> =
        (0..5).filter_map(|_| engine.apply(Mutation::RevealTick)).map(|f| f.window.len()).collect();
    assert_eq!(lengths, vec![2, 3, 4, 5, 6]);
    assert_eq!(engine.phase(), RevealPhase::Done);

    // Further reveal ticks change nothing.
    assert!(engine.apply(Mutation::RevealTick).is_none());
}

#[test]
fn live_ticks_during_reveal_are_discarded() {
    let (mut engine, events) = reveal_engine();
    engine.apply(Mutation::StartReveal);
    assert!(engine.apply(Mutation::LiveTick).is_none());
    engine.apply(Mutation::RevealTick);
    assert!(engine.apply(Mutation::LiveTick).is_none());

    assert_eq!(engine.window().len(), 6);
    let discarded = events.borrow().iter().filter(|e| **e == FeedEvent::LiveTickDiscarded).count();
    assert_eq!(discarded, 2);

    for _ in 0..4 {
        engine.apply(Mutation::RevealTick);
    }
    let frame = engine.apply(Mutation::LiveTick).unwrap();
    assert_eq!(frame.window.len(), 7);
    assert!(events.borrow().contains(&FeedEvent::RevealCompleted));
}

#[test]
fn metrics_follow_the_revealed_prefix() {
    let (mut engine, _) = reveal_engine();
    engine.apply(Mutation::StartReveal);
    let frame = engine.apply(Mutation::RevealTick).unwrap();
    // 3440 -> 3442
    let metrics = frame.metrics.unwrap();
    assert_eq!(metrics.total, 3442.0);
    assert_eq!(metrics.change, 2.0);
}
