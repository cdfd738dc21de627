use leptos::*;
use live_feed_chart::application::{FeedEngine, Mutation};
use live_feed_chart::domain::config::EngineConfig;
use live_feed_chart::domain::feed::SampleGenerator;
use live_feed_chart::presentation::signals::{FrameSignals, frame_count, frame_signals, price_color};

#[test]
fn signals_mirror_the_latest_frame() {
    let runtime = create_runtime();
    let signals = FrameSignals::new();
    assert_eq!(signals.header_text(), (String::new(), String::new()));

    let mut engine = FeedEngine::new(EngineConfig::default())
        .unwrap()
        .with_generator(SampleGenerator::seeded(4));
    let frame = engine.apply(Mutation::LiveTick).unwrap();
    signals.apply(&frame);

    assert_eq!(signals.window.get_untracked(), frame.window);
    assert_eq!(signals.metrics.get_untracked(), frame.metrics);
    assert_eq!(signals.overlay.get_untracked().len(), frame.overlay.len());
    assert_eq!(signals.price_color.get_untracked(), frame.price_color);
    assert_eq!(signals.frame_count.get_untracked(), 1);

    let metrics = frame.metrics.unwrap();
    assert_eq!(signals.header_text(), (metrics.total_text(), metrics.change_text()));

    frame_signals().apply(&frame);
    assert_eq!(frame_count().get_untracked(), 1);
    assert_eq!(price_color().get_untracked(), frame.price_color);

    runtime.dispose();
}
