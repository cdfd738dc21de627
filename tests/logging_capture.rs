use live_feed_chart::application::{FeedEngine, Mutation};
use live_feed_chart::domain::config::{EngineConfig, EngineVariant};
use live_feed_chart::domain::logging::{LogComponent, LogLevel, MemoryLogger, get_logger, init_logger};

// One global logger per test binary, so everything lives in one test.
#[test]
fn engine_lifecycle_is_logged() {
    let logger: &'static MemoryLogger = Box::leak(Box::new(MemoryLogger::new(LogLevel::Info)));
    init_logger(Box::new(logger));

    let mut engine = FeedEngine::new(EngineConfig::default().with_variant(EngineVariant::Reveal)).unwrap();
    engine.apply(Mutation::StartReveal);
    for _ in 0..5 {
        engine.apply(Mutation::RevealTick);
    }
    engine.apply(Mutation::Shutdown);

    assert!(logger.contains("Engine ready"));
    assert!(logger.contains("Reveal started"));
    assert!(logger.contains("Reveal completed"));
    assert!(logger.contains("Engine closed"));

    get_logger().debug(LogComponent::Domain("Test"), "below threshold");
    assert!(!logger.contains("below threshold"));

    let entries = logger.entries();
    let ready = entries.iter().find(|e| e.message.contains("Engine ready")).unwrap();
    assert_eq!(ready.level, LogLevel::Info);
    let line = ready.format_line();
    assert!(line.contains("INFO APP:FeedEngine | "));
    assert!(line.ends_with(&ready.message));
    // `[HH:MM:SS.mmm]` from the wall clock.
    assert_eq!(line.find(']'), Some(13));
}
