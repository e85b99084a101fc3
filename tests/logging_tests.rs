use log::{Level, LevelFilter};

// One test per file: the logger is process-global.
#[test]
fn test_salvo_log_filters_by_target() {
    std::env::set_var("SALVO_LOG", "warn,salvo::service=debug");
    salvo::init_logging();
    // a second call keeps the first logger
    salvo::init_logging();

    assert_eq!(log::max_level(), LevelFilter::Debug);
    assert!(log::log_enabled!(target: "salvo::service", Level::Debug));
    assert!(!log::log_enabled!(target: "salvo::service", Level::Trace));
    assert!(log::log_enabled!(target: "salvo::engine", Level::Warn));
    assert!(!log::log_enabled!(target: "salvo::engine", Level::Info));
}
