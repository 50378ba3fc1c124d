#[cfg(feature = "std")]
#[cfg(test)]
mod logging_tests {
    use log::LevelFilter;
    use seabattle::{init_logging, log_level, LOG_ENV};

    #[test]
    fn test_level_defaults_to_warn() {
        assert_eq!(log_level(None), LevelFilter::Warn);
        assert_eq!(log_level(Some("")), LevelFilter::Warn);
        assert_eq!(log_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_level_names_are_case_insensitive() {
        assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level(Some(" TRACE\n")), LevelFilter::Trace);
        assert_eq!(log_level(Some("Off")), LevelFilter::Off);
    }

    #[test]
    fn test_init_is_repeatable() {
        assert_eq!(LOG_ENV, "SEABATTLE_LOG");
        init_logging();
        init_logging();
        log::warn!("logger installed");
        assert!(log::max_level() <= LevelFilter::Trace);
    }
}
