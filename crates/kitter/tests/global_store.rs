//! The set-once global configuration store.
//!
//! One test function: the store is process-wide, so the whole lifecycle
//! has to be observed in order within a single test.

use kitter::{KitterConfig, KitterError, global_config, set_config};

#[test]
fn test_global_store_lifecycle() {
    // Before installation, reads see the empty default.
    assert_eq!(*global_config(), KitterConfig::default());

    // First install wins.
    let mut config = KitterConfig::default();
    config.styles.page.center = Some(true);
    set_config(config.clone()).unwrap();
    assert_eq!(*global_config(), config);

    // The store is set-once: a second install is a usage error and the
    // stored value is unchanged.
    let mut replacement = KitterConfig::default();
    replacement.styles.page.center = Some(false);
    let err = set_config(replacement).unwrap_err();
    assert!(matches!(err, KitterError::ConfigAlreadySet));
    assert_eq!(global_config().styles.page.center, Some(true));
}
