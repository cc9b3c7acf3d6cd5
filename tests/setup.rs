use pricewatch::config::DATABASE_PATH_ENV;
use pricewatch::setup::{SetupError, setup_database};
use tempfile::TempDir;

// `setup_database` reads process-wide environment, so all scenarios run
// sequentially inside a single test. This binary must not share the variable
// with other tests running in parallel.
#[test]
fn test_setup_database_end_to_end() {
    // Missing setting fails before touching the filesystem.
    unsafe { std::env::remove_var(DATABASE_PATH_ENV) };
    let err = setup_database().expect_err("missing DATABASE_PATH should fail");
    assert!(matches!(err, SetupError::Configuration { .. }));

    // Blank setting is treated the same as missing.
    unsafe { std::env::set_var(DATABASE_PATH_ENV, "   ") };
    let err = setup_database().expect_err("blank DATABASE_PATH should fail");
    assert!(matches!(err, SetupError::Configuration { .. }));

    // Fresh path: parent directory and database file get created.
    let tmp = TempDir::new().expect("temp dir");
    let db_path = tmp.path().join("data").join("app.db");
    unsafe { std::env::set_var(DATABASE_PATH_ENV, &db_path) };

    setup_database().expect("setup should succeed on a fresh path");
    assert!(db_path.parent().expect("parent dir").is_dir());
    assert!(db_path.is_file());

    // Second run is a no-op.
    setup_database().expect("setup should be idempotent");
}
