use diesel::prelude::*;
use diesel::sql_types::Text;
use pricewatch::setup::create_schema;

mod common;

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

fn user_tables(conn: &mut diesel::SqliteConnection) -> Vec<String> {
    diesel::sql_query(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .load::<TableName>(conn)
    .expect("sqlite_master should be queryable")
    .into_iter()
    .map(|t| t.name)
    .collect()
}

#[test]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn test_schema_creates_expected_tables() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("pooled connection");

    assert_eq!(user_tables(&mut conn), ["competitors", "products"]);
}

#[test]
fn test_schema_creation_is_idempotent() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("pooled connection");

    create_schema(&mut conn).expect("second run should be a no-op");
    assert_eq!(user_tables(&mut conn), ["competitors", "products"]);
}
