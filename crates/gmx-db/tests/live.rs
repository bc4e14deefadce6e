//! Live integration tests for gmx-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh database with the `businesses` table from the
//! workspace `migrations/` directory. They need `DATABASE_URL` pointing at a
//! Postgres server and are ignored by default:
//!
//! ```text
//! cargo test -p gmx-db --test live -- --ignored
//! ```

use gmx_core::{ContactDetails, EnrichedRecord, ListingCandidate};
use gmx_db::{
    count_businesses_matching, insert_business, insert_if_new, BusinessRow, BusinessStore,
    InsertOutcome, PgBusinessStore, SkipReason,
};

fn make_record(name: &str, address: &str) -> EnrichedRecord {
    EnrichedRecord::assemble(
        ListingCandidate {
            name: name.to_string(),
            formatted_address: address.to_string(),
            external_id: Some("place-1".to_string()),
            latitude: 13.06,
            longitude: 80.25,
        },
        ContactDetails {
            phone: "044 2829 0200".to_string(),
            website: "https://example.com".to_string(),
        },
    )
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_business_stores_all_columns(pool: sqlx::PgPool) {
    let record = make_record("Apollo Hospital", "21 Greams Lane, Chennai 600006");
    insert_business(&pool, &record)
        .await
        .expect("insert_business failed");

    let row = sqlx::query_as::<_, BusinessRow>(
        "SELECT name, phone, email, website, address, pincode, latitude, longitude \
         FROM businesses",
    )
    .fetch_one(&pool)
    .await
    .expect("select failed");

    assert_eq!(row.name, "Apollo Hospital");
    assert_eq!(row.phone, "044 2829 0200");
    assert_eq!(row.email, "");
    assert_eq!(row.website, "https://example.com");
    assert_eq!(row.address, "21 Greams Lane, Chennai 600006");
    assert_eq!(row.pincode, "600006");
    assert!((row.latitude - 13.06).abs() < 1e-9);
    assert!((row.longitude - 80.25).abs() < 1e-9);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn count_matches_exact_pair_only(pool: sqlx::PgPool) {
    insert_business(&pool, &make_record("Cafe", "1 Road"))
        .await
        .unwrap();

    assert_eq!(
        count_businesses_matching(&pool, "Cafe", "1 Road").await.unwrap(),
        1
    );
    assert_eq!(
        count_businesses_matching(&pool, "cafe", "1 Road").await.unwrap(),
        0
    );
    assert_eq!(
        count_businesses_matching(&pool, "Cafe", "2 Road").await.unwrap(),
        0
    );
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_dedups_within_a_run(pool: sqlx::PgPool) {
    let mut store = PgBusinessStore::acquire(&pool).await.unwrap();
    let record = make_record("Cafe", "1 Road");

    let first = insert_if_new(&mut store, &record).await.unwrap();
    let second = insert_if_new(&mut store, &record).await.unwrap();
    let no_name = insert_if_new(&mut store, &make_record("", "1 Road"))
        .await
        .unwrap();

    assert_eq!(first, InsertOutcome::Inserted);
    assert_eq!(second, InsertOutcome::Skipped(SkipReason::Duplicate));
    assert_eq!(no_name, InsertOutcome::Skipped(SkipReason::MissingDedupKey));
    assert_eq!(store.count_matching("Cafe", "1 Road").await.unwrap(), 1);
}
