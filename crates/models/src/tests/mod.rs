
/// Round trips against a live Postgres; skipped unless `DATABASE_URL` is set
pub mod db_tests;
