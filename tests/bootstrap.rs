// Integration tests for the database bootstrapper, run against a temp
// directory so no repo-relative paths are touched.

use foodscan::db;
use std::path::Path;

const SEED: &str = "
CREATE TABLE foods (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE ingredients (
    id INTEGER PRIMARY KEY,
    food_id INTEGER NOT NULL REFERENCES foods(id),
    name TEXT NOT NULL
);
INSERT INTO foods (name) VALUES ('arepa'), ('sancocho'), ('patacon');
INSERT INTO ingredients (food_id, name) VALUES
    (1, 'corn flour'),
    (1, 'cheese'),
    (2, 'chicken'),
    (2, 'yuca'),
    (3, 'plantain');
";

fn write_seed(dir: &Path) -> std::path::PathBuf {
    let sql_path = dir.join("init_sqlite.sql");
    std::fs::write(&sql_path, SEED).unwrap();
    sql_path
}

#[tokio::test]
async fn reports_row_counts() {
    let dir = tempfile::tempdir().unwrap();
    let sql_path = write_seed(dir.path());
    let db_path = dir.path().join("food.sqlite");

    let report = db::bootstrap(&sql_path, &db_path).await.unwrap();

    assert_eq!(report.foods, 3);
    assert_eq!(report.ingredients, 5);
    assert!(db_path.exists());
}

#[tokio::test]
async fn rerun_starts_from_a_clean_slate() {
    let dir = tempfile::tempdir().unwrap();
    let sql_path = write_seed(dir.path());
    let db_path = dir.path().join("food.sqlite");

    let first = db::bootstrap(&sql_path, &db_path).await.unwrap();
    let second = db::bootstrap(&sql_path, &db_path).await.unwrap();

    // The second run deletes the file and replays the script, so the
    // counts do not double.
    assert_eq!(first, second);
    assert_eq!(second.foods, 3);
    assert_eq!(second.ingredients, 5);
}

#[tokio::test]
async fn missing_script_fails_and_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let sql_path = dir.path().join("does_not_exist.sql");
    let db_path = dir.path().join("food.sqlite");

    let err = db::bootstrap(&sql_path, &db_path).await.unwrap_err();

    assert!(err.to_string().contains("SQL file not found"));
    assert!(!db_path.exists());
}

#[tokio::test]
async fn broken_script_propagates_the_batch_error() {
    let dir = tempfile::tempdir().unwrap();
    let sql_path = dir.path().join("broken.sql");
    std::fs::write(&sql_path, "CREATE TABLE foods (id INTEGER);\nNOT VALID SQL;").unwrap();
    let db_path = dir.path().join("food.sqlite");

    let err = db::bootstrap(&sql_path, &db_path).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to execute SQL script"));
}
