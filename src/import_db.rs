// Entrypoint for the `import-db` binary: rebuild the local SQLite
// database from the seed SQL script and print row counts as a sanity
// check. Takes no arguments; paths come from the configuration (with
// `FOODSCAN_SQL_FILE` / `FOODSCAN_DB_FILE` overrides).
//
// Exits non-zero when the SQL script is missing or the import fails.

use foodscan::{config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cfg = Config::from_env();

    let report = db::bootstrap(&cfg.sql_file, &cfg.db_file).await?;

    println!("Imported SQL into {}", cfg.db_file.display());
    println!("Foods: {}", report.foods);
    println!("Ingredients: {}", report.ingredients);
    Ok(())
}
