// Library root
// -----------
// This crate exposes a small library surface shared by the two binaries
// (`scan-food` and `import-db`).
//
// Module responsibilities:
// - `config`: Default URL, prompt and file paths, with environment
//   variable overrides. Passed into the other modules explicitly so
//   tests can inject a mock endpoint or temp-directory paths.
// - `api`: Encapsulates the HTTP interaction with the food-analysis
//   webhook and the two-branch decoding of its response.
// - `ui`: Renders outcomes to the console and owns the spinner shown
//   while a request is in flight.
// - `db`: Rebuilds the local SQLite database from the seed SQL script
//   and reports row counts.
//
// Keeping this separation makes it easier to test the API and database
// logic without going through the binaries.
pub mod api;
pub mod config;
pub mod db;
pub mod ui;
