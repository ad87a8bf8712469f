// End-to-end tests for the jokes library
//
// Each test gets a fresh axum server standing in for the remote joke service
// and a temporary data directory for persisted favorites, both provided by
// the test-context lifecycle hooks. Nothing touches the real network or the
// user's data directory.

mod helpers;
mod test_favorites;
