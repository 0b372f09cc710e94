//! End-to-end tests of the HTTP API over the in-memory store.

mod board_test;
mod club_test;
mod event_test;
mod health_test;
mod helpers;
