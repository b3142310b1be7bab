//! Cross-representation codec tests.

mod round_trip;
