//! End-to-end fixtures: real expansions of every `macro-utils` macro, checked
//! at runtime by the tests beside them and by `tests/`.

pub mod fixtures;
