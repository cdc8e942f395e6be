//! Integration tests running the devdetect binary.

mod cli_tests;
