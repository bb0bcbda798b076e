// Test modules for openrouter-ping
//
// Each source file has a corresponding test file focused on its behavior.
// HTTP-level tests live in tests/ and run against a wiremock server.

pub mod error;
pub mod report;
