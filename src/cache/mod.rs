//! Cache Module
//!
//! Provides the instrumented cache facade over a key-value store.

mod instrument;
mod report;
mod store;
mod value;


// Re-export public types
pub use instrument::{call_history, count_calls, inputs_key, outputs_key};
pub use report::{CallHistory, CallReport};
pub use store::{Cache, STORE_METHOD};
pub use value::{decode_float, decode_integer, decode_text, Value};
