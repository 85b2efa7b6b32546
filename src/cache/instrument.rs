//! Instrumentation Module
//!
//! Wrappers that record call counts and call histories in the store around
//! an operation. Each wrapper runs its hook exactly once per call.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::client::KvClient;
use crate::error::Result;

/// Key of the list holding serialized call arguments for `method`.
pub fn inputs_key(method: &str) -> String {
    format!("{}:inputs", method)
}

/// Key of the list holding serialized call results for `method`.
pub fn outputs_key(method: &str) -> String {
    format!("{}:outputs", method)
}

// == Count Calls ==
/// Increments the counter stored under `method`, then runs `call`.
pub fn count_calls<C, T, F>(client: &mut C, method: &str, call: F) -> Result<T>
where
    C: KvClient + ?Sized,
    F: FnOnce(&mut C) -> Result<T>,
{
    let count = client.incr(method)?;
    debug!("{} call #{}", method, count);
    call(client)
}

// == Call History ==
/// Appends the serialized `args` to the method's input log, runs `call`, and
/// appends its result to the output log.
///
/// If `call` fails the input entry stays and no output is appended.
pub fn call_history<C, A, T, F>(client: &mut C, method: &str, args: &A, call: F) -> Result<T>
where
    C: KvClient + ?Sized,
    A: Serialize + ?Sized,
    T: Display,
    F: FnOnce(&mut C) -> Result<T>,
{
    let input = serde_json::to_string(args)?;
    client.rpush(&inputs_key(method), input.as_bytes())?;
    debug!("{} input recorded: {}", method, input);

    let output = call(client)?;
    client.rpush(&outputs_key(method), output.to_string().as_bytes())?;
    debug!("{} output recorded: {}", method, output);

    Ok(output)
}
