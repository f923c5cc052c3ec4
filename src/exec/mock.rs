//! exec::mock
//!
//! Scripted executor for deterministic testing.
//!
//! # Design
//!
//! Responses are keyed by the exact argument vector. Calls without a
//! scripted response get the fallback, which is a successful call with no
//! output unless changed. Every call is recorded in order so tests can
//! assert on sequencing (e.g. staging happens before committing).
//!
//! # Example
//!
//! ```
//! use gitcmd::exec::{CommandOutput, MockExecutor};
//! use gitcmd::git::Git;
//!
//! let exec = MockExecutor::new()
//!     .with(&["tag", "--list"], CommandOutput::success("v1.0\nv1.1\n"));
//! let git = Git::new(exec.clone());
//!
//! assert_eq!(git.tags(), vec!["v1.0", "v1.1"]);
//! assert_eq!(exec.calls(), vec![vec!["tag", "--list"]]);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{CommandOutput, Executor};

/// Mock executor for testing.
///
/// Clones share state, so a test can hand one clone to [`crate::git::Git`]
/// and keep another to inspect the recorded calls.
#[derive(Debug, Clone)]
pub struct MockExecutor {
    inner: Arc<Mutex<MockExecutorInner>>,
}

#[derive(Debug)]
struct MockExecutorInner {
    responses: HashMap<Vec<String>, CommandOutput>,
    fallback: CommandOutput,
    calls: Vec<Vec<String>>,
}

impl MockExecutor {
    /// Create a mock where every call succeeds with empty output.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockExecutorInner {
                responses: HashMap::new(),
                fallback: CommandOutput::success(""),
                calls: Vec::new(),
            })),
        }
    }

    /// Script the response for an exact argument vector.
    pub fn with(self, args: &[&str], output: CommandOutput) -> Self {
        self.respond(args, output);
        self
    }

    /// Replace the response used for unscripted calls.
    pub fn with_fallback(self, output: CommandOutput) -> Self {
        self.inner.lock().unwrap().fallback = output;
        self
    }

    /// Script (or re-script) the response for an exact argument vector.
    pub fn respond(&self, args: &[&str], output: CommandOutput) {
        let key = args.iter().map(|a| a.to_string()).collect();
        self.inner.lock().unwrap().responses.insert(key, output);
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// True if `args` was called at least once.
    pub fn was_called(&self, args: &[&str]) -> bool {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .any(|call| call.iter().map(String::as_str).eq(args.iter().copied()))
    }

    /// Forget recorded calls, keeping scripted responses.
    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for MockExecutor {
    fn run(&self, args: &[&str]) -> CommandOutput {
        let key: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut inner = self.inner.lock().unwrap();
        let output = inner
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| inner.fallback.clone());
        inner.calls.push(key);
        output
    }
}
