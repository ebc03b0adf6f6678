//! Signal source adapters: where raw tokens come from.
//!
//! Everything upstream of the chart is reached through the [`SignalSource`]
//! trait: one zero-argument call returning an ordered batch of opaque
//! tokens. The analyzer's dynamic output stays behind this boundary; the
//! rest of the crate only ever sees well-typed samples.

use std::collections::VecDeque;
use std::fmt;
use std::process::Command;

use crate::error::SourceError;

/// One opaque value returned by the analyzer, prior to numeric parsing.
///
/// Tokens have no structure beyond their string form. They are created per
/// fetch call and discarded after projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSignalToken(String);

impl RawSignalToken {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawSignalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawSignalToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RawSignalToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A source of raw signal batches.
///
/// One call per user trigger. The batch may legitimately be empty; any
/// communication failure fails the whole call.
pub trait SignalSource {
    fn fetch_raw_signals(&mut self) -> Result<Vec<RawSignalToken>, SourceError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// AnalyzerProcessSource – the external analyzer boundary
// ─────────────────────────────────────────────────────────────────────────────

/// Adapter that runs the configured analyzer command once per fetch and
/// splits its stdout into whitespace-separated tokens.
#[derive(Debug, Clone)]
pub struct AnalyzerProcessSource {
    program: String,
    args: Vec<String>,
}

impl AnalyzerProcessSource {
    /// Build an adapter for an explicit command line.
    pub fn from_command<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl SignalSource for AnalyzerProcessSource {
    fn fetch_raw_signals(&mut self) -> Result<Vec<RawSignalToken>, SourceError> {
        log::debug!("invoking analyzer: {} {:?}", self.program, self.args);
        let output = Command::new(&self.program).args(&self.args).output()?;

        if !output.status.success() {
            return Err(SourceError::AnalyzerFailed {
                status: output.status.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        let tokens: Vec<RawSignalToken> = stdout
            .split_whitespace()
            .map(RawSignalToken::from)
            .collect();
        log::debug!("analyzer returned {} token(s)", tokens.len());
        Ok(tokens)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScriptedSource – canned batches for demos and tests
// ─────────────────────────────────────────────────────────────────────────────

/// Adapter that replays prepared token batches in order.
///
/// Each fetch pops the next batch; once the script is exhausted the last
/// configured batch repeats (an empty script always yields empty batches).
pub struct ScriptedSource {
    batches: VecDeque<Vec<RawSignalToken>>,
    last: Vec<RawSignalToken>,
}

impl ScriptedSource {
    pub fn new<I, B, T>(batches: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: IntoIterator<Item = T>,
        T: Into<RawSignalToken>,
    {
        let batches: VecDeque<Vec<RawSignalToken>> = batches
            .into_iter()
            .map(|b| b.into_iter().map(Into::into).collect())
            .collect();
        Self {
            batches,
            last: Vec::new(),
        }
    }

    /// Single batch that repeats forever.
    pub fn repeating<B, T>(batch: B) -> Self
    where
        B: IntoIterator<Item = T>,
        T: Into<RawSignalToken>,
    {
        Self::new(std::iter::once(batch))
    }
}

impl SignalSource for ScriptedSource {
    fn fetch_raw_signals(&mut self) -> Result<Vec<RawSignalToken>, SourceError> {
        if let Some(batch) = self.batches.pop_front() {
            self.last = batch.clone();
            Ok(batch)
        } else {
            Ok(self.last.clone())
        }
    }
}
