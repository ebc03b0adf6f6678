//! Chart projection: turn a raw token batch into an ordered sample series.

use crate::source::RawSignalToken;

/// A validated sample destined for display.
///
/// `index` is the zero-based position of the token in the batch the
/// analyzer returned. Dropped tokens leave gaps; indices are never
/// renumbered after filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub index: usize,
    pub value: f64,
}

/// The ordered result of one complete fetch. Insertion order is display
/// order. A series is never constructed empty; emptiness is expressed by
/// [`Projection::Empty`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSeries {
    points: Vec<SamplePoint>,
}

impl SignalSeries {
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Chart-ready `[x, y]` pairs with x = original token index.
    pub fn chart_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.index as f64, p.value])
            .collect()
    }
}

/// Outcome of projecting one token batch.
///
/// `Empty` covers both an empty batch and a batch where every token failed
/// parsing; the two are observably identical downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Empty,
    Populated(SignalSeries),
}

/// Parse a single token as a finite floating-point value.
///
/// Leading/trailing whitespace is tolerated. Non-finite parses (inf, NaN)
/// are rejected along with non-numeric text; they cannot be charted.
fn parse_token(token: &RawSignalToken) -> Option<f64> {
    token
        .as_str()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Project a token batch into a [`Projection`].
///
/// Tokens are walked in order with their positional index. Parse failures
/// are logged with the offending token and index, then skipped; they never
/// abort the batch.
pub fn project(tokens: &[RawSignalToken]) -> Projection {
    if tokens.is_empty() {
        log::info!("analyzer returned no signals");
        return Projection::Empty;
    }

    let mut points = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        match parse_token(token) {
            Some(value) => points.push(SamplePoint { index, value }),
            None => {
                log::warn!("invalid signal value {:?} at index {}", token.as_str(), index);
            }
        }
    }

    if points.is_empty() {
        log::info!("no valid samples in a batch of {} token(s)", tokens.len());
        Projection::Empty
    } else {
        Projection::Populated(SignalSeries { points })
    }
}
