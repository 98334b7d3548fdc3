use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    eval::{
        evaluator::{Evaluator, FrameState},
        fingerprint::{FrameFingerprint, fingerprint_frame},
    },
    foundation::{
        core::{Canvas, FrameIndex, FrameRange},
        error::{RailcamError, RailcamResult},
    },
    journey::model::Journey,
};

/// Threading and chunking options for [`eval_frames`].
#[derive(Clone, Debug)]
pub struct EvalThreading {
    /// Evaluate chunks on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames handed to the pool at a time (`0` is treated as `1`).
    pub chunk_size: usize,
    /// Explicit worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters reported by [`eval_frames`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames with a fingerprint not seen earlier in the batch.
    pub frames_distinct: u64,
}

/// Evaluate every frame of `range`, in order.
///
/// Output is identical whether or not `threading.parallel` is set.
#[tracing::instrument(skip(journey, threading))]
pub fn eval_frames(
    journey: &Journey,
    range: FrameRange,
    canvas: Canvas,
    threading: &EvalThreading,
) -> RailcamResult<(Vec<FrameState>, BatchStats)> {
    if range.is_empty() {
        return Err(RailcamError::validation("eval range must be non-empty"));
    }
    let evaluator = Evaluator::new(journey)?;
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);

    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            out.push(evaluator.eval(FrameIndex(f), canvas));
        }
    } else {
        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let frames: Vec<u64> = (chunk_start..chunk_end).collect();
            let mut states = pool.install(|| {
                frames
                    .par_iter()
                    .map(|&f| evaluator.eval(FrameIndex(f), canvas))
                    .collect::<Vec<_>>()
            });
            out.append(&mut states);
            chunk_start = chunk_end;
        }
    }

    let stats = batch_stats(&out);
    tracing::debug!(
        frames_total = stats.frames_total,
        frames_distinct = stats.frames_distinct,
        zoom = evaluator.zoom(),
        "batch evaluated"
    );
    Ok((out, stats))
}

fn batch_stats(states: &[FrameState]) -> BatchStats {
    let mut seen = HashSet::<FrameFingerprint>::with_capacity(states.len());
    for s in states {
        seen.insert(fingerprint_frame(s));
    }
    BatchStats {
        frames_total: states.len() as u64,
        frames_distinct: seen.len() as u64,
    }
}

fn build_thread_pool(threads: Option<usize>) -> RailcamResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RailcamError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RailcamError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pipeline.rs"]
mod tests;
