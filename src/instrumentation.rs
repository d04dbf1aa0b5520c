//! Span timing for the generation and search hot paths.
//!
//! Built only with `--features instrumentation`. Functions marked with
//! `instrument` report how often they ran and for how long.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Span name to (calls, total nanoseconds), one map per thread so the rayon
/// workers never contend on a shared lock.
type SpanTimings = HashMap<&'static str, (u64, u64)>;

static SPAN_TIMINGS: Lazy<ThreadLocal<Mutex<SpanTimings>>> = Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        let cell = SPAN_TIMINGS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut timings) = cell.lock() {
            let entry = timings.entry(span.name()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += started.elapsed().as_nanos() as u64;
        }
    }
}

/// Installs the timing layer as the global subscriber. With `RUST_LOG` unset
/// or `off` spans are timed silently; otherwise span events are printed too.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let filter = std::env::var("RUST_LOG").unwrap_or_default();

    if filter.is_empty() || filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    }
}

/// Merges every thread's timings, most expensive span first.
pub fn collect_timings() -> Vec<(&'static str, u64, u64)> {
    let mut merged = SpanTimings::new();
    for cell in SPAN_TIMINGS.iter() {
        if let Ok(timings) = cell.lock() {
            for (name, (calls, nanos)) in timings.iter() {
                let entry = merged.entry(*name).or_insert((0, 0));
                entry.0 += calls;
                entry.1 += nanos;
            }
        }
    }

    let mut rows: Vec<_> = merged
        .into_iter()
        .map(|(name, (calls, nanos))| (name, calls, nanos))
        .collect();
    rows.sort_by_key(|&(_, _, nanos)| std::cmp::Reverse(nanos));
    rows
}

pub fn print_timing_statistics() {
    let rows = collect_timings();
    if rows.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");

    let mut total_nanos = 0u64;
    for (name, calls, nanos) in rows.iter().filter(|(_, calls, _)| *calls > 0) {
        total_nanos += nanos;
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            calls,
            *nanos as f64 / 1_000_000.0,
            *nanos as f64 / *calls as f64 / 1_000.0
        );
    }

    eprintln!("{:-<72}", "");
    eprintln!("Total instrumented time: {:.2} ms\n", total_nanos as f64 / 1_000_000.0);
}
