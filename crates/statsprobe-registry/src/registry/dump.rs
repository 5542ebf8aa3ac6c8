//! Plain-text dump and bulk reset.
//!
//! Both walk the stores shard by shard without a registry-wide lock. Entries
//! inserted or removed concurrently may or may not be observed; callers must
//! not rely on either outcome.

use std::fmt::{Display, Write as _};
use std::io::Write;
use std::sync::Arc;

use statsprobe_core::Result;

use super::InMemoryStatsReceiver;
use crate::config::DumpSection;

impl InMemoryStatsReceiver {
    /// Write `"<name> <value>"` lines using the configured dump options.
    pub fn print<W: Write>(&self, out: W) -> Result<()> {
        self.print_with(out, self.stores.cfg.dump)
    }

    pub fn print_with<W: Write>(&self, mut out: W, opts: DumpSection) -> Result<()> {
        out.write_all(self.render_with(opts).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// The dump as a string, using the configured dump options.
    pub fn render(&self) -> String {
        self.render_with(self.stores.cfg.dump)
    }

    pub fn render_with(&self, opts: DumpSection) -> String {
        let counters: Vec<(String, i64)> = self
            .stores
            .counters
            .iter()
            .map(|e| (e.key().joined(), *e.value()))
            .collect();

        // Producers are collected first and invoked after the iteration so no
        // shard lock is held while they run.
        let producers: Vec<(String, _)> = self
            .stores
            .gauges
            .iter()
            .map(|e| (e.key().joined(), Arc::clone(e.value())))
            .collect();
        let gauges: Vec<(String, f32)> = producers.into_iter().map(|(k, f)| (k, f())).collect();

        let stats: Vec<(String, f32)> = self
            .stores
            .stats
            .iter()
            .filter(|e| !e.value().is_empty())
            .map(|e| (e.key().joined(), mean(e.value())))
            .collect();

        let mut out = String::new();
        render_section(&mut out, "Counters:", counters, opts);
        render_section(&mut out, "Gauges:", gauges, opts);
        render_section(&mut out, "Stats:", stats, opts);
        out
    }

    /// Empty the counter, stat, and gauge stores. Verbosity tags are kept.
    pub fn clear(&self) {
        self.stores.counters.clear();
        self.stores.stats.clear();
        self.stores.gauges.clear();
        tracing::debug!("registry cleared");
    }
}

/// Accumulated in `f64` so long or large-valued runs neither overflow nor
/// stop absorbing small samples.
fn mean(samples: &[f32]) -> f32 {
    let sum: f64 = samples.iter().map(|&v| f64::from(v)).sum();
    (sum / samples.len() as f64) as f32
}

fn render_section<V: Display>(
    out: &mut String,
    header: &str,
    mut lines: Vec<(String, V)>,
    opts: DumpSection,
) {
    if lines.is_empty() {
        return;
    }
    if opts.sorted {
        lines.sort_by(|a, b| a.0.cmp(&b.0));
    }
    if opts.include_headers {
        let _ = writeln!(out, "{header}");
    }
    for (name, value) in lines {
        let _ = writeln!(out, "{name} {value}");
    }
}
