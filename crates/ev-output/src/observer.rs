//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ev_core::{SimConfig, SimEvent, Tick};
use ev_sim::SimObserver;

use crate::row::{EventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the event stream and per-tick summaries to
/// any [`OutputWriter`] backend.
///
/// Events are buffered within a tick and flushed as one batch at the tick
/// boundary, so rows land in file order even though they arrive one at a
/// time.  Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    tick_minutes: u32,
    current_tick: Tick,
    pending:      Vec<EventRow>,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-minutes conversion in summary rows.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_minutes: config.tick_minutes,
            current_tick: Tick::ZERO,
            pending:      Vec::new(),
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.current_tick = tick;
    }

    fn on_event(&mut self, event: &SimEvent) {
        self.pending.push(EventRow::from_event(event, self.current_tick));
    }

    fn on_tick_end(&mut self, tick: Tick, charging: usize) {
        self.flush_pending();
        let row = TickSummaryRow {
            tick:          tick.0,
            sim_minutes:   (tick.0 + 1) * self.tick_minutes as u64,
            charging_cars: charging as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        // The all-charged event arrives after the last tick boundary.
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
