//! Per-charger state and the charger store.

use ev_core::{CarId, ChargerId};

use crate::{ReservationQueue, ReserveError, ReserveResult};

// ── Charger ───────────────────────────────────────────────────────────────────

/// The state for a single charging station.
///
/// A charger is either **idle** (`occupant == None`) or **occupied**
/// (`occupant == Some(car)`).  `elapsed_minutes` is meaningful only while
/// occupied; it is reset to 0 at promotion and at release.  Queue entries may
/// exist in either state — a busy charger keeps accumulating reservations.
#[derive(Debug, Clone)]
pub struct Charger {
    pub id: ChargerId,

    /// Pending reservations, earliest first.
    pub queue: ReservationQueue,

    /// The car currently charging, if any.
    pub occupant: Option<CarId>,

    /// Minutes of charge delivered to `occupant` so far.  Always strictly
    /// less than the occupant's required duration — reaching it releases the
    /// charger in the same tick.
    pub elapsed_minutes: u32,
}

impl Charger {
    /// Construct an idle charger with an empty queue.
    pub fn new(id: ChargerId) -> Self {
        Self {
            id,
            queue: ReservationQueue::new(),
            occupant: None,
            elapsed_minutes: 0,
        }
    }

    /// `true` when no car is charging here.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.occupant.is_none()
    }

    /// `true` when at least one reservation is waiting.
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Pop the earliest reservation and make that car the occupant.
    ///
    /// Fails with [`ReserveError::EmptyQueue`] if nothing is pending and with
    /// [`ReserveError::AlreadyOccupied`] if a car is still charging — both
    /// indicate an engine bug, not a recoverable condition.
    pub fn promote_next(&mut self) -> ReserveResult<CarId> {
        if let Some(occupant) = self.occupant {
            return Err(ReserveError::AlreadyOccupied {
                charger: self.id,
                occupant,
            });
        }
        let car = self
            .queue
            .pop_front()
            .ok_or(ReserveError::EmptyQueue(self.id))?;
        self.occupant = Some(car);
        self.elapsed_minutes = 0;
        Ok(car)
    }

    /// Mark the charger free for use again.
    pub fn release(&mut self) {
        self.occupant = None;
        self.elapsed_minutes = 0;
    }
}

// ── ChargerStore ──────────────────────────────────────────────────────────────

/// All chargers in the simulation, indexed by `ChargerId`.
#[derive(Debug, Default)]
pub struct ChargerStore {
    pub chargers: Vec<Charger>,
}

impl ChargerStore {
    /// Construct `count` idle chargers with ascending IDs.
    pub fn new(count: usize) -> Self {
        let chargers = (0..count as u32).map(|i| Charger::new(ChargerId(i))).collect();
        Self { chargers }
    }

    pub fn len(&self) -> usize {
        self.chargers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chargers.is_empty()
    }

    /// Iterator over all `ChargerId`s in ascending index order — the fixed
    /// within-tick pass order.
    pub fn charger_ids(&self) -> impl Iterator<Item = ChargerId> + '_ {
        (0..self.chargers.len() as u32).map(ChargerId)
    }

    /// Shared reference to one charger.
    #[inline]
    pub fn charger(&self, id: ChargerId) -> &Charger {
        &self.chargers[id.index()]
    }

    /// Mutable reference to one charger.
    #[inline]
    pub fn charger_mut(&mut self, id: ChargerId) -> &mut Charger {
        &mut self.chargers[id.index()]
    }

    /// Retract `car`'s pending entry from every charger except `except`.
    ///
    /// Returns the chargers a removal actually occurred on, in pass order.
    /// Called immediately after promotion so that chargers processed later in
    /// the same tick cannot promote the same car.
    pub fn retract_for(&mut self, car: CarId, except: ChargerId) -> Vec<ChargerId> {
        self.chargers
            .iter_mut()
            .filter_map(|c| (c.id != except && c.queue.retract(car)).then_some(c.id))
            .collect()
    }

    /// The charger `car` currently occupies, if any.
    pub fn occupant_of(&self, car: CarId) -> Option<ChargerId> {
        self.chargers
            .iter()
            .find(|c| c.occupant == Some(car))
            .map(|c| c.id)
    }

    /// Number of chargers currently occupied.
    pub fn occupied_count(&self) -> usize {
        self.chargers.iter().filter(|c| c.occupant.is_some()).count()
    }

    /// Total pending reservations across all queues.
    pub fn total_pending(&self) -> usize {
        self.chargers.iter().map(|c| c.queue.len()).sum()
    }
}
