//! Store contracts and their in-memory backends.

use std::collections::BTreeMap;

use lift_core::{ElevatorId, Floor, RequestId};

use crate::{Elevator, FloorRequest, NewRequest, StoreResult};

// ── Contracts ─────────────────────────────────────────────────────────────────

/// Storage contract for elevator records.
pub trait ElevatorStore {
    /// Every elevator, in ascending id order.  The ordering is a behavioral
    /// contract: the tick loop processes cars in exactly this order.
    fn list(&self) -> StoreResult<Vec<Elevator>>;

    /// One elevator by id, or `None` if it does not exist.
    fn get(&self, id: ElevatorId) -> StoreResult<Option<Elevator>>;

    /// Insert or replace an elevator record.
    fn upsert(&mut self, elevator: Elevator) -> StoreResult<()>;
}

/// Storage contract for pending hall calls.
pub trait RequestStore {
    /// Insert a new call and return the id the store assigned it.
    fn add(&mut self, request: NewRequest) -> StoreResult<RequestId>;

    /// All pending calls.  Iteration order is insertion order; nothing
    /// beyond the engine's own tie-breaking depends on it.
    fn pending(&self) -> StoreResult<Vec<FloorRequest>>;

    /// Remove a call.  Removing an id that is already gone is a no-op, not an
    /// error — two code paths may race to service the same call.
    fn remove(&mut self, id: RequestId) -> StoreResult<()>;

    /// Replace an existing call record.  Updating a missing id is a no-op.
    fn update(&mut self, request: FloorRequest) -> StoreResult<()>;
}

// ── In-memory backends ────────────────────────────────────────────────────────

/// Volatile `BTreeMap`-backed elevator store.
#[derive(Default)]
pub struct MemoryElevatorStore {
    records: BTreeMap<ElevatorId, Elevator>,
}

impl MemoryElevatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a bank of `count` cars, ids `1..=count`, all idle at floor 1.
    pub fn bank(count: u32) -> Self {
        let records = (1..=count)
            .map(|i| {
                let id = ElevatorId(i);
                (id, Elevator::new(id))
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ElevatorStore for MemoryElevatorStore {
    fn list(&self) -> StoreResult<Vec<Elevator>> {
        // BTreeMap iterates keys ascending — the contract's id order.
        Ok(self.records.values().cloned().collect())
    }

    fn get(&self, id: ElevatorId) -> StoreResult<Option<Elevator>> {
        Ok(self.records.get(&id).cloned())
    }

    fn upsert(&mut self, elevator: Elevator) -> StoreResult<()> {
        self.records.insert(elevator.id, elevator);
        Ok(())
    }
}

/// Volatile `BTreeMap`-backed hall-call store with a monotonic id counter.
#[derive(Default)]
pub struct MemoryRequestStore {
    records: BTreeMap<RequestId, FloorRequest>,
    next_id: u64,
}

impl MemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The earliest pending call at exactly `floor`, if any.
    pub fn waiting_at(&self, floor: Floor) -> Option<&FloorRequest> {
        self.records.values().find(|r| r.floor == floor)
    }
}

impl RequestStore for MemoryRequestStore {
    fn add(&mut self, request: NewRequest) -> StoreResult<RequestId> {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.records.insert(
            id,
            FloorRequest {
                id,
                floor:             request.floor,
                direction:         request.direction,
                assigned_elevator: request.assigned_elevator,
            },
        );
        Ok(id)
    }

    fn pending(&self) -> StoreResult<Vec<FloorRequest>> {
        Ok(self.records.values().cloned().collect())
    }

    fn remove(&mut self, id: RequestId) -> StoreResult<()> {
        self.records.remove(&id);
        Ok(())
    }

    fn update(&mut self, request: FloorRequest) -> StoreResult<()> {
        if self.records.contains_key(&request.id) {
            self.records.insert(request.id, request);
        }
        Ok(())
    }
}
