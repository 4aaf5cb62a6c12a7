// File: crates/pricing-core/src/venue.rs
// Summary: Itemized venue cost breakdown (rooms, meals, coffee breaks, meeting room) for group comparisons.
// Notes:
// - Rooms are filled greedily: shared rooms first (cheapest per-person shared rate first),
//   then single rooms for whoever is left (cheapest single rate first).

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Nightly rate for one room.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomRate {
    /// Room price when two people share it.
    pub shared: f64,
    /// Room price with a single occupant.
    pub single: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomRates {
    pub standard: RoomRate,
    pub superior: RoomRate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInventory {
    pub standard: u32,
    pub superior: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Lookup key, e.g. `el-hierro`.
    pub key: String,
    pub name: String,
    pub inventory: RoomInventory,
    pub rates: RoomRates,
    /// Per person, per coffee break.
    pub coffee_break_cost: f64,
    /// Flat rental for the whole stay.
    pub meeting_room_cost: f64,
}

impl VenueConfig {
    pub fn max_capacity(&self) -> u32 {
        (self.inventory.standard + self.inventory.superior) * 2
    }

    pub fn presets() -> Vec<VenueConfig> {
        vec![
            VenueConfig {
                key: "el-hierro".into(),
                name: "Parador de El Hierro".into(),
                inventory: RoomInventory { standard: 20, superior: 20 },
                rates: RoomRates {
                    standard: RoomRate { shared: 158.0, single: 136.0 },
                    superior: RoomRate { shared: 181.0, single: 159.0 },
                },
                coffee_break_cost: 7.0,
                meeting_room_cost: 200.0,
            },
            VenueConfig {
                key: "la-palma".into(),
                name: "Parador de La Palma".into(),
                inventory: RoomInventory { standard: 21, superior: 24 },
                rates: RoomRates {
                    standard: RoomRate { shared: 164.0, single: 144.0 },
                    superior: RoomRate { shared: 186.0, single: 166.0 },
                },
                coffee_break_cost: 8.0,
                meeting_room_cost: 800.0,
            },
        ]
    }

    /// Find a venue by key (case-insensitive) in `venues`.
    pub fn find<'a>(venues: &'a [VenueConfig], key: &str) -> Result<&'a VenueConfig> {
        venues
            .iter()
            .find(|v| v.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| PricingError::UnknownVenue(key.to_string()))
    }

    /// Assign `people` to rooms.
    pub fn allocate(&self, people: u32) -> Result<RoomAllocation> {
        let capacity = self.max_capacity();
        let exceeded = || PricingError::CapacityExceeded { venue: self.name.clone(), requested: people, capacity };
        if people > capacity {
            return Err(exceeded());
        }

        let mut alloc = RoomAllocation::default();
        let mut remaining = people;

        for kind in self.cheapest_first(|r| r.shared / 2.0) {
            if remaining == 0 { break; }
            let available = self.stock(kind) - alloc.used(kind);
            let rooms = available.min(remaining / 2);
            *alloc.shared_mut(kind) += rooms;
            remaining -= rooms * 2;
        }

        for kind in self.cheapest_first(|r| r.single) {
            if remaining == 0 { break; }
            let available = self.stock(kind) - alloc.used(kind);
            let rooms = available.min(remaining);
            *alloc.single_mut(kind) += rooms;
            remaining -= rooms;
        }

        if remaining > 0 {
            return Err(exceeded());
        }
        Ok(alloc)
    }

    /// Full itemized breakdown for `people` staying under `plan`.
    pub fn breakdown(&self, people: u32, plan: &StayPlan) -> Result<CostBreakdown> {
        if people == 0 {
            return Err(PricingError::EmptyGroup { venue: self.name.clone() });
        }
        let allocation = self.allocate(people)?;
        let n = people as f64;
        let accommodation_total = allocation.nightly_cost(&self.rates) * plan.nights as f64;
        let accommodation = accommodation_total / n;
        let meals = plan.meals_per_person() as f64 * plan.meal_cost;
        let coffee = plan.coffee_breaks_per_person() as f64 * self.coffee_break_cost;
        let meeting_room = self.meeting_room_cost / n;
        let per_person = accommodation + meals + coffee + meeting_room;
        Ok(CostBreakdown {
            group_size: people,
            allocation,
            accommodation,
            meals,
            coffee,
            meeting_room,
            per_person,
            total: per_person * n,
        })
    }

    fn stock(&self, kind: RoomKind) -> u32 {
        match kind {
            RoomKind::Standard => self.inventory.standard,
            RoomKind::Superior => self.inventory.superior,
        }
    }

    fn rate(&self, kind: RoomKind) -> &RoomRate {
        match kind {
            RoomKind::Standard => &self.rates.standard,
            RoomKind::Superior => &self.rates.superior,
        }
    }

    fn cheapest_first(&self, per_person: impl Fn(&RoomRate) -> f64) -> [RoomKind; 2] {
        let std = per_person(self.rate(RoomKind::Standard));
        let sup = per_person(self.rate(RoomKind::Superior));
        // ties keep standard first
        if sup < std {
            [RoomKind::Superior, RoomKind::Standard]
        } else {
            [RoomKind::Standard, RoomKind::Superior]
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoomKind {
    Standard,
    Superior,
}

/// Rooms booked per category and occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RoomAllocation {
    pub standard_shared: u32,
    pub standard_single: u32,
    pub superior_shared: u32,
    pub superior_single: u32,
}

impl RoomAllocation {
    pub fn rooms_used(&self) -> u32 {
        self.standard_shared + self.standard_single + self.superior_shared + self.superior_single
    }

    pub fn people(&self) -> u32 {
        (self.standard_shared + self.superior_shared) * 2 + self.standard_single + self.superior_single
    }

    /// Room cost for one night.
    pub fn nightly_cost(&self, rates: &RoomRates) -> f64 {
        self.standard_shared as f64 * rates.standard.shared
            + self.standard_single as f64 * rates.standard.single
            + self.superior_shared as f64 * rates.superior.shared
            + self.superior_single as f64 * rates.superior.single
    }

    fn used(&self, kind: RoomKind) -> u32 {
        match kind {
            RoomKind::Standard => self.standard_shared + self.standard_single,
            RoomKind::Superior => self.superior_shared + self.superior_single,
        }
    }

    fn shared_mut(&mut self, kind: RoomKind) -> &mut u32 {
        match kind {
            RoomKind::Standard => &mut self.standard_shared,
            RoomKind::Superior => &mut self.superior_shared,
        }
    }

    fn single_mut(&mut self, kind: RoomKind) -> &mut u32 {
        match kind {
            RoomKind::Standard => &mut self.standard_single,
            RoomKind::Superior => &mut self.superior_single,
        }
    }
}

/// Length and catering of the stay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StayPlan {
    pub nights: u32,
    /// Per person, per meal.
    pub meal_cost: f64,
    pub meeting_room_days: u32,
}

impl Default for StayPlan {
    fn default() -> Self {
        Self { nights: 5, meal_cost: 38.0, meeting_room_days: 4 }
    }
}

impl StayPlan {
    /// Dinner on arrival, three meals on each full day, breakfast on departure.
    pub fn meals_per_person(&self) -> u32 {
        2 + 3 * self.full_days()
    }

    /// Two breaks on each full day.
    pub fn coffee_breaks_per_person(&self) -> u32 {
        2 * self.full_days()
    }

    fn full_days(&self) -> u32 {
        self.nights.saturating_sub(2)
    }
}

/// Per-person amounts plus the group total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub group_size: u32,
    pub allocation: RoomAllocation,
    pub accommodation: f64,
    pub meals: f64,
    pub coffee: f64,
    pub meeting_room: f64,
    pub per_person: f64,
    pub total: f64,
}
