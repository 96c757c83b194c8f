//! Arena storage for line records
//!
//! Records are addressed by [`LineId`] handles carrying a generation, so a
//! handle to a record that was spliced out never aliases the record that
//! later reuses its slot.

use super::line::LineRecord;
use crate::base::LineId;

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    record: Option<LineRecord>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LineArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl LineArena {
    pub(crate) fn alloc(&mut self, record: LineRecord) -> LineId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.record = Some(record);
            return LineId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            record: Some(record),
        });
        LineId::new(index, 0)
    }

    pub(crate) fn get(&self, id: LineId) -> Option<&LineRecord> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.record.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: LineId) -> Option<&mut LineRecord> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.record.as_mut()
    }

    pub(crate) fn remove(&mut self, id: LineId) -> Option<LineRecord> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        let record = slot.record.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.len -= 1;
        Some(record)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Handles of the live records, in slot order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.record.is_some())
            .map(|(index, slot)| LineId::new(index as u32, slot.generation))
    }

    /// Drop every record. Slots are retired rather than discarded so
    /// handles from before the clear stay stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.record.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.len = 0;
    }
}
