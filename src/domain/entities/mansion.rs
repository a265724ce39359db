//! Mansion entity - a titled room tree with a single entrance

use super::Room;

#[derive(Debug)]
pub struct Mansion {
    title: String,
    entrance: Room,
}

impl Mansion {
    pub fn new(title: impl Into<String>, entrance: Room) -> Self {
        Self {
            title: title.into(),
            entrance,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entrance(&self) -> &Room {
        &self.entrance
    }

    pub fn entrance_mut(&mut self) -> &mut Room {
        &mut self.entrance
    }

    pub fn room_count(&self) -> usize {
        self.entrance.room_count()
    }

    /// Number of rooms that hide a clue
    pub fn clue_count(&self) -> usize {
        self.entrance
            .walk()
            .filter(|step| step.room.clue().is_some())
            .count()
    }

    /// Tear down every room, returning how many were released.
    pub fn release(self) -> usize {
        self.entrance.release()
    }
}
