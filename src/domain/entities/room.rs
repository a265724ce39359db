//! Room entity
//!
//! A room owns its two optional children outright. The shape never changes
//! once the mansion is built; the only mutable part is the clue state.

use crate::domain::value_objects::Direction;

/// Collection state of the clue hidden in a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueState {
    /// Nothing to find here
    Empty,
    /// Clue not found yet
    Pending(String),
    /// Clue already picked up; never handed out again
    Collected(String),
}

impl ClueState {
    pub fn text(&self) -> Option<&str> {
        match self {
            ClueState::Empty => None,
            ClueState::Pending(text) | ClueState::Collected(text) => Some(text),
        }
    }
}

#[derive(Debug)]
pub struct Room {
    name: String,
    clue: ClueState,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a leaf room. A missing or empty clue means the room hides nothing.
    pub fn new(name: impl Into<String>, clue: Option<&str>) -> Self {
        let clue = match clue {
            Some(text) if !text.is_empty() => ClueState::Pending(text.to_string()),
            _ => ClueState::Empty,
        };
        Self {
            name: name.into(),
            clue,
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue_state(&self) -> &ClueState {
        &self.clue
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.text()
    }

    pub fn is_collected(&self) -> bool {
        matches!(self.clue, ClueState::Collected(_))
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn child_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    /// Hang `room` off the given side, returning whatever was there before.
    ///
    /// Only the layout builder calls this; exploration never reshapes rooms.
    pub(crate) fn attach(&mut self, direction: Direction, room: Room) -> Option<Room> {
        let slot = match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        slot.replace(Box::new(room)).map(|previous| *previous)
    }

    /// Pick up the clue if it is still pending.
    ///
    /// Returns the clue text exactly once over the lifetime of the room.
    pub fn collect(&mut self) -> Option<&str> {
        match std::mem::replace(&mut self.clue, ClueState::Empty) {
            ClueState::Pending(text) => {
                self.clue = ClueState::Collected(text);
                self.clue.text()
            }
            other => {
                self.clue = other;
                None
            }
        }
    }

    /// Follow `path` from this room.
    pub fn descend(&self, path: &[Direction]) -> Option<&Room> {
        let mut room = self;
        for &direction in path {
            room = room.child(direction)?;
        }
        Some(room)
    }

    pub fn descend_mut(&mut self, path: &[Direction]) -> Option<&mut Room> {
        let mut room = self;
        for &direction in path {
            room = room.child_mut(direction)?;
        }
        Some(room)
    }

    /// Pre-order walk of this room and everything below it.
    pub fn walk(&self) -> RoomWalk<'_> {
        RoomWalk {
            stack: vec![WalkStep {
                room: self,
                depth: 0,
                side: None,
            }],
        }
    }

    pub fn room_count(&self) -> usize {
        self.walk().count()
    }

    /// Tear the subtree down, returning how many rooms were released.
    pub fn release(mut self) -> usize {
        let mut released = 1;
        let mut stack: Vec<Box<Room>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut room) = stack.pop() {
            stack.extend(room.left.take());
            stack.extend(room.right.take());
            released += 1;
        }
        released
    }
}

impl Drop for Room {
    // Unlinks children onto a heap stack so deep chains never recurse.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Room>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut room) = stack.pop() {
            stack.extend(room.left.take());
            stack.extend(room.right.take());
        }
    }
}

/// One room visited by [`RoomWalk`]
#[derive(Debug, Clone, Copy)]
pub struct WalkStep<'a> {
    pub room: &'a Room,
    pub depth: usize,
    /// Side of the parent this room hangs off; `None` for the starting room
    pub side: Option<Direction>,
}

/// Pre-order iterator over a room subtree (left before right)
pub struct RoomWalk<'a> {
    stack: Vec<WalkStep<'a>>,
}

impl<'a> Iterator for RoomWalk<'a> {
    type Item = WalkStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.stack.pop()?;
        for direction in [Direction::Right, Direction::Left] {
            if let Some(child) = step.room.child(direction) {
                self.stack.push(WalkStep {
                    room: child,
                    depth: step.depth + 1,
                    side: Some(direction),
                });
            }
        }
        Some(step)
    }
}
