//! Mansion builder
//!
//! Turns a flat description of a mansion (one entrance plus
//! `(parent, side, room)` edges, in any order) into an owned room tree.
//! Rooms themselves know nothing about how a layout is authored.
//!
//! # Validation
//! `build` rejects layouts that cannot form a single binary tree:
//! no entrance or several, repeated room names, edges to unknown parents,
//! two rooms on the same side of a parent, and rooms cut off from the
//! entrance.

use std::collections::HashMap;

use crate::domain::entities::{Mansion, Room};
use crate::domain::value_objects::Direction;
use crate::error::{DetectiveError, DetectiveResult};

#[derive(Debug, Clone)]
struct RoomSpec {
    name: String,
    clue: Option<String>,
}

#[derive(Debug, Clone)]
struct Edge {
    parent: String,
    side: Direction,
    room: RoomSpec,
}

#[derive(Debug, Clone, Default)]
pub struct MansionBuilder {
    title: String,
    entrances: Vec<RoomSpec>,
    edges: Vec<Edge>,
}

impl MansionBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Declare the room the player starts in.
    pub fn entrance(&mut self, name: impl Into<String>, clue: Option<&str>) -> &mut Self {
        self.entrances.push(RoomSpec {
            name: name.into(),
            clue: clue.map(str::to_string),
        });
        self
    }

    /// Declare a room reached from `parent` through its `side` passage.
    pub fn room(
        &mut self,
        parent: impl Into<String>,
        side: Direction,
        name: impl Into<String>,
        clue: Option<&str>,
    ) -> &mut Self {
        self.edges.push(Edge {
            parent: parent.into(),
            side,
            room: RoomSpec {
                name: name.into(),
                clue: clue.map(str::to_string),
            },
        });
        self
    }

    pub fn build(&self) -> DetectiveResult<Mansion> {
        let entrance = match self.entrances.as_slice() {
            [] => return Err(DetectiveError::MissingEntrance),
            [only] => only,
            [first, second, ..] => {
                return Err(DetectiveError::MultipleEntrances {
                    first: first.name.clone(),
                    second: second.name.clone(),
                })
            }
        };

        let mut specs: HashMap<&str, &RoomSpec> = HashMap::new();
        specs.insert(&entrance.name, entrance);
        for edge in &self.edges {
            if specs.insert(&edge.room.name, &edge.room).is_some() {
                return Err(DetectiveError::DuplicateRoom {
                    name: edge.room.name.clone(),
                });
            }
        }

        let mut children: HashMap<(&str, Direction), &str> = HashMap::new();
        for edge in &self.edges {
            if !specs.contains_key(edge.parent.as_str()) {
                return Err(DetectiveError::UnknownParent {
                    room: edge.room.name.clone(),
                    parent: edge.parent.clone(),
                });
            }
            let key = (edge.parent.as_str(), edge.side);
            if let Some(first) = children.insert(key, &edge.room.name) {
                return Err(DetectiveError::SlotTaken {
                    parent: edge.parent.clone(),
                    side: edge.side.to_string(),
                    first: first.to_string(),
                    second: edge.room.name.clone(),
                });
            }
        }

        // Pre-order from the entrance; anything not reached is cut off.
        let mut order: Vec<&str> = Vec::with_capacity(specs.len());
        let mut stack = vec![entrance.name.as_str()];
        while let Some(name) = stack.pop() {
            order.push(name);
            for side in [Direction::Right, Direction::Left] {
                if let Some(child) = children.get(&(name, side)) {
                    stack.push(*child);
                }
            }
        }
        if order.len() < specs.len() {
            let reached: std::collections::HashSet<&str> = order.iter().copied().collect();
            if let Some(edge) = self
                .edges
                .iter()
                .find(|edge| !reached.contains(edge.room.name.as_str()))
            {
                return Err(DetectiveError::UnreachableRoom {
                    room: edge.room.name.clone(),
                });
            }
        }

        // Reverse pre-order visits every child before its parent.
        let mut built: HashMap<&str, Room> = HashMap::with_capacity(order.len());
        for &name in order.iter().rev() {
            let spec = specs[name];
            let mut room = Room::new(spec.name.clone(), spec.clue.as_deref());
            for side in [Direction::Left, Direction::Right] {
                if let Some(child) = children
                    .get(&(name, side))
                    .and_then(|child| built.remove(child))
                {
                    room.attach(side, child);
                }
            }
            built.insert(name, room);
        }

        let root = built
            .remove(entrance.name.as_str())
            .ok_or(DetectiveError::MissingEntrance)?;
        Ok(Mansion::new(self.title.clone(), root))
    }
}
