//! Mansion map: the room tree with clue markers

use detective_quest::domain::entities::{Mansion, Room, SuspectLookup};
use detective_quest::Direction;

use crate::ui::primitives::border::{tree_indent, BorderChar};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

pub fn render_map(
    mansion: &Mansion,
    suspects: &SuspectLookup,
    reveal: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let label = |room: &Room| {
        let name = paint(room.name(), Tone::Plain, true, supports_color);
        match (room.clue(), reveal) {
            (Some(clue), true) => {
                let suspect = suspects.lookup(clue).unwrap_or("?");
                format!(
                    "{}: {} {}",
                    name,
                    paint(clue, Tone::Warning, false, supports_color),
                    paint(&format!("({suspect})"), Tone::Dim, false, supports_color)
                )
            }
            (Some(_), false) => format!(
                "{} {}",
                name,
                Icon::Clue.colored(supports_color, supports_unicode)
            ),
            (None, _) => format!(
                "{} {}",
                name,
                Icon::NoClue.colored(supports_color, supports_unicode)
            ),
        }
    };

    let root = mansion.entrance();
    let mut out = format!("{}\n", label(root));

    // (room, side, prefix, is_last)
    let mut stack: Vec<(&Room, Direction, String, bool)> = Vec::new();
    push_children(&mut stack, root, String::new());

    while let Some((room, side, prefix, is_last)) = stack.pop() {
        let branch = if is_last {
            BorderChar::LastBranch
        } else {
            BorderChar::Branch
        };
        let side = match side {
            Direction::Left => "L",
            Direction::Right => "R",
        };
        out.push_str(&format!(
            "{}{}{}: {}\n",
            prefix,
            branch.render(supports_unicode),
            side,
            label(room)
        ));

        let child_prefix = format!("{}{}", prefix, tree_indent(!is_last, supports_unicode));
        push_children(&mut stack, room, child_prefix);
    }

    out
}

fn push_children<'a>(
    stack: &mut Vec<(&'a Room, Direction, String, bool)>,
    room: &'a Room,
    prefix: String,
) {
    let children: Vec<(Direction, &Room)> = [Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(|side| room.child(side).map(|child| (side, child)))
        .collect();
    let count = children.len();
    // Reverse so the left child is rendered first.
    for (index, (side, child)) in children.into_iter().enumerate().rev() {
        stack.push((child, side, prefix.clone(), index + 1 == count));
    }
}

pub fn render_legend(reveal: bool, supports_color: bool, supports_unicode: bool) -> String {
    if reveal {
        return String::new();
    }
    format!(
        "\n{} clue hidden here   {} nothing to find\n",
        Icon::Clue.colored(supports_color, supports_unicode),
        Icon::NoClue.colored(supports_color, supports_unicode)
    )
}
