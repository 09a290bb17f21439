use indexmap::IndexSet;

use crate::error::{MapreelError, MapreelResult};
use crate::rooms::room_id;
use crate::solution::Row;

/// Format one directed transition as a DOT edge statement.
///
/// The formatted line doubles as the edge's identity for deduplication, so
/// field order and spacing are fixed.
pub fn edge_line(from: &str, to: &str, action: &str) -> String {
    format!("{from} -> {to} [label=\"{action}\"];")
}

/// Resolve the label a step contributes to its edge.
///
/// A small literal lookup, not text matching: the sofa push gets the short
/// compass label, and `"Ja"` is an affirmation that inherits the preceding
/// row's original action text.
fn edge_action(prev: Option<&Row>, current: &Row) -> MapreelResult<String> {
    match current.action.as_str() {
        "Schiebe Sofa nach Osten" => Ok("Ost".to_string()),
        "Ja" => match prev {
            Some(prev) => Ok(prev.action.clone()),
            None => Err(MapreelError::validation(
                "affirmation 'Ja' on the first row has no action to inherit",
            )),
        },
        _ => Ok(current.action.clone()),
    }
}

/// Insertion-ordered, deduplicating accumulator for discovered transitions.
///
/// Identity is the fully formatted edge line, so two transitions between
/// the same rooms under different actions stay distinct. The set only ever
/// grows, and the frame counter is its length: every newly inserted edge
/// is exactly one video frame.
#[derive(Debug, Default)]
pub struct WalkAccumulator {
    edges: IndexSet<String>,
}

impl WalkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one walkthrough step together with its neighbors.
    ///
    /// Returns the 1-based frame number when the step discovered a new
    /// edge, `None` when it produced no edge (empty location on either
    /// end, no next row) or a duplicate of an already known edge.
    pub fn observe(
        &mut self,
        prev: Option<&Row>,
        current: &Row,
        next: Option<&Row>,
    ) -> MapreelResult<Option<u32>> {
        if current.location.is_empty() {
            return Ok(None);
        }
        let Some(next) = next else {
            return Ok(None);
        };
        if next.location.is_empty() {
            return Ok(None);
        }

        let action = edge_action(prev, current)?;
        let line = edge_line(
            &room_id(&current.location),
            &room_id(&next.location),
            &action,
        );

        if self.edges.insert(line) {
            Ok(Some(self.frame_count()))
        } else {
            Ok(None)
        }
    }

    /// Number of unique edges discovered so far, which is also the number
    /// of the most recent frame.
    pub fn frame_count(&self) -> u32 {
        self.edges.len() as u32
    }

    /// Edge statements in discovery order.
    pub fn edge_lines(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(location: &str, action: &str) -> Row {
        Row {
            location: location.to_string(),
            action: action.to_string(),
        }
    }

    #[test]
    fn formats_edges_with_normalized_endpoints() {
        let mut walk = WalkAccumulator::new();
        let a = row("Küche / Büro", "Gehe nach Osten");
        let b = row("Flur", "Warte");

        let frame = walk.observe(None, &a, Some(&b)).unwrap();
        assert_eq!(frame, Some(1));
        assert_eq!(
            walk.edge_lines().collect::<Vec<_>>(),
            vec![r#"kueche_buero -> flur [label="Gehe nach Osten"];"#]
        );
    }

    #[test]
    fn duplicate_transitions_do_not_advance_the_frame_counter() {
        let mut walk = WalkAccumulator::new();
        let a = row("Keller", "Gehe nach Norden");
        let b = row("Flur", "Gehe nach Süden");

        assert_eq!(walk.observe(None, &a, Some(&b)).unwrap(), Some(1));
        assert_eq!(walk.observe(Some(&a), &a, Some(&b)).unwrap(), None);
        assert_eq!(walk.frame_count(), 1);
    }

    #[test]
    fn same_rooms_different_action_is_a_distinct_edge() {
        let mut walk = WalkAccumulator::new();
        let a = row("Keller", "Gehe nach Norden");
        let a2 = row("Keller", "Renne nach Norden");
        let b = row("Flur", "Warte");

        assert_eq!(walk.observe(None, &a, Some(&b)).unwrap(), Some(1));
        assert_eq!(walk.observe(Some(&a), &a2, Some(&b)).unwrap(), Some(2));
    }

    #[test]
    fn affirmation_inherits_the_previous_action() {
        let mut walk = WalkAccumulator::new();
        let first = row("Room A", "Go North");
        let second = row("Room B", "Ja");
        let third = row("Room C", "Warte");

        walk.observe(None, &first, Some(&second)).unwrap();
        walk.observe(Some(&first), &second, Some(&third)).unwrap();

        let lines: Vec<_> = walk.edge_lines().collect();
        assert_eq!(lines[1], r#"room_b -> room_c [label="Go North"];"#);
    }

    #[test]
    fn affirmation_inherits_the_original_not_the_rewritten_label() {
        let mut walk = WalkAccumulator::new();
        let first = row("Wohnzimmer", "Schiebe Sofa nach Osten");
        let second = row("Flur", "Ja");
        let third = row("Keller", "Warte");

        walk.observe(None, &first, Some(&second)).unwrap();
        walk.observe(Some(&first), &second, Some(&third)).unwrap();

        let lines: Vec<_> = walk.edge_lines().collect();
        assert_eq!(lines[0], r#"wohnzimmer -> flur [label="Ost"];"#);
        assert_eq!(
            lines[1],
            r#"flur -> keller [label="Schiebe Sofa nach Osten"];"#
        );
    }

    #[test]
    fn affirmation_on_the_first_row_fails_fast() {
        let mut walk = WalkAccumulator::new();
        let first = row("Room A", "Ja");
        let second = row("Room B", "Warte");

        let err = walk.observe(None, &first, Some(&second)).unwrap_err();
        assert!(matches!(err, MapreelError::Validation(_)));
    }

    #[test]
    fn empty_locations_suppress_edge_generation() {
        let mut walk = WalkAccumulator::new();
        let blank = row("", "Schaue dich um");
        let a = row("Keller", "Gehe nach Norden");
        let b = row("Flur", "Warte");

        assert_eq!(walk.observe(None, &blank, Some(&a)).unwrap(), None);
        assert_eq!(walk.observe(Some(&blank), &a, Some(&blank)).unwrap(), None);
        assert_eq!(walk.observe(None, &a, None).unwrap(), None);
        assert_eq!(walk.observe(None, &a, Some(&b)).unwrap(), Some(1));
    }

    #[test]
    fn frame_numbers_are_sequential_without_gaps() {
        let mut walk = WalkAccumulator::new();
        let rooms = ["Keller", "Flur", "Küche", "Garten", "Keller"];
        let mut expected = 0;
        for pair in rooms.windows(2) {
            let current = row(pair[0], "Gehe weiter");
            let next = row(pair[1], "Gehe weiter");
            let frame = walk.observe(None, &current, Some(&next)).unwrap();
            expected += 1;
            assert_eq!(frame, Some(expected));
        }
        assert_eq!(walk.frame_count(), 4);
    }
}
