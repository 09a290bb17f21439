/// Canonical graph identifier for a room label.
///
/// Lowercases the label, joins `" / "` and plain-space separated segments
/// with underscores, and transliterates the German special characters so
/// the id is safe in both DOT and shell contexts. Collisions are
/// intentional: labels that normalize alike are the same room.
pub fn room_id(label: &str) -> String {
    label
        .to_lowercase()
        .replace(" / ", "_")
        .replace(' ', "_")
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
        .replace('ß', "ss")
}
