//! Note name to pitch conversion
//!
//! Note names are a lowercase letter, an optional `#`, and a single octave
//! digit (`c4`, `f#3`). Pitches are semitones relative to C in octave 2.
//! Flats are not understood.

/// Octave whose C maps to pitch 0
pub const REFERENCE_OCTAVE: i32 = 2;

/// Semitones per octave
pub const OCTAVE_SEMITONES: i32 = 12;

/// Semitone offset of a note letter within its octave
///
/// Unknown letters map to 0.
pub fn letter_semitone(letter: char) -> i32 {
    match letter {
        'c' => 0,
        'd' => 2,
        'e' => 4,
        'f' => 5,
        'g' => 7,
        'a' => 9,
        'b' => 11,
        _ => 0,
    }
}

/// Convert a note name into a pitch
///
/// Names shorter than two characters give 0. The last character is read as
/// the octave; anything other than a decimal digit counts as octave 0.
pub fn note_to_pitch(name: &str) -> i32 {
    let mut chars = name.chars();
    let (Some(letter), Some(second)) = (chars.next(), chars.next()) else {
        return 0;
    };

    let mut pitch = letter_semitone(letter);
    if second == '#' {
        pitch += 1;
    }

    let octave = name
        .chars()
        .next_back()
        .and_then(|c| c.to_digit(10))
        .map_or(0, |d| d as i32);

    pitch + OCTAVE_SEMITONES * (octave - REFERENCE_OCTAVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_octave() {
        assert_eq!(note_to_pitch("c2"), 0);
        assert_eq!(note_to_pitch("a2"), 9);
        assert_eq!(note_to_pitch("c3"), 12);
    }

    #[test]
    fn test_middle_octave() {
        assert_eq!(note_to_pitch("c4"), 24);
        assert_eq!(note_to_pitch("e4"), 28);
        assert_eq!(note_to_pitch("b1"), -1);
    }

    #[test]
    fn test_sharp() {
        assert_eq!(note_to_pitch("c#2"), 1);
        assert_eq!(note_to_pitch("f#3"), 18);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(note_to_pitch(""), 0);
        assert_eq!(note_to_pitch("c"), 0);
    }

    #[test]
    fn test_unknown_letter_and_octave() {
        assert_eq!(note_to_pitch("x2"), 0);
        // Non-digit octave counts as 0
        assert_eq!(note_to_pitch("cx"), -24);
        assert_eq!(note_to_pitch("C2"), 0);
    }
}
