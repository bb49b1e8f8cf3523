//! Letter to jaw aperture table
//!
//! Each letter has a nominal mouth opening in `[0, APERTURE_MAX]`, where 0 is
//! lips together and `APERTURE_MAX` is wide open. Anything outside the
//! alphabet is silent and keeps the jaw closed.

use crate::config::JawConfig;

/// Widest nominal aperture in the table
pub const APERTURE_MAX: u8 = 50;

/// Nominal aperture for `A` through `Z`
const LETTER_APERTURE: [u8; 26] = [
    50, // A
    5,  // B
    25, // C
    20, // D
    40, // E
    10, // F
    25, // G
    30, // H
    35, // I
    20, // J
    25, // K
    20, // L
    0,  // M
    15, // N
    45, // O
    5,  // P
    30, // Q
    20, // R
    10, // S
    15, // T
    30, // U
    10, // V
    25, // W
    20, // X
    30, // Y
    10, // Z
];

/// Nominal aperture for a character, or `None` if it is silent
///
/// Lowercase letters map like their uppercase form.
pub fn letter_aperture(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Some(LETTER_APERTURE[index])
    } else {
        None
    }
}

/// Check if a character ends a word or clause and gets a silent pause
pub fn is_pause(c: char) -> bool {
    matches!(c, ' ' | '.' | ',' | '!')
}

/// Jaw actuator angle for a character
///
/// Letters are remapped linearly from `[0, APERTURE_MAX]` onto
/// `[closed, open]`; silent characters give `closed`.
pub fn aperture_for(c: char, jaw: &JawConfig) -> i16 {
    match letter_aperture(c) {
        Some(nominal) => {
            let span = jaw.open as i32 - jaw.closed as i32;
            let angle = jaw.closed as i32 + span * nominal as i32 / APERTURE_MAX as i32;
            jaw.clamp(angle as i16)
        }
        None => jaw.closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_range() {
        for c in 'A'..='Z' {
            let v = letter_aperture(c).unwrap();
            assert!(v <= APERTURE_MAX);
        }
    }

    #[test]
    fn test_case_insensitive() {
        for (upper, lower) in ('A'..='Z').zip('a'..='z') {
            assert_eq!(letter_aperture(upper), letter_aperture(lower));
        }
    }

    #[test]
    fn test_silent_characters() {
        for c in [' ', '.', ',', '!', '?', '7', '\'', 'é'] {
            assert_eq!(letter_aperture(c), None);
        }
    }

    #[test]
    fn test_pause_set() {
        assert!(is_pause(' '));
        assert!(is_pause('.'));
        assert!(is_pause(','));
        assert!(is_pause('!'));
        assert!(!is_pause('?'));
        assert!(!is_pause('A'));
    }

    #[test]
    fn test_remap_endpoints() {
        let jaw = JawConfig::default();
        // M is lips together, A is the widest
        assert_eq!(aperture_for('M', &jaw), jaw.closed);
        assert_eq!(aperture_for('A', &jaw), jaw.open);
        // E (40/50) lands 80% of the way to open
        assert_eq!(aperture_for('E', &jaw), 88);
    }

    #[test]
    fn test_silent_maps_closed() {
        let jaw = JawConfig::default();
        assert_eq!(aperture_for(' ', &jaw), jaw.closed);
        assert_eq!(aperture_for('?', &jaw), jaw.closed);
    }

    proptest! {
        #[test]
        fn prop_aperture_total_and_bounded(c in any::<char>()) {
            let jaw = JawConfig::default();
            let angle = aperture_for(c, &jaw);
            prop_assert!(angle >= jaw.open && angle <= jaw.closed);
            if !c.is_ascii_alphabetic() {
                prop_assert_eq!(angle, jaw.closed);
            }
            // Deterministic
            prop_assert_eq!(angle, aperture_for(c, &jaw));
        }
    }
}
