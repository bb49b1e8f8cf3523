//! Simple TOML parser for animatron configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the `animatron.toml` shipped with the firmware. It does NOT support the
//! full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (integer, float, boolean)
//! - Digit separators in numbers (`1_000`)
//! - [section] headers
//! - [section.name] headers (per-axis sections)
//! - Comments (# ...), including trailing comments
//!
//! Every key not listed in [`apply_value`] is rejected so that typos in the
//! config file surface at boot instead of silently using defaults.

use heapless::String;

use super::types::{AnimatronConfig, AxisLimits};
use crate::motion::Axis;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection {
        /// 1-based line number
        line: u16,
    },
    /// Key is not valid in the current section
    UnknownKey {
        /// 1-based line number
        line: u16,
    },
    /// Value could not be parsed for its key
    InvalidValue {
        /// 1-based line number
        line: u16,
    },
    /// Line is neither a header nor `key = value`
    Malformed {
        /// 1-based line number
        line: u16,
    },
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Features,
    Axis(Axis),
    Head,
    Jitter,
    Breathing,
    Jaw,
    Speech,
}

/// Value-level failure, tagged with a line number by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueError {
    UnknownKey,
    InvalidValue,
}

/// Parse TOML configuration into an [`AnimatronConfig`]
///
/// Keys that are absent keep their default value, except an axis
/// `neutral`, which follows the midpoint of that axis's bounds unless set.
/// The result is not validated; call [`AnimatronConfig::validate`] before
/// use.
pub fn parse_config(input: &str) -> Result<AnimatronConfig, ParseError> {
    let mut config = AnimatronConfig::default();
    let mut section = Section::Root;
    let mut neutral_set = [false; 3];

    for (index, raw) in input.lines().enumerate() {
        let line_no = (index + 1).min(u16::MAX as usize) as u16;
        let line = strip_comment(raw).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ParseError::InvalidSection { line: line_no })?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::Malformed { line: line_no })?;

        if let Section::Axis(axis) = section {
            if key == "neutral" {
                neutral_set[axis.index()] = true;
            }
        }

        apply_value(section, key, value, &mut config).map_err(|e| match e {
            ValueError::UnknownKey => ParseError::UnknownKey { line: line_no },
            ValueError::InvalidValue => ParseError::InvalidValue { line: line_no },
        })?;
    }

    for axis in Axis::ALL {
        if !neutral_set[axis.index()] {
            let limits = &mut config.head.axis_mut(axis).limits;
            limits.neutral = AxisLimits::new(limits.min, limits.max).neutral;
        }
    }

    Ok(config)
}

/// Parse section header like "jaw" or "axis.vertical"
fn parse_section_header(header: &str) -> Option<Section> {
    let header = header.trim();

    if let Some((kind, name)) = header.split_once('.') {
        if kind.trim() != "axis" {
            return None;
        }
        return Axis::from_name(name.trim()).map(Section::Axis);
    }

    match header {
        "features" => Some(Section::Features),
        "head" => Some(Section::Head),
        "jitter" => Some(Section::Jitter),
        "breathing" => Some(Section::Breathing),
        "jaw" => Some(Section::Jaw),
        "speech" => Some(Section::Speech),
        _ => None,
    }
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Drop digit separators; each `_` must sit between two digits
fn strip_separators(value: &str) -> Result<String<32>, ValueError> {
    let mut out = String::new();
    for (i, c) in value.char_indices() {
        if c == '_' {
            let prev = value[..i].chars().next_back();
            let next = value[i + 1..].chars().next();
            let between_digits = prev.is_some_and(|p| p.is_ascii_digit())
                && next.is_some_and(|n| n.is_ascii_digit());
            if !between_digits {
                return Err(ValueError::InvalidValue);
            }
            continue;
        }
        out.push(c).map_err(|_| ValueError::InvalidValue)?;
    }
    Ok(out)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ValueError> {
    strip_separators(value)?
        .parse()
        .map_err(|_| ValueError::InvalidValue)
}

/// Parse a float value (integers are accepted)
fn parse_float(value: &str) -> Result<f32, ValueError> {
    let v: f32 = strip_separators(value)?
        .parse()
        .map_err(|_| ValueError::InvalidValue)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ValueError::InvalidValue)
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ValueError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValueError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut AnimatronConfig,
) -> Result<(), ValueError> {
    match section {
        Section::Root => return Err(ValueError::UnknownKey),
        Section::Features => {
            let f = &mut config.features;
            match key {
                "jaw" => f.jaw = parse_bool(value)?,
                "head" => f.head = parse_bool(value)?,
                "idle_jitter" => f.idle_jitter = parse_bool(value)?,
                "breathing" => f.breathing = parse_bool(value)?,
                "phrases" => f.phrases = parse_bool(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
        Section::Axis(axis) => {
            let a = config.head.axis_mut(axis);
            match key {
                "min" => a.limits.min = parse_int(value)?,
                "max" => a.limits.max = parse_int(value)?,
                "neutral" => a.limits.neutral = parse_int(value)?,
                "speed" => a.speed_deg_s = parse_float(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
        Section::Head => {
            let h = &mut config.head;
            match key {
                "move_interval_ms" => h.move_interval_ms = parse_int(value)?,
                "interpolate_interval_ms" => h.interpolate_interval_ms = parse_int(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
        Section::Jitter => {
            let j = &mut config.jitter;
            match key {
                "interval_ms" => j.interval_ms = parse_int(value)?,
                "max_delta_tenths" => j.max_delta_tenths = parse_int(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
        Section::Breathing => {
            let b = &mut config.breathing;
            match key {
                "update_interval_ms" => b.update_interval_ms = parse_int(value)?,
                "period_ms" => b.period_ms = parse_int(value)?,
                "amplitude" => b.amplitude_deg = parse_float(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
        Section::Jaw => {
            let j = &mut config.jaw;
            match key {
                "closed" => j.closed = parse_int(value)?,
                "open" => j.open = parse_int(value)?,
                "step" => j.step = parse_int(value)?,
                "smooth_interval_ms" => j.smooth_interval_ms = parse_int(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
        Section::Speech => {
            let s = &mut config.speech;
            match key {
                "letter_ms" => s.letter_ms = parse_int(value)?,
                "pause_ms" => s.pause_ms = parse_int(value)?,
                "phrase_interval_ms" => s.phrase_interval_ms = parse_int(value)?,
                _ => return Err(ValueError::UnknownKey),
            }
        }
    }

    Ok(())
}
