//! The PaX flag alphabet and its codec.
//!
//! Five independent toggles, each persisted as one character:
//!
//! | char | flag        | meaning                                   |
//! |------|-------------|-------------------------------------------|
//! | `p`  | `PageExec`  | non-executable pages                      |
//! | `e`  | `Emutramp`  | emulate trampolines                       |
//! | `m`  | `Mprotect`  | restrict `mprotect`                       |
//! | `r`  | `Randmmap`  | randomize `mmap` base                     |
//! | `s`  | `Segvguard` | throttle respawning of crashing binaries  |
//!
//! Validation is case-insensitive. The stored value keeps the bytes exactly as
//! they were given, so decoding for display is case-insensitive as well;
//! otherwise an uppercase marking would render as `-`.

use std::fmt;
use thiserror::Error;

/// The alphabet in canonical output order.
pub const PAX_FLAGS: &str = "pemrs";

/// Number of flags, and the width of every display report.
pub const PAX_LEN: usize = PAX_FLAGS.len();

/// Placeholder rendered for a flag that is not set.
pub const UNSET: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    PageExec,
    Emutramp,
    Mprotect,
    Randmmap,
    Segvguard,
}

impl Flag {
    /// All flags in canonical order.
    pub const ALL: [Flag; PAX_LEN] = [
        Flag::PageExec,
        Flag::Emutramp,
        Flag::Mprotect,
        Flag::Randmmap,
        Flag::Segvguard,
    ];

    pub fn as_char(self) -> char {
        match self {
            Flag::PageExec => 'p',
            Flag::Emutramp => 'e',
            Flag::Mprotect => 'm',
            Flag::Randmmap => 'r',
            Flag::Segvguard => 's',
        }
    }

    /// Looks up a flag by its character, ignoring ASCII case.
    pub fn from_byte(b: u8) -> Option<Flag> {
        match b.to_ascii_lowercase() {
            b'p' => Some(Flag::PageExec),
            b'e' => Some(Flag::Emutramp),
            b'm' => Some(Flag::Mprotect),
            b'r' => Some(Flag::Randmmap),
            b's' => Some(Flag::Segvguard),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A token contained a character outside the alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid pax flags: {token}")]
pub struct FlagError {
    /// The whole rejected token, lossily decoded for reporting.
    pub token: String,
    /// The first offending character.
    pub flag: char,
}

/// Checks that every byte of `candidate` names a flag.
///
/// The set is rejected as a whole on the first foreign character; nothing is
/// filtered out. An empty candidate is valid.
///
/// ```
/// use paxd::flags::validate;
///
/// assert!(validate(b"pemrs").is_ok());
/// assert!(validate(b"PeM").is_ok());
/// assert!(validate(b"").is_ok());
/// assert_eq!(validate(b"pex").unwrap_err().flag, 'x');
/// ```
pub fn validate(candidate: &[u8]) -> Result<(), FlagError> {
    FlagSet::parse(candidate).map(|_| ())
}

/// Renders a stored value as a fixed-width report, one column per flag.
///
/// Characters outside the alphabet are ignored and only the first [`PAX_LEN`]
/// bytes are considered, matching the bounded read buffer of the store.
///
/// ```
/// use paxd::flags::decode_for_display;
///
/// assert_eq!(decode_for_display(b"pe"), "pe---");
/// assert_eq!(decode_for_display(b"sRp"), "p--rs");
/// assert_eq!(decode_for_display(b""), "-----");
/// ```
pub fn decode_for_display(stored: &[u8]) -> String {
    let bounded = &stored[..stored.len().min(PAX_LEN)];
    FlagSet::from_stored(bounded).to_string()
}

/// A subset of the alphabet, held as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet(u8);

impl FlagSet {
    pub const EMPTY: FlagSet = FlagSet(0);

    /// Strictly parses a flag token.
    pub fn parse(token: &[u8]) -> Result<Self, FlagError> {
        let mut set = FlagSet::EMPTY;
        for &b in token {
            match Flag::from_byte(b) {
                Some(flag) => set.insert(flag),
                None => {
                    return Err(FlagError {
                        token: String::from_utf8_lossy(token).into_owned(),
                        flag: char::from(b),
                    })
                }
            }
        }
        Ok(set)
    }

    /// Leniently reads a persisted value, skipping unknown bytes.
    pub fn from_stored(stored: &[u8]) -> Self {
        stored
            .iter()
            .filter_map(|&b| Flag::from_byte(b))
            .fold(FlagSet::EMPTY, |mut set, flag| {
                set.insert(flag);
                set
            })
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

/// Fixed-width report: the flag character where set, [`UNSET`] otherwise.
impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL {
            let c = if self.contains(flag) {
                flag.as_char()
            } else {
                UNSET
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
