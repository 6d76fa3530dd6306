//! Password topologies and the banned topology list.
//!
//! A topology is the character-class shape of a password, e.g. `Summer2024!`
//! has the topology `ullllldddds`. Some shapes are picked so often that they
//! are cheap to crack even though they pass the complexity and length rules.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::classes::CharClass;

/// Environment variable naming a custom banned topology file.
pub const TOPOLOGY_PATH_ENV: &str = "HARDPASS_TOPOLOGY_PATH";

/// Shapes frequently seen in cracked password corpora.
const BUILTIN_TOPOLOGIES: &[&str] = &[
    "u l l l l l d d d d",
    "u l l l l l l d d d",
    "u l l l l l l l d d",
    "u l l l l l l l l d",
    "u l l l l l d d d s",
    "u l l l l l l d d s",
    "u l l l l l l l d s",
    "u l l l l l d d d d s",
    "u l l l l l l d d d d",
    "u l l l l l l l d d s",
    "u l l l l l l l l d d",
    "u l l l l l l d d d d s",
    "u l l l l l l l d d d d",
    "u l l l l l l l l d d s",
];

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("Topology file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read topology file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Topology file contains no topologies")]
    EmptyFile,
    #[error("Invalid topology tag '{tag}' on line {line}")]
    InvalidTag { line: usize, tag: char },
}

/// A character that is not one of the tags `u`, `l`, `d`, `s`, `a`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid topology tag '{0}'")]
pub struct InvalidTag(pub char);

/// Class tag of a single topology position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Upper,
    Lower,
    Digit,
    Special,
    Any,
}

impl Tag {
    pub fn from_char(c: char) -> Option<Tag> {
        match c {
            'u' => Some(Tag::Upper),
            'l' => Some(Tag::Lower),
            'd' => Some(Tag::Digit),
            's' => Some(Tag::Special),
            'a' => Some(Tag::Any),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Tag::Upper => 'u',
            Tag::Lower => 'l',
            Tag::Digit => 'd',
            Tag::Special => 's',
            Tag::Any => 'a',
        }
    }

    /// `self` is the banned side; `Any` accepts every password tag.
    fn accepts(self, other: Tag) -> bool {
        self == Tag::Any || self == other
    }
}

impl From<Option<CharClass>> for Tag {
    fn from(class: Option<CharClass>) -> Self {
        match class {
            Some(CharClass::Upper) => Tag::Upper,
            Some(CharClass::Lower) => Tag::Lower,
            Some(CharClass::Digit) => Tag::Digit,
            Some(CharClass::Special) => Tag::Special,
            None => Tag::Any,
        }
    }
}

/// Ordered sequence of class tags, one per password character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topology(Vec<Tag>);

impl Topology {
    /// Computes the topology of a password.
    ///
    /// Characters outside the four classes are tagged `a`.
    pub fn of(password: &str) -> Self {
        Topology(password.chars().map(|c| Tag::from(CharClass::of(c))).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.0
    }

    /// Returns true if `candidate` has this shape.
    ///
    /// Only topologies of equal length are compared.
    pub fn matches(&self, candidate: &Topology) -> bool {
        self.len() == candidate.len()
            && self
                .0
                .iter()
                .zip(candidate.0.iter())
                .all(|(banned, tag)| banned.accepts(*tag))
    }
}

impl FromStr for Topology {
    type Err = InvalidTag;

    /// Parses tags like `"u l l d s"` or `"ullds"`; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Tag::from_char(c).ok_or(InvalidTag(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Topology)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|tag| write!(f, "{}", tag.as_char()))
    }
}

/// Denylist of password shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedTopologies {
    topologies: Vec<Topology>,
}

impl BannedTopologies {
    pub fn new(topologies: Vec<Topology>) -> Self {
        Self { topologies }
    }

    /// The curated built-in list.
    pub fn builtin() -> Self {
        let topologies = BUILTIN_TOPOLOGIES
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        Self { topologies }
    }

    /// Loads the list named by `HARDPASS_TOPOLOGY_PATH`, or the built-in
    /// list when the variable is not set. The path need not be UTF-8.
    pub fn from_env() -> Result<Self, TopologyError> {
        match std::env::var_os(TOPOLOGY_PATH_ENV) {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Loads one topology per line. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no topology
    /// - A line contains something other than `u`, `l`, `d`, `s`, `a`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TopologyError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Topology list loading FAILED: FileNotFound {:?}", path);
            return Err(TopologyError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::parse_list(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Topology list loaded: {} topologies from {:?}", list.len(), path);

        Ok(list)
    }

    fn parse_list(content: &str) -> Result<Self, TopologyError> {
        let mut topologies = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let topology = line
                .parse::<Topology>()
                .map_err(|InvalidTag(tag)| TopologyError::InvalidTag { line: idx + 1, tag })?;
            topologies.push(topology);
        }

        if topologies.is_empty() {
            return Err(TopologyError::EmptyFile);
        }
        Ok(Self { topologies })
    }

    pub fn len(&self) -> usize {
        self.topologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topologies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topology> {
        self.topologies.iter()
    }

    /// Returns true if the password's shape is on the list.
    pub fn is_banned(&self, password: &str) -> bool {
        let topology = Topology::of(password);
        self.topologies.iter().any(|banned| banned.matches(&topology))
    }
}

impl Default for BannedTopologies {
    fn default() -> Self {
        Self::builtin()
    }
}
