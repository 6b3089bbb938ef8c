//! Build Tags Value Object
//!
//! Build tags gate compilation of the generated module. Every tag string is a
//! group; groups are ANDed and the whitespace separated alternatives inside a
//! group are ORed. Alternatives are translated to `cfg` predicates:
//!
//! - operating system names map to `target_os` (`darwin` becomes `macos`)
//! - architecture names map to `target_arch` (`386` becomes `x86`)
//! - `key=value` becomes `key = "value"`
//! - `!tag` negates
//! - any other identifier is a bare cfg flag such as `unix` or `test`

use std::fmt;

use crate::error::{GenesisError, GenesisResult};

const OS_NAMES: &[(&str, &str)] = &[
    ("aix", "aix"),
    ("android", "android"),
    ("darwin", "macos"),
    ("dragonfly", "dragonfly"),
    ("freebsd", "freebsd"),
    ("illumos", "illumos"),
    ("ios", "ios"),
    ("linux", "linux"),
    ("macos", "macos"),
    ("netbsd", "netbsd"),
    ("openbsd", "openbsd"),
    ("solaris", "solaris"),
    ("wasip1", "wasi"),
    ("windows", "windows"),
];

const ARCH_NAMES: &[(&str, &str)] = &[
    ("386", "x86"),
    ("amd64", "x86_64"),
    ("arm", "arm"),
    ("arm64", "aarch64"),
    ("loong64", "loongarch64"),
    ("mips", "mips"),
    ("mips64", "mips64"),
    ("ppc64", "powerpc64"),
    ("ppc64le", "powerpc64"),
    ("riscv64", "riscv64"),
    ("s390x", "s390x"),
    ("wasm", "wasm32"),
];

/// A single `cfg` predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CfgPredicate {
    /// Bare flag: `unix`
    Flag(String),
    /// Key/value pair: `target_os = "linux"`
    KeyValue(String, String),
    /// Negation: `not(...)`
    Not(Box<CfgPredicate>),
}

impl CfgPredicate {
    /// Parse one build tag alternative
    pub fn parse(tag: &str) -> GenesisResult<Self> {
        if let Some(inner) = tag.strip_prefix('!') {
            return Ok(Self::Not(Box::new(Self::parse(inner)?)));
        }

        if let Some((key, value)) = tag.split_once('=') {
            let (key, value) = (key.trim(), value.trim().trim_matches('"'));
            if !is_identifier(key) || value.is_empty() {
                return Err(invalid(tag));
            }
            return Ok(Self::KeyValue(key.to_string(), value.to_string()));
        }

        if let Some(os) = lookup(OS_NAMES, tag) {
            return Ok(Self::KeyValue("target_os".to_string(), os.to_string()));
        }
        if let Some(arch) = lookup(ARCH_NAMES, tag) {
            return Ok(Self::KeyValue("target_arch".to_string(), arch.to_string()));
        }
        if is_identifier(tag) {
            return Ok(Self::Flag(tag.to_string()));
        }
        Err(invalid(tag))
    }
}

impl fmt::Display for CfgPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(name) => f.write_str(name),
            Self::KeyValue(key, value) => write!(f, "{} = {:?}", key, value),
            Self::Not(inner) => write!(f, "not({})", inner),
        }
    }
}

/// Ordered build tag groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildTags {
    groups: Vec<Vec<CfgPredicate>>,
}

impl BuildTags {
    /// Parse tag groups. Blank groups are skipped.
    pub fn parse<S: AsRef<str>>(tags: &[S]) -> GenesisResult<Self> {
        let mut groups = Vec::new();
        for tag in tags {
            let group = tag
                .as_ref()
                .split_whitespace()
                .map(CfgPredicate::parse)
                .collect::<GenesisResult<Vec<_>>>()?;
            if !group.is_empty() {
                groups.push(group);
            }
        }
        Ok(Self { groups })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The combined predicate, or `None` when there are no tags
    pub fn predicate(&self) -> Option<String> {
        let groups: Vec<String> = self.groups.iter().map(|g| combine("any", g)).collect();
        match groups.len() {
            0 => None,
            1 => groups.into_iter().next(),
            _ => Some(format!("all({})", groups.join(", "))),
        }
    }

    /// The `#[cfg(...)]` attribute line, without a trailing newline
    pub fn cfg_attribute(&self) -> Option<String> {
        self.predicate().map(|p| format!("#[cfg({})]", p))
    }
}

fn combine(op: &str, predicates: &[CfgPredicate]) -> String {
    match predicates {
        [single] => single.to_string(),
        _ => {
            let parts: Vec<String> = predicates.iter().map(ToString::to_string).collect();
            format!("{}({})", op, parts.join(", "))
        }
    }
}

fn lookup(table: &[(&str, &'static str)], tag: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, mapped)| *mapped)
}

/// True if `s` is an ASCII Rust identifier
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn invalid(tag: &str) -> GenesisError {
    GenesisError::InvalidBuildTag {
        tag: tag.to_string(),
    }
}
