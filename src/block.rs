//! Marker-block editing over an in-memory line sequence.
//!
//! The managed block looks like:
//!
//! ```text
//! # START Added by <app> hosts
//! 127.0.0.1 myapp.local
//! # END <app> hosts
//! ```
//!
//! Lines keep their own terminators exactly as read. Nothing here touches the
//! filesystem; callers read and write through [`crate::platform::HostsFile`].

use std::fmt;

/// Header and footer lines that delimit the block owned by one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub header: String,
    pub footer: String,
}

impl Markers {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Markers for `app_name`. Changing the name orphans any block written under the old one.
    pub fn for_app(app_name: &str) -> Self {
        Self::new(
            format!("# START Added by {app_name} hosts"),
            format!("# END {app_name} hosts"),
        )
    }
}

/// One `<host_address> <hostname>` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub host_address: String,
    pub hostname: String,
}

impl Entry {
    pub fn new(host_address: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            host_address: host_address.into(),
            hostname: hostname.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.host_address, self.hostname)
    }
}

/// First occurrence of each marker, found independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPositions {
    pub header: Option<usize>,
    pub footer: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Present { header: usize, footer: usize },
    /// Covers missing markers as well as a footer at or before the header.
    Absent,
}

impl MarkerPositions {
    pub fn state(&self) -> BlockState {
        match (self.header, self.footer) {
            (Some(header), Some(footer)) if header < footer => BlockState::Present { header, footer },
            _ => BlockState::Absent,
        }
    }
}

/// What [`apply_entry`] did to the line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Entry was already inside the block; lines untouched.
    AlreadyPresent,
    /// Entry spliced in as the last line of an existing block.
    Inserted,
    /// No well-formed block existed; a new one was appended at the end.
    BlockCreated,
}

impl Outcome {
    pub fn changed(self) -> bool {
        !matches!(self, Outcome::AlreadyPresent)
    }
}

fn find_line(lines: &[String], text: &str) -> Option<usize> {
    lines.iter().position(|l| l.trim() == text)
}

/// Locate header and footer by exact trimmed text.
pub fn locate(lines: &[String], markers: &Markers) -> MarkerPositions {
    MarkerPositions {
        header: find_line(lines, &markers.header),
        footer: find_line(lines, &markers.footer),
    }
}

/// True if `entry` appears strictly between `header` and `footer`.
pub fn entry_in_block(lines: &[String], entry: &str, header: usize, footer: usize) -> bool {
    lines[header + 1..footer].iter().any(|l| l.trim() == entry)
}

fn append_block(lines: &mut Vec<String>, markers: &Markers, entry: &str) {
    match lines.last() {
        None => {}
        Some(last) if !last.ends_with('\n') => {
            // first terminates the partial line, second separates
            lines.push("\n".to_string());
            lines.push("\n".to_string());
        }
        Some(_) => lines.push("\n".to_string()),
    }
    lines.push(format!("{}\n", markers.header));
    lines.push(format!("{entry}\n"));
    lines.push(format!("{}\n", markers.footer));
}

/// Ensure `entry` is present inside the block delimited by `markers`.
///
/// Content outside the block is never modified. An existing block only ever
/// grows by one line inserted directly before its footer, so repeated calls
/// with distinct entries accumulate them in call order.
pub fn apply_entry(lines: &mut Vec<String>, markers: &Markers, entry: &Entry) -> Outcome {
    let entry = entry.to_string();
    match locate(lines, markers).state() {
        BlockState::Present { header, footer } => {
            if entry_in_block(lines, &entry, header, footer) {
                Outcome::AlreadyPresent
            } else {
                lines.insert(footer, format!("{entry}\n"));
                Outcome::Inserted
            }
        }
        BlockState::Absent => {
            append_block(lines, markers, &entry);
            Outcome::BlockCreated
        }
    }
}

/// Split file content into lines, each keeping its `\n` terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}
