//! Add a mapping to a hosts file: read, edit the marker block, write if changed.

use crate::block::{self, Entry, Markers, Outcome};
use crate::error::Result;
use crate::platform::HostsFile;

fn index_label(index: Option<usize>) -> String {
    index.map_or_else(|| "-1".to_string(), |i| i.to_string())
}

/// Ensure `entry` is inside the marker block of `file`, printing progress.
///
/// Nothing is written when the entry already exists. A read failure aborts
/// before any write.
pub fn add_host_entry(file: &dyn HostsFile, markers: &Markers, entry: &Entry) -> Result<Outcome> {
    println!("Reading hosts file...");
    let mut lines = file.read_lines()?;
    println!("Found {} lines in hosts file.", lines.len());

    let positions = block::locate(&lines, markers);
    println!(
        "Header index: {}, Footer index: {}",
        index_label(positions.header),
        index_label(positions.footer)
    );
    match positions.state() {
        block::BlockState::Present { .. } => {
            println!("Header and footer found, checking for existing entry...")
        }
        block::BlockState::Absent => println!("Header and footer not found, adding to end."),
    }

    let outcome = block::apply_entry(&mut lines, markers, entry);
    match outcome {
        Outcome::AlreadyPresent => {
            println!("Entry '{entry}' already exists.");
            return Ok(outcome);
        }
        Outcome::Inserted => println!("Adding entry between header and footer."),
        Outcome::BlockCreated => {}
    }

    println!("Writing to hosts file...");
    file.write_lines(&lines)?;
    println!("Hosts file updated successfully.");
    println!("Added entry: {entry}");
    Ok(outcome)
}
