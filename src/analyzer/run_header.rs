//! Recognise the run parameters the simulation writes as the first log line.
//!
//! ```text
//! Seed 228456257979889049260676814795154990079 Mutation 0.001 UseEnergy? true EnergyCount 4096 Width 256 Height 256 EntityCount 1024
//! Seed 14627392581883831781 Mutation 0.001 UseEnergy? false Width 256 Height 256 EntityCount 1024
//! ```
//!
//! The title is always shown as written; this only feeds the parameter table.

use std::str::FromStr;

/// Parameters of the simulation run that produced a log.
#[derive(Debug, Clone, PartialEq)]
pub struct RunHeader {
    pub seed: u128,
    pub mutation_chance: f64,
    pub use_energy: bool,
    /// Initial energy per entity, only written when energy is enabled.
    pub energy: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub entity_count: usize,
}

impl RunHeader {
    /// Label/value pairs in header order, for display.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Seed", self.seed.to_string()),
            ("Mutation", self.mutation_chance.to_string()),
            ("Use energy", self.use_energy.to_string()),
        ];
        if let Some(energy) = self.energy {
            rows.push(("Energy", energy.to_string()));
        }
        rows.push(("Width", self.width.to_string()));
        rows.push(("Height", self.height.to_string()));
        rows.push(("Initial entities", self.entity_count.to_string()));
        rows
    }
}

/// Parse a title line as a run header.
///
/// # Returns
///
/// `Some(RunHeader)` if every required label is present with a parseable value,
/// `None` for any other title.
pub fn parse_run_header(title: &str) -> Option<RunHeader> {
    let tokens: Vec<&str> = title.split_whitespace().collect();

    Some(RunHeader {
        seed: extract_field(&tokens, "Seed")?,
        mutation_chance: extract_field(&tokens, "Mutation")?,
        use_energy: extract_field(&tokens, "UseEnergy?")?,
        energy: extract_field(&tokens, "EnergyCount"),
        width: extract_field(&tokens, "Width")?,
        height: extract_field(&tokens, "Height")?,
        entity_count: extract_field(&tokens, "EntityCount")?,
    })
}

/// Parse the token following the first occurrence of `label`.
fn extract_field<T: FromStr>(tokens: &[&str], label: &str) -> Option<T> {
    let pos = tokens.iter().position(|token| *token == label)?;
    tokens.get(pos + 1)?.parse().ok()
}
