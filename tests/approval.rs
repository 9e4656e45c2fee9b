use serde::Deserialize;

use molecular_complexity::{add_hs, complexity_of, from_smiles, try_molecular_complexity};

const TOLERANCE: f64 = 1e-6;

#[derive(Deserialize)]
struct ComplexityEntry {
    smiles: String,
    cm: f64,
    cm_star: f64,
    cse: f64,
}

fn load() -> Vec<ComplexityEntry> {
    serde_json::from_str(include_str!("approval_data/complexity.json")).unwrap()
}

fn close(got: f64, expected: f64) -> bool {
    (got - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

#[test]
fn approval_complexity() {
    let data = load();
    assert_eq!(data.len(), 26);

    let mut failures = Vec::new();
    for entry in &data {
        let got = match try_molecular_complexity(&entry.smiles) {
            Ok(c) => c,
            Err(e) => {
                failures.push(format!("[error] {}: {e}", entry.smiles));
                continue;
            }
        };

        for (name, got, expected) in [
            ("cm", got.cm, entry.cm),
            ("cm_star", got.cm_star, entry.cm_star),
            ("cse", got.cse, entry.cse),
        ] {
            if !close(got, expected) {
                failures.push(format!(
                    "[{name}] {}: expected {expected}, got {got}",
                    entry.smiles
                ));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} complexity failures:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn approval_cm_star_bounds() {
    let mut failures = Vec::new();
    for entry in &load() {
        let mol = add_hs(&from_smiles(&entry.smiles).unwrap());
        let atoms = molecular_complexity::atom_complexities(&mol).unwrap();
        let max = atoms
            .iter()
            .map(|a| a.complexity)
            .fold(f64::NEG_INFINITY, f64::max);
        let upper = max + (atoms.len() as f64).log2();
        let c = complexity_of(&mol).unwrap();
        if c.cm_star < max - TOLERANCE || c.cm_star > upper + TOLERANCE {
            failures.push(format!(
                "{}: cm* {} outside [{max}, {upper}]",
                entry.smiles, c.cm_star
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
