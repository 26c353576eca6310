use std::path::PathBuf;

use anyhow::{Context, Result};

const HEADER: [&str; 4] = ["Ciudad", "Género", "Edad", "Condición Médica"];

/// City names with relative weights, so the ranking has a clear top three.
const CITIES: [(&str, u32); 6] = [
    ("Quito", 30),
    ("Guayaquil", 25),
    ("Cuenca", 15),
    ("Ambato", 12),
    ("Loja", 10),
    ("Manta", 8),
];
const GENDERS: [&str; 2] = ["F", "M"];
const CONDITIONS: [&str; 5] = ["Asma", "Diabetes", "Hipertensión", "Migraña", "Ninguna"];

/// Seeded splitmix64 stream; the same seed always yields the same file.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Integer in `0..bound`.
    fn below(&mut self, bound: u32) -> u32 {
        (self.next_u64() % bound as u64) as u32
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u32) as usize]
    }

    fn pick_weighted<'a>(&mut self, items: &[(&'a str, u32)]) -> &'a str {
        let total: u32 = items.iter().map(|(_, w)| w).sum();
        let mut roll = self.below(total);
        for &(item, weight) in items {
            if roll < weight {
                return item;
            }
            roll -= weight;
        }
        items[items.len() - 1].0
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_patients.csv"));
    let rows = 200;

    let mut rng = SampleRng(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(HEADER).context("writing header")?;

    for _ in 0..rows {
        let age = (18 + rng.below(70)).to_string();
        writer
            .write_record([
                rng.pick_weighted(&CITIES),
                rng.pick(&GENDERS),
                age.as_str(),
                rng.pick(&CONDITIONS),
            ])
            .context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {rows} patients to {}", output_path.display());
    Ok(())
}
