//! Writes a small deterministic `Meteorite_Landings.csv` so the explorer can
//! be tried without downloading the real NASA export. The layout matches the
//! raw export: the two columns dropped on load are included.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() as usize) % items.len()]
    }
}

const CLASSES: &[&str] = &[
    "L6", "L5", "H5", "H6", "H4/5", "LL3.4", "CM2", "CV3", "CO3", "EH4",
    "Acapulcoite", "Pallasite", "Mesosiderite", "Eucrite", "Diogenite",
    "Ureilite", "IAB", "IIIAB", "Iron, ungrouped",
];

const NAME_STEMS: &[&str] = &[
    "Aachen", "Barratta", "Campo", "Dimmitt", "Ellerslie", "Forrest",
    "Gladstone", "Haven", "Imilac", "Juvinas", "Kapoeta", "Lucerne",
    "Mundrabilla", "Nakhla", "Orgueil", "Plainview",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let path = "Meteorite_Landings.csv";

    let mut writer = csv::Writer::from_path(path).context("creating sample CSV")?;
    writer.write_record([
        "name", "id", "nametype", "recclass", "mass (g)", "fall", "year",
        "reclat", "reclong", "GeoLocation",
    ])?;

    for id in 1..=400u64 {
        let name = format!("{} {:03}", rng.pick(NAME_STEMS), id);
        let class = *rng.pick(CLASSES);
        let fall = if rng.next_f64() < 0.3 { "Fell" } else { "Found" };

        // Roughly 5% missing mass, 5% malformed year, 10% missing coords,
        // matching the rough shape of the real export.
        let mass = if rng.next_f64() < 0.05 {
            String::new()
        } else {
            format!("{:.1}", rng.next_f64() * 60000.0)
        };
        let year = if rng.next_f64() < 0.05 {
            "unknown".to_string()
        } else {
            format!("{:.1}", 1800.0 + (rng.next_f64() * 220.0).floor())
        };
        let (lat, lon, geo) = if rng.next_f64() < 0.1 {
            (String::new(), String::new(), String::new())
        } else {
            let lat = rng.next_f64() * 160.0 - 80.0;
            let lon = rng.next_f64() * 360.0 - 180.0;
            (
                format!("{lat:.5}"),
                format!("{lon:.5}"),
                format!("({lat:.5}, {lon:.5})"),
            )
        };

        let id_text = id.to_string();
        writer.write_record([
            name.as_str(),
            id_text.as_str(),
            "Valid",
            class,
            mass.as_str(),
            fall,
            year.as_str(),
            lat.as_str(),
            lon.as_str(),
            geo.as_str(),
        ])?;
    }

    writer.flush().context("writing sample CSV")?;
    println!("Wrote 400 sample records to {path}");
    Ok(())
}
