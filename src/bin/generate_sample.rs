use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Deterministic splitmix64 stream; enough for picking sample lines.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `0..bound`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

const JUNK: [&str; 4] = ["nine", "n/a", "12abc", "--"];

/// One line of sample input. Roughly a third are squares.
fn sample_line(rng: &mut SimpleRng) -> String {
    match rng.below(10) {
        0..=2 => {
            let k = rng.below(1000);
            (k * k).to_string()
        }
        3 => {
            let k = rng.below(1000) + 2;
            format!("{}", k * k + 1)
        }
        4 => format!("-{}", rng.below(100)),
        5 => format!("{}.5", rng.below(100)),
        6 => JUNK[rng.below(JUNK.len() as u64) as usize].to_string(),
        _ => rng.below(1_000_000).to_string(),
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_numbers.txt".to_string());
    let lines = 500;

    let mut rng = SimpleRng(42);
    let file = File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut out = BufWriter::new(file);

    for _ in 0..lines {
        writeln!(out, "{}", sample_line(&mut rng)).context("writing sample line")?;
    }
    out.flush().context("flushing sample file")?;

    println!("Wrote {lines} sample lines to {output_path}");
    Ok(())
}
