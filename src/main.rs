use std::io::{self, BufWriter, Write};

use bit_log2::compute;
use log::debug;

/// Print the exponent of every power of two from `1 << 0` to `1 << 31`,
/// one per line.
fn main() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for i in 0..32u32 {
        let bit = 1u32 << i;
        let log2 = compute(bit);
        debug!("bit_log2({:#010x}) = {}", bit, log2);
        writeln!(out, "{}", log2)?;
    }

    out.flush()?;
    Ok(())
}
