use std::{env, fs};

use anyhow::{bail, Context};
use huffman_coding::{decode, encode};
use itertools::Itertools;
use log::debug;

const SKIP_BINARY_PATH: usize = 1;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(SKIP_BINARY_PATH);
    let input_file = args.next().context("usage: huffman-coding <input-file>")?;

    let content = fs::read_to_string(&input_file)
        .with_context(|| format!("failed to read {input_file}"))?;

    let encoding = match encode(&content)? {
        Some(encoding) => encoding,
        None => bail!("{input_file} is empty, nothing to encode"),
    };

    debug!(
        "code map: {}",
        encoding
            .code
            .iter()
            .sorted_by_key(|(symbol, _)| **symbol)
            .map(|(symbol, path)| {
                let bits: String = path.iter().map(|&b| if b { '1' } else { '0' }).collect();
                format!("{symbol:?}={bits}")
            })
            .join(" ")
    );

    let decoded = decode(&encoding.code, &encoding.bits)?;
    if decoded != content {
        bail!("round trip mismatch for {input_file}");
    }

    println!(
        "{input_file}: {} symbols over a {}-entry code -> {} bits, round trip ok",
        content.chars().count(),
        encoding.code.len(),
        encoding.bits.len(),
    );

    Ok(())
}
