/*!
    Program that generates newline-delimited files of discrete uniform random
    integers, one file per target range.
 ```
Usage:
   unigen
```
   Writes `u1_4.txt` and `u1_8.txt` into the current directory, each with
   1,000,000 lines, one integer per line drawn uniformly from {1..4} and
   {1..8} respectively. Sample count and target ranges are fixed constants.
 */

#[macro_use] extern crate anyhow;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;

/// Type of a single drawn sample and of the target range bound `k`.
type Value = u32;

/// Number of samples written per output file.
const SAMPLES_PER_RANGE: usize = 1_000_000;

/// Upper bounds of the generated target ranges {1..k}.
const TARGET_RANGES: [Value; 2] = [4, 8];

mod uniform_rejection;

/// Creates concrete sampler used to draw values, seeded from the system clock.
fn sampler_factory() -> impl Sampler {
    uniform_rejection::RejectionSampler::from_clock()
}

/// Output file name for a given target range bound.
fn output_name(k: Value) -> String {
    format!("u1_{}.txt", k)
}

/// Draws `n` samples from `{1..k}` and writes each as a decimal integer
/// followed by a newline, in draw order.
fn write_batch(sampler: &mut impl Sampler, k: Value, n: usize, sink: &mut impl Write) -> Result<()> {
    for _ in 0..n {
        writeln!(sink, "{}", sampler.draw(k)?)?;
    }
    Ok(())
}

/// Program main function.
fn main() -> Result<()> {
    // Open every sink up-front so a missing directory or permission problem
    // aborts before any samples are spent.
    let mut sinks = Vec::with_capacity(TARGET_RANGES.len());
    for k in &TARGET_RANGES {
        let name = output_name(*k);
        match File::create(&name) {
            Ok(f) => sinks.push(BufWriter::new(f)),
            Err(e) => bail!("Cannot create output file {}: {}", name, e),
        }
    }

    let mut sampler = sampler_factory();
    for (k, sink) in TARGET_RANGES.iter().zip(sinks.iter_mut()) {
        write_batch(&mut sampler, *k, SAMPLES_PER_RANGE, sink)?;
        sink.flush()?;
    }

    println!(
        "Done: wrote {} samples each to {} and {}",
        SAMPLES_PER_RANGE,
        output_name(TARGET_RANGES[0]),
        output_name(TARGET_RANGES[1])
    );
    Ok(())
}

/// Functions required of a uniform sampler.
pub trait Sampler {
    /// Draws one integer uniformly from `{1..k}` with no modulo bias.
    /// `k` must be positive; zero is reported as an error.
    fn draw(&mut self, k: Value) -> Result<Value>;
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform_rejection::RejectionSampler;

    #[test]
    fn batch_has_exact_line_count_and_range() {
        let n = 10_000;
        let k = 4;
        let mut sampler = RejectionSampler::with_seed(20260825);
        let mut buf = Vec::new();
        write_batch(&mut sampler, k, n, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), n);
        for line in lines {
            let v = line.parse::<Value>().unwrap();
            assert!(v >= 1 && v <= k, "sample {} outside 1..={}", v, k);
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn different_seeds_give_different_batches() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_batch(&mut RejectionSampler::with_seed(1), 8, 1000, &mut a).unwrap();
        write_batch(&mut RejectionSampler::with_seed(2), 8, 1000, &mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn batch_rejects_zero_range() {
        let mut sampler = RejectionSampler::with_seed(7);
        let mut buf = Vec::new();
        assert!(write_batch(&mut sampler, 0, 10, &mut buf).is_err());
    }
}
