// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI tool to run examples of lazy pipelines.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rangelite::{all, generate_n, ints_from, rall, zip, Attach, ViewExt};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.scenario {
        Scenario::Squares => {
            let input = (0..cli.input_size).collect::<Vec<u64>>();
            let squares = all(&input)
                .keep_if(|x| **x % 2 == 0)
                .map(|x| x * x)
                .take(cli.limit);
            println!("squares = {:?}", squares.to_vector());
            println!("sum = {}", squares.accumulate(|acc, x| acc + x, 0));
        }
        Scenario::Runs => {
            let input = fill_random(cli.input_size as usize, cli.seed, cli.alphabet);
            let runs = all(&input)
                .group_by(|a, b| a == b)
                .map(|run| (*run.head().unwrap(), run.distance()));
            let longest = runs.max_by(|(_, len)| *len);
            println!("runs = {:?}", runs.take(cli.limit).to_vector());
            println!("longest = {longest:?}");
        }
        Scenario::Cycle => {
            let input = fill_random(cli.input_size as usize, cli.seed, cli.alphabet);
            let cycled = all(&input).cycle().take(cli.limit);
            println!("cycled = {:?}", cycled.to_vector());
        }
        Scenario::Enumerate => {
            let input = fill_random(cli.input_size as usize, cli.seed, cli.alphabet);
            let enumerated = all(&input)
                .enumerate_from(1)
                .remove_if(|(_, x)| **x == 0)
                .take(cli.limit);
            for (i, x) in &enumerated {
                println!("#{i}: {x}");
            }
        }
        Scenario::Letters => {
            let letters = ints_from(0)
                .map(|i| char::from(b'a' + (i % 26) as u8))
                .take(cli.limit)
                .intersperse(' ');
            println!("forward = {}", letters.to_string());
            let input = letters.to_vector();
            println!("backward = {}", rall(&input).map(|c| *c).to_string());
        }
        Scenario::Zip => {
            let left = fill_random(cli.input_size as usize, cli.seed, cli.alphabet);
            let right = fill_random(cli.input_size as usize / 2, cli.seed + 1, cli.alphabet);
            let matches = zip(&left, &right).keep_if(|(a, b)| a == b).distance();
            println!("zipped {} pairs, {matches} matching", zip(&left, &right).distance());
        }
        Scenario::Attach => {
            let inputs = (cli.seed..cli.seed + 3)
                .map(|seed| fill_random(cli.input_size as usize, seed, cli.alphabet))
                .collect::<Vec<_>>();
            // From the first zero up to the next one, included.
            let mut pipeline = rangelite::input::<Vec<u32>>()
                .drop_while(|x| **x != 0)
                .take_while_incl(|x| **x != 1);
            for (i, input) in inputs.iter().enumerate() {
                pipeline.attach(input);
                println!(
                    "input #{i}: {:?}",
                    pipeline.clone().take(cli.limit).to_vector()
                );
            }
        }
        Scenario::Generate => {
            let mut rng = ChaCha12Rng::seed_from_u64(cli.seed);
            let samples = generate_n(move || rng.random_range(0..cli.alphabet), cli.limit);
            let min = samples.min();
            let max = samples.max();
            println!("samples = {:?}", samples.to_vector());
            println!("min = {min:?}, max = {max:?}");
        }
    }
}

/// Creates a vector of `len` integers uniformly sampled in
/// `0..alphabet`, fixed by the given seed for reproducibility.
fn fill_random(len: usize, seed: u64, alphabet: u32) -> Vec<u32> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..alphabet)).collect()
}

/// CLI tool to run examples of lazy pipelines.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version)]
struct Cli {
    /// Scenario to run.
    #[arg(long, value_enum)]
    scenario: Scenario,

    /// Length of the input.
    #[arg(long, default_value_t = 100)]
    input_size: u64,

    /// Maximal number of elements to print.
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Number of distinct values in random inputs.
    #[arg(long, default_value_t = 3)]
    alphabet: u32,

    /// Seed of the random inputs.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Scenario to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Filter and map integers.
    Squares,
    /// Group runs of equal values.
    Runs,
    /// Repeat the input.
    Cycle,
    /// Number the non-zero elements.
    Enumerate,
    /// Intersperse letters with spaces, and reverse them.
    Letters,
    /// Compare two inputs pointwise.
    Zip,
    /// Run one pipeline over several inputs.
    Attach,
    /// Sample random values.
    Generate,
}
