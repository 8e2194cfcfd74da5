//! Demo driver for the k-ary Merkle tree.
//!
//! Generates random timestamps, builds a tree over them, prints the tree and
//! the proof path of the first value.

use anyhow::{Context, Result};
use clap::Parser;
use kary_merkle_tree::{Blake3Hasher, MerkleTree, Padding};
use kary_merkle_visualize::{to_hex, visualize_stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod timestamps;

#[derive(Parser, Debug)]
#[command(name = "kary-merkle-demo")]
#[command(about = "Build a k-ary Merkle tree over random timestamps and print it", long_about = None)]
struct Cli {
    /// Number of random values to generate
    #[arg(long, default_value = "1")]
    values: usize,

    /// Number of children per node in the tree
    #[arg(long, default_value = "2")]
    children: usize,

    /// Pad with the "0" sentinel instead of repeating the last value
    #[arg(long)]
    sentinel: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let padding = if cli.sentinel {
        Padding::zero_sentinel()
    } else {
        Padding::DuplicateLast
    };
    let mut tree = MerkleTree::with_padding(Blake3Hasher, cli.children, padding)
        .context("creating tree")?;

    let mut rng = rand::rng();
    let mut leaves = Vec::with_capacity(cli.values);
    println!("The randomized dates for insertion are - ");
    for _ in 0..cli.values {
        let timestamp = timestamps::random_2018_timestamp(&mut rng)?;
        println!("{}", timestamps::display(timestamp));
        leaves.push(timestamps::to_leaf(timestamp));
    }
    let first = leaves.first().cloned();

    let summary = tree
        .build(leaves)
        .context("inserting values into the tree")?;
    info!(
        hash_calls = summary.cost.hash_calls(),
        hashed_bytes = summary.cost.hashed_bytes,
        "tree built"
    );

    println!(
        "\nCreated a tree with {} random values, \neach node has {} children and the tree has in total {} nodes",
        cli.values,
        cli.children,
        tree.size()
    );
    if let Some(root_hash) = tree.root_hash() {
        println!("Root hash: {}", hex::encode(root_hash));
    }

    println!("\n\nThe tree:");
    visualize_stdout(&tree).context("printing tree")?;

    if let Some(proof) = first.and_then(|raw| tree.find_proof_path_for_raw(&raw)) {
        println!("\nProof path of the first value ({} levels):", proof.len());
        for step in &proof.steps {
            let siblings: Vec<String> = step.siblings.iter().map(|s| to_hex(s)).collect();
            println!("  position {}: [{}]", step.position, siblings.join(", "));
        }
    }

    Ok(())
}
