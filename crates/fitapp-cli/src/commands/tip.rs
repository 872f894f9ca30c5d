use clap::Args;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use fitapp_core::{pick_tip, Config};

#[derive(Args)]
pub struct TipArgs {
    /// Fixed seed, overriding `tips.seed` from the config
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(args: TipArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let tip = match args.seed.or(config.tips.seed) {
        Some(seed) => pick_tip(&mut Pcg64::seed_from_u64(seed)),
        None => pick_tip(&mut rand::thread_rng()),
    };
    println!("{tip}");
    Ok(())
}
