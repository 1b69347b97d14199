//! Livenet deployment script for the Windfall prize pool
//!
//! Deploys PrizePool wired to an existing CEP-18 asset, lending market and
//! randomness coordinator. Collaborator addresses come from env vars.
//!
//! Run with: cargo run --bin deploy_livenet --features livenet --release

use std::str::FromStr;

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::{Address, Addressable};
use windfall::{PrizePool, PrizePoolInitArgs};

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

fn required_address(var: &str) -> Address {
    let raw = std::env::var(var).unwrap_or_else(|_| panic!("{} env var must be set", var));
    Address::from_str(&raw).unwrap_or_else(|_| panic!("Invalid address in {}", var))
}

fn parse_key_hash(hex: &str) -> [u8; 32] {
    assert_eq!(hex.len(), 64, "VRF_KEY_HASH must be 64 hex chars");
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).expect("Invalid hex in VRF_KEY_HASH");
    }
    out
}

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer and admin
    let deployer = env.caller();
    println!("Deployer address: {}", deployer.to_string());

    let asset = required_address("ASSET_ADDRESS");
    let lending_market = required_address("LENDING_MARKET_ADDRESS");
    let coordinator = required_address("COORDINATOR_ADDRESS");

    let key_hash = parse_key_hash(
        &std::env::var("VRF_KEY_HASH").expect("VRF_KEY_HASH env var must be set"),
    );
    let subscription_id: u64 = std::env::var("VRF_SUBSCRIPTION_ID")
        .expect("VRF_SUBSCRIPTION_ID env var must be set")
        .parse()
        .expect("VRF_SUBSCRIPTION_ID must be a u64");

    // Treasury - same as deployer for now
    let treasury = deployer;
    println!("Treasury: {}", treasury.to_string());

    println!("\n=== Deploying PrizePool ===");
    env.set_gas(400_000_000_000u64); // 400 CSPR gas

    let init_args = PrizePoolInitArgs {
        asset,
        lending_market,
        coordinator,
        key_hash,
        subscription_id,
        request_confirmations: 3,
        callback_gas_limit: 500_000_000_000,
        treasury,
        admin: deployer,
        round_interval: 7 * DAY_MS,
        entry_cutoff: DAY_MS,
        min_ticket_cost: U256::from(1_000_000_000u64), // 1 token, 9 decimals
    };

    let prize_pool = PrizePool::deploy(&env, init_args);
    let pool_address = prize_pool.address();

    // Verify deployment
    println!("\n=== Deployment Summary ===");
    println!("PrizePool: {}", pool_address.to_string());
    println!("Asset: {}", asset.to_string());
    println!("LendingMarket: {}", lending_market.to_string());
    println!("Coordinator: {}", coordinator.to_string());
    println!("Admin: {}", deployer.to_string());
    println!("\nDeployment complete!");
}
