//! Smoke-check script for a deployed PrizePool
//!
//! Reads the pool's view surface and reports whether a round is due.
//!
//! Run with: POOL_ADDRESS=... cargo run --bin test_deployed --features livenet --release

use std::str::FromStr;

use odra::host::HostRefLoader;
use odra::prelude::Address;
use windfall::PrizePool;

fn main() {
    let env = odra_casper_livenet_env::env();
    let caller = env.caller();

    println!("=== Checking Deployed PrizePool ===\n");
    println!("Caller: {}", caller.to_string());

    let pool_address =
        std::env::var("POOL_ADDRESS").expect("POOL_ADDRESS env var must be set");
    let pool_addr = Address::from_str(&pool_address).expect("Invalid PrizePool address");
    println!("PrizePool: {}", pool_address);

    let prize_pool = PrizePool::load(&env, pool_addr);

    println!("\n--- Pool State ---");
    println!("Current round: {}", prize_pool.current_round());
    println!("Round state: {:?}", prize_pool.round_state());
    println!("Round opened at: {} ms", prize_pool.round_opened_at());
    println!("Round interval: {} ms", prize_pool.round_interval());
    println!("Entry cutoff: {} ms", prize_pool.entry_cutoff());
    println!("Is paused: {}", prize_pool.is_paused());

    println!("\n--- Accounting ---");
    println!("Total staked: {:?}", prize_pool.total_staked());
    println!("Ticket count: {}", prize_pool.ticket_count());
    println!("Redeemable balance: {:?}", prize_pool.redeemable_balance());
    println!("Total yield generated: {:?}", prize_pool.total_yield_generated());
    println!("Platform fee: {} bps", prize_pool.platform_fee_bps());
    println!("Min ticket cost: {:?}", prize_pool.min_ticket_cost());

    println!("\n--- Upkeep ---");
    println!("Upkeep needed: {}", prize_pool.upkeep_needed());
    println!("Pending request: {:?}", prize_pool.pending_request());

    println!("\n--- My Position ---");
    println!("My stake: {:?}", prize_pool.stake_of(caller));
    println!("My tickets: {:?}", prize_pool.tickets_of(caller));

    println!("\n=== Check Complete ===");
}
