use mh_core::HuntConfig;

use crate::render;

pub fn run(config: &HuntConfig) -> Result<(), String> {
    let store = super::open_store(config);
    let hunts = store.list_hunts();

    if hunts.is_empty() {
        println!("  No open hunts.");
        return Ok(());
    }

    println!("{}", render::hunt_table(&hunts));
    println!();
    println!(
        "  {} open hunt{}",
        hunts.len(),
        if hunts.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
