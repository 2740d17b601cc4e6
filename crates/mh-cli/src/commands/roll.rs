use mh_core::{HuntConfig, HuntEngine};

use crate::render;

pub fn run(config: &HuntConfig, name: &str) -> Result<(), String> {
    let name = name.trim();
    let mut store = super::open_store(config);
    let hunt = store
        .get(name)
        .copied()
        .ok_or_else(|| format!("no hunt named '{name}'; see `mh list`"))?;

    let mut engine = HuntEngine::from_config(config);
    println!("{}", render::hunt_details(name, &hunt));

    let report = engine
        .play_turn(&mut store, name)
        .map_err(|e| e.to_string())?;
    println!("{}", render::turn_report(&report));

    Ok(())
}
