use mh_core::HuntConfig;

pub fn run(config: &HuntConfig, name: &str) -> Result<(), String> {
    let name = name.trim();
    let mut store = super::open_store(config);
    let hunt = store.remove_hunt(name).map_err(|e| e.to_string())?;

    println!(
        "  Abandoned hunt for {name} at {}/{} marks",
        hunt.marks_collected(),
        hunt.total_marks()
    );
    Ok(())
}
