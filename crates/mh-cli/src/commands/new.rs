use mh_core::{HuntConfig, HuntEngine};

pub fn run(config: &HuntConfig, name: &str, total_marks: u32, replace: bool) -> Result<(), String> {
    let name = name.trim();
    let mut store = super::open_store(config);

    if let Some(existing) = store.get(name).filter(|_| !replace) {
        return Err(format!(
            "a hunt for '{name}' already exists ({}/{} marks); pass --replace to start over",
            existing.marks_collected(),
            existing.total_marks()
        ));
    }

    let engine = HuntEngine::from_config(config);
    let hunt = engine
        .create_hunt(&mut store, name, total_marks)
        .map_err(|e| e.to_string())?;

    println!(
        "  Started hunt for {name}: {}/{} marks",
        hunt.marks_collected(),
        hunt.total_marks()
    );
    Ok(())
}
