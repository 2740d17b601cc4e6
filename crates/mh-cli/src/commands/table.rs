use crate::render;

pub fn run() -> Result<(), String> {
    println!("{}", render::outcome_table());
    println!();
    println!("  Setbacks are confirmed on a d4: 1-2 escaped, 3-4 they happen.");
    Ok(())
}
