use std::io;

use mh_core::{HuntConfig, HuntEngine};

use crate::animation::DiceAnimation;
use crate::session::HuntSession;

pub fn run(config: &HuntConfig, animate: bool) -> Result<(), String> {
    let mut store = super::open_store(config);
    let mut engine = HuntEngine::from_config(config);

    let animation = if animate {
        DiceAnimation::default()
    } else {
        DiceAnimation::disabled()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    HuntSession::new(&mut store, &mut engine, stdin.lock(), stdout.lock())
        .with_animation(animation)
        .run()
}
