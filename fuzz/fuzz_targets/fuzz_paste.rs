#![no_main]
use libfuzzer_sys::fuzz_target;
use teampaste::{Showdown, Team};

fuzz_target!(|data: &[u8]| {
    let paste = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };

    if let Ok(team) = Team::from_showdown(paste) {
        if team.validate().is_ok() {
            let _ = team.to_showdown().unwrap();
        }
    }
});
