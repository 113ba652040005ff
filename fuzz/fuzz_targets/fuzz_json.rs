#![no_main]
use libfuzzer_sys::fuzz_target;
use teampaste::{Showdown, Team};

fuzz_target!(|data: &[u8]| {
    let json = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };

    if let Ok(team) = Team::from_json(json) {
        let _ = team.to_showdown();
        let _ = team.to_json().unwrap();
    }
});
