#![no_main]
use libfuzzer_sys::fuzz_target;

use calcex::{parse, print};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(expr) = parse::<f64>(s) {
            let printed = print(&expr);
            assert_eq!(parse::<f64>(&printed).ok(), Some(expr));
        }
        let _ = parse::<f32>(s);
    }
});
