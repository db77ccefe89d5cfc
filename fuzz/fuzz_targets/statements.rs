#![no_main]
use libfuzzer_sys::fuzz_target;

use calcex::{line_2_statement, Evaluator};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut evaluator = Evaluator::<f64>::new();
        for line in s.lines() {
            if let Ok(statement) = line_2_statement(line) {
                let _ = evaluator.execute(&statement);
            }
        }
    }
});
