#![no_main]
use libfuzzer_sys::fuzz_target;

use calcex::Session;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut session = Session::<f64>::new();
        session.evaluator_mut().set_variable("x", 1.5);
        for c in s.chars() {
            match c {
                '<' => session.backspace(),
                '~' => session.toggle_sign(),
                '#' => session.clear(),
                _ => session.append(c.encode_utf8(&mut [0; 4])),
            }
        }
        let _ = session.evaluate();
    }
});
