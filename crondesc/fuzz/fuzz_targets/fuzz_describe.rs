#![no_main]
use crondesc::{get_description, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Describing should never panic, only return Ok or Err
        let _ = get_description(s, &Options::default());
        let lenient = Options::default().with_throw_on_error(false);
        get_description(s, &lenient).expect("errors render as text");
    }
});
