#![no_main]
use crondesc::parser::normalize_parts;
use crondesc::{CronExpression, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(expr) = CronExpression::parse(s) {
            let options = Options::default();
            let once = expr.normalize(&options);
            let twice = normalize_parts(once.parts().clone(), &options);
            assert_eq!(once, twice, "normalization idempotency failed");
        }
    }
});
