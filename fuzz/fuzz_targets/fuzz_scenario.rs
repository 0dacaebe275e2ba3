#![no_main]

use libfuzzer_sys::fuzz_target;
use lionfish_population_analyzer::io::parse_scenarios;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_scenarios(content);
    }
});
