#![no_main]

use libfuzzer_sys::fuzz_target;
use lionfish_population_analyzer::models::LengthSurvey;

fuzz_target!(|data: &[u8]| {
    if let Ok(survey) = serde_json::from_slice::<LengthSurvey>(data) {
        let _ = survey.validate();
    }
});
