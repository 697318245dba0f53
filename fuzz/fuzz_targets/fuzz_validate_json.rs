#![no_main]

use libfuzzer_sys::fuzz_target;

use aiml_validator::Validator;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let result = Validator::default().validate_str(content);
        assert!(result.score <= 100);
        assert_eq!(result.is_valid, result.errors.is_empty());
    }
});
