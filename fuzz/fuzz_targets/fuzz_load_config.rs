#![no_main]
use libfuzzer_sys::fuzz_target;
use skillscope::config::AppConfig;

/// Fuzz configuration parsing.
///
/// Exercises the YAML deserialization and validation paths with
/// arbitrary input; parse failures are fine, panics are not.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_yaml::from_str::<AppConfig>(s) {
            let _ = config.validate();
        }
    }
});
