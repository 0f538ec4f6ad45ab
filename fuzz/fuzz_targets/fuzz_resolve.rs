#![no_main]

use libfuzzer_sys::fuzz_target;
use schema_href_core::{canonicalize_path, resolve_with, ResolveOptions, SchemeCheck};

// Splits arbitrary bytes at the first NUL into (base tail, reference).
// Goal: no panics on any reference, under both scheme policies.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (tail, reference) = text.split_once('\0').unwrap_or((text, ""));

    for base in [format!("http://{tail}"), format!("file://{tail}"), tail.to_string()] {
        for check in [SchemeCheck::Prefix, SchemeCheck::Strict] {
            let _ = resolve_with(&base, reference, &ResolveOptions::with_scheme_check(check));
        }
    }
    let _ = canonicalize_path(reference);
});
