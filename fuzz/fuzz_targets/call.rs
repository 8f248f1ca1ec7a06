#![no_main]

use agave::Host;
use agave::catalog::CATALOG;
use agave_runtime::Value;
use libfuzzer_sys::fuzz_target;

// Input: one selector byte picking a catalog member, then a JSON array `[receiver, args...]`.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(serde_json::Value::Array(values)) = serde_json::from_slice::<serde_json::Value>(rest) else {
        return;
    };
    let mut values = values.into_iter().map(Value::from);
    let Some(mut receiver) = values.next() else {
        return;
    };
    let args: Vec<Value> = values.collect();

    let entry = &CATALOG[usize::from(selector) % CATALOG.len()];
    let mut host = Host::new();
    host.enable("");

    // Members may fail with a CallError, but must never panic. Timers they schedule stay queued.
    let _ = host.call(&mut receiver, entry.method.base_name(), &args);
});
