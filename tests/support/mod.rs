use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values afterwards and serializes access to the
/// process-global environment so parallel tests stay deterministic.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");

    let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
    let snapshot: Vec<(String, Option<String>)> = keys
        .into_iter()
        .map(|k| (k.to_string(), std::env::var(k).ok()))
        .collect();

    for (k, v) in changes {
        match v {
            Some(val) => std::env::set_var(k, val),
            None => std::env::remove_var(k),
        }
    }

    let result = f();

    for (k, v) in snapshot {
        match v {
            Some(val) => std::env::set_var(&k, val),
            None => std::env::remove_var(&k),
        }
    }

    result
}
