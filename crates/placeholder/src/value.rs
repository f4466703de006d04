//! Process-wide installation of the placeholder-aware value accessor.
//!
//! Until the first enabled configuration is applied anywhere in the process,
//! [`Page::val`](crate::Page::val) and [`Page::set_val`](crate::Page::set_val)
//! behave as the raw accessor. Installation happens once; repeated calls are
//! no-ops.

use std::sync::Once;

static VALUE_HOOK: Once = Once::new();

/// Install the hook. Returns `true` only for the call that installed it.
pub fn install_value_hook() -> bool {
    let mut installed_now = false;
    VALUE_HOOK.call_once(|| {
        installed_now = true;
        log::debug!(target: "placeholder.value", "placeholder-aware value accessor installed");
    });
    installed_now
}

pub fn value_hook_installed() -> bool {
    VALUE_HOOK.is_completed()
}
