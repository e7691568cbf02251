use crate::allow_list::{AllowList, BUILTIN_ALLOW_LIST};

// app's shared state, read-only after startup
pub struct AppState {
    pub allow_list: &'static AllowList,
}

impl AppState {
    pub fn new(allow_list: &'static AllowList) -> Self {
        Self { allow_list }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&BUILTIN_ALLOW_LIST)
    }
}
