use catalog::KeyValueStore;
use web_sys::window;

/// `KeyValueStore` over the browser's localStorage. Every failure mode
/// (no window, storage blocked by the browser, quota) surfaces as an `Err`
/// so the favorites store can degrade instead of panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, String> {
    window()
        .ok_or_else(|| "no window in this context".to_string())?
        .local_storage()
        .map_err(|_| "localStorage is not accessible".to_string())?
        .ok_or_else(|| "localStorage is disabled".to_string())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read '{}'", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store '{}'", key))
    }

    fn clear(&self, key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove '{}'", key))
    }
}
