use care_api::Resource;
use care_store::ResourceStore;

use crate::ui;

/// Surface a store's success and error messages as notifications.
pub fn report<R: Resource>(store: &ResourceStore<R>) {
    if let Some(message) = store.success() {
        ui::notify_success(message);
    }
    if let Some(error) = store.error() {
        ui::notify_warning(error);
    }
}
