pub mod case;
pub mod entity;
pub mod errors;
pub mod ids;
pub mod json;
pub mod sql;
pub mod sync;

// Re-export commonly used items
pub use case::{convert_keys_to_snake_case, to_snake_case};
pub use entity::Entity;
pub use errors::{DataError, DataResult};
pub use ids::{get_uuid_version, is_valid_uuid};
pub use json::{safe_json_dumps, safe_json_loads};
pub use sql::convert_operator;
pub use sync::{DeltaData, SyncAction, SyncContext, SyncToClient, SyncToServer};
