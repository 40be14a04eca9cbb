//! Wire-level data model shared by the control engine, its HTTP surface and
//! service clients. All DTOs serialize as camelCase JSON.

mod event;
mod pod;
mod scenario;
mod service_map;

pub use event::*;
pub use pod::*;
pub use scenario::*;
pub use service_map::*;
