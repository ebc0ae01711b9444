/// Database Module
///
/// The database layer is split into three concerns:
/// - **Connection Management** (`connection.rs`): opening and releasing the
///   underlying SQLite connection
/// - **Value Model** (`value.rs`): positional parameters, native column
///   values, and the name-to-value row mapping
/// - **Row Access** (`accessor.rs`): binding, execution, and row collection
///
/// All operations use the crate-wide `AccessError` type for error propagation.
pub mod accessor;
pub mod connection;
pub mod value;

pub use accessor::*;
pub use value::*;
