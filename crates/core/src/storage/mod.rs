mod error;
mod traits;

pub use error::{EntityOperationError, Result};
pub use traits::{EventActionExecutor, EventRepository};
