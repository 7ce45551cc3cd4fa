mod http;
pub mod image;
mod local;
mod session;
mod traits;

pub use http::HttpService;
pub use local::{LocalService, SESSION_IDLE_TTL};
pub use session::{SaveResult, SessionView, UpdateResult};
pub use traits::{EntryService, ServiceError};
