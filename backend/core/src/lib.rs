pub mod error;
pub mod params;
pub mod traits;
pub mod types;

pub use error::{HttpError, LiveError, ResolutionError};
pub use params::SessionParams;
pub use traits::{HttpClient, HttpResponse, SessionParameterStore};
pub use types::{
    ResolutionRequest, RoomId, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ROOM_ID_API_PATH,
    ROOM_ID_PARAM, SOURCE_TYPE,
};
