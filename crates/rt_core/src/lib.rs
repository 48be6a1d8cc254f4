pub mod error;
pub mod transport;
pub mod types;

pub use error::{ApiError, Result};
pub use transport::{RawResponse, Transport};
pub use types::{ApiResponse, Article, Articles, Image, Pagination, Section, SectionWalk, Topic};
