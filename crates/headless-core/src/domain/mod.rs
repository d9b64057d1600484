//! Domain entities - read-only views of the remote content API.

mod author;
mod common;
mod media;
mod page;
mod paginated;
mod post;
mod search;
mod taxonomy;

pub use author::Author;
pub use common::{Embedded, EmbeddedTerm, Link, Links, Rendered, Title};
pub use media::{Media, MediaDetails, MediaSize};
pub use page::Page;
pub use paginated::Paginated;
pub use post::Post;
pub use search::SearchResult;
pub use taxonomy::{Category, Tag, Term, term_label};
