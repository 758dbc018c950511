pub mod repositories;
pub mod time;
pub mod util;

pub use repositories::InMemoryNewsRepository;
pub use time::SystemClock;
pub use util::DefaultSlugGenerator;
