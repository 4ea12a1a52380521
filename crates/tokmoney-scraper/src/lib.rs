pub mod analyze;
pub mod classify;
pub mod discovery;
pub mod eligibility;
pub mod error;
pub mod message;
pub mod monitor;
pub mod page;
pub mod session;
pub mod source;

pub use analyze::{analyze_fragment, analyze_page, Badge, BadgeTone, ScanReport, VideoEstimate};
pub use classify::{classify, ContentKind};
pub use discovery::{Discovery, DiscoveryChain, Strategy};
pub use eligibility::check_eligibility;
pub use error::ScraperError;
pub use message::{Request, Response};
pub use monitor::{ChangeSource, Monitor, MonitorOutput, PageEvent};
pub use page::{is_profile_url, Page};
pub use session::{Handled, Session};
pub use source::{FilePage, FilePoller, PageSource, StaticPage};
