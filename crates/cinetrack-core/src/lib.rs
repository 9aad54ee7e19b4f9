pub mod membership;
pub mod notify;
pub mod pager;
pub mod remote;
pub mod store;

pub use membership::ListMembership;
pub use notify::{ListEvent, NotificationSink, Notifier};
pub use pager::{Pager, PagerStatus};
pub use remote::{ListStatus, MemoryListService, RemoteError, RemoteList, ToggleOutcome};
pub use store::ListStore;
