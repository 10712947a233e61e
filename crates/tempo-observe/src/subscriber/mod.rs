mod view;
pub use view::{Subscriber, log_event, message_for};
