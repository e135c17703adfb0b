pub mod action;
pub mod booking;
pub mod chat;
pub mod field;
pub mod session;
pub mod values;

pub use action::{ActionRequest, ActionResponse, BotUtterance, LatestMessage, Tracker, TrackerEvent};
pub use booking::{BookingFormState, BookingRecord};
pub use chat::{BotMessage, ChatRequest, ChatResponse, WebChatRequest, WebChatResponse};
pub use field::FieldId;
pub use session::SessionRecord;
pub use values::{CanonicalValue, PaymentMethod, RoomType, YesNo};
