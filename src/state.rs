use crate::services::dialogue::DialogueEngine;
use crate::services::recorder::BookingRecorder;
use crate::services::sessions::SessionStore;

pub struct AppState {
    pub engine: Box<dyn DialogueEngine>,
    pub sessions: Box<dyn SessionStore>,
    pub recorder: BookingRecorder,
}
