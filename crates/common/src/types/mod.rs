use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of a 404 or any other error that only carries a message.
#[derive(Serialize, Debug)]
pub struct StatusMessage {
    pub status: u16,
    pub message: &'static str,
}

/// Body of a plain confirmation or of the generic 500.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}
