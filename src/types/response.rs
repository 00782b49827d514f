use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct Login {
    pub(crate) message: &'static str,
    pub(crate) token: String,
}

impl Login {
    pub(crate) fn new(token: String) -> Self {
        Self {
            message: "ok",
            token,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct Token {
    pub(crate) token: String,
}
