use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    #[serde(default)]
    pub(crate) usuario: Option<String>,
    #[serde(default)]
    pub(crate) clave: Option<String>,
}
