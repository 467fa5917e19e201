#[derive(serde::Deserialize, Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to, e.g. "0.0.0.0:8080".
    pub bind_addr: Box<str>,
    /// Directory the HTML templates are loaded from.
    pub templates_dir: Box<str>,
}
