use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("TOXIGUARD_API_URL no está configurada")]
    MissingBaseUrl,
    #[error("la URL base {0} no admite rutas")]
    InvalidBaseUrl(String),
    /// Non-2xx answer. `message` is the backend `detail` when present.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("no se pudo conectar con {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("respuesta inválida del servidor: {0}")]
    Decode(#[source] reqwest::Error),
}
