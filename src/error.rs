pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    /// Human-readable text for status banners: the kind prefix and debug
    /// formatting stay out, transport errors keep their plain `Display`.
    pub fn message(&self) -> String {
        match *self.inner {
            ErrorKind::ServerError(ref m) | ErrorKind::ParseError(ref m) => m.clone(),
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => e.to_string(),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => e.to_string(),
            ErrorKind::SerdeJsonError(ref e) => e.to_string(),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    /// Error reported by the web app: an `{ error }` body, a non-success
    /// submission response, or a non-2xx status.
    ServerError(String),
    ParseError(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {:?}", e),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::ServerError(ref e) => write!(f, "ServerError: {e:?}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {:?}", e),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::ServerError(ref e) => write!(f, "ServerError: {e}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e}"),
        }
    }
}
