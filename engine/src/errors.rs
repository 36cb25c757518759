use failchain::{BoxedError, ChainErrorKind};
use failure::Fail;
use std::fmt::Display;
use std::result::Result as StdResult;

pub type Error = BoxedError<ErrorKind>;
pub type Result<T> = StdResult<T, Error>;

#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    #[fail(display = "SDL error in `{}`: {}", needed_by, message)]
    Sdl {
        needed_by: &'static str,
        message: String,
    },

    #[fail(display = "{}", 0)]
    CreateWindow(String),

    #[fail(display = "Failed to load font `{}`: {}", path, reason)]
    Font { path: String, reason: String },

    #[fail(display = "Failed to load media `{}`.", 0)]
    Media(String),
}

impl ChainErrorKind for ErrorKind {
    type Error = Error;
}

impl ErrorKind {
    pub(crate) fn sdl<MessageT: Display>(needed_by: &'static str) -> (impl FnOnce(MessageT) -> Self) {
        move |message| ErrorKind::Sdl {
            needed_by,
            message: message.to_string(),
        }
    }

    pub(crate) fn create_window<ErrorT: Display>(
        width: u32,
        height: u32,
    ) -> (impl FnOnce(ErrorT) -> Self) {
        move |error| {
            ErrorKind::CreateWindow(format!(
                "Window creation failed with {}x{}: {}",
                width, height, error
            ))
        }
    }

    pub(crate) fn font<ReasonT: Display>(path: String) -> (impl FnOnce(ReasonT) -> Self) {
        move |reason| ErrorKind::Font {
            path,
            reason: reason.to_string(),
        }
    }
}
