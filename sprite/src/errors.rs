use failchain::{BoxedError, ChainErrorKind};
use failure::Fail;
use std::fmt::Display;
use std::path::Path;
use std::result::Result as StdResult;

pub type Error = BoxedError<ErrorKind>;
pub type Result<T> = StdResult<T, Error>;

#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    #[fail(display = "Unable to load image at `{}`: {}", path, reason)]
    Decode { path: String, reason: String },

    #[fail(display = "Unable to render text `{}`: {}", text, reason)]
    RenderText { text: String, reason: String },

    #[fail(display = "Unable to create texture from `{}`: {}", needed_by, reason)]
    Upload { needed_by: String, reason: String },

    #[fail(display = "Invalid sprite sheet: {}", 0)]
    Sheet(String),

    #[fail(display = "Draw call failed: {}", 0)]
    Draw(String),
}

impl ChainErrorKind for ErrorKind {
    type Error = Error;
}

impl ErrorKind {
    pub fn decode<ReasonT: Display>(path: &Path) -> (impl FnOnce(ReasonT) -> Self) {
        let path = path.display().to_string();
        move |reason| ErrorKind::Decode {
            path,
            reason: reason.to_string(),
        }
    }

    pub fn render_text<ReasonT: Display>(text: &str) -> (impl FnOnce(ReasonT) -> Self) {
        let text = text.to_owned();
        move |reason| ErrorKind::RenderText {
            text,
            reason: reason.to_string(),
        }
    }

    pub fn upload<NeededByT: Display, ReasonT: Display>(
        needed_by: NeededByT,
    ) -> (impl FnOnce(ReasonT) -> Self) {
        let needed_by = needed_by.to_string();
        move |reason| ErrorKind::Upload {
            needed_by,
            reason: reason.to_string(),
        }
    }

    pub fn draw<ReasonT: Display>(reason: ReasonT) -> Self {
        ErrorKind::Draw(reason.to_string())
    }
}
