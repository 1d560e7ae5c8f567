use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("unknown option {0:?}")]
    UnknownOption(String),

    #[error("the lesson has not been answered correctly yet")]
    NotAnsweredCorrectly,

    #[error("proof has already been posted")]
    AlreadyPosted,

    #[error("post failed: {0}")]
    Post(#[from] baselingo_miniapp::PostError),
}
