#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("client error: {0}")]
    Client(#[from] resthub_rest::Error),

    #[error("invalid registry descriptor: {message}")]
    Descriptor { message: String },
}
