use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// A queried element is not on the page. Dependent behaviour is skipped.
    #[error("element not found: {0}")]
    MissingElement(String),
    /// An attribute could not be interpreted, e.g. a non-numeric counter target.
    #[error("malformed {attribute} attribute: {value:?}")]
    MalformedAttribute { attribute: String, value: String },
}
