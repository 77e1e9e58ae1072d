/// Knobs for a [`crate::sha256::Hasher`].
///
/// `allow_empty` defaults to `false`: an empty message is rejected with
/// [`crate::errors::HashError::InvalidInput`] instead of producing the
/// empty-string digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashOptions {
    pub allow_empty: bool,
    pub lowercase: bool,
}

impl HashOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}
