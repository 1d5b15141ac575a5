/// The top-level banner pair. At most one side is non-empty; setting one
/// clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerMessage {
    success: String,
    failure: String,
}

impl ServerMessage {
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = message.into();
        self.failure.clear();
    }

    pub fn set_failure(&mut self, message: impl Into<String>) {
        self.failure = message.into();
        self.success.clear();
    }

    pub fn clear(&mut self) {
        self.success.clear();
        self.failure.clear();
    }

    pub fn success(&self) -> Option<&str> {
        (!self.success.is_empty()).then_some(self.success.as_str())
    }

    pub fn failure(&self) -> Option<&str> {
        (!self.failure.is_empty()).then_some(self.failure.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ServerMessage;

    #[test]
    fn sides_are_mutually_exclusive() {
        let mut message = ServerMessage::default();
        message.set_failure("username taken");
        assert_eq!(message.failure(), Some("username taken"));
        assert_eq!(message.success(), None);

        message.set_success("success!");
        assert_eq!(message.success(), Some("success!"));
        assert_eq!(message.failure(), None);
    }
}
