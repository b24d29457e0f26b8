use super::LookupStep;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct LookupEventEmitter {
    sender: Option<mpsc::UnboundedSender<LookupStep>>,
}

impl LookupEventEmitter {
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<LookupStep>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self { sender: Some(tx) };
        (emitter, rx)
    }

    /// Never blocks; a dropped receiver silently disables delivery.
    pub fn emit(&self, step: LookupStep) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(step);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl Default for LookupEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for LookupEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
