//! `auth`: run the remote authentication flow

use super::{parse_end, Api, Command, CommandError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct Auth {
    api: Arc<dyn Api>,
}

impl Auth {
    pub fn new(api: Arc<dyn Api>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Command for Auth {
    fn parse(&mut self, args: &[String]) -> Result<(), CommandError> {
        parse_end("auth", args)
    }

    async fn exec(&mut self) -> Result<Option<String>, CommandError> {
        log::info!("Starting authentication flow");
        self.api.authenticate().await;
        Ok(None)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts authentication calls
    #[derive(Default)]
    pub(crate) struct CountingApi {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl Api for CountingApi {
        async fn authenticate(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_exec_calls_authenticate_once() {
        let api = Arc::new(CountingApi::default());
        let mut cmd = Auth::new(api.clone());

        cmd.parse(&[]).unwrap();
        let output = cmd.exec().await.unwrap();

        assert_eq!(output, None);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_parse_rejects_arguments() {
        let api = Arc::new(CountingApi::default());
        let mut cmd = Auth::new(api.clone());

        let err = cmd.parse(&["now".to_string()]).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnexpectedArgument { command: "auth", argument: "now".to_string() }
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
